//! User-facing message text. Every constant keeps its trailing space so the
//! aggregated validation messages concatenate the way the API has always
//! reported them.

pub const ZIP_CODE_INVALID: &str = "Please add a valid zip code! ";

pub const START_DATE_INVALID: &str = "Please add a valid start date : dd/MM/yyyy ";

pub const CITY_MISSING: &str = "City is missing! ";

pub const STREET_MISSING: &str = "Street is missing! ";

pub const NAME_MISSING: &str = "Name is missing! ";

pub const RESPONSIBILITY_MISSING: &str = "Responsibility is missing! ";

pub const APPRENTICE_MISSING: &str = "Apprentice is missing! ";

pub const NO_PROJECT_MANAGER_FOUND: &str = "No project manager found! ";

pub const NO_PROGRAMMER_FOUND: &str = "No programmer found! ";

pub const NO_PROJECT_FOUND: &str = "No project found! ";

pub const BIRTH_DAY_MISSING: &str = "Birth day is missing! ";

pub const BIRTH_MONTH_MISSING: &str = "Birth month is missing! ";

pub const BIRTH_YEAR_MISSING: &str = "Birth year is missing! ";

pub const BIRTH_DAY_INVALID: &str = "Please add a valid birth day! ";

pub const BIRTH_MONTH_INVALID: &str = "Please add a valid birth month! ";

pub const BIRTH_YEAR_INVALID: &str = "Please add a valid birth year! ";

pub const EMAIL_MISSING: &str = "Email is missing! ";

pub const COM_IS_MISSING: &str = "Please add a valid email! Missing item: '.com' ";

pub const AT_IS_MISSING: &str = "Please add a valid email! Missing item: '@' ";

pub const PHONE_NUMBER_MISSING: &str = "Phone number is missing! ";

pub const PHONE_NUMBER_INVALID: &str = "Please add a valid phone number! ";

pub const CLIENT_MISSING: &str = "Client is missing! ";

pub const DESCRIPTION_MISSING: &str = "Description is missing! ";

pub const START_DATE_MISSING: &str = "Start date is missing! ";

pub const EMAIL_EXISTS: &str = "The given email already exists! ";

pub fn save_success(item_type: &str) -> String {
    format!("{} was successfully saved! ", capitalize(item_type))
}

pub fn save_fail(item_type: &str) -> String {
    format!("{} cannot be saved! ", capitalize(item_type))
}

pub fn delete_success(item_type: &str) -> String {
    format!("{} was successfully deleted! ", capitalize(item_type))
}

fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_item_type() {
        assert_eq!(save_success("programmer"), "Programmer was successfully saved! ");
        assert_eq!(
            save_fail("project manager"),
            "Project manager cannot be saved! "
        );
        assert_eq!(delete_success("PROJECT"), "Project was successfully deleted! ");
    }
}
