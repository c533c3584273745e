//! Field validation for the three entity types. Everything here is pure:
//! the one check that needs storage (duplicate email) is performed by the
//! services and handed in as `email_taken`.
//!
//! Message order is part of the API contract. Validating a missing (`None`)
//! entity reports the full per-entity message list, which is not in the same
//! order as the field-by-field checks; both orders are kept as-is.

use chrono::NaiveDate;

use crate::dtos::{AddressDto, BirthDateDto, ProgrammerDto, ProjectDto, ProjectManagerDto};
use crate::messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorResult {
    pub valid: bool,
    pub message: String,
}

impl ValidatorResult {
    pub fn pass(message: impl Into<String>) -> Self {
        ValidatorResult {
            valid: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        ValidatorResult {
            valid: false,
            message: message.into(),
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn present(s: &Option<String>) -> bool {
    s.as_deref().map(|v| !is_blank(v)).unwrap_or(false)
}

fn zip_code_ok(zip: Option<i32>) -> bool {
    zip.map(|z| (1000..=9999).contains(&z)).unwrap_or(false)
}

pub fn address_valid(address: Option<&AddressDto>) -> ValidatorResult {
    let valid = matches!(
        address,
        Some(a) if zip_code_ok(a.zip_code) && present(&a.city) && present(&a.street)
    );

    if valid {
        return ValidatorResult::pass("");
    }

    let mut message = String::new();
    match address {
        None => {
            message.push_str(messages::ZIP_CODE_INVALID);
            message.push_str(messages::CITY_MISSING);
            message.push_str(messages::STREET_MISSING);
        }
        Some(a) => {
            if !zip_code_ok(a.zip_code) {
                message.push_str(messages::ZIP_CODE_INVALID);
            }
            if !present(&a.city) {
                message.push_str(messages::CITY_MISSING);
            }
            if !present(&a.street) {
                message.push_str(messages::STREET_MISSING);
            }
        }
    }

    ValidatorResult::fail(message)
}

pub fn birth_date_valid(birth_date: Option<&BirthDateDto>) -> ValidatorResult {
    let day_ok = |b: &BirthDateDto| b.day.map(|d| (1..=31).contains(&d)).unwrap_or(false);
    let month_ok = |b: &BirthDateDto| b.month.map(|m| (1..=12).contains(&m)).unwrap_or(false);
    let year_ok = |b: &BirthDateDto| b.year.map(|y| (1900..=2023).contains(&y)).unwrap_or(false);

    let valid = matches!(birth_date, Some(b) if day_ok(b) && month_ok(b) && year_ok(b));

    if valid {
        return ValidatorResult::pass("");
    }

    let mut message = String::new();
    match birth_date {
        None => {
            message.push_str(messages::BIRTH_DAY_MISSING);
            message.push_str(messages::BIRTH_MONTH_MISSING);
            message.push_str(messages::BIRTH_YEAR_MISSING);
        }
        Some(b) => {
            if !day_ok(b) {
                message.push_str(messages::BIRTH_DAY_INVALID);
            }
            if !month_ok(b) {
                message.push_str(messages::BIRTH_MONTH_INVALID);
            }
            if !year_ok(b) {
                message.push_str(messages::BIRTH_YEAR_INVALID);
            }
        }
    }

    ValidatorResult::fail(message)
}

const PHONE_PREFIXES: [&str; 4] = ["+3630", "+3620", "+3650", "+3670"];

pub fn phone_number_valid(phone_number: Option<&str>) -> ValidatorResult {
    let valid = phone_number
        .map(|p| {
            !is_blank(p) && p.len() == 12 && PHONE_PREFIXES.iter().any(|pre| p.starts_with(pre))
        })
        .unwrap_or(false);

    if valid {
        return ValidatorResult::pass("");
    }

    match phone_number {
        None => ValidatorResult::fail(messages::PHONE_NUMBER_MISSING),
        Some(_) => ValidatorResult::fail(messages::PHONE_NUMBER_INVALID),
    }
}

pub fn email_valid(email: Option<&str>) -> ValidatorResult {
    let valid = email
        .map(|e| !is_blank(e) && e.ends_with(".com") && e.contains('@'))
        .unwrap_or(false);

    if valid {
        return ValidatorResult::pass("");
    }

    let mut message = String::new();
    match email {
        None => message.push_str(messages::EMAIL_MISSING),
        Some(e) => {
            if !e.ends_with(".com") {
                message.push_str(messages::COM_IS_MISSING);
            }
            if !e.contains('@') {
                message.push_str(messages::AT_IS_MISSING);
            }
        }
    }

    ValidatorResult::fail(message)
}

/// A missing start date passes the format check; `project_valid` reports the
/// missing case separately.
pub fn start_date_format_ok(project: &ProjectDto) -> bool {
    match project.start_date.as_deref() {
        None => true,
        Some(s) => NaiveDate::parse_from_str(s, "%d/%m/%Y").is_ok(),
    }
}

pub fn start_date_valid(project: &ProjectDto) -> ValidatorResult {
    if start_date_format_ok(project) {
        return ValidatorResult::pass("");
    }

    let mut message = String::from(messages::START_DATE_INVALID);
    if !present(&project.start_date) {
        message.push_str(messages::START_DATE_MISSING);
    }

    ValidatorResult::fail(message)
}

pub fn programmer_valid(programmer: Option<&ProgrammerDto>, email_taken: bool) -> ValidatorResult {
    let valid = matches!(
        programmer,
        Some(p) if present(&p.name)
            && address_valid(p.address.as_ref()).valid
            && birth_date_valid(p.birth_date.as_ref()).valid
            && phone_number_valid(p.phone_number.as_deref()).valid
            && email_valid(p.email.as_deref()).valid
            && !email_taken
            && p.responsibility.is_some()
            && p.is_apprentice.is_some()
    );

    if valid {
        return ValidatorResult::pass(messages::save_success("programmer"));
    }

    let mut message = messages::save_fail("programmer");
    match programmer {
        None => {
            message.push_str(messages::NAME_MISSING);
            message.push_str(messages::ZIP_CODE_INVALID);
            message.push_str(messages::STREET_MISSING);
            message.push_str(messages::CITY_MISSING);
            message.push_str(messages::RESPONSIBILITY_MISSING);
            message.push_str(messages::APPRENTICE_MISSING);
            message.push_str(messages::BIRTH_DAY_MISSING);
            message.push_str(messages::BIRTH_MONTH_MISSING);
            message.push_str(messages::BIRTH_YEAR_MISSING);
            message.push_str(messages::PHONE_NUMBER_MISSING);
            message.push_str(messages::EMAIL_MISSING);
        }
        Some(p) => {
            if !present(&p.name) {
                message.push_str(messages::NAME_MISSING);
            }
            if p.responsibility.is_none() {
                message.push_str(messages::RESPONSIBILITY_MISSING);
            }
            if p.is_apprentice.is_none() {
                message.push_str(messages::APPRENTICE_MISSING);
            }
            if email_taken {
                message.push_str(messages::EMAIL_EXISTS);
            }
            message.push_str(&address_valid(p.address.as_ref()).message);
            message.push_str(&birth_date_valid(p.birth_date.as_ref()).message);
            message.push_str(&phone_number_valid(p.phone_number.as_deref()).message);
            message.push_str(&email_valid(p.email.as_deref()).message);
        }
    }

    ValidatorResult::fail(message)
}

pub fn project_manager_valid(
    project_manager: Option<&ProjectManagerDto>,
    email_taken: bool,
) -> ValidatorResult {
    let valid = matches!(
        project_manager,
        Some(pm) if present(&pm.name)
            && address_valid(pm.address.as_ref()).valid
            && birth_date_valid(pm.birth_date.as_ref()).valid
            && phone_number_valid(pm.phone_number.as_deref()).valid
            && email_valid(pm.email.as_deref()).valid
            && !email_taken
    );

    if valid {
        return ValidatorResult::pass(messages::save_success("project manager"));
    }

    let mut message = messages::save_fail("project manager");
    match project_manager {
        None => {
            message.push_str(messages::NAME_MISSING);
            message.push_str(messages::ZIP_CODE_INVALID);
            message.push_str(messages::STREET_MISSING);
            message.push_str(messages::CITY_MISSING);
            message.push_str(messages::BIRTH_DAY_MISSING);
            message.push_str(messages::BIRTH_MONTH_MISSING);
            message.push_str(messages::BIRTH_YEAR_MISSING);
            message.push_str(messages::PHONE_NUMBER_MISSING);
            message.push_str(messages::EMAIL_MISSING);
        }
        Some(pm) => {
            if !present(&pm.name) {
                message.push_str(messages::NAME_MISSING);
            }
            if email_taken {
                message.push_str(messages::EMAIL_EXISTS);
            }
            message.push_str(&address_valid(pm.address.as_ref()).message);
            message.push_str(&birth_date_valid(pm.birth_date.as_ref()).message);
            message.push_str(&phone_number_valid(pm.phone_number.as_deref()).message);
            message.push_str(&email_valid(pm.email.as_deref()).message);
        }
    }

    ValidatorResult::fail(message)
}

pub fn project_valid(project: Option<&ProjectDto>) -> ValidatorResult {
    let valid = matches!(
        project,
        Some(p) if present(&p.client)
            && present(&p.description)
            && present(&p.start_date)
            && start_date_valid(p).valid
    );

    if valid {
        return ValidatorResult::pass(messages::save_success("project"));
    }

    let mut message = messages::save_fail("project");
    match project {
        None => {
            message.push_str(messages::CLIENT_MISSING);
            message.push_str(messages::DESCRIPTION_MISSING);
            message.push_str(messages::START_DATE_MISSING);
        }
        Some(p) => {
            if !present(&p.client) {
                message.push_str(messages::CLIENT_MISSING);
            }
            if !present(&p.description) {
                message.push_str(messages::DESCRIPTION_MISSING);
            }
            if !present(&p.start_date) {
                message.push_str(messages::START_DATE_MISSING);
            }
            message.push_str(&start_date_valid(p).message);
        }
    }

    ValidatorResult::fail(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use devdesk_db::Responsibility;

    fn good_address() -> AddressDto {
        AddressDto {
            address_id: None,
            zip_code: Some(1119),
            city: Some("Budapest".to_string()),
            street: Some("Etele street 3.".to_string()),
        }
    }

    fn good_birth_date() -> BirthDateDto {
        BirthDateDto {
            birth_date_id: None,
            day: Some(11),
            month: Some(3),
            year: Some(1985),
        }
    }

    fn good_programmer() -> ProgrammerDto {
        ProgrammerDto {
            name: Some("Ada Lovelace".to_string()),
            address: Some(good_address()),
            birth_date: Some(good_birth_date()),
            phone_number: Some("+36301234567".to_string()),
            email: Some("ada@example.com".to_string()),
            responsibility: Some(Responsibility::Backend),
            is_apprentice: Some(false),
            ..Default::default()
        }
    }

    fn good_project() -> ProjectDto {
        ProjectDto {
            client: Some("Acme".to_string()),
            start_date: Some("11/03/1999".to_string()),
            description: Some("Rewrite the billing stack".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_address_passes_with_empty_message() {
        let result = address_valid(Some(&good_address()));
        assert!(result.valid);
        assert_eq!(result.message, "");
    }

    #[test]
    fn address_reports_each_failing_field() {
        let mut address = good_address();
        address.city = None;
        let result = address_valid(Some(&address));
        assert!(!result.valid);
        assert_eq!(result.message, messages::CITY_MISSING);

        let mut address = good_address();
        address.zip_code = Some(999);
        let result = address_valid(Some(&address));
        assert_eq!(result.message, messages::ZIP_CODE_INVALID);

        let mut address = good_address();
        address.street = Some("   ".to_string());
        let result = address_valid(Some(&address));
        assert_eq!(result.message, messages::STREET_MISSING);
    }

    #[test]
    fn missing_address_reports_all_fields() {
        let result = address_valid(None);
        assert!(!result.valid);
        assert_eq!(
            result.message,
            format!(
                "{}{}{}",
                messages::ZIP_CODE_INVALID,
                messages::CITY_MISSING,
                messages::STREET_MISSING
            )
        );
    }

    #[test]
    fn zip_code_bounds_are_inclusive() {
        for zip in [1000, 9999] {
            let mut address = good_address();
            address.zip_code = Some(zip);
            assert!(address_valid(Some(&address)).valid, "zip {zip}");
        }
        for zip in [999, 10000] {
            let mut address = good_address();
            address.zip_code = Some(zip);
            assert!(!address_valid(Some(&address)).valid, "zip {zip}");
        }
    }

    #[test]
    fn birth_date_ranges() {
        assert!(birth_date_valid(Some(&good_birth_date())).valid);

        let mut bd = good_birth_date();
        bd.day = Some(32);
        assert_eq!(
            birth_date_valid(Some(&bd)).message,
            messages::BIRTH_DAY_INVALID
        );

        let mut bd = good_birth_date();
        bd.month = Some(0);
        assert_eq!(
            birth_date_valid(Some(&bd)).message,
            messages::BIRTH_MONTH_INVALID
        );

        let mut bd = good_birth_date();
        bd.year = Some(2024);
        assert_eq!(
            birth_date_valid(Some(&bd)).message,
            messages::BIRTH_YEAR_INVALID
        );

        let result = birth_date_valid(None);
        assert_eq!(
            result.message,
            format!(
                "{}{}{}",
                messages::BIRTH_DAY_MISSING,
                messages::BIRTH_MONTH_MISSING,
                messages::BIRTH_YEAR_MISSING
            )
        );
    }

    #[test]
    fn phone_number_requires_known_prefix_and_length() {
        for prefix in PHONE_PREFIXES {
            let phone = format!("{prefix}1234567");
            assert!(phone_number_valid(Some(&phone)).valid, "{phone}");
        }

        // Wrong prefix
        assert!(!phone_number_valid(Some("+36101234567")).valid);
        // Too short / too long
        assert!(!phone_number_valid(Some("+363012345")).valid);
        assert!(!phone_number_valid(Some("+363012345678")).valid);

        assert_eq!(
            phone_number_valid(Some("12345")).message,
            messages::PHONE_NUMBER_INVALID
        );
        assert_eq!(
            phone_number_valid(None).message,
            messages::PHONE_NUMBER_MISSING
        );
    }

    #[test]
    fn email_shape_checks() {
        assert!(email_valid(Some("a@b.com")).valid);
        assert_eq!(
            email_valid(Some("a@b.org")).message,
            messages::COM_IS_MISSING
        );
        assert_eq!(email_valid(Some("ab.com")).message, messages::AT_IS_MISSING);
        assert_eq!(
            email_valid(Some("")).message,
            format!("{}{}", messages::COM_IS_MISSING, messages::AT_IS_MISSING)
        );
        assert_eq!(email_valid(None).message, messages::EMAIL_MISSING);
    }

    #[test]
    fn start_date_is_parsed_strictly() {
        let mut project = good_project();
        assert!(start_date_valid(&project).valid);

        // Not a real calendar date, no lenient rollover.
        project.start_date = Some("30/02/2023".to_string());
        let result = start_date_valid(&project);
        assert!(!result.valid);
        assert_eq!(result.message, messages::START_DATE_INVALID);
    }

    #[test]
    fn blank_start_date_reports_invalid_and_missing() {
        let mut project = good_project();
        project.start_date = Some(" ".to_string());
        let result = start_date_valid(&project);
        assert!(!result.valid);
        assert_eq!(
            result.message,
            format!(
                "{}{}",
                messages::START_DATE_INVALID,
                messages::START_DATE_MISSING
            )
        );
    }

    #[test]
    fn valid_programmer_reports_save_success() {
        let result = programmer_valid(Some(&good_programmer()), false);
        assert!(result.valid);
        assert_eq!(result.message, "Programmer was successfully saved! ");
    }

    #[test]
    fn duplicate_email_rejects_programmer() {
        let result = programmer_valid(Some(&good_programmer()), true);
        assert!(!result.valid);
        assert_eq!(
            result.message,
            format!("Programmer cannot be saved! {}", messages::EMAIL_EXISTS)
        );
    }

    #[test]
    fn missing_programmer_lists_every_field() {
        let result = programmer_valid(None, false);
        assert!(!result.valid);
        assert_eq!(
            result.message,
            format!(
                "Programmer cannot be saved! {}{}{}{}{}{}{}{}{}{}{}",
                messages::NAME_MISSING,
                messages::ZIP_CODE_INVALID,
                messages::STREET_MISSING,
                messages::CITY_MISSING,
                messages::RESPONSIBILITY_MISSING,
                messages::APPRENTICE_MISSING,
                messages::BIRTH_DAY_MISSING,
                messages::BIRTH_MONTH_MISSING,
                messages::BIRTH_YEAR_MISSING,
                messages::PHONE_NUMBER_MISSING,
                messages::EMAIL_MISSING
            )
        );
    }

    #[test]
    fn invalid_programmer_aggregates_messages_in_field_order() {
        let mut programmer = good_programmer();
        programmer.name = Some("".to_string());
        programmer.responsibility = None;
        programmer.phone_number = Some("1234".to_string());
        let result = programmer_valid(Some(&programmer), false);
        assert!(!result.valid);
        assert_eq!(
            result.message,
            format!(
                "Programmer cannot be saved! {}{}{}",
                messages::NAME_MISSING,
                messages::RESPONSIBILITY_MISSING,
                messages::PHONE_NUMBER_INVALID
            )
        );
    }

    #[test]
    fn missing_project_manager_lists_every_field() {
        let result = project_manager_valid(None, false);
        assert!(!result.valid);
        assert_eq!(
            result.message,
            format!(
                "Project manager cannot be saved! {}{}{}{}{}{}{}{}{}",
                messages::NAME_MISSING,
                messages::ZIP_CODE_INVALID,
                messages::STREET_MISSING,
                messages::CITY_MISSING,
                messages::BIRTH_DAY_MISSING,
                messages::BIRTH_MONTH_MISSING,
                messages::BIRTH_YEAR_MISSING,
                messages::PHONE_NUMBER_MISSING,
                messages::EMAIL_MISSING
            )
        );
    }

    #[test]
    fn project_requires_client_description_and_date() {
        assert!(project_valid(Some(&good_project())).valid);

        let project = ProjectDto::default();
        let result = project_valid(Some(&project));
        assert!(!result.valid);
        assert_eq!(
            result.message,
            format!(
                "Project cannot be saved! {}{}{}",
                messages::CLIENT_MISSING,
                messages::DESCRIPTION_MISSING,
                messages::START_DATE_MISSING
            )
        );
    }

    #[test]
    fn project_with_unparseable_date_reports_invalid() {
        let mut project = good_project();
        project.start_date = Some("1999-03-11".to_string());
        let result = project_valid(Some(&project));
        assert!(!result.valid);
        assert_eq!(
            result.message,
            format!("Project cannot be saved! {}", messages::START_DATE_INVALID)
        );
    }
}
