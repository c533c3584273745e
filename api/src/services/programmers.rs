use diesel::dsl::{exists, select};
use diesel::prelude::*;

use devdesk_db::programmers::{NewProgrammer, Programmer};
use devdesk_db::project_managers::ProjectManager;
use devdesk_db::schema::{addresses, birth_dates, programmers, project_managers};
use devdesk_db::Responsibility;

use crate::dtos::{ProgrammerDetailsDto, ProgrammerDto, ProjectManagerDto};
use crate::error::{Error, Result};
use crate::messages;
use crate::services::{
    insert_address, insert_birth_date, load_address, load_birth_date, load_project,
    update_address, update_birth_date,
};
use crate::sort;
use crate::validator::{self, ValidatorResult};

pub fn find_all(conn: &mut PgConnection) -> Result<Vec<ProgrammerDto>> {
    let rows = programmers::table
        .left_join(addresses::table)
        .left_join(birth_dates::table)
        .filter(programmers::deleted.eq(false))
        .order(programmers::programmer_id.asc())
        .select((
            programmers::all_columns,
            addresses::all_columns.nullable(),
            birth_dates::all_columns.nullable(),
        ))
        .load::<(
            Programmer,
            Option<devdesk_db::addresses::Address>,
            Option<devdesk_db::birth_dates::BirthDate>,
        )>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(row, address, birth_date)| ProgrammerDto::from_row(row, address, birth_date))
        .collect())
}

pub fn find_all_sorted(
    conn: &mut PgConnection,
    sort_by: Option<&str>,
    order: Option<&str>,
) -> Result<Vec<ProgrammerDto>> {
    let items = find_all(conn)?;
    let Some(sort_by) = sort_by else {
        return Ok(items);
    };

    let descending = sort::is_descending(order);
    let name = |p: &ProgrammerDto| p.name.clone().unwrap_or_default();

    let sorted = match sort_by.to_ascii_lowercase().as_str() {
        "name" => sort::sorted(items, descending, name),
        "email" => sort::sorted_with_tiebreak(
            items,
            descending,
            |p| p.email.clone().unwrap_or_default(),
            name,
        ),
        "phonenumber" => sort::sorted_with_tiebreak(
            items,
            descending,
            |p| p.phone_number.clone().unwrap_or_default(),
            name,
        ),
        "city" => sort::sorted_with_tiebreak(
            items,
            descending,
            |p| {
                p.address
                    .as_ref()
                    .and_then(|a| a.city.clone())
                    .unwrap_or_default()
            },
            name,
        ),
        "isapprentice" => sort::sorted_with_tiebreak(
            items,
            descending,
            |p| p.is_apprentice.unwrap_or_default(),
            name,
        ),
        "responsibility" => sort::sorted_with_tiebreak(
            items,
            descending,
            |p| p.responsibility.unwrap_or_default(),
            name,
        ),
        // Unrecognized sort fields fall back to the unsorted listing.
        _ => items,
    };

    Ok(sorted)
}

pub fn find_by_id(conn: &mut PgConnection, id: i64) -> Result<Option<ProgrammerDetailsDto>> {
    let row = programmers::table
        .filter(programmers::programmer_id.eq(id))
        .filter(programmers::deleted.eq(false))
        .first::<Programmer>(conn)
        .optional()?;
    let Some(row) = row else {
        return Ok(None);
    };

    let address = load_address(conn, row.address_id)?;
    let birth_date = load_birth_date(conn, row.birth_date_id)?;
    let project = load_project(conn, row.project_id)?;

    let project_manager = match row.project_manager_id {
        Some(manager_id) => {
            let manager = project_managers::table
                .filter(project_managers::project_manager_id.eq(manager_id))
                .filter(project_managers::deleted.eq(false))
                .first::<ProjectManager>(conn)
                .optional()?;
            match manager {
                Some(manager) => {
                    let manager_address = load_address(conn, manager.address_id)?;
                    let manager_birth_date = load_birth_date(conn, manager.birth_date_id)?;
                    Some(ProjectManagerDto::from_row(
                        manager,
                        manager_address,
                        manager_birth_date,
                    ))
                }
                None => None,
            }
        }
        None => None,
    };

    Ok(Some(ProgrammerDetailsDto {
        programmer_id: Some(row.programmer_id),
        name: Some(row.name),
        address: address.map(Into::into),
        birth_date: birth_date.map(Into::into),
        phone_number: Some(row.phone_number),
        email: Some(row.email),
        responsibility: Some(row.responsibility),
        is_apprentice: Some(row.is_apprentice),
        project: project.map(Into::into),
        project_manager,
        deleted: Some(row.deleted),
    }))
}

pub fn save(conn: &mut PgConnection, programmer: Option<&ProgrammerDto>) -> Result<ValidatorResult> {
    let taken = email_taken(conn, programmer.and_then(|p| p.email.as_deref()))?;
    let result = validator::programmer_valid(programmer, taken);

    if result.valid {
        if let Some(dto) = programmer {
            match dto.programmer_id {
                None => {
                    insert_new(conn, dto, None)?;
                }
                Some(id) => update_existing(conn, id, dto)?,
            }
        }
    }

    Ok(result)
}

/// Create a programmer already reporting to the given manager. A DTO naming
/// an existing programmer id is re-linked instead of re-created.
pub fn save_by_project_manager_id(
    conn: &mut PgConnection,
    programmer: Option<&ProgrammerDto>,
    project_manager_id: i64,
) -> Result<ValidatorResult> {
    let taken = email_taken(conn, programmer.and_then(|p| p.email.as_deref()))?;
    let result = validator::programmer_valid(programmer, taken);
    if !result.valid {
        return Ok(result);
    }

    let manager = project_managers::table
        .filter(project_managers::project_manager_id.eq(project_manager_id))
        .filter(project_managers::deleted.eq(false))
        .first::<ProjectManager>(conn)
        .optional()?;
    let Some(manager) = manager else {
        return Err(Error::NotFound(messages::NO_PROJECT_MANAGER_FOUND));
    };

    if let Some(dto) = programmer {
        match dto.programmer_id {
            None => {
                insert_new(conn, dto, Some(manager.project_manager_id))?;
            }
            Some(id) => {
                diesel::update(programmers::table.filter(programmers::programmer_id.eq(id)))
                    .set(programmers::project_manager_id.eq(Some(manager.project_manager_id)))
                    .execute(conn)?;
            }
        }
    }

    Ok(result)
}

pub fn edit_by_id(
    conn: &mut PgConnection,
    id: i64,
    edited: &ProgrammerDto,
) -> Result<ValidatorResult> {
    let row = programmers::table
        .filter(programmers::programmer_id.eq(id))
        .filter(programmers::deleted.eq(false))
        .first::<Programmer>(conn)
        .optional()?;
    let Some(row) = row else {
        return Ok(ValidatorResult::fail(messages::NO_PROGRAMMER_FOUND));
    };

    let edit = match apply_edit(&row.email, edited) {
        Ok(edit) => edit,
        Err(message) => return Ok(ValidatorResult::fail(message)),
    };

    let mut checked = edited.clone();
    checked.programmer_id = Some(id);
    let taken = email_taken(conn, checked.email.as_deref())?;
    if validator::programmer_valid(Some(&checked), taken).valid {
        if let Some(address_id) = row.address_id {
            update_address(conn, address_id, edit.zip_code, &edit.city, &edit.street)?;
        }
        if let Some(birth_date_id) = row.birth_date_id {
            update_birth_date(conn, birth_date_id, edit.day, edit.month, edit.year)?;
        }
        diesel::update(programmers::table.filter(programmers::programmer_id.eq(id)))
            .set((
                programmers::name.eq(edit.name),
                programmers::phone_number.eq(edit.phone_number),
                programmers::email.eq(edit.email),
                programmers::responsibility.eq(edit.responsibility),
                programmers::is_apprentice.eq(edit.is_apprentice),
            ))
            .execute(conn)?;
    }

    // The edit endpoint has always reported success once the field chain
    // passes, whether or not the validator let the update through.
    Ok(ValidatorResult::pass(messages::save_success("programmer")))
}

pub fn delete_by_id(conn: &mut PgConnection, id: i64) -> Result<bool> {
    let row = programmers::table
        .filter(programmers::programmer_id.eq(id))
        .filter(programmers::deleted.eq(false))
        .first::<Programmer>(conn)
        .optional()?;
    if row.is_none() {
        return Ok(false);
    }

    // Detach the owned rows first, then soft delete.
    diesel::update(programmers::table.filter(programmers::programmer_id.eq(id)))
        .set((
            programmers::address_id.eq(Option::<i64>::None),
            programmers::birth_date_id.eq(Option::<i64>::None),
            programmers::project_id.eq(Option::<i64>::None),
            programmers::deleted.eq(true),
        ))
        .execute(conn)?;

    Ok(true)
}

fn email_taken(conn: &mut PgConnection, email: Option<&str>) -> Result<bool> {
    let Some(email) = email else {
        return Ok(false);
    };
    let taken = select(exists(
        programmers::table
            .filter(programmers::email.eq(email))
            .filter(programmers::deleted.eq(false)),
    ))
    .get_result(conn)?;
    Ok(taken)
}

fn insert_new(
    conn: &mut PgConnection,
    dto: &ProgrammerDto,
    project_manager_id: Option<i64>,
) -> Result<i64> {
    let address_id = match dto.address.as_ref() {
        Some(address) => Some(insert_address(conn, address)?),
        None => None,
    };
    let birth_date_id = match dto.birth_date.as_ref() {
        Some(birth_date) => Some(insert_birth_date(conn, birth_date)?),
        None => None,
    };

    let id = diesel::insert_into(programmers::table)
        .values(NewProgrammer {
            name: dto.name.clone().unwrap_or_default(),
            address_id,
            birth_date_id,
            phone_number: dto.phone_number.clone().unwrap_or_default(),
            email: dto.email.clone().unwrap_or_default(),
            project_id: None,
            project_manager_id,
            responsibility: dto.responsibility.unwrap_or_default(),
            is_apprentice: dto.is_apprentice.unwrap_or_default(),
        })
        .returning(programmers::programmer_id)
        .get_result(conn)?;
    Ok(id)
}

fn update_existing(conn: &mut PgConnection, id: i64, dto: &ProgrammerDto) -> Result<()> {
    let row = programmers::table
        .filter(programmers::programmer_id.eq(id))
        .first::<Programmer>(conn)
        .optional()?;
    let Some(row) = row else {
        return Ok(());
    };

    if let (Some(address_id), Some(address)) = (row.address_id, dto.address.as_ref()) {
        update_address(
            conn,
            address_id,
            address.zip_code.unwrap_or_default(),
            &address.city.clone().unwrap_or_default(),
            &address.street.clone().unwrap_or_default(),
        )?;
    }
    if let (Some(birth_date_id), Some(birth_date)) = (row.birth_date_id, dto.birth_date.as_ref()) {
        update_birth_date(
            conn,
            birth_date_id,
            birth_date.day.unwrap_or_default(),
            birth_date.month.unwrap_or_default(),
            birth_date.year.unwrap_or_default(),
        )?;
    }

    diesel::update(programmers::table.filter(programmers::programmer_id.eq(id)))
        .set((
            programmers::name.eq(dto.name.clone().unwrap_or_default()),
            programmers::phone_number.eq(dto.phone_number.clone().unwrap_or_default()),
            programmers::email.eq(dto.email.clone().unwrap_or_default()),
            programmers::responsibility.eq(dto.responsibility.unwrap_or_default()),
            programmers::is_apprentice.eq(dto.is_apprentice.unwrap_or_default()),
        ))
        .execute(conn)?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProgrammerEdit {
    pub name: String,
    pub zip_code: i32,
    pub city: String,
    pub street: String,
    pub phone_number: String,
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub is_apprentice: bool,
    pub responsibility: Responsibility,
    pub email: String,
}

/// The field-by-field edit chain: the first missing field wins, and a new
/// email equal to the stored one is rejected as a duplicate (longstanding
/// behavior, kept on purpose).
pub(crate) fn apply_edit(
    current_email: &str,
    edited: &ProgrammerDto,
) -> std::result::Result<ProgrammerEdit, &'static str> {
    let Some(name) = edited.name.clone() else {
        return Err(messages::NAME_MISSING);
    };
    let Some(zip_code) = edited.address.as_ref().and_then(|a| a.zip_code) else {
        return Err(messages::ZIP_CODE_INVALID);
    };
    let Some(city) = edited.address.as_ref().and_then(|a| a.city.clone()) else {
        return Err(messages::CITY_MISSING);
    };
    let Some(street) = edited.address.as_ref().and_then(|a| a.street.clone()) else {
        return Err(messages::STREET_MISSING);
    };
    let Some(phone_number) = edited.phone_number.clone() else {
        return Err(messages::PHONE_NUMBER_MISSING);
    };
    let Some(day) = edited.birth_date.as_ref().and_then(|b| b.day) else {
        return Err(messages::BIRTH_DAY_MISSING);
    };
    let Some(month) = edited.birth_date.as_ref().and_then(|b| b.month) else {
        return Err(messages::BIRTH_MONTH_MISSING);
    };
    let Some(year) = edited.birth_date.as_ref().and_then(|b| b.year) else {
        return Err(messages::BIRTH_YEAR_MISSING);
    };
    let Some(is_apprentice) = edited.is_apprentice else {
        return Err(messages::APPRENTICE_MISSING);
    };
    let Some(responsibility) = edited.responsibility else {
        return Err(messages::RESPONSIBILITY_MISSING);
    };
    if edited.email.as_deref() == Some(current_email) {
        return Err(messages::EMAIL_EXISTS);
    }
    let Some(email) = edited.email.clone() else {
        return Err(messages::EMAIL_MISSING);
    };

    Ok(ProgrammerEdit {
        name,
        zip_code,
        city,
        street,
        phone_number,
        day,
        month,
        year,
        is_apprentice,
        responsibility,
        email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::{AddressDto, BirthDateDto};

    fn full_edit() -> ProgrammerDto {
        ProgrammerDto {
            name: Some("Grace Hopper".to_string()),
            address: Some(AddressDto {
                address_id: None,
                zip_code: Some(1024),
                city: Some("Budapest".to_string()),
                street: Some("Kis street 7.".to_string()),
            }),
            birth_date: Some(BirthDateDto {
                birth_date_id: None,
                day: Some(9),
                month: Some(12),
                year: Some(1906),
            }),
            phone_number: Some("+36201234567".to_string()),
            email: Some("grace@example.com".to_string()),
            responsibility: Some(Responsibility::Backend),
            is_apprentice: Some(false),
            ..Default::default()
        }
    }

    #[test]
    fn complete_edit_produces_all_new_values() {
        let edit = apply_edit("old@example.com", &full_edit()).unwrap();
        assert_eq!(edit.name, "Grace Hopper");
        assert_eq!(edit.zip_code, 1024);
        assert_eq!(edit.email, "grace@example.com");
    }

    #[test]
    fn first_missing_field_short_circuits() {
        let mut edited = full_edit();
        edited.name = None;
        edited.phone_number = None;
        assert_eq!(
            apply_edit("old@example.com", &edited),
            Err(messages::NAME_MISSING)
        );

        let mut edited = full_edit();
        edited.phone_number = None;
        assert_eq!(
            apply_edit("old@example.com", &edited),
            Err(messages::PHONE_NUMBER_MISSING)
        );
    }

    #[test]
    fn missing_address_fails_on_zip_first() {
        let mut edited = full_edit();
        edited.address = None;
        assert_eq!(
            apply_edit("old@example.com", &edited),
            Err(messages::ZIP_CODE_INVALID)
        );
    }

    #[test]
    fn edit_rejects_unchanged_email() {
        // Known quirk: a no-op email edit is reported as a duplicate.
        let edited = full_edit();
        assert_eq!(
            apply_edit("grace@example.com", &edited),
            Err(messages::EMAIL_EXISTS)
        );
    }

    #[test]
    fn missing_email_is_reported_after_the_duplicate_check() {
        let mut edited = full_edit();
        edited.email = None;
        assert_eq!(
            apply_edit("old@example.com", &edited),
            Err(messages::EMAIL_MISSING)
        );
    }
}
