use diesel::dsl::{exists, select};
use diesel::prelude::*;

use devdesk_db::project_managers::{NewProjectManager, ProjectManager};
use devdesk_db::schema::{addresses, birth_dates, project_managers};

use crate::dtos::{ProjectManagerDetailsDto, ProjectManagerDto};
use crate::error::Result;
use crate::messages;
use crate::services::{
    insert_address, insert_birth_date, load_address, load_birth_date, load_project,
    update_address, update_birth_date,
};
use crate::sort;
use crate::validator::{self, ValidatorResult};

pub fn find_all(conn: &mut PgConnection) -> Result<Vec<ProjectManagerDto>> {
    let rows = project_managers::table
        .left_join(addresses::table)
        .left_join(birth_dates::table)
        .filter(project_managers::deleted.eq(false))
        .order(project_managers::project_manager_id.asc())
        .select((
            project_managers::all_columns,
            addresses::all_columns.nullable(),
            birth_dates::all_columns.nullable(),
        ))
        .load::<(
            ProjectManager,
            Option<devdesk_db::addresses::Address>,
            Option<devdesk_db::birth_dates::BirthDate>,
        )>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(row, address, birth_date)| ProjectManagerDto::from_row(row, address, birth_date))
        .collect())
}

pub fn find_all_sorted(
    conn: &mut PgConnection,
    sort_by: Option<&str>,
    order: Option<&str>,
) -> Result<Vec<ProjectManagerDto>> {
    let items = find_all(conn)?;
    let Some(sort_by) = sort_by else {
        return Ok(items);
    };

    let descending = sort::is_descending(order);
    let name = |pm: &ProjectManagerDto| pm.name.clone().unwrap_or_default();

    let sorted = match sort_by.to_ascii_lowercase().as_str() {
        "name" => sort::sorted(items, descending, name),
        "email" => sort::sorted_with_tiebreak(
            items,
            descending,
            |pm| pm.email.clone().unwrap_or_default(),
            name,
        ),
        "phonenumber" => sort::sorted_with_tiebreak(
            items,
            descending,
            |pm| pm.phone_number.clone().unwrap_or_default(),
            name,
        ),
        "city" => sort::sorted_with_tiebreak(
            items,
            descending,
            |pm| {
                pm.address
                    .as_ref()
                    .and_then(|a| a.city.clone())
                    .unwrap_or_default()
            },
            name,
        ),
        _ => items,
    };

    Ok(sorted)
}

pub fn find_by_id(conn: &mut PgConnection, id: i64) -> Result<Option<ProjectManagerDetailsDto>> {
    let row = project_managers::table
        .filter(project_managers::project_manager_id.eq(id))
        .filter(project_managers::deleted.eq(false))
        .first::<ProjectManager>(conn)
        .optional()?;
    let Some(row) = row else {
        return Ok(None);
    };

    let address = load_address(conn, row.address_id)?;
    let birth_date = load_birth_date(conn, row.birth_date_id)?;
    let project = load_project(conn, row.project_id)?;

    Ok(Some(ProjectManagerDetailsDto {
        project_manager_id: Some(row.project_manager_id),
        name: Some(row.name),
        address: address.map(Into::into),
        birth_date: birth_date.map(Into::into),
        phone_number: Some(row.phone_number),
        email: Some(row.email),
        project: project.map(Into::into),
        deleted: Some(row.deleted),
    }))
}

/// Saving a manager never assigns a project; that happens through the
/// project association endpoint, and a re-save clears any assignment.
pub fn save(
    conn: &mut PgConnection,
    project_manager: Option<&ProjectManagerDto>,
) -> Result<ValidatorResult> {
    let taken = email_taken(conn, project_manager.and_then(|pm| pm.email.as_deref()))?;
    let result = validator::project_manager_valid(project_manager, taken);

    if result.valid {
        if let Some(dto) = project_manager {
            match dto.project_manager_id {
                None => {
                    insert_new(conn, dto)?;
                }
                Some(id) => update_existing(conn, id, dto)?,
            }
        }
    }

    Ok(result)
}

pub fn edit_by_id(
    conn: &mut PgConnection,
    id: i64,
    edited: &ProjectManagerDto,
) -> Result<ValidatorResult> {
    let row = project_managers::table
        .filter(project_managers::project_manager_id.eq(id))
        .filter(project_managers::deleted.eq(false))
        .first::<ProjectManager>(conn)
        .optional()?;
    let Some(row) = row else {
        return Ok(ValidatorResult::fail(messages::NO_PROJECT_MANAGER_FOUND));
    };

    let edit = match apply_edit(&row.email, edited) {
        Ok(edit) => edit,
        Err(message) => return Ok(ValidatorResult::fail(message)),
    };

    let mut checked = edited.clone();
    checked.project_manager_id = Some(id);
    let taken = email_taken(conn, checked.email.as_deref())?;
    if validator::project_manager_valid(Some(&checked), taken).valid {
        if let Some(address_id) = row.address_id {
            update_address(conn, address_id, edit.zip_code, &edit.city, &edit.street)?;
        }
        if let Some(birth_date_id) = row.birth_date_id {
            update_birth_date(conn, birth_date_id, edit.day, edit.month, edit.year)?;
        }
        diesel::update(
            project_managers::table.filter(project_managers::project_manager_id.eq(id)),
        )
        .set((
            project_managers::name.eq(edit.name),
            project_managers::phone_number.eq(edit.phone_number),
            project_managers::email.eq(edit.email),
        ))
        .execute(conn)?;
    }

    // Success is reported once the field chain passes, even when the
    // validator blocked the actual update.
    Ok(ValidatorResult::pass(messages::save_success(
        "project manager",
    )))
}

pub fn delete_by_id(conn: &mut PgConnection, id: i64) -> Result<bool> {
    let row = project_managers::table
        .filter(project_managers::project_manager_id.eq(id))
        .filter(project_managers::deleted.eq(false))
        .first::<ProjectManager>(conn)
        .optional()?;
    if row.is_none() {
        return Ok(false);
    }

    diesel::update(project_managers::table.filter(project_managers::project_manager_id.eq(id)))
        .set((
            project_managers::address_id.eq(Option::<i64>::None),
            project_managers::birth_date_id.eq(Option::<i64>::None),
            project_managers::project_id.eq(Option::<i64>::None),
            project_managers::deleted.eq(true),
        ))
        .execute(conn)?;

    Ok(true)
}

fn email_taken(conn: &mut PgConnection, email: Option<&str>) -> Result<bool> {
    let Some(email) = email else {
        return Ok(false);
    };
    let taken = select(exists(
        project_managers::table
            .filter(project_managers::email.eq(email))
            .filter(project_managers::deleted.eq(false)),
    ))
    .get_result(conn)?;
    Ok(taken)
}

fn insert_new(conn: &mut PgConnection, dto: &ProjectManagerDto) -> Result<i64> {
    let address_id = match dto.address.as_ref() {
        Some(address) => Some(insert_address(conn, address)?),
        None => None,
    };
    let birth_date_id = match dto.birth_date.as_ref() {
        Some(birth_date) => Some(insert_birth_date(conn, birth_date)?),
        None => None,
    };

    let id = diesel::insert_into(project_managers::table)
        .values(NewProjectManager {
            name: dto.name.clone().unwrap_or_default(),
            address_id,
            birth_date_id,
            phone_number: dto.phone_number.clone().unwrap_or_default(),
            email: dto.email.clone().unwrap_or_default(),
            project_id: None,
        })
        .returning(project_managers::project_manager_id)
        .get_result(conn)?;
    Ok(id)
}

fn update_existing(conn: &mut PgConnection, id: i64, dto: &ProjectManagerDto) -> Result<()> {
    let row = project_managers::table
        .filter(project_managers::project_manager_id.eq(id))
        .first::<ProjectManager>(conn)
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

    diesel::update(project_managers::table.filter(project_managers::project_manager_id.eq(id)))
        .set((
            project_managers::name.eq(dto.name.clone().unwrap_or_default()),
            project_managers::phone_number.eq(dto.phone_number.clone().unwrap_or_default()),
            project_managers::email.eq(dto.email.clone().unwrap_or_default()),
            project_managers::project_id.eq(Option::<i64>::None),
        ))
        .execute(conn)?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProjectManagerEdit {
    pub name: String,
    pub zip_code: i32,
    pub city: String,
    pub street: String,
    pub phone_number: String,
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub email: String,
}

/// Same chain as the programmer edit without the responsibility and
/// apprentice fields, duplicate-email quirk included.
pub(crate) fn apply_edit(
    current_email: &str,
    edited: &ProjectManagerDto,
) -> std::result::Result<ProjectManagerEdit, &'static str> {
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
    if edited.email.as_deref() == Some(current_email) {
        return Err(messages::EMAIL_EXISTS);
    }
    let Some(email) = edited.email.clone() else {
        return Err(messages::EMAIL_MISSING);
    };

    Ok(ProjectManagerEdit {
        name,
        zip_code,
        city,
        street,
        phone_number,
        day,
        month,
        year,
        email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::{AddressDto, BirthDateDto};

    fn full_edit() -> ProjectManagerDto {
        ProjectManagerDto {
            name: Some("Ada Lovelace".to_string()),
            address: Some(AddressDto {
                address_id: None,
                zip_code: Some(9021),
                city: Some("Gyor".to_string()),
                street: Some("Fo street 12.".to_string()),
            }),
            birth_date: Some(BirthDateDto {
                birth_date_id: None,
                day: Some(10),
                month: Some(12),
                year: Some(1985),
            }),
            phone_number: Some("+36301112233".to_string()),
            email: Some("ada@example.com".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn complete_edit_produces_all_new_values() {
        let edit = apply_edit("old@example.com", &full_edit()).unwrap();
        assert_eq!(edit.name, "Ada Lovelace");
        assert_eq!(edit.city, "Gyor");
        assert_eq!(edit.email, "ada@example.com");
    }

    #[test]
    fn first_missing_field_short_circuits() {
        let mut edited = full_edit();
        if let Some(birth_date) = edited.birth_date.as_mut() {
            birth_date.month = None;
        }
        assert_eq!(
            apply_edit("old@example.com", &edited),
            Err(messages::BIRTH_MONTH_MISSING)
        );
    }

    #[test]
    fn edit_rejects_unchanged_email() {
        let edited = full_edit();
        assert_eq!(
            apply_edit("ada@example.com", &edited),
            Err(messages::EMAIL_EXISTS)
        );
    }
}
