use diesel::prelude::*;

use devdesk_db::programmers::Programmer;
use devdesk_db::project_managers::ProjectManager;
use devdesk_db::projects::{NewProject, Project};
use devdesk_db::schema::{programmers, project_managers, projects};

use crate::dtos::ProjectDto;
use crate::error::{Error, Result};
use crate::messages;
use crate::sort;
use crate::validator::{self, ValidatorResult};

pub fn find_all(conn: &mut PgConnection) -> Result<Vec<ProjectDto>> {
    let rows = projects::table
        .filter(projects::deleted.eq(false))
        .order(projects::project_id.asc())
        .load::<Project>(conn)?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub fn find_all_sorted(
    conn: &mut PgConnection,
    sort_by: Option<&str>,
    order: Option<&str>,
) -> Result<Vec<ProjectDto>> {
    let items = find_all(conn)?;
    let Some(sort_by) = sort_by else {
        return Ok(items);
    };

    let descending = sort::is_descending(order);
    let client = |p: &ProjectDto| p.client.clone().unwrap_or_default();

    let sorted = match sort_by.to_ascii_lowercase().as_str() {
        "client" => sort::sorted(items, descending, client),
        "startdate" => sort::sorted_with_tiebreak(
            items,
            descending,
            |p| p.start_date.clone().unwrap_or_default(),
            client,
        ),
        "description" => sort::sorted_with_tiebreak(
            items,
            descending,
            |p| p.description.clone().unwrap_or_default(),
            client,
        ),
        _ => items,
    };

    Ok(sorted)
}

pub fn find_by_id(conn: &mut PgConnection, id: i64) -> Result<Option<ProjectDto>> {
    let row = projects::table
        .filter(projects::project_id.eq(id))
        .filter(projects::deleted.eq(false))
        .first::<Project>(conn)
        .optional()?;
    Ok(row.map(Into::into))
}

pub fn save(conn: &mut PgConnection, project: Option<&ProjectDto>) -> Result<ValidatorResult> {
    let result = validator::project_valid(project);
    if result.valid {
        if let Some(dto) = project {
            upsert(conn, dto)?;
        }
    }
    Ok(result)
}

/// Save a project and assign it to the given manager.
pub fn save_by_project_manager_id(
    conn: &mut PgConnection,
    project: Option<&ProjectDto>,
    project_manager_id: i64,
) -> Result<ValidatorResult> {
    let result = validator::project_valid(project);
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

    if let Some(dto) = project {
        let project_id = upsert(conn, dto)?;
        diesel::update(
            project_managers::table
                .filter(project_managers::project_manager_id.eq(manager.project_manager_id)),
        )
        .set(project_managers::project_id.eq(Some(project_id)))
        .execute(conn)?;
    }

    Ok(result)
}

/// Save a project and assign it to the given programmer.
pub fn save_by_programmer_id(
    conn: &mut PgConnection,
    project: Option<&ProjectDto>,
    programmer_id: i64,
) -> Result<ValidatorResult> {
    let result = validator::project_valid(project);
    if !result.valid {
        return Ok(result);
    }

    let programmer = programmers::table
        .filter(programmers::programmer_id.eq(programmer_id))
        .filter(programmers::deleted.eq(false))
        .first::<Programmer>(conn)
        .optional()?;
    let Some(programmer) = programmer else {
        return Err(Error::NotFound(messages::NO_PROGRAMMER_FOUND));
    };

    if let Some(dto) = project {
        let project_id = upsert(conn, dto)?;
        diesel::update(
            programmers::table.filter(programmers::programmer_id.eq(programmer.programmer_id)),
        )
        .set(programmers::project_id.eq(Some(project_id)))
        .execute(conn)?;
    }

    Ok(result)
}

pub fn edit_by_id(conn: &mut PgConnection, id: i64, edited: &ProjectDto) -> Result<ValidatorResult> {
    let row = projects::table
        .filter(projects::project_id.eq(id))
        .filter(projects::deleted.eq(false))
        .first::<Project>(conn)
        .optional()?;
    if row.is_none() {
        return Ok(ValidatorResult::fail(messages::NO_PROJECT_FOUND));
    }

    let edit = match apply_edit(edited) {
        Ok(edit) => edit,
        Err(message) => return Ok(ValidatorResult::fail(message)),
    };

    // Project edits are persisted as-is once every field is present; the
    // validator is not consulted again.
    diesel::update(projects::table.filter(projects::project_id.eq(id)))
        .set((
            projects::client.eq(edit.client),
            projects::start_date.eq(edit.start_date),
            projects::description.eq(edit.description),
        ))
        .execute(conn)?;

    Ok(ValidatorResult::pass(messages::save_success("project")))
}

pub fn delete_by_id(conn: &mut PgConnection, id: i64) -> Result<bool> {
    let row = projects::table
        .filter(projects::project_id.eq(id))
        .filter(projects::deleted.eq(false))
        .first::<Project>(conn)
        .optional()?;
    if row.is_none() {
        return Ok(false);
    }

    // Assignments are left in place; detail lookups filter deleted projects.
    diesel::update(projects::table.filter(projects::project_id.eq(id)))
        .set(projects::deleted.eq(true))
        .execute(conn)?;

    Ok(true)
}

fn upsert(conn: &mut PgConnection, dto: &ProjectDto) -> Result<i64> {
    match dto.project_id {
        None => {
            let id = diesel::insert_into(projects::table)
                .values(NewProject {
                    client: dto.client.clone().unwrap_or_default(),
                    start_date: dto.start_date.clone().unwrap_or_default(),
                    description: dto.description.clone().unwrap_or_default(),
                })
                .returning(projects::project_id)
                .get_result(conn)?;
            Ok(id)
        }
        Some(id) => {
            diesel::update(projects::table.filter(projects::project_id.eq(id)))
                .set((
                    projects::client.eq(dto.client.clone().unwrap_or_default()),
                    projects::start_date.eq(dto.start_date.clone().unwrap_or_default()),
                    projects::description.eq(dto.description.clone().unwrap_or_default()),
                ))
                .execute(conn)?;
            Ok(id)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProjectEdit {
    pub client: String,
    pub description: String,
    pub start_date: String,
}

pub(crate) fn apply_edit(edited: &ProjectDto) -> std::result::Result<ProjectEdit, &'static str> {
    let Some(client) = edited.client.clone() else {
        return Err(messages::CLIENT_MISSING);
    };
    let Some(description) = edited.description.clone() else {
        return Err(messages::DESCRIPTION_MISSING);
    };
    let Some(start_date) = edited.start_date.clone() else {
        return Err(messages::START_DATE_MISSING);
    };

    Ok(ProjectEdit {
        client,
        description,
        start_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_edit() -> ProjectDto {
        ProjectDto {
            client: Some("Acme Corp".to_string()),
            start_date: Some("11/03/1999".to_string()),
            description: Some("Warehouse tracking".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn complete_edit_produces_all_new_values() {
        let edit = apply_edit(&full_edit()).unwrap();
        assert_eq!(edit.client, "Acme Corp");
        assert_eq!(edit.start_date, "11/03/1999");
        assert_eq!(edit.description, "Warehouse tracking");
    }

    #[test]
    fn fields_are_checked_client_first() {
        let mut edited = full_edit();
        edited.client = None;
        edited.start_date = None;
        assert_eq!(apply_edit(&edited), Err(messages::CLIENT_MISSING));

        let mut edited = full_edit();
        edited.description = None;
        assert_eq!(apply_edit(&edited), Err(messages::DESCRIPTION_MISSING));

        let mut edited = full_edit();
        edited.start_date = None;
        assert_eq!(apply_edit(&edited), Err(messages::START_DATE_MISSING));
    }
}
