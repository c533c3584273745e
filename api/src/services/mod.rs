//! Entity services. Each function runs on a pooled connection inside
//! `PoolExt::interact`/`transaction`, so mutations are all-or-nothing per
//! request.

pub mod programmers;
pub mod project_managers;
pub mod projects;

use diesel::prelude::*;

use devdesk_db::addresses::{Address, NewAddress};
use devdesk_db::birth_dates::{BirthDate, NewBirthDate};
use devdesk_db::projects::Project;
use devdesk_db::schema::{addresses, birth_dates, projects as projects_schema};

use crate::dtos::{AddressDto, BirthDateDto};
use crate::error::Result;

// Address and birth date rows are owned by exactly one programmer or project
// manager; the helpers below are the whole lifecycle either owner needs.

pub(crate) fn insert_address(conn: &mut PgConnection, address: &AddressDto) -> Result<i64> {
    let id = diesel::insert_into(addresses::table)
        .values(NewAddress {
            zip_code: address.zip_code.unwrap_or_default(),
            city: address.city.clone().unwrap_or_default(),
            street: address.street.clone().unwrap_or_default(),
        })
        .returning(addresses::address_id)
        .get_result(conn)?;
    Ok(id)
}

pub(crate) fn insert_birth_date(conn: &mut PgConnection, birth_date: &BirthDateDto) -> Result<i64> {
    let id = diesel::insert_into(birth_dates::table)
        .values(NewBirthDate {
            day: birth_date.day.unwrap_or_default(),
            month: birth_date.month.unwrap_or_default(),
            year: birth_date.year.unwrap_or_default(),
        })
        .returning(birth_dates::birth_date_id)
        .get_result(conn)?;
    Ok(id)
}

pub(crate) fn update_address(
    conn: &mut PgConnection,
    id: i64,
    zip_code: i32,
    city: &str,
    street: &str,
) -> Result<()> {
    diesel::update(addresses::table.filter(addresses::address_id.eq(id)))
        .set((
            addresses::zip_code.eq(zip_code),
            addresses::city.eq(city),
            addresses::street.eq(street),
        ))
        .execute(conn)?;
    Ok(())
}

pub(crate) fn update_birth_date(
    conn: &mut PgConnection,
    id: i64,
    day: i32,
    month: i32,
    year: i32,
) -> Result<()> {
    diesel::update(birth_dates::table.filter(birth_dates::birth_date_id.eq(id)))
        .set((
            birth_dates::day.eq(day),
            birth_dates::month.eq(month),
            birth_dates::year.eq(year),
        ))
        .execute(conn)?;
    Ok(())
}

pub(crate) fn load_address(conn: &mut PgConnection, id: Option<i64>) -> Result<Option<Address>> {
    match id {
        Some(id) => Ok(addresses::table.find(id).first(conn).optional()?),
        None => Ok(None),
    }
}

pub(crate) fn load_birth_date(
    conn: &mut PgConnection,
    id: Option<i64>,
) -> Result<Option<BirthDate>> {
    match id {
        Some(id) => Ok(birth_dates::table.find(id).first(conn).optional()?),
        None => Ok(None),
    }
}

pub(crate) fn load_project(conn: &mut PgConnection, id: Option<i64>) -> Result<Option<Project>> {
    match id {
        Some(id) => Ok(projects_schema::table
            .filter(projects_schema::project_id.eq(id))
            .filter(projects_schema::deleted.eq(false))
            .first(conn)
            .optional()?),
        None => Ok(None),
    }
}
