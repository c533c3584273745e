use diesel::prelude::*;

use crate::enums::Responsibility;
use crate::schema::programmers;

#[derive(Clone, Debug, Queryable, Identifiable)]
#[diesel(table_name = programmers, primary_key(programmer_id))]
pub struct Programmer {
    pub programmer_id: i64,
    pub name: String,
    pub address_id: Option<i64>,
    pub birth_date_id: Option<i64>,
    pub phone_number: String,
    pub email: String,
    pub project_id: Option<i64>,
    pub project_manager_id: Option<i64>,
    pub responsibility: Responsibility,
    pub is_apprentice: bool,
    pub deleted: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = programmers)]
pub struct NewProgrammer {
    pub name: String,
    pub address_id: Option<i64>,
    pub birth_date_id: Option<i64>,
    pub phone_number: String,
    pub email: String,
    pub project_id: Option<i64>,
    pub project_manager_id: Option<i64>,
    pub responsibility: Responsibility,
    pub is_apprentice: bool,
}
