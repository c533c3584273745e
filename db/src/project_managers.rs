use diesel::prelude::*;

use crate::schema::project_managers;

#[derive(Clone, Debug, Queryable, Identifiable)]
#[diesel(table_name = project_managers, primary_key(project_manager_id))]
pub struct ProjectManager {
    pub project_manager_id: i64,
    pub name: String,
    pub address_id: Option<i64>,
    pub birth_date_id: Option<i64>,
    pub phone_number: String,
    pub email: String,
    pub project_id: Option<i64>,
    pub deleted: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = project_managers)]
pub struct NewProjectManager {
    pub name: String,
    pub address_id: Option<i64>,
    pub birth_date_id: Option<i64>,
    pub phone_number: String,
    pub email: String,
    pub project_id: Option<i64>,
}
