use diesel::prelude::*;

use crate::schema::projects;

#[derive(Clone, Debug, Queryable, Identifiable)]
#[diesel(table_name = projects, primary_key(project_id))]
pub struct Project {
    pub project_id: i64,
    pub client: String,
    pub start_date: String,
    pub description: String,
    pub deleted: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProject {
    pub client: String,
    pub start_date: String,
    pub description: String,
}
