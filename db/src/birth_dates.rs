use diesel::prelude::*;

use crate::schema::birth_dates;

#[derive(Clone, Debug, Queryable, Identifiable)]
#[diesel(table_name = birth_dates, primary_key(birth_date_id))]
pub struct BirthDate {
    pub birth_date_id: i64,
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = birth_dates)]
pub struct NewBirthDate {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}
