use diesel::prelude::*;

use crate::schema::addresses;

#[derive(Clone, Debug, Queryable, Identifiable)]
#[diesel(table_name = addresses, primary_key(address_id))]
pub struct Address {
    pub address_id: i64,
    pub zip_code: i32,
    pub city: String,
    pub street: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = addresses)]
pub struct NewAddress {
    pub zip_code: i32,
    pub city: String,
    pub street: String,
}
