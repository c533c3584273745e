//! Helpers for spinning up a throwaway database in integration tests.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use deadpool_diesel::Manager;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel_migrations::MigrationHarness;

use crate::{Pool, PoolExt, MIGRATIONS};

#[derive(Clone)]
pub struct TestDatabase {
    pub name: String,
    pub pool: Pool,
    pub url: String,
    global_connect_str: String,
}

impl TestDatabase {
    pub fn drop_db(&self) -> Result<()> {
        let mut conn = PgConnection::establish(self.global_connect_str.as_str())?;
        diesel::sql_query(&format!(r##"DROP DATABASE "{}" (FORCE)"##, self.name))
            .execute(&mut conn)?;
        Ok(())
    }
}

/// True when the environment points at a Postgres server the tests may use.
/// The suite skips itself when this is unset.
pub fn test_database_configured() -> bool {
    dotenv::dotenv().ok();
    std::env::var("TEST_DATABASE_HOST").is_ok()
}

/// Create a fresh, migrated database with a unique name.
pub async fn create_database() -> Result<TestDatabase> {
    dotenv::dotenv().ok();
    let host = std::env::var("TEST_DATABASE_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("TEST_DATABASE_PORT")
        .ok()
        .and_then(|val| val.parse::<u16>().ok())
        .unwrap_or(5432);
    let user = std::env::var("TEST_DATABASE_USER").unwrap_or_else(|_| "postgres".to_string());
    let password = std::env::var("TEST_DATABASE_PASSWORD").unwrap_or_else(|_| "".to_string());
    let global_test_db =
        std::env::var("TEST_DATABASE_GLOBAL_DB").unwrap_or_else(|_| "postgres".to_string());

    let base_connect = format!("postgresql://{user}:{password}@{host}:{port}");
    let global_connect = format!("{base_connect}/{global_test_db}");
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let database = format!("devdesk_test_{unique}");
    println!("Database name: {database}");

    let mut global_conn = PgConnection::establish(global_connect.as_str())?;
    diesel::sql_query(&format!(r##"CREATE DATABASE "{database}""##)).execute(&mut global_conn)?;
    drop(global_conn);

    let db_conn_str = format!("{base_connect}/{database}");
    let manager = Manager::new(db_conn_str.clone(), deadpool_diesel::Runtime::Tokio1);
    let pool = Pool::builder(manager).max_size(4).build()?;

    pool.interact(|conn| {
        conn.run_pending_migrations(MIGRATIONS).unwrap();
        Ok::<_, anyhow::Error>(())
    })
    .await?;

    Ok(TestDatabase {
        pool,
        url: db_conn_str,
        name: database,
        global_connect_str: global_connect,
    })
}
