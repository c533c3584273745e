mod enums;

pub mod addresses;
pub mod birth_dates;
pub mod programmers;
pub mod project_managers;
pub mod projects;
pub mod schema;
pub mod test;

pub use enums::*;

use async_trait::async_trait;
use diesel::{Connection, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations};

pub type Pool = deadpool_diesel::postgres::Pool;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub fn connect(conn_str: &str, max_connections: usize) -> Result<Pool, impl std::error::Error> {
    let manager =
        deadpool_diesel::postgres::Manager::new(conn_str, deadpool_diesel::Runtime::Tokio1);
    deadpool_diesel::Pool::builder(manager)
        .max_size(max_connections)
        .build()
}

/// Run a blocking diesel closure on a pooled connection, with or without a
/// wrapping transaction.
#[async_trait]
pub trait PoolExt<F, RETVAL, ERR>
where
    F: (FnOnce(&mut PgConnection) -> Result<RETVAL, ERR>) + Send + 'static,
    RETVAL: Send + 'static,
    ERR: Send + 'static,
{
    async fn interact(&self, f: F) -> Result<RETVAL, ERR>;
    async fn transaction(&self, f: F) -> Result<RETVAL, ERR>;
}

#[async_trait]
impl<F, RETVAL, ERR> PoolExt<F, RETVAL, ERR> for Pool
where
    F: (FnOnce(&mut PgConnection) -> Result<RETVAL, ERR>) + Send + 'static,
    RETVAL: Send + 'static,
    ERR: From<diesel::result::Error> + From<deadpool_diesel::PoolError> + Send + 'static,
{
    async fn interact(&self, f: F) -> Result<RETVAL, ERR> {
        let conn = self.get().await?;
        let result = conn.interact(move |conn| f(conn)).await.unwrap()?;
        Ok(result)
    }

    async fn transaction(&self, f: F) -> Result<RETVAL, ERR> {
        let conn = self.get().await?;
        let result = conn
            .interact(move |conn| conn.transaction(move |conn| f(conn)))
            .await
            .unwrap()?;
        Ok(result)
    }
}
