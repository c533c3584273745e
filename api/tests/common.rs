use std::future::Future;

use anyhow::Result;
use once_cell::sync::Lazy;

use devdesk_api::Server;
use devdesk_db::test::{create_database, test_database_configured, TestDatabase};

pub struct TestApp {
    pub database: TestDatabase,
    pub client: reqwest::Client,
    pub address: String,
    /// Base URL of the API routes, ending in `/api`.
    pub base_url: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

async fn start_app(database: TestDatabase) -> Result<TestApp> {
    let config = devdesk_api::config::Config {
        database_url: database.url.clone(),
        port: 0, // Bind to random port
        host: "127.0.0.1".to_string(),
        env: "test".to_string(),
        database_pool_size: 4,
    };
    Lazy::force(&devdesk_test::TRACING);
    let Server { server, host, port } = devdesk_api::run_server(config).await?;

    tokio::task::spawn(server);

    let base_url = format!("http://{}:{}/api", host, port);
    let client = reqwest::ClientBuilder::new()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    Ok(TestApp {
        database,
        client,
        address: format!("{}:{}", host, port),
        base_url,
    })
}

/// Run a test against a fresh database and server instance. The whole suite
/// is a no-op when TEST_DATABASE_HOST is not set.
pub async fn run_app_test<F, R>(f: F)
where
    F: FnOnce(TestApp) -> R,
    R: Future<Output = Result<(), anyhow::Error>>,
{
    if !test_database_configured() {
        println!("TEST_DATABASE_HOST not set, skipping");
        return;
    }

    let database = create_database().await.expect("Creating database");
    let app = start_app(database.clone()).await.expect("Starting app");
    f(app).await.unwrap();
    database.drop_db().expect("Cleaning up");
}
