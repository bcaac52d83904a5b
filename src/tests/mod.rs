mod api_openapi_document;
mod integration_pizzas_server;

use crate::database::sqlite::SqliteRepository;
use sqlx::sqlite::SqlitePoolOptions;

// create a fresh sqlite database in memory for a single test
pub async fn setup_test_db() -> SqliteRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    let repo = SqliteRepository::new(pool);
    repo.ensure_schema()
        .await
        .expect("Failed to create pizzas table");
    repo
}
