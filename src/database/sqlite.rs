use crate::config::PizzaConfig;
use crate::database::PizzaRepository;
use crate::domain::{NewPizza, Pizza};
use crate::features::pizzas::model::DbPizza;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};

const CREATE_PIZZAS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NULL,
        description TEXT NULL
    )
"#;

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Opens the pool described by `config` and makes sure the table exists.
    pub async fn connect(config: &PizzaConfig) -> Result<Self> {
        let store = config.store_options()?;

        // an in-memory database lives only as long as its connection
        let pool_options = if store.in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .connect_with(store.options)
            .await
            .with_context(|| format!("Failed to open store {}", config.connection_string))?;

        info!(
            connection = %config.connection_string,
            in_memory = store.in_memory,
            "connected to pizza store"
        );

        let repo = Self::new(pool);
        repo.ensure_schema().await?;
        Ok(repo)
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_PIZZAS_TABLE)
            .execute(&self.pool)
            .await
            .context("Failed to create pizzas table")?;
        Ok(())
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl PizzaRepository for SqliteRepository {
    async fn get_all_pizzas(&self) -> Result<Vec<Pizza>> {
        let rows = sqlx::query_as::<_, DbPizza>(
            "SELECT id, name, description FROM pizzas ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list pizzas")?;

        Ok(rows.into_iter().map(Pizza::from).collect())
    }

    async fn get_pizza(&self, id: i64) -> Result<Option<Pizza>> {
        let row = sqlx::query_as::<_, DbPizza>(
            "SELECT id, name, description FROM pizzas WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context(format!("Failed to fetch pizza {}", id))?;

        Ok(row.map(Pizza::from))
    }

    async fn create_pizza(&self, pizza: &NewPizza) -> Result<Pizza> {
        // the store hands back the assigned id in the same statement
        let row = sqlx::query_as::<_, DbPizza>(
            r#"
            INSERT INTO pizzas (name, description)
            VALUES (?, ?)
            RETURNING id, name, description
            "#,
        )
        .bind(&pizza.name)
        .bind(&pizza.description)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert pizza")?;

        let created = Pizza::from(row);
        debug!(%created, "inserted");
        Ok(created)
    }

    async fn update_pizza(&self, id: i64, pizza: &NewPizza) -> Result<bool> {
        let result = sqlx::query("UPDATE pizzas SET name = ?, description = ? WHERE id = ?")
            .bind(&pizza.name)
            .bind(&pizza.description)
            .bind(id)
            .execute(&self.pool)
            .await
            .context(format!("Failed to update pizza {}", id))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_pizza(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM pizzas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(format!("Failed to delete pizza {}", id))?;

        Ok(result.rows_affected() > 0)
    }
}
