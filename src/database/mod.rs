use crate::domain::{NewPizza, Pizza};
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// shared across handlers behind an Arc; sqlx::Pool is already thread safe
// sqlite specific implementation lives in "sqlite.rs"
#[async_trait]
pub trait PizzaRepository: Send + Sync {
    async fn get_all_pizzas(&self) -> Result<Vec<Pizza>>;
    async fn get_pizza(&self, id: i64) -> Result<Option<Pizza>>;

    // write operations
    async fn create_pizza(&self, pizza: &NewPizza) -> Result<Pizza>;
    /// Returns `false` when no pizza has this id.
    async fn update_pizza(&self, id: i64, pizza: &NewPizza) -> Result<bool>;
    /// Returns `false` when no pizza has this id.
    async fn delete_pizza(&self, id: i64) -> Result<bool>;
}
