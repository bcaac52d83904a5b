use crate::domain::Pizza;

/// Row shape of the `pizzas` table.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct DbPizza {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<DbPizza> for Pizza {
    fn from(row: DbPizza) -> Self {
        Pizza {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}
