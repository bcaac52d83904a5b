use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored pizza. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[display("pizza #{}", id)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Body of `POST /pizza` and `PUT /pizza/{id}`.
///
/// Any `id` sent by the client is dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPizza {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
impl NewPizza {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }
}
