pub mod model;

use crate::domain::{NewPizza, Pizza};
use crate::errors::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use http::header;
use tracing::{info, instrument};

pub fn pizzas_router() -> Router<AppState> {
    Router::new()
        .route("/pizzas", get(list_pizzas_handler))
        .route("/pizza", post(create_pizza_handler))
        .route(
            "/pizza/{id}",
            get(get_pizza_handler)
                .put(update_pizza_handler)
                .delete(delete_pizza_handler),
        )
}

/// List every pizza, ordered by id.
#[utoipa::path(
    get,
    path = "/pizzas",
    tag = "pizzas",
    responses((status = 200, description = "All pizzas", body = [Pizza]))
)]
#[instrument(skip(state))]
pub async fn list_pizzas_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Pizza>>, ApiError> {
    let pizzas = state.pizzas.get_all_pizzas().await?;
    Ok(Json(pizzas))
}

/// Create a pizza. The store assigns the id.
#[utoipa::path(
    post,
    path = "/pizza",
    tag = "pizzas",
    request_body = NewPizza,
    responses(
        (status = 201, description = "Pizza created", body = Pizza,
            headers(("Location" = String, description = "Path of the new pizza"))),
        (status = 400, description = "Malformed payload")
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_pizza_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewPizza>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(new_pizza) = payload?;
    let pizza = state.pizzas.create_pizza(&new_pizza).await?;
    info!(id = pizza.id, "created pizza");

    let location = format!("/pizza/{}", pizza.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(pizza)))
}

#[utoipa::path(
    get,
    path = "/pizza/{id}",
    tag = "pizzas",
    params(("id" = i64, Path, description = "Pizza id")),
    responses(
        (status = 200, description = "Pizza found", body = Pizza),
        (status = 404, description = "No pizza with this id")
    )
)]
#[instrument(skip(state))]
pub async fn get_pizza_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Pizza>, ApiError> {
    match state.pizzas.get_pizza(id).await? {
        Some(pizza) => Ok(Json(pizza)),
        None => Err(ApiError::NotFound(id)),
    }
}

/// Overwrite name and description. The id never changes.
#[utoipa::path(
    put,
    path = "/pizza/{id}",
    tag = "pizzas",
    params(("id" = i64, Path, description = "Pizza id")),
    request_body = NewPizza,
    responses(
        (status = 204, description = "Pizza updated"),
        (status = 400, description = "Malformed payload"),
        (status = 404, description = "No pizza with this id")
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_pizza_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<NewPizza>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(changes) = payload?;
    if !state.pizzas.update_pizza(id, &changes).await? {
        return Err(ApiError::NotFound(id));
    }
    info!(id, "updated pizza");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/pizza/{id}",
    tag = "pizzas",
    params(("id" = i64, Path, description = "Pizza id")),
    responses(
        (status = 200, description = "Pizza deleted"),
        (status = 404, description = "No pizza with this id")
    )
)]
#[instrument(skip(state))]
pub async fn delete_pizza_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !state.pizzas.delete_pizza(id).await? {
        return Err(ApiError::NotFound(id));
    }
    info!(id, "deleted pizza");
    Ok(StatusCode::OK)
}
