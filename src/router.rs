use crate::features::{self, pizzas::pizzas_router};
use crate::openapi::{ApiDoc, OPENAPI_PATH, SWAGGER_UI_PATH};
use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// The full application: liveness route, pizza CRUD, Swagger UI and the
/// OpenAPI document it reads.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(features::hello_handler))
        .merge(pizzas_router())
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
