pub mod pizzas;

/// Liveness check.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn hello_handler() -> &'static str {
    "Hello World!"
}
