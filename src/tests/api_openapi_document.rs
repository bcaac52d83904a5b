use super::setup_test_db;
use crate::openapi::{ApiDoc, OPENAPI_PATH, SWAGGER_UI_PATH};
use crate::router::build_router;
use crate::AppState;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt;
use utoipa::OpenApi;

#[test]
fn test_document_describes_every_route() {
    let doc = ApiDoc::openapi();

    assert_eq!(doc.info.title, "PizzaStore API");
    assert_eq!(doc.info.version, "v1");

    let paths = &doc.paths.paths;
    for path in ["/", "/pizzas", "/pizza", "/pizza/{id}"] {
        assert!(paths.contains_key(path), "missing {path}");
    }

    let by_id = &paths["/pizza/{id}"];
    assert!(by_id.get.is_some());
    assert!(by_id.put.is_some());
    assert!(by_id.delete.is_some());
    assert!(paths["/pizza"].post.is_some());
}

#[tokio::test]
async fn test_document_is_served() {
    let app = build_router(AppState::new(Arc::new(setup_test_db().await)));

    let response = app
        .oneshot(
            Request::builder()
                .uri(OPENAPI_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["info"]["description"], "Making the Pizzas you love");
    assert!(json["paths"]["/pizza/{id}"]["put"].is_object());
    assert!(json["components"]["schemas"]["Pizza"].is_object());
}

// the browsable UI lives next to the document it renders
#[tokio::test]
async fn test_swagger_ui_is_served() {
    let app = build_router(AppState::new(Arc::new(setup_test_db().await)));

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("{SWAGGER_UI_PATH}/"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");

    let body = axum::body::to_bytes(response.into_body(), 4 * 1024 * 1024)
        .await
        .unwrap();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("swagger-ui"));
}
