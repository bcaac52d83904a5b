use super::setup_test_db;
use crate::domain::Pizza;
use crate::router::build_router;
use crate::AppState;
use reqwest::StatusCode;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinSet;

// serve the real router on an ephemeral port and return its base url
async fn start_server() -> String {
    let app = build_router(AppState::new(Arc::new(setup_test_db().await)));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_crud_over_http() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let res = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Hello World!");

    let res = client
        .post(format!("{base}/pizza"))
        .json(&json!({"name": "Margherita", "description": "Classic"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res.headers()["location"].to_str().unwrap().to_string();
    let created: Pizza = res.json().await.unwrap();
    assert_eq!(location, format!("/pizza/{}", created.id));

    // follow the Location header
    let fetched: Pizza = client
        .get(format!("{base}{location}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let res = client
        .put(format!("{base}{location}"))
        .json(&json!({"name": "Margherita DOP", "description": "Classic, updated"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client.delete(format!("{base}{location}")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(format!("{base}{location}")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

// concurrent clients each get their own id
#[tokio::test]
async fn test_concurrent_posts_over_http() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let mut set = JoinSet::new();
    for i in 0..20 {
        let client = client.clone();
        let url = format!("{base}/pizza");
        set.spawn(async move {
            let res = client
                .post(url)
                .json(&json!({"name": format!("Pizza {i}"), "description": "load"}))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::CREATED);
            res.json::<Pizza>().await.unwrap().id
        });
    }

    let mut ids = Vec::new();
    while let Some(res) = set.join_next().await {
        ids.push(res.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);

    let listed: Vec<Pizza> = client
        .get(format!("{base}/pizzas"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.len(), 20);
}
