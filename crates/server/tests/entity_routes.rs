use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use configs::AppConfig;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    server::startup::build_app(&AppConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(builder.body(body)?).await?;
    let status = res.status();
    let bytes = res.into_body().collect().await?.to_bytes();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

async fn send_raw(app: &Router, method: Method, uri: &str, content_type: Option<&str>, body: &'static str) -> anyhow::Result<StatusCode> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let res = app.clone().oneshot(builder.body(Body::from(body))?).await?;
    Ok(res.status())
}

#[tokio::test]
async fn task_lifecycle_over_http() -> anyhow::Result<()> {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/tasks", Some(json!({"description": "buy milk", "deadline": 100}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "description": "buy milk", "deadline": 100}));

    let (status, body) = send(&app, Method::GET, "/tasks/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "description": "buy milk", "deadline": 100}));

    let (status, body) = send(&app, Method::PUT, "/tasks/1", Some(json!({"description": "buy bread", "deadline": 200}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "description": "buy bread", "deadline": 200}));

    let (status, body) = send(&app, Method::GET, "/tasks/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "buy bread");
    assert_eq!(body["deadline"], 200);

    let (status, body) = send(&app, Method::DELETE, "/tasks/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "deleted": true}));

    let (status, body) = send(&app, Method::GET, "/tasks/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn unknown_ids_return_404() -> anyhow::Result<()> {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/tasks/99", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::PUT, "/tasks/99", Some(json!({"description": "x", "deadline": 1}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::DELETE, "/tasks/99", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the failed update did not create anything
    let (_, body) = send(&app, Method::GET, "/tasks", None).await?;
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn unparseable_ids_return_400() -> anyhow::Result<()> {
    let app = app();
    for uri in ["/tasks/abc", "/tasks/-1", "/links/1.5"] {
        let (status, body) = send(&app, Method::GET, uri, None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Invalid Id");
    }
    let (status, _) = send(&app, Method::DELETE, "/tasks/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn malformed_bodies_return_400() -> anyhow::Result<()> {
    let app = app();
    assert_eq!(send_raw(&app, Method::POST, "/tasks", Some("application/json"), "not json").await?, StatusCode::BAD_REQUEST);
    assert_eq!(send_raw(&app, Method::POST, "/tasks", None, r#"{"description":"x","deadline":1}"#).await?, StatusCode::BAD_REQUEST);
    assert_eq!(
        send_raw(&app, Method::POST, "/tasks", Some("application/json"), r#"{"description":"x","deadline":"soon"}"#).await?,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        send_raw(&app, Method::PUT, "/tasks/1", Some("application/json"), r#"{"description":"x"}"#).await?,
        StatusCode::BAD_REQUEST
    );
    Ok(())
}

#[tokio::test]
async fn validation_failures_return_400() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/tasks", Some(json!({"description": "  ", "deadline": 1}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let (status, _) = send(&app, Method::POST, "/links", Some(json!({"external": "a/b", "internal": "https://example.com"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn list_is_paginated_in_id_order() -> anyhow::Result<()> {
    let app = app();
    for i in 0..3 {
        let (status, _) = send(&app, Method::POST, "/tasks", Some(json!({"description": format!("t{i}"), "deadline": i}))).await?;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/tasks?limit=2", None).await?;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body.as_array().map(|a| a.iter().filter_map(|e| e["id"].as_u64()).collect()).unwrap_or_default();
    assert_eq!(ids, vec![1, 2]);

    let (_, body) = send(&app, Method::GET, "/tasks?offset=2", None).await?;
    assert_eq!(body, json!([{"id": 3, "description": "t2", "deadline": 2}]));

    let (status, _) = send(&app, Method::GET, "/tasks?limit=abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn tasks_and_links_have_independent_ids() -> anyhow::Result<()> {
    let app = app();
    let (_, task) = send(&app, Method::POST, "/tasks", Some(json!({"description": "t", "deadline": 0}))).await?;
    let (status, link) = send(&app, Method::POST, "/links", Some(json!({"external": "docs", "internal": "https://example.com/docs"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["id"], 1);
    assert_eq!(link, json!({"id": 1, "external": "docs", "internal": "https://example.com/docs"}));

    let (status, _) = send(&app, Method::DELETE, "/links/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/tasks/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() -> anyhow::Result<()> {
    let app = app();
    send(&app, Method::POST, "/tasks", Some(json!({"description": "a", "deadline": 1}))).await?;
    send(&app, Method::DELETE, "/tasks/1", None).await?;
    let (_, body) = send(&app, Method::POST, "/tasks", Some(json!({"description": "b", "deadline": 1}))).await?;
    assert_eq!(body["id"], 2);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_unique_ids() -> anyhow::Result<()> {
    let app = app();
    let mut handles = Vec::new();
    for i in 0..32 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            send(&app, Method::POST, "/tasks", Some(json!({"description": format!("c{i}"), "deadline": i}))).await
        }));
    }

    let mut ids = HashSet::new();
    for h in handles {
        let (status, body) = h.await??;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_u64().ok_or_else(|| anyhow::anyhow!("missing id"))?;
        assert!(ids.insert(id), "id {id} handed out twice");
    }
    assert_eq!(ids.len(), 32);
    Ok(())
}

#[tokio::test]
async fn health_root_and_docs() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = send(&app, Method::GET, "/", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().is_some());

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/tasks/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn link_lifecycle_over_http() -> anyhow::Result<()> {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/links", Some(json!({"external": "docs", "internal": "https://example.com/docs"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "external": "docs", "internal": "https://example.com/docs"}));

    let (status, body) = send(&app, Method::GET, "/links/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["external"], "docs");

    let (status, body) = send(&app, Method::PUT, "/links/1", Some(json!({"external": "guide", "internal": "https://example.com/guide"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "external": "guide", "internal": "https://example.com/guide"}));

    let (status, body) = send(&app, Method::GET, "/links/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "external": "guide", "internal": "https://example.com/guide"}));

    let (status, body) = send(&app, Method::DELETE, "/links/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "deleted": true}));

    let (status, _) = send(&app, Method::GET, "/links/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn link_errors_map_to_status_codes() -> anyhow::Result<()> {
    let app = app();
    let (status, _) = send(&app, Method::PUT, "/links/7", Some(json!({"external": "x", "internal": "https://example.com"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::DELETE, "/links/7", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/links/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid Id");

    let (_, body) = send(&app, Method::GET, "/links", None).await?;
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn product_lifecycle_and_price_rules() -> anyhow::Result<()> {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/products", Some(json!({"slug": "laptop", "title": "Laptop", "price_cents": 15500}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "slug": "laptop", "title": "Laptop", "description": "", "price_cents": 15500}));

    let (status, body) = send(&app, Method::POST, "/products", Some(json!({"slug": "", "price_cents": 100}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");
    let (status, _) = send(&app, Method::POST, "/products", Some(json!({"slug": "free", "price_cents": 0}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PUT, "/products/1", Some(json!({"slug": "laptop", "price_cents": -1}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, body) = send(&app, Method::PUT, "/products/1", Some(json!({"slug": "laptop", "title": "Laptop", "price_cents": 9900}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price_cents"], 9900);

    let (status, _) = send(&app, Method::PUT, "/products/2", Some(json!({"slug": "ghost", "price_cents": 1}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/products/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, "/products/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn users_are_trimmed_and_required() -> anyhow::Result<()> {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/users", Some(json!({"name": "  Ann ", "email": " ann@example.com "}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "Ann", "email": "ann@example.com"}));

    let (status, body) = send(&app, Method::GET, "/users/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ann");

    let (status, _) = send(&app, Method::POST, "/users", Some(json!({"name": "   ", "email": "x@example.com"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, Method::POST, "/users", Some(json!({"name": "Bo"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::PUT, "/users/1", Some(json!({"name": "Ann Lee", "email": "ann.lee@example.com\t"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ann.lee@example.com");

    let (status, _) = send(&app, Method::DELETE, "/users/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, "/users/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
