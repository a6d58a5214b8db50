// In-process stand-in for the menu and login backends, bound to an ephemeral port.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

// ID token the stub login endpoint accepts.
pub const VALID_ID_TOKEN: &str = "valid-id";
pub const KNOWN_HASH: &str = "HBDEF";

// Start the stub backend on the current test runtime and return its base URL.
pub async fn spawn_stub() -> String {
    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, stub_app())
            .await
            .expect("stub server failed");
    });
    format!("http://{addr}")
}

// Base URL of a port nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}

fn stub_app() -> Router {
    Router::new()
        .route("/onban/detail/{hash}", get(detail))
        .route("/onban/{category}", get(menu))
        .route("/login", post(login))
        .route("/login/me", get(me))
}

fn summary(hash: &str, title: &str) -> serde_json::Value {
    json!({
        "detail_hash": hash,
        "image": format!("https://img.example/{hash}.jpg"),
        "alt": title,
        "delivery_type": ["새벽배송"],
        "title": title,
        "description": "stub description",
        "s_price": "12,640원"
    })
}

async fn menu(Path(category): Path<String>) -> Response {
    match category.as_str() {
        "main" => Json(json!({
            "statusCode": 200,
            "body": [summary(KNOWN_HASH, "Bulgogi"), summary("HF778", "Japchae")]
        }))
        .into_response(),
        // Upstream reports failure inside a 200 envelope.
        "soup" => Json(json!({ "statusCode": 500, "body": [] })).into_response(),
        "side" => Json(json!({ "statusCode": 200, "body": [] })).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn detail(Path(hash): Path<String>) -> Response {
    match hash.as_str() {
        KNOWN_HASH => Json(json!({
            "hash": KNOWN_HASH,
            "data": {
                "top_image": "https://img.example/top.jpg",
                "thumb_images": ["https://img.example/1.jpg"],
                "product_description": "stub detail",
                "point": "126원",
                "delivery_info": "서울 경기 새벽배송",
                "delivery_fee": "2,500원",
                "prices": ["12,640원"],
                "detail_section": []
            }
        }))
        .into_response(),
        "empty" => StatusCode::NO_CONTENT.into_response(),
        "garbage" => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "not json",
        )
            .into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            StatusCode::NO_CONTENT.into_response()
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "unknown hash" })),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
struct LoginBody {
    provider: String,
    id_token: String,
    access_token: String,
}

fn user_envelope() -> Json<serde_json::Value> {
    Json(json!({
        "statusCode": 200,
        "body": {
            "uid": "user-1",
            "display_name": "Pilot",
            "email": "pilot@example.com"
        }
    }))
}

async fn login(Json(body): Json<LoginBody>) -> Response {
    if body.provider.is_empty() || body.access_token.is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if body.id_token != VALID_ID_TOKEN {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "invalid credential" })),
        )
            .into_response();
    }
    user_envelope().into_response()
}

async fn me(headers: HeaderMap) -> Response {
    let expected = format!("Bearer {VALID_ID_TOKEN}");
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    user_envelope().into_response()
}
