//! Round-trip tests for signed and sealed cookies through the request jar.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use sw_auth::cookie::Cookie;
use sw_auth::cookie::sealed::CipherKey;
use sw_auth::cookie::signed::MacKey;
use sw_web::cookies;
use sw_web::prelude::*;
use tower::ServiceExt;
use tower_cookies::{CookieManagerLayer, Cookies};

const SECRET: &[u8] = b"mySecretKeyAX7v2WqLpJ3nZcRYKtM9o";

fn mac_key() -> MacKey {
    MacKey::new(SECRET)
}

fn cipher_key() -> CipherKey {
    CipherKey::new(SECRET).unwrap()
}

fn app() -> Router {
    async fn write_signed(jar: Cookies) -> Result<StatusCode> {
        cookies::add_signed(&jar, &Cookie::new("prefs", "signed payload"), &mac_key())?;
        Ok(StatusCode::NO_CONTENT)
    }

    async fn read_signed(jar: Cookies) -> Result<Json<Value>> {
        let value = cookies::read_signed(&jar, "prefs", &mac_key())?;
        Ok(Json(json!({
            "Value": value.map(|value| String::from_utf8_lossy(&value).into_owned()),
        })))
    }

    async fn write_sealed(jar: Cookies) -> Result<StatusCode> {
        cookies::add_sealed(&jar, &Cookie::new("vault", "sealed payload"), &cipher_key())?;
        Ok(StatusCode::NO_CONTENT)
    }

    async fn read_sealed(jar: Cookies) -> Result<Json<Value>> {
        let value = cookies::read_sealed(&jar, "vault", &cipher_key())?;
        Ok(Json(json!({
            "Value": value.map(|value| String::from_utf8_lossy(&value).into_owned()),
        })))
    }

    Router::new()
        .route("/signed/write", get(write_signed))
        .route("/signed/read", get(read_signed))
        .route("/sealed/write", get(write_sealed))
        .route("/sealed/read", get(read_sealed))
        .layer(CookieManagerLayer::new())
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extracts `name=value` from a `Set-Cookie` header.
fn cookie_pair(response: &axum::response::Response) -> String {
    let header = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .unwrap();
    header.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn signed_cookie_round_trip() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/signed/write")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let pair = cookie_pair(&response);

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/signed/read")
                .header(header::COOKIE, pair)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["Value"], "signed payload");
}

#[tokio::test]
async fn sealed_cookie_round_trip() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/sealed/write")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let pair = cookie_pair(&response);

    // The wire value must not expose the payload.
    assert!(!pair.contains("sealed payload"));

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/sealed/read")
                .header(header::COOKIE, pair)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["Value"], "sealed payload");
}

#[tokio::test]
async fn missing_cookie_reads_as_none() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/signed/read")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["Value"], Value::Null);
}

#[tokio::test]
async fn tampered_signed_cookie_is_an_error() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/signed/write")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let pair = cookie_pair(&response);

    let mut tampered = pair.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/signed/read")
                .header(header::COOKIE, tampered)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
