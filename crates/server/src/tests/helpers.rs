// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use hotel_desk::{AccountDirectory, Clock, FixedClock};
use hotel_desk_api::{CreateRoomRequest, LoginRequest, LoginResponse, RegisterRequest};
use hotel_desk_persistence::Database;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use time::macros::date;
use tower::ServiceExt;

use crate::{AppState, build_router, seed_admin};

pub const ADMIN_USERNAME: &str = "frontdesk";
pub const ADMIN_PASSWORD: &str = "admin-pass";

/// Builds state over a fresh in-memory database whose clock reads
/// 2024-01-10, with the admin account already seeded.
pub fn create_test_app_state() -> AppState {
    let database: Database =
        Database::new_in_memory().expect("Failed to create in-memory database");
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(date!(2024 - 01 - 10)));
    // Minimum bcrypt cost keeps the suite fast.
    let accounts = AccountDirectory::with_cost(
        database
            .account_store()
            .expect("Failed to open account store"),
        4,
    );
    let app_state: AppState = AppState::with_accounts(&database, clock, 30, accounts)
        .expect("Failed to build app state");
    seed_admin(&app_state.accounts, ADMIN_USERNAME, ADMIN_PASSWORD)
        .expect("Failed to seed admin");
    app_state
}

pub fn create_test_app() -> Router {
    build_router(create_test_app_state())
}

/// Sends one request and returns the status and raw body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<String>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body_bytes.to_vec())
}

pub async fn send_json<T: Serialize>(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    payload: &T,
) -> (StatusCode, Vec<u8>) {
    send(
        app,
        method,
        uri,
        token,
        Some(serde_json::to_string(payload).unwrap()),
    )
    .await
}

pub fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        panic!(
            "Failed to parse body {}: {e}",
            String::from_utf8_lossy(body)
        )
    })
}

pub async fn login_as(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send_json(
        app,
        "POST",
        "/auth/login",
        None,
        &LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        },
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    parse::<LoginResponse>(&body).token
}

pub async fn login_admin(app: &Router) -> String {
    login_as(app, ADMIN_USERNAME, ADMIN_PASSWORD).await
}

pub fn register_request(username: &str, role: Option<&str>) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        password: String::from("guest-pass"),
        full_name: String::from("Asha Rao"),
        email: String::from("asha@example.com"),
        phone: String::from("555-0100"),
        role: role.map(str::to_string),
    }
}

/// Registers and logs in a Customer.
pub async fn login_customer(app: &Router, username: &str) -> String {
    let (status, _) = send_json(
        app,
        "POST",
        "/auth/register",
        None,
        &register_request(username, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    login_as(app, username, "guest-pass").await
}

pub async fn add_room(app: &Router, admin_token: &str, room_number: u32, room_type: &str) {
    let request = CreateRoomRequest {
        room_number,
        room_type: room_type.to_string(),
        floor: 1,
        status: None,
        amenities: vec![String::from("WiFi")],
        price: None,
    };
    let (status, _) = send_json(app, "POST", "/rooms", Some(admin_token), &request).await;
    assert_eq!(status, StatusCode::OK);
}
