// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::{login, send, spawn_app};

/// 错误口令登录测试
#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let (app, _dir) = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/auth/login",
        None,
        Some(json!({ "password": "1234" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

/// 空口令登录测试
#[tokio::test]
async fn login_with_empty_password_fails_validation() {
    let (app, _dir) = spawn_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/v1/auth/login",
        None,
        Some(json!({ "password": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// 登录成功后令牌可用于受保护端点
#[tokio::test]
async fn issued_token_grants_access() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    let (status, _) = send(&app, "GET", "/v1/videos", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

/// 伪造令牌被拒绝
#[tokio::test]
async fn forged_token_is_rejected() {
    let (app, _dir) = spawn_app().await;

    let forged = uuid::Uuid::new_v4().to_string();
    let (status, _) = send(&app, "GET", "/v1/videos", Some(&forged), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/v1/videos", Some("not-a-uuid"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// 登出后令牌失效
#[tokio::test]
async fn logout_revokes_the_session() {
    let (app, _dir) = spawn_app().await;
    let token = login(&app).await;

    let (status, body) = send(&app, "POST", "/v1/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, "GET", "/v1/videos", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
