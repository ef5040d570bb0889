// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::application::dto::login_request::{LoginRequestDto, LoginResponseDto};
use crate::domain::services::auth_service::AuthService;
use crate::infrastructure::session::SessionStore;

/// 处理登录请求
///
/// 校验口令并签发新的会话令牌
///
/// # 返回值
///
/// * `200` - 登录成功，返回令牌与过期时间
/// * `400` - 请求校验失败
/// * `401` - 口令不匹配
pub async fn login(
    Extension(auth): Extension<Arc<AuthService>>,
    Extension(sessions): Extension<SessionStore>,
    Json(payload): Json<LoginRequestDto>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response();
    }

    match auth.verify(&payload.password) {
        Ok(()) => {
            let session = sessions.issue();
            info!("Login successful, session issued");
            (
                StatusCode::OK,
                Json(LoginResponseDto {
                    token: session.token,
                    expires_at: session.expires_at,
                }),
            )
                .into_response()
        }
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        )
            .into_response(),
    }
}

/// 处理登出请求
///
/// 吊销当前请求携带的会话令牌
pub async fn logout(
    Extension(sessions): Extension<SessionStore>,
    Extension(token): Extension<Uuid>,
) -> impl IntoResponse {
    sessions.revoke(token);
    info!("Session revoked");
    (StatusCode::OK, Json(json!({ "success": true })))
}
