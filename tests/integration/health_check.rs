// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::http::StatusCode;
use serde_json::Value;

use crate::helpers::{send, spawn_app};

/// 健康检查测试
///
/// 验证健康检查端点是否正常工作
#[tokio::test]
async fn health_check_works() {
    let (app, _dir) = spawn_app().await;

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

/// 版本端点测试
#[tokio::test]
async fn version_endpoint_reports_crate_version() {
    let (app, _dir) = spawn_app().await;

    let (status, body) = send(&app, "GET", "/v1/version", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String(env!("CARGO_PKG_VERSION").to_string()));
}

/// 未授权访问测试
///
/// 验证受保护端点在没有认证时返回401状态码
#[tokio::test]
async fn protected_endpoints_return_401_without_auth() {
    let (app, _dir) = spawn_app().await;

    for (method, uri) in [
        ("GET", "/v1/videos"),
        ("GET", "/v1/categories"),
        ("GET", "/v1/stats"),
        ("POST", "/v1/search"),
    ] {
        let (status, _) = send(&app, method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}
