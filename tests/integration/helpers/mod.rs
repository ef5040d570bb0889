// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

use edutube::config::settings::{
    AuthSettings, SearchSettings, ServerSettings, Settings, StorageSettings,
};
use edutube::domain::repositories::storage_repository::StorageRepository;
use edutube::domain::services::auth_service::AuthService;
use edutube::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use edutube::infrastructure::repositories::note_repo_impl::NoteRepositoryImpl;
use edutube::infrastructure::session::SessionStore;
use edutube::infrastructure::storage::LocalStorage;
use edutube::presentation::routes;

/// 测试口令
pub const TEST_PASSWORD: &str = "2710";

/// 构建一个使用临时数据目录的完整应用
///
/// 返回的 `TempDir` 守护存储目录的生命周期
pub async fn spawn_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let settings = Arc::new(Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        storage: StorageSettings {
            data_dir: dir.path().display().to_string(),
            catalog_file: "videos_data.json".to_string(),
            notes_file: "video_notes.json".to_string(),
        },
        auth: AuthSettings {
            password_sha256: AuthService::digest_password(TEST_PASSWORD),
            session_ttl_secs: 3600,
        },
        search: SearchSettings {
            default_limit: 20,
            random_sample: 12,
        },
    });

    let storage: Arc<dyn StorageRepository> = Arc::new(LocalStorage::new(dir.path()));
    let catalog_repo = Arc::new(
        CatalogRepositoryImpl::new(storage.clone(), settings.storage.catalog_file.clone())
            .await
            .expect("catalog repository"),
    );
    let note_repo = Arc::new(
        NoteRepositoryImpl::new(storage, settings.storage.notes_file.clone())
            .await
            .expect("note repository"),
    );
    let auth_service = Arc::new(
        AuthService::from_hex_digest(&settings.auth.password_sha256).expect("auth service"),
    );
    let sessions = SessionStore::new(settings.auth.session_ttl_secs);

    let app = routes::app(settings, catalog_repo, note_repo, auth_service, sessions);
    (app, dir)
}

/// 发送一次请求并解析响应体
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

/// 登录并返回会话令牌
pub async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/v1/auth/login",
        None,
        Some(json!({ "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().expect("token").to_string()
}

/// 收藏一个视频并返回响应体
pub async fn add_video(
    app: &Router,
    token: &str,
    category: &str,
    title: &str,
    description: &str,
) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/v1/videos",
        Some(token),
        Some(json!({
            "category": category,
            "title": title,
            "url": "https://youtu.be/dQw4w9WgXcQ",
            "description": description,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "add_video failed: {body}");
    body
}
