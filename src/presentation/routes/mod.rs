// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::services::auth_service::AuthService;
use crate::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use crate::infrastructure::repositories::note_repo_impl::NoteRepositoryImpl;
use crate::infrastructure::session::SessionStore;
use crate::presentation::handlers::{
    auth_handler, note_handler, search_handler, video_handler,
};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{
    routing::{delete, get, patch, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 装配公开与受保护路由，并注入仓库、配置与会话存储
///
/// # 返回值
///
/// 返回配置好的路由
pub fn app(
    settings: Arc<Settings>,
    catalog_repo: Arc<CatalogRepositoryImpl>,
    note_repo: Arc<NoteRepositoryImpl>,
    auth_service: Arc<AuthService>,
    sessions: SessionStore,
) -> Router {
    let auth_state = AuthState {
        sessions: sessions.clone(),
    };

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/v1/auth/login", post(auth_handler::login));

    let protected_routes = Router::new()
        .route("/v1/auth/logout", post(auth_handler::logout))
        .route(
            "/v1/categories",
            get(video_handler::categories::<CatalogRepositoryImpl, NoteRepositoryImpl>),
        )
        .route(
            "/v1/videos",
            get(video_handler::list_videos::<CatalogRepositoryImpl, NoteRepositoryImpl>).post(
                video_handler::create_video::<CatalogRepositoryImpl, NoteRepositoryImpl>,
            ),
        )
        .route(
            "/v1/videos/random",
            get(video_handler::random_videos::<CatalogRepositoryImpl, NoteRepositoryImpl>),
        )
        .route(
            "/v1/videos/{id}",
            patch(video_handler::update_video::<CatalogRepositoryImpl, NoteRepositoryImpl>)
                .delete(video_handler::delete_video::<CatalogRepositoryImpl, NoteRepositoryImpl>),
        )
        .route(
            "/v1/videos/{id}/notes",
            get(note_handler::list_notes::<CatalogRepositoryImpl, NoteRepositoryImpl>).post(
                note_handler::create_note::<CatalogRepositoryImpl, NoteRepositoryImpl>,
            ),
        )
        .route(
            "/v1/videos/{id}/notes/{note_id}",
            delete(note_handler::delete_note::<CatalogRepositoryImpl, NoteRepositoryImpl>),
        )
        .route(
            "/v1/search",
            post(search_handler::search::<CatalogRepositoryImpl>),
        )
        .route(
            "/v1/stats",
            get(video_handler::stats::<CatalogRepositoryImpl, NoteRepositoryImpl>),
        )
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(catalog_repo))
        .layer(Extension(note_repo))
        .layer(Extension(auth_service))
        .layer(Extension(sessions))
        .layer(Extension(settings))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
