// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Path, Query},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    application::dto::video_request::{CreateVideoDto, ListQuery, RandomQuery, UpdateVideoDto},
    config::settings::Settings,
    domain::{
        repositories::{
            catalog_repository::CatalogRepository, note_repository::NoteRepository,
        },
        services::catalog_service::{CatalogService, CatalogServiceError},
    },
};

/// 处理视频收藏请求
pub async fn create_video<CR, NR>(
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(note_repo): Extension<Arc<NR>>,
    Json(payload): Json<CreateVideoDto>,
) -> impl IntoResponse
where
    CR: CatalogRepository + 'static,
    NR: NoteRepository + 'static,
{
    let service = CatalogService::new(catalog_repo, note_repo);
    match service.add_video(payload).await {
        Ok(video) => (StatusCode::CREATED, Json(video)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 处理视频更新请求
pub async fn update_video<CR, NR>(
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(note_repo): Extension<Arc<NR>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateVideoDto>,
) -> impl IntoResponse
where
    CR: CatalogRepository + 'static,
    NR: NoteRepository + 'static,
{
    let service = CatalogService::new(catalog_repo, note_repo);
    match service.update_video(id, payload).await {
        Ok(video) => (StatusCode::OK, Json(video)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 处理视频删除请求
///
/// 视频及其全部笔记一并删除
pub async fn delete_video<CR, NR>(
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(note_repo): Extension<Arc<NR>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse
where
    CR: CatalogRepository + 'static,
    NR: NoteRepository + 'static,
{
    let service = CatalogService::new(catalog_repo, note_repo);
    match service.delete_video(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

/// 按目录顺序列出视频，可选按分类过滤
pub async fn list_videos<CR, NR>(
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(note_repo): Extension<Arc<NR>>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse
where
    CR: CatalogRepository + 'static,
    NR: NoteRepository + 'static,
{
    let service = CatalogService::new(catalog_repo, note_repo);
    match service.list(query.category.as_deref()).await {
        Ok(videos) => (StatusCode::OK, Json(videos)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 列出全部分类及视频数量
pub async fn categories<CR, NR>(
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(note_repo): Extension<Arc<NR>>,
) -> impl IntoResponse
where
    CR: CatalogRepository + 'static,
    NR: NoteRepository + 'static,
{
    let service = CatalogService::new(catalog_repo, note_repo);
    match service.categories().await {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 随机抽取一批视频作为推荐
pub async fn random_videos<CR, NR>(
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(note_repo): Extension<Arc<NR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Query(query): Query<RandomQuery>,
) -> impl IntoResponse
where
    CR: CatalogRepository + 'static,
    NR: NoteRepository + 'static,
{
    let limit = query.limit.unwrap_or(settings.search.random_sample) as usize;
    let service = CatalogService::new(catalog_repo, note_repo);
    match service.random(limit).await {
        Ok(videos) => (StatusCode::OK, Json(videos)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 目录与笔记的总量统计
pub async fn stats<CR, NR>(
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(note_repo): Extension<Arc<NR>>,
) -> impl IntoResponse
where
    CR: CatalogRepository + 'static,
    NR: NoteRepository + 'static,
{
    let service = CatalogService::new(catalog_repo, note_repo);
    match service.stats().await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: CatalogServiceError) -> axum::response::Response {
    let (status, msg): (StatusCode, String) = err.into();
    (status, Json(json!({ "error": msg }))).into_response()
}

impl From<CatalogServiceError> for (StatusCode, String) {
    fn from(err: CatalogServiceError) -> Self {
        match err {
            CatalogServiceError::ValidationError(details) => (StatusCode::BAD_REQUEST, details),
            CatalogServiceError::InvalidVideoUrl(url) => (
                StatusCode::BAD_REQUEST,
                format!("Unsupported video link: {}", url),
            ),
            CatalogServiceError::VideoNotFound => {
                (StatusCode::NOT_FOUND, "Video not found".to_string())
            }
            CatalogServiceError::CategoryNotFound => {
                (StatusCode::NOT_FOUND, "Category not found".to_string())
            }
            CatalogServiceError::Repository(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
