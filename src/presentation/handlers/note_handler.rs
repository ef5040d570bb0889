// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    application::dto::note_request::CreateNoteDto,
    domain::{
        repositories::{
            catalog_repository::CatalogRepository, note_repository::NoteRepository,
        },
        services::note_service::{NoteService, NoteServiceError},
    },
};

/// 列出某视频的笔记，最新的在前
pub async fn list_notes<CR, NR>(
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(note_repo): Extension<Arc<NR>>,
    Path(video_id): Path<Uuid>,
) -> impl IntoResponse
where
    CR: CatalogRepository + 'static,
    NR: NoteRepository + 'static,
{
    let service = NoteService::new(catalog_repo, note_repo);
    match service.list(video_id).await {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 为视频追加一条笔记
pub async fn create_note<CR, NR>(
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(note_repo): Extension<Arc<NR>>,
    Path(video_id): Path<Uuid>,
    Json(payload): Json<CreateNoteDto>,
) -> impl IntoResponse
where
    CR: CatalogRepository + 'static,
    NR: NoteRepository + 'static,
{
    let service = NoteService::new(catalog_repo, note_repo);
    match service.add(video_id, payload).await {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => error_response(e),
    }
}

/// 删除某视频的一条笔记
pub async fn delete_note<CR, NR>(
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(note_repo): Extension<Arc<NR>>,
    Path((video_id, note_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse
where
    CR: CatalogRepository + 'static,
    NR: NoteRepository + 'static,
{
    let service = NoteService::new(catalog_repo, note_repo);
    match service.remove(video_id, note_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(err: NoteServiceError) -> axum::response::Response {
    let (status, msg): (StatusCode, String) = err.into();
    (status, Json(json!({ "error": msg }))).into_response()
}

impl From<NoteServiceError> for (StatusCode, String) {
    fn from(err: NoteServiceError) -> Self {
        match err {
            NoteServiceError::ValidationError(details) => (StatusCode::BAD_REQUEST, details),
            NoteServiceError::VideoNotFound => {
                (StatusCode::NOT_FOUND, "Video not found".to_string())
            }
            NoteServiceError::NoteNotFound => {
                (StatusCode::NOT_FOUND, "Note not found".to_string())
            }
            NoteServiceError::Repository(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }
}
