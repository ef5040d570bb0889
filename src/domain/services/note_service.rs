// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::note_request::{CreateNoteDto, NoteDto};
use crate::domain::models::note::Note;
use crate::domain::repositories::catalog_repository::{CatalogRepository, RepositoryError};
use crate::domain::repositories::note_repository::NoteRepository;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

#[derive(Error, Debug)]
pub enum NoteServiceError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Video not found")]
    VideoNotFound,
    #[error("Note not found")]
    NoteNotFound,
}

/// 笔记服务
///
/// 管理附加在视频上的自由文本笔记
pub struct NoteService<CR, NR> {
    catalog_repo: Arc<CR>,
    note_repo: Arc<NR>,
}

impl<CR, NR> NoteService<CR, NR>
where
    CR: CatalogRepository + 'static,
    NR: NoteRepository + 'static,
{
    pub fn new(catalog_repo: Arc<CR>, note_repo: Arc<NR>) -> Self {
        Self {
            catalog_repo,
            note_repo,
        }
    }

    /// 列出某视频的笔记，最新的在前
    pub async fn list(&self, video_id: Uuid) -> Result<Vec<NoteDto>, NoteServiceError> {
        let mut notes = self.note_repo.list(video_id).await?;
        notes.reverse();
        Ok(notes.into_iter().map(NoteDto::from).collect())
    }

    /// 为视频追加一条笔记
    pub async fn add(
        &self,
        video_id: Uuid,
        dto: CreateNoteDto,
    ) -> Result<NoteDto, NoteServiceError> {
        dto.validate()
            .map_err(|e| NoteServiceError::ValidationError(e.to_string()))?;

        let (_, video) = self
            .catalog_repo
            .find_video(video_id)
            .await?
            .ok_or(NoteServiceError::VideoNotFound)?;

        let note = Note::new(dto.text);
        let created = self.note_repo.add(video_id, &video.title, note).await?;
        Ok(NoteDto::from(created))
    }

    /// 删除某视频的一条笔记
    pub async fn remove(&self, video_id: Uuid, note_id: Uuid) -> Result<(), NoteServiceError> {
        self.note_repo
            .remove(video_id, note_id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => NoteServiceError::NoteNotFound,
                other => NoteServiceError::Repository(other),
            })
    }
}
