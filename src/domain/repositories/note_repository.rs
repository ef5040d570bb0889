// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::note::Note;
use crate::domain::repositories::catalog_repository::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 笔记仓库特质
///
/// 定义按视频ID分组的笔记数据访问接口
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// 列出某视频的全部笔记，按创建顺序返回
    async fn list(&self, video_id: Uuid) -> Result<Vec<Note>, RepositoryError>;
    /// 为某视频追加一条笔记
    async fn add(&self, video_id: Uuid, video_title: &str, note: Note)
        -> Result<Note, RepositoryError>;
    /// 删除某视频的一条笔记
    async fn remove(&self, video_id: Uuid, note_id: Uuid) -> Result<(), RepositoryError>;
    /// 删除某视频的全部笔记（视频被删除时调用）
    async fn remove_all(&self, video_id: Uuid) -> Result<(), RepositoryError>;
    /// 全部视频的笔记总数
    async fn total(&self) -> Result<usize, RepositoryError>;
}
