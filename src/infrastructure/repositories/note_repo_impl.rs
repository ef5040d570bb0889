// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::models::note::Note;
use crate::domain::repositories::catalog_repository::RepositoryError;
use crate::domain::repositories::note_repository::NoteRepository;
use crate::domain::repositories::storage_repository::StorageRepository;

/// 单个视频的持久化笔记
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct StoredVideoNotes {
    #[serde(default)]
    video_title: String,
    #[serde(default)]
    notes: Vec<Note>,
}

/// 基于JSON文档的笔记仓库实现
///
/// 笔记按视频ID分组，文档整体驻留内存，写操作落盘
pub struct NoteRepositoryImpl {
    storage: Arc<dyn StorageRepository>,
    key: String,
    cache: RwLock<HashMap<Uuid, StoredVideoNotes>>,
}

impl NoteRepositoryImpl {
    /// 从存储加载笔记，文件不存在时从空文档开始
    pub async fn new(
        storage: Arc<dyn StorageRepository>,
        key: impl Into<String>,
    ) -> Result<Self, RepositoryError> {
        let key = key.into();
        let notes = match storage.get(&key).await? {
            Some(bytes) => serde_json::from_slice(&bytes)?,
            None => HashMap::new(),
        };
        Ok(Self {
            storage,
            key,
            cache: RwLock::new(notes),
        })
    }

    async fn persist(
        &self,
        notes: &HashMap<Uuid, StoredVideoNotes>,
    ) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(notes)?;
        self.storage.save(&self.key, &bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for NoteRepositoryImpl {
    async fn list(&self, video_id: Uuid) -> Result<Vec<Note>, RepositoryError> {
        let cache = self.cache.read().await;
        Ok(cache
            .get(&video_id)
            .map(|entry| entry.notes.clone())
            .unwrap_or_default())
    }

    async fn add(
        &self,
        video_id: Uuid,
        video_title: &str,
        note: Note,
    ) -> Result<Note, RepositoryError> {
        let mut cache = self.cache.write().await;
        let entry = cache.entry(video_id).or_default();
        entry.video_title = video_title.to_string();
        entry.notes.push(note.clone());
        self.persist(&cache).await?;
        Ok(note)
    }

    async fn remove(&self, video_id: Uuid, note_id: Uuid) -> Result<(), RepositoryError> {
        let mut cache = self.cache.write().await;
        let entry = cache.get_mut(&video_id).ok_or(RepositoryError::NotFound)?;
        let pos = entry
            .notes
            .iter()
            .position(|n| n.id == note_id)
            .ok_or(RepositoryError::NotFound)?;
        entry.notes.remove(pos);
        if entry.notes.is_empty() {
            cache.remove(&video_id);
        }
        self.persist(&cache).await?;
        Ok(())
    }

    async fn remove_all(&self, video_id: Uuid) -> Result<(), RepositoryError> {
        let mut cache = self.cache.write().await;
        if cache.remove(&video_id).is_some() {
            self.persist(&cache).await?;
        }
        Ok(())
    }

    async fn total(&self) -> Result<usize, RepositoryError> {
        let cache = self.cache.read().await;
        Ok(cache.values().map(|entry| entry.notes.len()).sum())
    }
}
