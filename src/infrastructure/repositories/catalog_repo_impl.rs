// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::models::video::{Catalog, VideoRecord, VideoUpdate};
use crate::domain::repositories::catalog_repository::{CatalogRepository, RepositoryError};
use crate::domain::repositories::storage_repository::StorageRepository;

/// 持久化的目录文档
///
/// 字段全部带默认值以容忍手工编辑过的文件；
/// 唯一的硬性要求是每条视频必须有标题
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCatalog {
    #[serde(default)]
    categories: Vec<StoredCategory>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredCategory {
    name: String,
    #[serde(default)]
    videos: Vec<StoredVideo>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredVideo {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: String,
    #[serde(default)]
    video_id: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Option<String>,
    #[serde(default)]
    added_at: Option<DateTime<Utc>>,
}

impl StoredCatalog {
    fn into_catalog(self) -> Result<Catalog, RepositoryError> {
        let mut catalog = Catalog::default();
        for category in self.categories {
            for video in category.videos {
                let title = video.title.ok_or_else(|| {
                    RepositoryError::InvalidRecord(format!(
                        "video in category '{}' has no title",
                        category.name
                    ))
                })?;
                catalog.push_video(
                    &category.name,
                    VideoRecord {
                        id: video.id.unwrap_or_else(Uuid::new_v4),
                        title,
                        url: video.url,
                        video_id: video.video_id,
                        description: video.description,
                        tags: video.tags,
                        added_at: video.added_at.unwrap_or_else(Utc::now),
                    },
                );
            }
        }
        Ok(catalog)
    }

    fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            categories: catalog
                .categories
                .iter()
                .map(|category| StoredCategory {
                    name: category.name.clone(),
                    videos: category
                        .videos
                        .iter()
                        .map(|video| StoredVideo {
                            id: Some(video.id),
                            title: Some(video.title.clone()),
                            url: video.url.clone(),
                            video_id: video.video_id.clone(),
                            description: video.description.clone(),
                            tags: video.tags.clone(),
                            added_at: Some(video.added_at),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// 基于JSON文档的目录仓库实现
///
/// 目录整体驻留内存，写操作在持有写锁期间落盘，
/// 保证并发写之间的顺序一致
pub struct CatalogRepositoryImpl {
    storage: Arc<dyn StorageRepository>,
    key: String,
    cache: RwLock<Catalog>,
}

impl CatalogRepositoryImpl {
    /// 从存储加载目录，文件不存在时从空目录开始
    pub async fn new(
        storage: Arc<dyn StorageRepository>,
        key: impl Into<String>,
    ) -> Result<Self, RepositoryError> {
        let key = key.into();
        let catalog = match storage.get(&key).await? {
            Some(bytes) => serde_json::from_slice::<StoredCatalog>(&bytes)?.into_catalog()?,
            None => Catalog::default(),
        };
        Ok(Self {
            storage,
            key,
            cache: RwLock::new(catalog),
        })
    }

    async fn persist(&self, catalog: &Catalog) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(&StoredCatalog::from_catalog(catalog))?;
        self.storage.save(&self.key, &bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn load(&self) -> Result<Catalog, RepositoryError> {
        Ok(self.cache.read().await.clone())
    }

    async fn add_video(
        &self,
        category: &str,
        video: VideoRecord,
    ) -> Result<VideoRecord, RepositoryError> {
        let mut catalog = self.cache.write().await;
        catalog.push_video(category, video.clone());
        self.persist(&catalog).await?;
        Ok(video)
    }

    async fn update_video(
        &self,
        id: Uuid,
        update: VideoUpdate,
    ) -> Result<VideoRecord, RepositoryError> {
        let mut catalog = self.cache.write().await;
        let video = catalog.find_video_mut(id).ok_or(RepositoryError::NotFound)?;

        if let Some(title) = update.title {
            video.title = title;
        }
        if let Some(url) = update.url {
            video.url = url;
        }
        if let Some(video_id) = update.video_id {
            video.video_id = video_id;
        }
        if let Some(description) = update.description {
            video.description = Some(description);
        }
        if let Some(tags) = update.tags {
            video.tags = Some(tags);
        }

        let updated = video.clone();
        self.persist(&catalog).await?;
        Ok(updated)
    }

    async fn remove_video(&self, id: Uuid) -> Result<(String, VideoRecord), RepositoryError> {
        let mut catalog = self.cache.write().await;
        let removed = catalog.remove_video(id).ok_or(RepositoryError::NotFound)?;
        self.persist(&catalog).await?;
        Ok(removed)
    }

    async fn find_video(
        &self,
        id: Uuid,
    ) -> Result<Option<(String, VideoRecord)>, RepositoryError> {
        let catalog = self.cache.read().await;
        Ok(catalog
            .find_video(id)
            .map(|(category, video)| (category.to_string(), video.clone())))
    }
}
