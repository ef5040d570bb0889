// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::video_request::{
    CategorySummaryDto, CreateVideoDto, StatsDto, UpdateVideoDto, VideoDto,
};
use crate::domain::models::video::{VideoRecord, VideoUpdate};
use crate::domain::repositories::catalog_repository::{CatalogRepository, RepositoryError};
use crate::domain::repositories::note_repository::NoteRepository;
use crate::utils::url_utils;
use chrono::Utc;
use rand::seq::SliceRandom;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

#[derive(Error, Debug)]
pub enum CatalogServiceError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Video not found")]
    VideoNotFound,
    #[error("Category not found")]
    CategoryNotFound,
    #[error("Unsupported video link: {0}")]
    InvalidVideoUrl(String),
}

/// 目录服务
///
/// 封装视频目录的增删改查、随机推荐和统计
pub struct CatalogService<CR, NR> {
    catalog_repo: Arc<CR>,
    note_repo: Arc<NR>,
}

impl<CR, NR> CatalogService<CR, NR>
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

    /// 收藏一个新视频
    pub async fn add_video(&self, dto: CreateVideoDto) -> Result<VideoDto, CatalogServiceError> {
        dto.validate()
            .map_err(|e| CatalogServiceError::ValidationError(e.to_string()))?;

        let video_id = url_utils::extract_video_id(&dto.url)
            .ok_or_else(|| CatalogServiceError::InvalidVideoUrl(dto.url.clone()))?;

        let video = VideoRecord {
            id: Uuid::new_v4(),
            title: dto.title,
            url: dto.url,
            video_id,
            description: dto.description.filter(|d| !d.is_empty()),
            tags: dto.tags.filter(|t| !t.is_empty()),
            added_at: Utc::now(),
        };

        let created = self.catalog_repo.add_video(&dto.category, video).await?;
        info!("Video '{}' added to category '{}'", created.title, dto.category);
        Ok(VideoDto::from_record(dto.category, created))
    }

    /// 更新视频
    pub async fn update_video(
        &self,
        id: Uuid,
        dto: UpdateVideoDto,
    ) -> Result<VideoDto, CatalogServiceError> {
        dto.validate()
            .map_err(|e| CatalogServiceError::ValidationError(e.to_string()))?;

        // A new URL must re-derive the platform video id
        let video_id = match &dto.url {
            Some(url) => Some(
                url_utils::extract_video_id(url)
                    .ok_or_else(|| CatalogServiceError::InvalidVideoUrl(url.clone()))?,
            ),
            None => None,
        };

        let update = VideoUpdate {
            title: dto.title,
            url: dto.url,
            video_id,
            description: dto.description,
            tags: dto.tags,
        };

        let updated = self
            .catalog_repo
            .update_video(id, update)
            .await
            .map_err(map_not_found)?;
        let category = self
            .catalog_repo
            .find_video(id)
            .await?
            .map(|(category, _)| category)
            .ok_or(CatalogServiceError::VideoNotFound)?;
        Ok(VideoDto::from_record(category, updated))
    }

    /// 删除视频及其全部笔记
    pub async fn delete_video(&self, id: Uuid) -> Result<(), CatalogServiceError> {
        let (category, video) = self
            .catalog_repo
            .remove_video(id)
            .await
            .map_err(map_not_found)?;
        self.note_repo.remove_all(id).await?;
        info!("Video '{}' removed from category '{}'", video.title, category);
        Ok(())
    }

    /// 按目录顺序列出视频，可选按分类过滤
    pub async fn list(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<VideoDto>, CatalogServiceError> {
        let catalog = self.catalog_repo.load().await?;

        if let Some(name) = category {
            let entry = catalog
                .category(name)
                .ok_or(CatalogServiceError::CategoryNotFound)?;
            return Ok(entry
                .videos
                .iter()
                .map(|v| VideoDto::from_record(entry.name.clone(), v.clone()))
                .collect());
        }

        Ok(catalog
            .iter()
            .map(|(category, video)| VideoDto::from_record(category.to_string(), video.clone()))
            .collect())
    }

    /// 列出全部分类及视频数量
    pub async fn categories(&self) -> Result<Vec<CategorySummaryDto>, CatalogServiceError> {
        let catalog = self.catalog_repo.load().await?;
        Ok(catalog
            .categories
            .iter()
            .map(|c| CategorySummaryDto {
                name: c.name.clone(),
                video_count: c.videos.len(),
            })
            .collect())
    }

    /// 随机抽取一批视频作为推荐
    pub async fn random(&self, limit: usize) -> Result<Vec<VideoDto>, CatalogServiceError> {
        let catalog = self.catalog_repo.load().await?;
        let mut all: Vec<VideoDto> = catalog
            .iter()
            .map(|(category, video)| VideoDto::from_record(category.to_string(), video.clone()))
            .collect();
        all.shuffle(&mut rand::rng());
        all.truncate(limit);
        Ok(all)
    }

    /// 目录与笔记的总量统计
    pub async fn stats(&self) -> Result<StatsDto, CatalogServiceError> {
        let catalog = self.catalog_repo.load().await?;
        let total_notes = self.note_repo.total().await?;
        Ok(StatsDto {
            total_videos: catalog.total_videos(),
            total_categories: catalog.categories.len(),
            total_notes,
        })
    }
}

fn map_not_found(err: RepositoryError) -> CatalogServiceError {
    match err {
        RepositoryError::NotFound => CatalogServiceError::VideoNotFound,
        other => CatalogServiceError::Repository(other),
    }
}
