// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::video::{Catalog, VideoRecord, VideoUpdate};
use crate::domain::repositories::storage_repository::StorageError;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 存储错误
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 持久化记录缺少必填字段
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// 目录仓库特质
///
/// 定义视频目录的数据访问接口
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// 加载完整目录
    async fn load(&self) -> Result<Catalog, RepositoryError>;
    /// 将视频追加到指定分类，分类不存在时创建
    async fn add_video(
        &self,
        category: &str,
        video: VideoRecord,
    ) -> Result<VideoRecord, RepositoryError>;
    /// 按ID更新视频
    async fn update_video(
        &self,
        id: Uuid,
        update: VideoUpdate,
    ) -> Result<VideoRecord, RepositoryError>;
    /// 按ID移除视频，返回视频及其分类名
    async fn remove_video(&self, id: Uuid) -> Result<(String, VideoRecord), RepositoryError>;
    /// 按ID查找视频及其分类名
    async fn find_video(&self, id: Uuid)
        -> Result<Option<(String, VideoRecord)>, RepositoryError>;
}
