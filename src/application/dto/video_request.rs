// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::video::VideoRecord;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateVideoDto {
    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: String,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(url(message = "A valid video link is required"))]
    pub url: String,
    pub description: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Validate, Default)]
pub struct UpdateVideoDto {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(url(message = "A valid video link is required"))]
    pub url: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
}

/// 视频响应
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoDto {
    pub id: Uuid,
    pub category: String,
    pub title: String,
    pub url: String,
    pub video_id: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl VideoDto {
    pub fn from_record(category: String, record: VideoRecord) -> Self {
        Self {
            id: record.id,
            category,
            title: record.title,
            url: record.url,
            video_id: record.video_id,
            description: record.description,
            tags: record.tags,
            added_at: record.added_at,
        }
    }
}

/// 分类概要响应
#[derive(Debug, Serialize, Deserialize)]
pub struct CategorySummaryDto {
    pub name: String,
    pub video_count: usize,
}

/// 总量统计响应
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsDto {
    pub total_videos: usize,
    pub total_categories: usize,
    pub total_notes: usize,
}

/// 随机推荐查询参数
#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    pub limit: Option<u32>,
}

/// 列表过滤查询参数
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}
