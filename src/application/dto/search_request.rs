// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::search_result::SearchResult;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SearchRequestDto {
    #[validate(length(min = 1, message = "Query cannot be empty"))]
    pub query: String,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponseDto {
    pub query: String,
    pub results: Vec<SearchResultDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultDto {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub video_id: String,
    pub category: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub score: f64,
}

impl From<SearchResult> for SearchResultDto {
    fn from(result: SearchResult) -> Self {
        Self {
            id: result.video.id,
            title: result.video.title,
            url: result.video.url,
            video_id: result.video.video_id,
            category: result.category,
            description: result.video.description,
            tags: result.video.tags,
            score: result.score,
        }
    }
}
