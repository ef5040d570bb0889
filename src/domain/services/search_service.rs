// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::search_request::{
    SearchRequestDto, SearchResponseDto, SearchResultDto,
};
use crate::config::settings::Settings;
use crate::domain::repositories::catalog_repository::{CatalogRepository, RepositoryError};
use crate::domain::search::engine;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use validator::Validate;

#[derive(Error, Debug)]
pub enum SearchServiceError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 搜索服务
///
/// 校验查询请求，加载目录后交给排序器打分
pub struct SearchService<CR> {
    catalog_repo: Arc<CR>,
    settings: Arc<Settings>,
}

impl<CR> SearchService<CR>
where
    CR: CatalogRepository + 'static,
{
    pub fn new(catalog_repo: Arc<CR>, settings: Arc<Settings>) -> Self {
        Self {
            catalog_repo,
            settings,
        }
    }

    pub async fn search(
        &self,
        dto: SearchRequestDto,
    ) -> Result<SearchResponseDto, SearchServiceError> {
        dto.validate()
            .map_err(|e| SearchServiceError::ValidationError(e.to_string()))?;

        let limit = dto
            .limit
            .unwrap_or(self.settings.search.default_limit) as usize;

        let catalog = self.catalog_repo.load().await?;
        let results = engine::rank(&dto.query, &catalog, limit);
        debug!("Query '{}' matched {} video(s)", dto.query, results.len());

        Ok(SearchResponseDto {
            query: dto.query,
            results: results.into_iter().map(SearchResultDto::from).collect(),
        })
    }
}
