// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::dto::search_request::SearchRequestDto,
    config::settings::Settings,
    domain::{
        repositories::catalog_repository::CatalogRepository,
        services::search_service::{SearchService, SearchServiceError},
    },
};

/// 处理搜索请求
///
/// # 参数
///
/// * `catalog_repo` - 目录仓库实例
/// * `settings` - 应用配置
/// * `payload` - 搜索请求数据
///
/// # 返回值
///
/// 返回实现了 `IntoResponse` 的响应，包含按相关性排序的结果或错误信息
///
/// # 错误
///
/// 可能在以下情况下返回错误响应：
/// - 搜索参数验证失败
/// - 仓库操作失败
pub async fn search<CR>(
    Extension(catalog_repo): Extension<Arc<CR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Json(payload): Json<SearchRequestDto>,
) -> impl IntoResponse
where
    CR: CatalogRepository + 'static,
{
    let service = SearchService::new(catalog_repo, settings);
    match service.search(payload).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<SearchServiceError> for (StatusCode, String) {
    fn from(err: SearchServiceError) -> Self {
        match err {
            SearchServiceError::ValidationError(details) => (StatusCode::BAD_REQUEST, details),
            SearchServiceError::Repository(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }
}
