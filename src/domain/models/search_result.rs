// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::video::VideoRecord;

/// 搜索结果
///
/// 每次查询临时生成，不做持久化
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// 命中的视频
    pub video: VideoRecord,
    /// 视频所属分类
    pub category: String,
    /// 相关性总分
    pub score: f64,
}
