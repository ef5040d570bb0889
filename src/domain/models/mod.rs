// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 视频与目录（video）：分类下的视频书签集合
/// - 笔记（note）：附加在单个视频上的自由文本笔记
/// - 搜索结果（search_result）：每次查询临时生成的评分结果
pub mod note;
pub mod search_result;
pub mod video;
