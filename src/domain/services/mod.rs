// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的业务服务：
/// - 认证服务（auth_service）：口令校验
/// - 目录服务（catalog_service）：视频增删改查与统计
/// - 笔记服务（note_service）：视频笔记管理
/// - 搜索服务（search_service）：目录模糊搜索
pub mod auth_service;
pub mod catalog_service;
pub mod note_service;
pub mod search_service;
