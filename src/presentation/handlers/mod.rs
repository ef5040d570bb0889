// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 处理器模块
///
/// 各HTTP端点的请求处理器：
/// - 认证（auth_handler）：登录与登出
/// - 视频（video_handler）：目录增删改查、随机推荐与统计
/// - 笔记（note_handler）：视频笔记管理
/// - 搜索（search_handler）：目录模糊搜索
pub mod auth_handler;
pub mod note_handler;
pub mod search_handler;
pub mod video_handler;
