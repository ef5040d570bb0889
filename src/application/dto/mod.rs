// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义HTTP接口的请求与响应结构：
/// - 登录（login_request）
/// - 视频与统计（video_request）
/// - 笔记（note_request）
/// - 搜索（search_request）
pub mod login_request;
pub mod note_request;
pub mod search_request;
pub mod video_request;
