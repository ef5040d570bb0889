// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 处理HTTP请求和响应：
/// - 处理器（handlers）：各端点的请求处理
/// - 中间件（middleware）：会话认证
/// - 路由（routes)：路由装配
pub mod handlers;
pub mod middleware;
pub mod routes;
