// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 中间件模块
///
/// 提供请求处理的横切关注点，目前包含会话认证
pub mod auth_middleware;
