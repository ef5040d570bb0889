// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域接口的具体实现：
/// - 存储（storage）：本地文件系统的按键文档存储
/// - 会话（session）：内存中的登录会话管理
/// - 仓库实现（repositories）：JSON文档之上的目录与笔记仓库
pub mod repositories;
pub mod session;
pub mod storage;
