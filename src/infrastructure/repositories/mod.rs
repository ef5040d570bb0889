// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于按键文档存储的目录与笔记仓库实现
pub mod catalog_repo_impl;
pub mod note_repo_impl;
