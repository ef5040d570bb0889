// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义数据持久化的抽象接口：
/// - 目录仓库（catalog_repository）：视频目录的读写
/// - 笔记仓库（note_repository）：视频笔记的读写
/// - 存储仓库（storage_repository）：按键存取的底层文档存储
pub mod catalog_repository;
pub mod note_repository;
pub mod storage_repository;
