// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索模块
///
/// 实现目录的模糊搜索排序器
pub mod engine;
