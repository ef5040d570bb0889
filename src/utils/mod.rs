// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数：
/// - 遥测（telemetry）：日志初始化
/// - 链接工具（url_utils）：从视频链接中提取平台ID
pub mod telemetry;
pub mod url_utils;
