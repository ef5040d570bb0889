// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 视频笔记
///
/// 附加在单个视频上的自由文本笔记
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    /// 笔记唯一标识
    pub id: Uuid,
    /// 笔记内容
    pub text: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            created_at: Utc::now(),
        }
    }
}
