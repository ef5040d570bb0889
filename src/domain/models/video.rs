// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 视频记录
///
/// 表示一个被收藏的教学视频，创建后只能通过显式更新或删除修改
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoRecord {
    /// 视频唯一标识
    pub id: Uuid,
    /// 视频标题
    pub title: String,
    /// 原始链接
    pub url: String,
    /// 从链接中提取的平台视频ID
    pub video_id: String,
    /// 描述（可选）
    pub description: Option<String>,
    /// 自由格式标签（可选）
    pub tags: Option<String>,
    /// 收藏时间
    pub added_at: DateTime<Utc>,
}

/// 视频更新参数
///
/// `None` 表示保留原值；`url` 更新时由服务层同步重新提取 `video_id`
#[derive(Debug, Default, Clone)]
pub struct VideoUpdate {
    pub title: Option<String>,
    pub url: Option<String>,
    pub video_id: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
}

/// 视频分类
///
/// 分类名称唯一，分类内的视频保持插入顺序
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    pub videos: Vec<VideoRecord>,
}

/// 视频目录
///
/// 按插入顺序维护的分类序列。迭代顺序（分类顺序、分类内顺序）
/// 同时是搜索结果同分时的次级排序依据。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// 按目录迭代顺序遍历所有（分类名，视频）对
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VideoRecord)> {
        self.categories.iter().flat_map(|category| {
            category
                .videos
                .iter()
                .map(move |video| (category.name.as_str(), video))
        })
    }

    /// 按名称查找分类
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// 将视频追加到指定分类，分类不存在时创建
    pub fn push_video(&mut self, category: &str, video: VideoRecord) {
        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(entry) => entry.videos.push(video),
            None => self.categories.push(Category {
                name: category.to_string(),
                videos: vec![video],
            }),
        }
    }

    /// 按ID查找视频及其所属分类
    pub fn find_video(&self, id: Uuid) -> Option<(&str, &VideoRecord)> {
        self.iter().find(|(_, video)| video.id == id)
    }

    /// 按ID查找可变视频引用
    pub fn find_video_mut(&mut self, id: Uuid) -> Option<&mut VideoRecord> {
        self.categories
            .iter_mut()
            .flat_map(|c| c.videos.iter_mut())
            .find(|video| video.id == id)
    }

    /// 按ID移除视频，所属分类被清空时一并移除
    ///
    /// 返回被移除的视频及其分类名
    pub fn remove_video(&mut self, id: Uuid) -> Option<(String, VideoRecord)> {
        for (cat_idx, category) in self.categories.iter_mut().enumerate() {
            if let Some(pos) = category.videos.iter().position(|v| v.id == id) {
                let video = category.videos.remove(pos);
                let name = category.name.clone();
                if category.videos.is_empty() {
                    self.categories.remove(cat_idx);
                }
                return Some((name, video));
            }
        }
        None
    }

    /// 目录中视频总数
    pub fn total_videos(&self) -> usize {
        self.categories.iter().map(|c| c.videos.len()).sum()
    }
}
