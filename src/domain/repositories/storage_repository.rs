// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 后端相关的其他错误
    #[error("Storage error: {0}")]
    Other(String),
}

/// 存储仓库特质
///
/// 按键存取完整文档的底层存储接口。目录与笔记各占一个键，
/// 仓库实现总是整体读写文档，因此接口只需要两个操作。
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 将文档整体写入指定键，已有内容被替换
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// 读取指定键的文档，键不存在时返回 `None`
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;
}
