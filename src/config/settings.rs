// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、存储、认证和搜索等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// 认证配置
    pub auth: AuthSettings,
    /// 搜索配置
    pub search: SearchSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 存储配置设置
#[derive(Debug, Deserialize)]
pub struct StorageSettings {
    /// 本地数据目录
    pub data_dir: String,
    /// 视频目录文件名
    pub catalog_file: String,
    /// 笔记文件名
    pub notes_file: String,
}

/// 认证配置设置
#[derive(Debug, Deserialize)]
pub struct AuthSettings {
    /// 访问口令的SHA-256十六进制摘要
    pub password_sha256: String,
    /// 会话有效期（秒）
    pub session_ttl_secs: i64,
}

/// 搜索配置设置
#[derive(Debug, Deserialize)]
pub struct SearchSettings {
    /// 默认返回结果数量
    pub default_limit: u32,
    /// 随机推荐的默认数量
    pub random_sample: u32,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default storage settings
            .set_default("storage.data_dir", "./data")?
            .set_default("storage.catalog_file", "videos_data.json")?
            .set_default("storage.notes_file", "video_notes.json")?
            // Default auth settings: sha256 of the initial access code.
            // Operators are expected to override this before exposing the service.
            .set_default(
                "auth.password_sha256",
                "162e3973ecf8a77629bbf7c8faaf28c13f99d4e7f1affadc616731276ee1d07a",
            )?
            .set_default("auth.session_ttl_secs", 86400)?
            // Default search settings
            .set_default("search.default_limit", 20)?
            .set_default("search.random_sample", 12)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("EDUTUBE").separator("__"));

        builder.build()?.try_deserialize()
    }
}
