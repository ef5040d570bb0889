// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU32, Ordering};
use thiserror::Error;
use tracing::warn;

/// 认证错误类型
#[derive(Error, Debug)]
pub enum AuthError {
    /// 口令不匹配
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// 配置的摘要不是合法的SHA-256十六进制串
    #[error("Invalid password digest in configuration: {0}")]
    InvalidDigest(String),
}

/// 认证服务
///
/// 将提交的口令做SHA-256摘要后与配置的摘要做常量时间比较。
/// 失败次数按进程累计并记录告警日志。
pub struct AuthService {
    password_digest: Vec<u8>,
    failed_attempts: AtomicU32,
}

impl AuthService {
    /// 由配置中的十六进制摘要构造认证服务
    pub fn from_hex_digest(digest: &str) -> Result<Self, AuthError> {
        let bytes = hex::decode(digest).map_err(|e| AuthError::InvalidDigest(e.to_string()))?;
        if bytes.len() != Sha256::output_size() {
            return Err(AuthError::InvalidDigest(format!(
                "expected {} bytes, got {}",
                Sha256::output_size(),
                bytes.len()
            )));
        }
        Ok(Self {
            password_digest: bytes,
            failed_attempts: AtomicU32::new(0),
        })
    }

    /// 校验口令
    pub fn verify(&self, password: &str) -> Result<(), AuthError> {
        let digest = Sha256::digest(password.as_bytes());
        if constant_time_eq(&digest, &self.password_digest) {
            self.failed_attempts.store(0, Ordering::Relaxed);
            Ok(())
        } else {
            let attempts = self.failed_attempts.fetch_add(1, Ordering::Relaxed) + 1;
            warn!("Login failed, attempt {}", attempts);
            Err(AuthError::InvalidCredentials)
        }
    }

    /// 当前累计的失败次数
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts.load(Ordering::Relaxed)
    }

    /// 计算口令的十六进制摘要（供运维配置和测试使用）
    pub fn digest_password(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }
}

/// 常量时间字节比较
///
/// 无论在哪个位置出现差异都会遍历完整切片
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
