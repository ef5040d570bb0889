// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// 登录会话
#[derive(Debug, Clone)]
pub struct Session {
    pub token: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// 会话存储
///
/// 内存中的进程级会话表：登录成功后签发携带TTL的令牌，
/// 校验时惰性移除已过期的会话
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// 签发新会话
    pub fn issue(&self) -> Session {
        let now = Utc::now();
        let session = Session {
            token: Uuid::new_v4(),
            created_at: now,
            expires_at: now + self.ttl,
        };
        self.sessions.insert(session.token, session.clone());
        session
    }

    /// 校验令牌，过期会话在此处被移除
    pub fn validate(&self, token: Uuid) -> bool {
        // The read guard must drop before remove, or the shard deadlocks
        let valid = match self.sessions.get(&token) {
            Some(session) => session.expires_at > Utc::now(),
            None => return false,
        };
        if !valid {
            self.sessions.remove(&token);
        }
        valid
    }

    /// 吊销令牌
    pub fn revoke(&self, token: Uuid) -> bool {
        self.sessions.remove(&token).is_some()
    }

    /// 当前活跃会话数
    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }
}
