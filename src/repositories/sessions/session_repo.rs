//! 세션 리포지토리
//!
//! 세션 내용을 Redis에 `session:{sha256(세션 ID)}` 키로 저장합니다.
//! 쿠키 값이 그대로 저장소 키가 되지 않도록 해시를 사용합니다.

use std::sync::Arc;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{errors::AppError, registry::Repository},
    domain::models::auth::session::SessionData,
    repositories::sessions::session_store::SessionStore,
};

/// Redis에만 저장하며 MongoDB 컬렉션은 사용하지 않습니다.
#[repository(name = "session", collection = "sessions")]
pub struct SessionRepository {
    redis: Arc<RedisClient>,
}

/// 세션 ID에 대한 저장소 키
pub fn session_key(session_id: &str) -> String {
    let digest = Sha256::digest(session_id.as_bytes());
    let hex: String = digest.iter().map(|byte| format!("{:02x}", byte)).collect();
    format!("session:{}", hex)
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn find(&self, session_id: &str) -> Result<Option<SessionData>, AppError> {
        self.redis
            .get::<SessionData>(&session_key(session_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    async fn save(&self, session_id: &str, data: &SessionData, ttl_seconds: usize) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&session_key(session_id), data, ttl_seconds)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    async fn update(&self, session_id: &str, data: &SessionData) -> Result<bool, AppError> {
        self.redis
            .replace_keep_ttl(&session_key(session_id), data)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    async fn delete(&self, session_id: &str) -> Result<(), AppError> {
        self.redis
            .del(&session_key(session_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
