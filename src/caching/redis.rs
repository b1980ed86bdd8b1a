//! # Redis 클라이언트
//!
//! 서버 측 세션과 사용자 조회 캐시를 저장하는 Redis 래퍼입니다.
//! 값은 `serde_json`으로 직렬화된 문자열로 저장됩니다.
//!
//! 연결은 멀티플렉싱을 사용하여 단일 TCP 연결에서 여러 요청을 처리합니다.

use log::info;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client, RedisError};
use serde::{Serialize, de::DeserializeOwned};
use std::env;

fn redis_url() -> String {
    env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
}

fn type_error(message: &'static str, detail: String) -> RedisError {
    RedisError::from((redis::ErrorKind::TypeError, message, detail))
}

/// Redis 클라이언트 래퍼
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
/// redis.set_with_expiry("session:ab12", &session, 1800).await?;
/// let session: Option<SessionData> = redis.get("session:ab12").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 클라이언트를 생성하고 `PING`으로 서버 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis = Self { client: Client::open(redis_url())? };

        redis.ping().await?;
        info!("✅ Redis 연결 성공");

        Ok(redis)
    }

    pub async fn ping(&self) -> Result<(), RedisError> {
        let mut conn = self.connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await
    }

    async fn connection(&self) -> Result<MultiplexedConnection, RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RedisError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| {
                serde_json::from_str(&json)
                    .map_err(|e| type_error("Deserialization failed", e.to_string()))
            })
            .transpose()
    }

    /// 남은 만료 시간을 유지한 채 기존 키의 값만 교체합니다 (`SET .. XX KEEPTTL`).
    ///
    /// 키가 없거나 이미 만료되었으면 아무것도 쓰지 않고 `false`를 반환합니다.
    pub async fn replace_keep_ttl<T: Serialize>(&self, key: &str, value: &T) -> Result<bool, RedisError> {
        let json = serde_json::to_string(value)
            .map_err(|e| type_error("Serialization failed", e.to_string()))?;
        let mut conn = self.connection().await?;
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(json)
            .arg("XX")
            .arg("KEEPTTL")
            .query_async(&mut conn)
            .await?;
        Ok(reply.is_some())
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), RedisError> {
        let json = serde_json::to_string(value)
            .map_err(|e| type_error("Serialization failed", e.to_string()))?;
        let mut conn = self.connection().await?;
        conn.set_ex(key, json, seconds as u64).await
    }

    pub async fn del(&self, key: &str) -> Result<(), RedisError> {
        let mut conn = self.connection().await?;
        conn.del(key).await
    }

    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.connection().await?;
        conn.del(keys).await
    }

    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, RedisError> {
        let mut conn = self.connection().await?;
        conn.keys(pattern).await
    }
}

impl Default for RedisClient {
    /// 연결 확인 없이 클라이언트를 생성합니다. URL 형식이 잘못된 경우 패닉합니다.
    fn default() -> Self {
        let client = Client::open(redis_url())
            .expect("Failed to create Redis client with default configuration");

        Self { client }
    }
}
