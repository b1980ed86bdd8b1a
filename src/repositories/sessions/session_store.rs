//! 세션 저장소 추상화
//!
//! 보안 미들웨어와 사용자 해석이 의존하는 세션 연산입니다. 운영 환경에서는
//! [`SessionRepository`](super::session_repo::SessionRepository)가 구현하고,
//! 테스트에서는 [`MemorySessionStore`]를 사용합니다.

use async_trait::async_trait;
use crate::core::errors::AppError;
use crate::domain::models::auth::session::SessionData;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find(&self, session_id: &str) -> Result<Option<SessionData>, AppError>;

    /// 세션을 저장하고 만료 시간을 `ttl_seconds`로 설정합니다.
    async fn save(&self, session_id: &str, data: &SessionData, ttl_seconds: usize) -> Result<(), AppError>;

    /// 남은 만료 시간은 그대로 두고 세션 내용만 바꿉니다.
    ///
    /// 세션이 이미 만료되었으면 다시 만들지 않고 `false`를 반환합니다.
    async fn update(&self, session_id: &str, data: &SessionData) -> Result<bool, AppError>;

    async fn delete(&self, session_id: &str) -> Result<(), AppError>;
}

#[cfg(test)]
pub use memory::MemorySessionStore;
