//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//!
//! | 리포지토리 | 저장소 |
//! |------------|--------|
//! | [`users::user_repo::UserRepository`] | MongoDB `users` + Redis 이메일 조회 캐시 |
//! | [`boards::board_repo::BoardRepository`] | MongoDB `boards` |
//! | [`sessions::session_repo::SessionRepository`] | Redis `session:*` |
//!
//! 식별자 발급은 [`sequences`]의 `counters` 컬렉션을 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("a@x.com").await?;
//! ```

use mongodb::error::{ErrorKind, WriteFailure};
use crate::core::errors::AppError;

pub mod users;
pub mod boards;
pub mod sessions;
pub mod sequences;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 쓰기 에러를 변환합니다. 유니크 인덱스 위반은 `ConflictError`가 됩니다.
pub(crate) fn map_write_error(error: mongodb::error::Error, conflict_message: &str) -> AppError {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) if write_error.code == DUPLICATE_KEY_CODE => {
            AppError::ConflictError(conflict_message.to_string())
        }
        _ => AppError::DatabaseError(error.to_string()),
    }
}
