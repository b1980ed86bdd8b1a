//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약을 정의합니다. 엔티티를 그대로 노출하지 않고
//! 응답 DTO로 변환하여 비밀번호 해시 같은 내부 필드를 숨깁니다.
//!
//! - [`users`] - 폼 로그인, 회원가입, 사용자 응답
//! - [`boards`] - 게시글 작성, 목록 조회, 게시글 응답
//! - [`oauth`] - 프로바이더 콜백 쿼리, 로그인 페이지 응답
//!
//! 요청 DTO는 `validator::Validate`로 검증하며, 핸들러에서 검증 오류를
//! `AppError::ValidationError`로 변환합니다.

pub mod users;
pub mod boards;
pub mod oauth;

pub use users::*;
pub use boards::*;
pub use oauth::*;
