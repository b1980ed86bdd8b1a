//! # HTTP Handlers
//!
//! 각 핸들러는 `#[get]`, `#[post]` 매크로로 경로를 선언하고
//! `Result<HttpResponse, AppError>`를 반환합니다.
//!
//! - [`auth`] - OAuth2 인가/콜백, 폼 로그인, 회원가입, 로그아웃
//! - [`pages`] - 로그인 안내와 프로바이더 전용 페이지
//! - [`boards`] - 게시판
//! - [`console`] - 상태 확인

pub mod auth;
pub mod pages;
pub mod boards;
pub mod console;
