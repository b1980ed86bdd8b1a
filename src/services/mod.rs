//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 소셜 로그인과 세션 관리 ([`auth`])
//! - 폼 회원가입/로그인 ([`users`])
//! - 게시글 조회/작성 ([`boards`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::boards::board_service::BoardService;
//!
//! let page = BoardService::instance().list(&BoardListQuery::default()).await?;
//! ```

pub mod users;
pub mod auth;
pub mod boards;
