//! 소셜 로그인 게시판 백엔드
//!
//! Google, Facebook, Kakao OAuth2 로그인과 폼 로그인을 지원하는 게시판 서비스입니다.
//! 로그인 상태는 Redis에 저장되는 서버 측 세션으로 관리하며,
//! 싱글톤 매크로를 활용한 의존성 주입으로 서비스와 리포지토리를 연결합니다.
//!
//! # Features
//!
//! - **소셜 로그인**: 프로바이더별 사용자 속성을 로컬 사용자로 찾거나 생성
//! - **폼 로그인**: bcrypt 해시 기반 이메일/비밀번호 로그인과 회원가입
//! - **세션**: 쿠키 + Redis 세션, 로그인 시 세션 ID 재발급
//! - **URL 접근 정책**: 공개 경로, 프로바이더별 권한 경로, 로그인 필요 경로
//! - **게시판**: 최신순 목록, 단건 조회, 작성
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │ SecurityMiddleware  │ ← 세션 조회, URL 접근 판정
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │ Handlers/SocialUser │ ← 요청/응답 처리, 사용자 추출
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │      Services       │ ← 로그인, 세션, 사용자, 게시판
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │    Repositories     │ ← users, boards, counters, sessions
//! └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────────┐
//! │   MongoDB + Redis   │
//! └─────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_board_backend::services::boards::BoardService;
//!
//! let page = BoardService::instance().list(&BoardListQuery::default()).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
