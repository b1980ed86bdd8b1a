//! 미들웨어 모듈
//!
//! Spring Security의 `FilterChain`에 해당하는 요청 파이프라인 단계를 제공합니다.
//!
//! ### SecurityMiddleware
//! - 세션 쿠키(`SESSION_COOKIE_NAME`, 기본 `JSESSIONID`)로 Redis 세션 조회
//! - 디코딩된 요청 경로를 URL 규칙 순서대로 판정 (첫 번째 일치 규칙 적용)
//! - 미인증 요청은 `/login`으로 302, 권한 부족은 `AppError::AuthorizationError` (403)
//! - 통과한 요청의 세션을 request extension에 저장
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use crate::middlewares::SecurityMiddleware;
//!
//! HttpServer::new(|| {
//!     App::new()
//!         .wrap(SecurityMiddleware::default())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod security_middleware;
pub mod security_inner;

pub use security_middleware::SecurityMiddleware;
