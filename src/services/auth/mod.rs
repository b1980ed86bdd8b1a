//! 인증 및 세션 서비스 모듈
//!
//! 소셜 로그인(OAuth2 Authorization Code)과 서버 측 세션, 그리고 인증 주체를
//! 로컬 사용자로 해석하는 어댑터를 제공합니다.
//!
//! # Security
//!
//! - CSRF 방지 (OAuth `state` 매개변수, 세션에 저장 후 콜백에서 검증)
//! - 로그인 시 세션 ID 재발급
//! - HttpOnly 세션 쿠키
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{OAuth2LoginService, SocialUserService};
//!
//! let redirect = OAuth2LoginService::instance().authorization_redirect(&registration);
//! let (user, session) = SocialUserService::instance().resolve(session).await?;
//! ```

pub mod principal_adapter;
pub mod oauth2_login_service;
pub mod session_service;
pub mod social_user_service;

pub use oauth2_login_service::*;
pub use session_service::*;
pub use social_user_service::*;
