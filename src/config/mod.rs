//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 속도 제한, 세션, 비밀번호 해싱 설정
//! - [`auth_config`] - 소셜 프로바이더 구분과 OAuth2 클라이언트 등록 정보
//! - [`security_config`] - URL 접근 정책과 로그인/로그아웃 경로
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{OAuth2ClientConfig, ServerConfig, SessionConfig};
//!
//! let registration = OAuth2ClientConfig::find("kakao");
//! let cookie_name = SessionConfig::cookie_name();
//! let base_url = ServerConfig::base_url();
//! ```

pub mod data_config;
pub mod auth_config;
pub mod security_config;

pub use data_config::*;
pub use auth_config::*;
pub use security_config::*;
