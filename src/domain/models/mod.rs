//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델입니다. 엔티티와 달리 식별자가 없고
//! 요청이나 세션의 수명 동안만 존재합니다.
//!
//! ```text
//! models/
//! ├── auth/    ← 인증 정보, 세션, 사용자 추출자
//! └── oauth/   ← 프로바이더별 사용자 속성, 토큰 응답
//! ```

pub mod auth;
pub mod oauth;
