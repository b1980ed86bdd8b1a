//! 인증 도메인 모델
//!
//! - [`authentication`] - 세션에 저장되는 인증 정보와 권한 목록
//! - [`session`] - 서버 측 세션 데이터와 요청 단위 세션
//! - [`social_user`] - 핸들러용 사용자 추출자

pub mod authentication;
pub mod session;
pub mod social_user;

pub use authentication::{Authentication, ROLE_USER};
pub use session::{RequestSession, SessionData};
pub use social_user::{OptionalSocialUser, SocialUser};
