//! 폼 회원가입/로그인 사용자 서비스

pub mod user_service;

pub use user_service::UserService;
