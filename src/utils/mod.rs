//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 문자열 검증, 정리, 역직렬화 보조 함수

pub mod string_utils;
