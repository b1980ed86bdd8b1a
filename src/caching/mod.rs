//! 캐싱 계층 모듈
//!
//! Redis 기반 저장소를 제공합니다. 서버 측 세션(`session:{hash}`)과
//! 사용자 이메일 조회 캐시(`user:email:{email}`)가 저장됩니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
