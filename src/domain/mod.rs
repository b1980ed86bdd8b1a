//! # Domain Layer Module
//!
//! 도메인 계층은 엔티티, DTO, 모델로 구성됩니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities   - MongoDB에 저장되는 User, Board
//! ├── dto        - HTTP 요청/응답 계약
//! └── models     - 인증/세션 모델, 프로바이더 속성
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Board, BoardType, NewBoard, NewUser, User};
