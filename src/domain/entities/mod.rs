//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1로 매핑되는 영속 엔티티입니다.
//!
//! | 엔티티 | 컬렉션 | 식별자 시퀀스 |
//! |--------|--------|---------------|
//! | [`users::user::User`] | `users` | `counters._id = "users"` |
//! | [`boards::board::Board`] | `boards` | `counters._id = "boards"` |
//!
//! 식별자와 생성/수정 시각은 리포지토리가 저장 시점에 채우므로,
//! 저장 전 값은 별도 타입(`NewUser`, `NewBoard`)으로 표현합니다.

pub mod users;
pub mod boards;

pub use users::user::{NewUser, User};
pub use boards::board::{Board, BoardType, NewBoard};
