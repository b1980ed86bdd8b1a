//! 서버 측 세션 저장소

pub mod session_repo;
pub mod session_store;

pub use session_repo::SessionRepository;
pub use session_store::SessionStore;
