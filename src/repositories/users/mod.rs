//! 사용자 데이터 액세스

pub mod user_repo;
pub mod user_store;

pub use user_repo::UserRepository;
pub use user_store::UserStore;
