//! 게시글 데이터 액세스

pub mod board_repo;

pub use board_repo::BoardRepository;
