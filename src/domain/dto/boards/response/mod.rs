pub mod board_response;

pub use board_response::{BoardPageResponse, BoardResponse};
