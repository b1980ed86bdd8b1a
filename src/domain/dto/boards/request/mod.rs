pub mod board_list_query;
pub mod create_board_request;

pub use board_list_query::BoardListQuery;
pub use create_board_request::CreateBoardRequest;
