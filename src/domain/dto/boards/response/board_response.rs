use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::{
    dto::users::response::UserResponse,
    entities::boards::board::{Board, BoardType},
};

/// 게시글 응답 DTO
///
/// 목록 조회에서는 작성자를 읽지 않으므로 `user`가 비어 있고 `user_id`만 내려갑니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResponse {
    pub id: i64,
    pub title: String,
    pub sub_title: String,
    pub content: String,
    pub board_type: BoardType,
    /// 게시판 표시 이름 (`공지사항`, `자유게시판`)
    pub board_type_name: String,
    pub created_date: DateTime,
    pub updated_date: DateTime,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            title: board.title,
            sub_title: board.sub_title,
            content: board.content,
            board_type_name: board.board_type.value().to_string(),
            board_type: board.board_type,
            created_date: board.created_date,
            updated_date: board.updated_date,
            user_id: board.user_id,
            user: None,
        }
    }
}

impl BoardResponse {
    pub fn with_user(mut self, user: Option<UserResponse>) -> Self {
        self.user = user;
        self
    }
}

/// 게시글 페이지 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardPageResponse {
    pub items: Vec<BoardResponse>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl BoardPageResponse {
    pub fn new(items: Vec<BoardResponse>, page: u64, size: u64, total: u64) -> Self {
        let total_pages = if size == 0 { 0 } else { total.div_ceil(size) };
        Self { items, page, size, total, total_pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let now = DateTime::from_millis(1_700_000_000_000);
        Board {
            id: 1,
            title: "공지".to_string(),
            sub_title: String::new(),
            content: "내용".to_string(),
            board_type: BoardType::Notice,
            created_date: now,
            updated_date: now,
            user_id: Some(7),
        }
    }

    #[test]
    fn test_list_item_omits_owner() {
        let json = serde_json::to_value(BoardResponse::from(board())).unwrap();

        assert_eq!(json["board_type"], "notice");
        assert_eq!(json["board_type_name"], "공지사항");
        assert_eq!(json["user_id"], 7);
        assert!(json.get("user").is_none());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(BoardPageResponse::new(vec![], 0, 10, 0).total_pages, 0);
        assert_eq!(BoardPageResponse::new(vec![], 0, 10, 10).total_pages, 1);
        assert_eq!(BoardPageResponse::new(vec![], 0, 10, 11).total_pages, 2);
    }
}
