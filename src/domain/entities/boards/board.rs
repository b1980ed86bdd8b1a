//! Board Entity Implementation

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 게시판 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    Notice,
    Free,
}

impl BoardType {
    pub fn value(&self) -> &'static str {
        match self {
            BoardType::Notice => "공지사항",
            BoardType::Free => "자유게시판",
        }
    }
}

/// 게시글 엔티티
///
/// 작성자는 `user_id`로만 참조하며, 단건 조회 시에만 사용자를 함께 읽습니다.
/// 사용자가 삭제되어도 게시글은 삭제되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(rename = "_id")]
    pub id: i64,
    pub title: String,
    pub sub_title: String,
    pub content: String,
    pub board_type: BoardType,
    pub created_date: DateTime,
    pub updated_date: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBoard {
    pub title: String,
    pub sub_title: String,
    pub content: String,
    pub board_type: BoardType,
    pub user_id: Option<i64>,
}

impl NewBoard {
    pub fn into_board(self, id: i64, now: DateTime) -> Board {
        Board {
            id,
            title: self.title,
            sub_title: self.sub_title,
            content: self.content,
            board_type: self.board_type,
            created_date: now,
            updated_date: now,
            user_id: self.user_id,
        }
    }
}
