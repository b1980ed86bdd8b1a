use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::boards::board::BoardType;

/// 게시글 작성 요청
///
/// 작성자는 요청 본문이 아니라 현재 로그인한 사용자로 결정됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBoardRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "부제목은 200자를 넘을 수 없습니다"))]
    pub sub_title: String,

    #[validate(length(min = 1, message = "내용을 입력해주세요"))]
    pub content: String,

    #[serde(default = "default_board_type")]
    pub board_type: BoardType,
}

fn default_board_type() -> BoardType {
    BoardType::Free
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_type_defaults_to_free() {
        let request: CreateBoardRequest = serde_json::from_str(
            r#"{"title": "첫 글", "content": "안녕하세요"}"#,
        ).unwrap();

        assert_eq!(request.board_type, BoardType::Free);
        assert_eq!(request.sub_title, "");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let request: CreateBoardRequest = serde_json::from_str(
            r#"{"title": "", "content": "내용", "board_type": "notice"}"#,
        ).unwrap();

        assert_eq!(request.board_type, BoardType::Notice);
        assert!(request.validate().is_err());
    }
}
