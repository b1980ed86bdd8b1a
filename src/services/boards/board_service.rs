//! 게시판 서비스
//!
//! 목록 조회는 게시글만 읽고, 단건 조회에서만 작성자를 함께 읽습니다.

use std::sync::Arc;
use log::info;
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::boards::{
            request::{BoardListQuery, CreateBoardRequest},
            response::{BoardPageResponse, BoardResponse},
        },
        dto::users::response::UserResponse,
        entities::{
            boards::board::NewBoard,
            users::user::User,
        },
    },
    repositories::{
        boards::board_repo::BoardRepository,
        users::user_repo::UserRepository,
    },
    utils::string_utils::validate_required_string,
};

#[service(name = "board")]
pub struct BoardService {
    board_repo: Arc<BoardRepository>,

    user_repo: Arc<UserRepository>,
}

impl BoardService {
    /// 최신 글부터 페이지 단위로 조회합니다.
    pub async fn list(&self, query: &BoardListQuery) -> AppResult<BoardPageResponse> {
        let (page, size) = (query.page(), query.size());
        let offset = query.offset()?;

        let boards = self.board_repo.find_page(offset, size).await?;
        let total = self.board_repo.count().await?;

        let items = boards.into_iter().map(BoardResponse::from).collect();
        Ok(BoardPageResponse::new(items, page, size, total))
    }

    /// 게시글 단건 조회. 작성자가 삭제되었으면 작성자 없이 반환합니다.
    pub async fn get(&self, id: i64) -> AppResult<BoardResponse> {
        let board = self
            .board_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("게시글을 찾을 수 없습니다: {}", id)))?;

        let owner = match board.user_id {
            Some(user_id) => self.user_repo.find_by_id(user_id).await?,
            None => None,
        };

        Ok(BoardResponse::from(board).with_user(owner.map(UserResponse::from)))
    }

    pub async fn create(&self, request: CreateBoardRequest, author: &User) -> AppResult<BoardResponse> {
        let new_board = build_new_board(request, author)?;
        let board = self.board_repo.create(new_board).await?;

        info!("📝 게시글 작성: board_id={}, user_id={}", board.id, author.id);
        Ok(BoardResponse::from(board).with_user(Some(UserResponse::from(author.clone()))))
    }
}

fn build_new_board(request: CreateBoardRequest, author: &User) -> AppResult<NewBoard> {
    Ok(NewBoard {
        title: validate_required_string(&request.title, "제목")?,
        sub_title: request.sub_title.trim().to_string(),
        content: validate_required_string(&request.content, "내용")?,
        board_type: request.board_type,
        user_id: Some(author.id),
    })
}
