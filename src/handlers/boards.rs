//! # Board HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/board/list?page=&size=` | 최신순 목록 | 200 OK |
//! | `GET` | `/board/{id}` | 단건 조회 (작성자 포함) | 200 OK / 404 |
//! | `POST` | `/board` | 게시글 작성 | 201 Created |
//!
//! 모든 경로는 보안 미들웨어에서 로그인한 세션만 통과합니다.
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::{
        dto::boards::request::{BoardListQuery, CreateBoardRequest},
        models::auth::social_user::SocialUser,
    },
    services::boards::BoardService,
};

#[get("/list")]
pub async fn list_boards(
    query: web::Query<BoardListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = BoardService::instance().list(&query).await?;

    Ok(HttpResponse::Ok().json(page))
}

#[get("/{id}")]
pub async fn get_board(
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let board = BoardService::instance().get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(board))
}

/// 게시글 작성. 작성자는 현재 로그인한 사용자입니다.
#[post("")]
pub async fn create_board(
    payload: web::Json<CreateBoardRequest>,
    user: SocialUser,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let board = BoardService::instance()
        .create(payload.into_inner(), &user.0)
        .await?;

    Ok(HttpResponse::Created().json(board))
}
