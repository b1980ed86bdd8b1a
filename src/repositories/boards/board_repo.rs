use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{errors::AppError, registry::Repository},
    db::Database,
    domain::entities::boards::board::{Board, NewBoard},
    repositories::{
        map_write_error,
        sequences::{next_sequence, BOARD_SEQUENCE},
    },
};

#[repository(name = "board", collection = "boards")]
pub struct BoardRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl BoardRepository {
    /// 최신 글부터 `offset`개를 건너뛰고 최대 `size`개를 조회합니다.
    pub async fn find_page(&self, offset: u64, size: u64) -> Result<Vec<Board>, AppError> {
        self.collection::<Board>()
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .skip(offset)
            .limit(size as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        self.collection::<Board>()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Board>, AppError> {
        self.collection::<Board>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create(&self, new_board: NewBoard) -> Result<Board, AppError> {
        let id = next_sequence(&self.db, BOARD_SEQUENCE).await?;
        let board = new_board.into_board(id, DateTime::now());

        self.collection::<Board>()
            .insert_one(&board)
            .await
            .map_err(|e| map_write_error(e, "이미 존재하는 게시글입니다"))?;

        let _ = self.invalidate_collection_cache(None).await;

        Ok(board)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection::<Board>()
            .create_indexes([user_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
