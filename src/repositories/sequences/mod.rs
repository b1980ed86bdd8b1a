//! 엔티티 식별자 시퀀스
//!
//! `counters` 컬렉션에 `{ _id: <시퀀스 이름>, seq: <마지막 값> }` 문서를 두고
//! `$inc` + upsert로 단조 증가하는 식별자를 발급합니다.

use mongodb::bson::{doc, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use crate::core::errors::AppError;
use crate::db::Database;

pub const COUNTERS_COLLECTION: &str = "counters";

pub const USER_SEQUENCE: &str = "users";
pub const BOARD_SEQUENCE: &str = "boards";

/// 다음 식별자를 발급합니다. 첫 호출은 1을 반환합니다.
pub async fn next_sequence(db: &Database, name: &str) -> Result<i64, AppError> {
    let options = FindOneAndUpdateOptions::builder()
        .upsert(true)
        .return_document(ReturnDocument::After)
        .build();

    let counter = db
        .get_database()
        .collection::<Document>(COUNTERS_COLLECTION)
        .find_one_and_update(doc! { "_id": name }, doc! { "$inc": { "seq": 1_i64 } })
        .with_options(options)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::DatabaseError(format!("시퀀스 {} 발급 실패", name)))?;

    counter
        .get_i64("seq")
        .map_err(|e| AppError::DatabaseError(format!("시퀀스 {} 형식 오류: {}", name, e)))
}
