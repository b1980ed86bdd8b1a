//! 사용자 리포지토리
//!
//! MongoDB `users` 컬렉션에 사용자를 저장하고, 이메일 조회 결과를 Redis에 10분간 캐싱합니다.
//! `email` 유니크 인덱스가 동시 가입 시 중복 사용자 생성을 막습니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{bson::{doc, DateTime}, options::IndexOptions, IndexModel};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{errors::AppError, registry::Repository},
    db::Database,
    domain::entities::users::user::{NewUser, User},
    repositories::{
        map_write_error,
        sequences::{next_sequence, USER_SEQUENCE},
        users::user_store::UserStore,
    },
};

const EMAIL_CACHE_TTL_SECONDS: usize = 600;

#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

impl UserRepository {
    fn email_cache_key(email: &str) -> String {
        format!("user:email:{}", email)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let cache_key = Self::email_cache_key(email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, EMAIL_CACHE_TTL_SECONDS)
                .await;
        }

        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let cache_key = self.cache_key(&id.to_string());

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self.collection::<User>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self.redis
                .set_with_expiry(&cache_key, user, EMAIL_CACHE_TTL_SECONDS)
                .await;
        }

        Ok(user)
    }

    /// 식별자를 발급하고 생성/수정 시각을 채워 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - `email` 유니크 인덱스 위반
    /// * `AppError::DatabaseError` - 그 외 저장 실패
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let id = next_sequence(&self.db, USER_SEQUENCE).await?;
        let user = new_user.into_user(id, DateTime::now());

        self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| map_write_error(e, "이미 사용 중인 이메일입니다"))?;

        let _ = self.redis.del(&Self::email_cache_key(&user.email)).await;
        let _ = self.invalidate_collection_cache(None).await;

        log::info!("👤 사용자 생성: id={}, social_type={}", user.id, user.social_type);
        Ok(user)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let created_date_index = IndexModel::builder()
            .keys(doc! { "created_date": -1 })
            .options(IndexOptions::builder()
                .name("created_date_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, created_date_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        UserRepository::find_by_email(self, email).await
    }

    async fn insert(&self, user: NewUser) -> Result<User, AppError> {
        self.create(user).await
    }
}
