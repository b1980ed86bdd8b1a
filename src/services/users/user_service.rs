//! # 폼 회원가입/로그인 서비스
//!
//! 소셜 계정 없이 이메일과 비밀번호로 가입한 `Guest` 사용자를 다룹니다.
//!
//! ```text
//! POST /login/signup ─▶ UserService::signup ─▶ bcrypt hash ─▶ UserRepository::create
//! POST /login        ─▶ UserService::authenticate ─▶ bcrypt verify
//! ```
//!
//! 소셜 로그인으로만 가입한 사용자는 비밀번호가 없으므로 폼 로그인에 실패합니다.
//! 같은 이메일로 폼 가입을 시도하면 기존 소셜 계정과 충돌(409)합니다.

use std::sync::Arc;
use actix_web::web;
use bcrypt::{hash, verify};
use log::{info, warn};
use singleton_macro::service;
use crate::{
    config::PasswordConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{
        dto::users::request::SignupRequest,
        entities::users::user::{NewUser, User},
    },
    repositories::users::{user_repo::UserRepository, user_store::UserStore},
};

const INVALID_CREDENTIALS: &str = "이메일 또는 비밀번호가 올바르지 않습니다";

#[service(name = "user")]
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 폼 회원가입
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 가입된 이메일
    pub async fn signup(&self, request: SignupRequest) -> AppResult<User> {
        register_guest(self.user_repo.as_ref(), request, PasswordConfig::bcrypt_cost()).await
    }

    /// 이메일과 비밀번호로 사용자를 인증합니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        verify_credentials(self.user_repo.as_ref(), email, password).await
    }
}

pub(crate) async fn register_guest<S: UserStore + ?Sized>(
    store: &S,
    request: SignupRequest,
    bcrypt_cost: u32,
) -> AppResult<User> {
    let email = request.email.trim().to_string();

    if store.find_by_email(&email).await?.is_some() {
        return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
    }

    let password = request.password;
    let password_hash = web::block(move || hash(password, bcrypt_cost))
        .await
        .context("해싱 작업 실행 실패")?
        .context("비밀번호 해싱 실패")?;

    let user = store
        .insert(NewUser::guest(request.name.trim().to_string(), email, password_hash))
        .await?;

    info!("✅ 폼 회원가입 완료: user_id={}", user.id);
    Ok(user)
}

pub(crate) async fn verify_credentials<S: UserStore + ?Sized>(
    store: &S,
    email: &str,
    password: &str,
) -> AppResult<User> {
    let Some(user) = store.find_by_email(email.trim()).await? else {
        warn!("폼 로그인 실패: 존재하지 않는 이메일");
        return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
    };

    let Some(password_hash) = user.password.clone() else {
        warn!("폼 로그인 실패: 비밀번호가 없는 소셜 계정 user_id={}", user.id);
        return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
    };

    let password = password.to_string();
    let matched = web::block(move || verify(password, &password_hash))
        .await
        .context("해싱 작업 실행 실패")?
        .context("비밀번호 검증 실패")?;

    if !matched {
        warn!("폼 로그인 실패: 비밀번호 불일치 user_id={}", user.id);
        return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
    }

    Ok(user)
}
