//! 서버 측 세션 모델
//!
//! [`SessionData`]는 Redis에 JSON으로 저장되는 세션 내용이고,
//! [`RequestSession`]은 보안 미들웨어가 요청 확장 영역(extensions)에 넣어 두는
//! 요청 단위 세션 컨텍스트입니다.

use std::future::{ready, Ready};
use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::authentication::Authentication;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    /// 현재 인증 정보. 없으면 익명 세션
    #[serde(default)]
    pub authentication: Option<Authentication>,
    /// 해석이 끝난 로컬 사용자 캐시 (세션 속성 `user`)
    #[serde(default)]
    pub user: Option<User>,
    /// OAuth2 인가 요청 시 발급한 CSRF state
    #[serde(default)]
    pub oauth_state: Option<String>,
    pub created_at: DateTime,
}

impl SessionData {
    pub fn new() -> Self {
        Self {
            authentication: None,
            user: None,
            oauth_state: None,
            created_at: DateTime::now(),
        }
    }

    pub fn authenticated(authentication: Authentication) -> Self {
        Self {
            authentication: Some(authentication),
            ..Self::new()
        }
    }

    /// 해석된 사용자를 캐시합니다. 비밀번호 해시는 세션에 두지 않습니다.
    pub fn cache_user(&mut self, user: &User) {
        self.user = Some(User {
            password: None,
            ..user.clone()
        });
    }

    pub fn is_authenticated(&self) -> bool {
        self.authentication.is_some()
    }

    pub fn authorities(&self) -> Option<&[String]> {
        self.authentication.as_ref().map(Authentication::authorities)
    }
}

impl Default for SessionData {
    fn default() -> Self {
        Self::new()
    }
}

/// 요청 단위 세션 컨텍스트
///
/// 쿠키로 식별된 세션이 저장소에 있으면 `id`가 `Some`입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSession {
    pub id: Option<String>,
    pub data: SessionData,
}

impl RequestSession {
    pub fn anonymous() -> Self {
        Self {
            id: None,
            data: SessionData::new(),
        }
    }

    pub fn existing(id: String, data: SessionData) -> Self {
        Self { id: Some(id), data }
    }

    pub fn cached_user(&self) -> Option<&User> {
        self.data.user.as_ref()
    }
}

/// 미들웨어가 넣어 둔 세션을 꺼냅니다. 없으면 익명 세션입니다.
impl FromRequest for RequestSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req
            .extensions()
            .get::<RequestSession>()
            .cloned()
            .unwrap_or_else(RequestSession::anonymous);
        ready(Ok(session))
    }
}
