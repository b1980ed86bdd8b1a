//! 서버 측 세션 관리 서비스
//!
//! 세션 ID는 UUID v4이며 쿠키로만 전달됩니다. 로그인 성공 시 기존 세션을
//! 폐기하고 새 ID를 발급하여 세션 고정 공격을 막습니다.

use std::sync::Arc;
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use log::{debug, warn};
use singleton_macro::service;
use uuid::Uuid;
use crate::{
    config::SessionConfig,
    core::errors::AppError,
    domain::models::auth::session::{RequestSession, SessionData},
    repositories::sessions::{session_repo::SessionRepository, session_store::SessionStore},
};

#[service(name = "session")]
pub struct SessionService {
    session_repo: Arc<SessionRepository>,
}

impl SessionService {
    /// 새 세션을 만들고 ID를 반환합니다.
    pub async fn create(&self, data: &SessionData) -> Result<String, AppError> {
        let session_id = Uuid::new_v4().to_string();
        self.save(&session_id, data).await?;
        Ok(session_id)
    }

    pub async fn save(&self, session_id: &str, data: &SessionData) -> Result<(), AppError> {
        self.session_repo
            .save(session_id, data, SessionConfig::timeout_seconds())
            .await
    }

    /// 만료 시간은 유지하고 내용만 바꿉니다. 세션이 이미 만료되었으면 `false`입니다.
    pub async fn update(&self, session_id: &str, data: &SessionData) -> Result<bool, AppError> {
        self.session_repo.update(session_id, data).await
    }

    /// 기존 세션을 폐기하고 `data`로 새 세션을 발급합니다.
    pub async fn renew(&self, previous_id: Option<&str>, data: &SessionData) -> Result<String, AppError> {
        if let Some(previous_id) = previous_id {
            self.destroy(previous_id).await?;
        }
        self.create(data).await
    }

    pub async fn destroy(&self, session_id: &str) -> Result<(), AppError> {
        self.session_repo.delete(session_id).await
    }

    /// 실패한 OAuth2 콜백 이후 남은 state를 지웁니다.
    pub async fn discard_oauth_state(&self, session: &RequestSession) -> Result<(), AppError> {
        discard_oauth_state(self.session_repo.as_ref(), session).await
    }

    /// 세션 ID를 담는 쿠키
    pub fn session_cookie(&self, session_id: &str) -> Cookie<'static> {
        build_session_cookie(session_id.to_string(), SessionConfig::timeout_minutes() as i64 * 60)
    }

    /// 브라우저의 세션 쿠키를 즉시 만료시키는 쿠키
    pub fn expired_cookie(&self) -> Cookie<'static> {
        build_session_cookie(String::new(), 0)
    }
}

/// 쿠키 값으로 세션을 불러옵니다. 없거나 만료된 세션은 익명 세션이 됩니다.
pub async fn load_session<S>(store: &S, session_id: Option<&str>) -> RequestSession
where
    S: SessionStore + ?Sized,
{
    let Some(session_id) = session_id.filter(|id| !id.is_empty()) else {
        return RequestSession::anonymous();
    };

    match store.find(session_id).await {
        Ok(Some(data)) => RequestSession::existing(session_id.to_string(), data),
        Ok(None) => {
            debug!("만료되었거나 존재하지 않는 세션");
            RequestSession::anonymous()
        }
        Err(e) => {
            warn!("⚠️ 세션 조회 실패, 익명으로 처리합니다: {}", e);
            RequestSession::anonymous()
        }
    }
}

/// 세션의 `oauth_state`를 비웁니다. 만료 시간은 바꾸지 않습니다.
pub async fn discard_oauth_state<S>(store: &S, session: &RequestSession) -> Result<(), AppError>
where
    S: SessionStore + ?Sized,
{
    let Some(session_id) = session.id.as_deref() else {
        return Ok(());
    };
    if session.data.oauth_state.is_none() {
        return Ok(());
    }

    let data = SessionData {
        oauth_state: None,
        ..session.data.clone()
    };
    store.update(session_id, &data).await?;
    Ok(())
}

fn build_session_cookie(value: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(SessionConfig::cookie_name(), value)
        .path("/")
        .http_only(true)
        .secure(SessionConfig::secure_cookie())
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::seconds(max_age_seconds))
        .finish()
}
