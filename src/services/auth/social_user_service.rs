use std::sync::Arc;
use log::warn;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::{
        entities::users::user::User,
        models::auth::session::RequestSession,
    },
    repositories::{
        sessions::{session_repo::SessionRepository, session_store::SessionStore},
        users::{user_repo::UserRepository, user_store::UserStore},
    },
    services::auth::principal_adapter::resolve_user,
};

/// 요청 세션에서 로컬 소셜 사용자를 해석하는 서비스
///
/// 해석 과정에서 세션이 바뀌면(사용자 캐시, 권한 동기화) 저장소에 다시 기록합니다.
#[service(name = "social_user")]
pub struct SocialUserService {
    user_repo: Arc<UserRepository>,

    session_repo: Arc<SessionRepository>,
}

impl SocialUserService {
    /// 해석된 사용자와 갱신된 요청 세션을 반환합니다.
    pub async fn resolve(&self, session: RequestSession) -> Result<(Option<User>, RequestSession), AppError> {
        resolve_and_store(self.user_repo.as_ref(), self.session_repo.as_ref(), session).await
    }
}

/// 사용자를 해석하고, 세션이 바뀌었으면 남은 만료 시간을 유지한 채 저장합니다.
pub async fn resolve_and_store<U, S>(
    users: &U,
    sessions: &S,
    session: RequestSession,
) -> Result<(Option<User>, RequestSession), AppError>
where
    U: UserStore + ?Sized,
    S: SessionStore + ?Sized,
{
    let RequestSession { id, data } = session;

    let resolution = resolve_user(users, data).await?;

    if resolution.session_updated {
        match id.as_deref() {
            Some(session_id) => {
                if !sessions.update(session_id, &resolution.session).await? {
                    warn!("⚠️ 사용자 해석 중 세션이 만료되었습니다");
                }
            }
            None => warn!("⚠️ 저장되지 않은 세션에서 사용자를 해석했습니다"),
        }
    }

    Ok((resolution.user, RequestSession { id, data: resolution.session }))
}
