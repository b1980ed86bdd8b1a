//! 인증 주체 → 로컬 사용자 해석
//!
//! 세션에 캐시된 사용자가 없을 때, OAuth2 인증의 프로바이더 속성으로
//! 로컬 사용자를 찾거나 생성하고 세션에 캐시합니다.
//!
//! ```text
//! 세션 user 있음 ───────────────▶ 그대로 반환 (저장소 호출 없음)
//!      │ 없음
//!      ▼
//! OAuth2 인증? ── 아니오 ───────▶ 세션 user(None) 반환
//!      │ 예
//!      ▼
//! 프로필 추출 ── 알 수 없는 프로바이더 ─▶ None (에러 아님)
//!      │
//!      ▼
//! find_by_email ── 없음 ──▶ insert ── 충돌 ──▶ find_by_email 재조회
//!      │
//!      ▼
//! 권한 동기화 (role 없으면 정확히 [role])
//!      │
//!      ▼
//! 세션에 user 캐시
//! ```

use log::{debug, info, warn};
use crate::core::errors::AppError;
use crate::domain::entities::users::user::{NewUser, User};
use crate::domain::models::auth::authentication::Authentication;
use crate::domain::models::auth::session::SessionData;
use crate::domain::models::oauth::SocialProfile;
use crate::repositories::users::user_store::UserStore;

/// 해석 결과
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub user: Option<User>,
    /// 해석 후의 세션 내용
    pub session: SessionData,
    /// 세션 내용이 바뀌어 다시 저장해야 하는지 여부
    pub session_updated: bool,
}

impl Resolution {
    fn unchanged(session: SessionData) -> Self {
        Self {
            user: session.user.clone(),
            session,
            session_updated: false,
        }
    }
}

/// 세션의 인증 정보로 로컬 사용자를 해석합니다.
pub async fn resolve_user<S>(store: &S, session: SessionData) -> Result<Resolution, AppError>
where
    S: UserStore + ?Sized,
{
    if session.user.is_some() {
        return Ok(Resolution::unchanged(session));
    }

    let profile = match &session.authentication {
        Some(Authentication::OAuth2 { attributes, registration_id, .. }) => {
            let profile = attributes.to_profile();
            if profile.is_none() {
                warn!("⚠️ 매핑 규칙이 없는 프로바이더입니다: {}", registration_id);
            }
            profile
        }
        // 폼 로그인 또는 미인증: 세션에 있던 값을 그대로 사용
        _ => None,
    };

    let Some(profile) = profile else {
        return Ok(Resolution::unchanged(session));
    };

    let user = find_or_create(store, profile).await?;

    let mut session = session;
    if let Some(synced) = session
        .authentication
        .as_ref()
        .and_then(|authentication| authentication.synced_to_role(user.role_type()))
    {
        debug!("권한 동기화: {} → [{}]", synced.name(), user.role_type());
        session.authentication = Some(synced);
    }
    session.cache_user(&user);

    Ok(Resolution {
        user: Some(user),
        session,
        session_updated: true,
    })
}

/// 이메일로 사용자를 찾고, 없으면 생성합니다.
///
/// 동시 첫 로그인으로 생성이 충돌하면 먼저 저장된 사용자를 다시 조회합니다.
pub async fn find_or_create<S>(store: &S, profile: SocialProfile) -> Result<User, AppError>
where
    S: UserStore + ?Sized,
{
    if let Some(existing) = store.find_by_email(&profile.email).await? {
        return Ok(existing);
    }

    let email = profile.email.clone();
    match store.insert(NewUser::from(profile)).await {
        Ok(created) => {
            info!("✨ 소셜 사용자 최초 로그인: {} ({})", created.email, created.social_type);
            Ok(created)
        }
        Err(AppError::ConflictError(_)) => {
            warn!("⚠️ 동시 가입 충돌, 기존 사용자를 다시 조회합니다: {}", email);
            store
                .find_by_email(&email)
                .await?
                .ok_or_else(|| AppError::InternalError(format!("충돌 후 사용자 조회 실패: {}", email)))
        }
        Err(e) => Err(e),
    }
}
