//! 현재 로그인한 로컬 사용자 추출자
//!
//! 보안 미들웨어가 요청 확장에 넣어 둔 [`RequestSession`]에서 사용자를 해석합니다.
//! 세션에 캐시된 사용자가 없으면 OAuth2 인증 정보로 사용자를 찾거나 생성하고,
//! 갱신된 세션을 다시 요청 확장에 넣어 같은 요청의 이후 추출에서 재사용합니다.
//!
//! ```rust,ignore
//! #[get("/kakao")]
//! pub async fn kakao(user: SocialUser) -> Result<HttpResponse, AppError> {
//!     Ok(HttpResponse::Ok().json(UserResponse::from(user.into_inner())))
//! }
//! ```

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use crate::{
    core::errors::AppError,
    domain::{
        entities::users::user::User,
        models::auth::session::RequestSession,
    },
    services::auth::SocialUserService,
};

/// 로그인 필수 사용자. 해석할 수 없으면 401을 반환합니다.
#[derive(Debug, Clone)]
pub struct SocialUser(pub User);

impl SocialUser {
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl FromRequest for SocialUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            match resolve_from_request(&req).await? {
                Some(user) => Ok(SocialUser(user)),
                None => Err(AppError::AuthenticationError("로그인이 필요합니다".to_string())),
            }
        })
    }
}

/// 선택적 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalSocialUser(pub Option<User>);

impl FromRequest for OptionalSocialUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { Ok(OptionalSocialUser(resolve_from_request(&req).await?)) })
    }
}

async fn resolve_from_request(req: &HttpRequest) -> Result<Option<User>, AppError> {
    let session = req
        .extensions()
        .get::<RequestSession>()
        .cloned()
        .unwrap_or_else(RequestSession::anonymous);

    if let Some(user) = session.cached_user() {
        return Ok(Some(user.clone()));
    }

    if !session.data.is_authenticated() {
        return Ok(None);
    }

    let (user, session) = SocialUserService::instance().resolve(session).await?;
    req.extensions_mut().insert(session);

    Ok(user)
}
