//! Authentication HTTP Handlers
//!
//! 세션 기반 로그인 흐름을 처리합니다.
//!
//! # Endpoints
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/oauth2/authorization/{registration_id}` | 프로바이더 인가 페이지로 리다이렉트 |
//! | `GET` | `/login/oauth2/code/{registration_id}` | 인가 코드 콜백 |
//! | `POST` | `/login` | 폼 로그인 (form 또는 JSON) |
//! | `POST` | `/login/signup` | 폼 회원가입 |
//! | `GET`, `POST` | `/logout` | 세션 삭제 후 `/`로 리다이렉트 |
//!
//! 로그인에 성공하면 기존 세션을 폐기하고 새 세션 ID를 발급합니다.
use actix_web::{get, post, route, web, Either, HttpResponse};
use actix_web::http::header;
use log::{info, warn};
use validator::Validate;
use crate::{
    config::{OAuth2ClientConfig, SecurityPaths},
    core::errors::AppError,
    domain::{
        dto::oauth::OAuthCallbackQuery,
        dto::users::{
            request::{LocalLoginRequest, SignupRequest},
            response::{SignupResponse, UserResponse},
        },
        models::auth::{
            authentication::Authentication,
            session::{RequestSession, SessionData},
        },
    },
    services::{
        auth::{oauth2_login_service::verify_state, OAuth2LoginService, SessionService},
        users::UserService,
    },
};

/// OAuth2 인가 요청 시작
///
/// 새 `state`를 세션에 저장하고 프로바이더 인가 페이지로 302 리다이렉트합니다.
///
/// # Errors
///
/// * `AppError::NotFound` - 등록되지 않은 registration id
#[get("/oauth2/authorization/{registration_id}")]
pub async fn oauth2_authorization(
    path: web::Path<String>,
    session: RequestSession,
) -> Result<HttpResponse, AppError> {
    let registration_id = path.into_inner();
    let registration = OAuth2ClientConfig::find(&registration_id)
        .ok_or_else(|| AppError::NotFound(format!("등록되지 않은 OAuth2 클라이언트: {}", registration_id)))?;

    let redirect = OAuth2LoginService::instance().authorization_redirect(&registration);
    let session_service = SessionService::instance();

    let RequestSession { id, mut data } = session;
    data.oauth_state = Some(redirect.state);

    let session_id = match id {
        Some(id) if session_service.update(&id, &data).await? => id,
        _ => session_service.create(&data).await?,
    };

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, redirect.url))
        .cookie(session_service.session_cookie(&session_id))
        .finish())
}

/// OAuth2 인가 코드 콜백
///
/// 실패 사유와 관계없이 `/loginFailure`로 리다이렉트하며, 사유는 로그로만 남깁니다.
#[get("/login/oauth2/code/{registration_id}")]
pub async fn oauth2_callback(
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
    session: RequestSession,
) -> Result<HttpResponse, AppError> {
    let registration_id = path.into_inner();

    match complete_oauth2_login(&registration_id, &query, &session).await {
        Ok(session_id) => {
            info!("✅ 소셜 로그인 성공: {}", registration_id);
            Ok(HttpResponse::Found()
                .insert_header((header::LOCATION, SecurityPaths::LOGIN_SUCCESS))
                .cookie(SessionService::instance().session_cookie(&session_id))
                .finish())
        }
        Err(e) => {
            warn!("소셜 로그인 실패 ({}): {}", registration_id, e);

            // 실패한 state는 다시 쓸 수 없도록 지운다
            if session.id.is_some() && session.data.oauth_state.is_some() {
                if let Err(e) = SessionService::instance().discard_oauth_state(&session).await {
                    warn!("⚠️ OAuth state 삭제 실패: {}", e);
                }
            }

            Ok(redirect_to(SecurityPaths::LOGIN_FAILURE))
        }
    }
}

async fn complete_oauth2_login(
    registration_id: &str,
    query: &OAuthCallbackQuery,
    session: &RequestSession,
) -> Result<String, AppError> {
    if let Some(error) = &query.error {
        let description = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        return Err(AppError::AuthenticationError(format!("{}: {}", error, description)));
    }

    verify_state(session.data.oauth_state.as_deref(), query.state.as_deref())?;

    let code = query
        .code
        .as_deref()
        .ok_or_else(|| AppError::AuthenticationError("인가 코드가 없습니다".to_string()))?;

    let registration = OAuth2ClientConfig::find(registration_id)
        .ok_or_else(|| AppError::NotFound(format!("등록되지 않은 OAuth2 클라이언트: {}", registration_id)))?;

    let authentication = OAuth2LoginService::instance()
        .complete_login(&registration, code)
        .await?;

    SessionService::instance()
        .renew(session.id.as_deref(), &SessionData::authenticated(authentication))
        .await
}

/// 폼 로그인
///
/// `application/x-www-form-urlencoded`와 JSON 본문을 모두 받습니다.
/// 성공하면 303으로 게시판 목록, 실패하면 `/login?error`로 리다이렉트합니다.
#[post("/login")]
pub async fn form_login(
    payload: Either<web::Form<LocalLoginRequest>, web::Json<LocalLoginRequest>>,
    session: RequestSession,
) -> Result<HttpResponse, AppError> {
    let payload = match payload {
        Either::Left(form) => form.into_inner(),
        Either::Right(json) => json.into_inner(),
    };

    let failure_location = format!("{}?error", SecurityPaths::LOGIN_PAGE);

    if let Err(e) = payload.validate() {
        warn!("폼 로그인 요청 검증 실패: {}", e);
        return Ok(redirect_to(&failure_location));
    }

    let user = match UserService::instance()
        .authenticate(&payload.email, &payload.password)
        .await
    {
        Ok(user) => user,
        Err(AppError::AuthenticationError(_)) => return Ok(redirect_to(&failure_location)),
        Err(e) => return Err(e),
    };

    let mut data = SessionData::authenticated(Authentication::form(&user.email, user.role_type()));
    data.cache_user(&user);

    let session_service = SessionService::instance();
    let session_id = session_service.renew(session.id.as_deref(), &data).await?;

    info!("폼 로그인 성공: {}", payload.email);
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, SecurityPaths::FORM_LOGIN_SUCCESS))
        .cookie(session_service.session_cookie(&session_id))
        .finish())
}

/// 폼 회원가입
///
/// # Errors
///
/// * `AppError::ValidationError` - 입력값 검증 실패
/// * `AppError::ConflictError` - 이미 사용 중인 이메일
#[post("/login/signup")]
pub async fn signup(
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = UserService::instance().signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(SignupResponse {
        user: UserResponse::from(user),
        message: "회원가입이 완료되었습니다".to_string(),
    }))
}

/// 로그아웃
#[route("/logout", method = "GET", method = "POST")]
pub async fn logout(session: RequestSession) -> Result<HttpResponse, AppError> {
    let session_service = SessionService::instance();

    if let Some(session_id) = session.id.as_deref() {
        if let Err(e) = session_service.destroy(session_id).await {
            warn!("⚠️ 세션 삭제 실패: {}", e);
        }
    }

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, SecurityPaths::LOGOUT_SUCCESS))
        .cookie(session_service.expired_cookie())
        .finish())
}

fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test::{self as actix_test}, App};

    #[actix_web::test]
    async fn test_unknown_registration_is_not_found() {
        let app = actix_test::init_service(App::new().service(oauth2_authorization)).await;

        let req = actix_test::TestRequest::get()
            .uri("/oauth2/authorization/naver")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_provider_error_redirects_to_failure_page() {
        let app = actix_test::init_service(App::new().service(oauth2_callback)).await;

        let req = actix_test::TestRequest::get()
            .uri("/login/oauth2/code/kakao?error=access_denied")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            SecurityPaths::LOGIN_FAILURE
        );
    }

    #[actix_web::test]
    async fn test_missing_state_redirects_to_failure_page() {
        let app = actix_test::init_service(App::new().service(oauth2_callback)).await;

        let req = actix_test::TestRequest::get()
            .uri("/login/oauth2/code/kakao?code=abc&state=forged")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            SecurityPaths::LOGIN_FAILURE
        );
    }
}
