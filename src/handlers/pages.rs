//! # Page HTTP Handlers
//!
//! 로그인 안내, 로그인 결과, 프로바이더 전용 페이지를 JSON으로 제공합니다.
//!
//! | 메서드 | 경로 | 접근 |
//! |--------|------|------|
//! | `GET` | `/` | 공개 |
//! | `GET` | `/login` | 공개 |
//! | `GET` | `/loginSuccess` | 로그인 필요 |
//! | `GET` | `/loginFailure` | 공개 |
//! | `GET` | `/google` | `ROLE_GOOGLE` |
//! | `GET` | `/facebook` | `ROLE_FACEBOOK` |
//! | `GET` | `/kakao` | `ROLE_KAKAO` |
use actix_web::{get, HttpRequest, HttpResponse};
use serde_json::json;
use crate::{
    config::{OAuth2ClientConfig, SecurityPaths},
    core::errors::AppError,
    domain::{
        dto::oauth::LoginPageResponse,
        dto::users::response::UserResponse,
        models::auth::social_user::{OptionalSocialUser, SocialUser},
    },
};

/// 공개 첫 페이지. 로그인 상태면 해석된 사용자를 함께 돌려줍니다.
#[get("/")]
pub async fn index(user: OptionalSocialUser) -> Result<HttpResponse, AppError> {
    let registrations = OAuth2ClientConfig::registrations();
    let user = user.0.map(UserResponse::from);

    Ok(HttpResponse::Ok().json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "authenticated": user.is_some(),
        "user": user,
        "login": LoginPageResponse::new(registrations, false),
    })))
}

/// 로그인 페이지
///
/// 폼 로그인 실패 후에는 `/login?error`로 돌아오며 `error: true`가 됩니다.
#[get("/login")]
pub async fn login_page(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let registrations = OAuth2ClientConfig::registrations();
    let error = has_flag(req.query_string(), "error");

    Ok(HttpResponse::Ok().json(LoginPageResponse::new(registrations, error)))
}

/// 로그인 직후 도착하는 페이지. 이 시점에 로컬 사용자가 해석되어 세션에 캐시됩니다.
#[get("/loginSuccess")]
pub async fn login_success(user: SocialUser) -> Result<HttpResponse, AppError> {
    let user = user.into_inner();
    log::info!("로그인 사용자: user_id={}, role={}", user.id, user.role_type());

    Ok(HttpResponse::Ok().json(json!({
        "user": UserResponse::from(user),
        "next": SecurityPaths::FORM_LOGIN_SUCCESS,
    })))
}

#[get("/loginFailure")]
pub async fn login_failure() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "error": "login_failed",
        "message": "로그인에 실패했습니다",
        "login": SecurityPaths::LOGIN_PAGE,
    })))
}

#[get("/google")]
pub async fn google(user: SocialUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse::from(user.into_inner())))
}

#[get("/facebook")]
pub async fn facebook(user: SocialUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse::from(user.into_inner())))
}

#[get("/kakao")]
pub async fn kakao(user: SocialUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse::from(user.into_inner())))
}

/// `a&error&b=1` 형태의 쿼리에 이름만 있는 플래그가 있는지 확인합니다.
fn has_flag(query: &str, name: &str) -> bool {
    query
        .split('&')
        .any(|pair| pair == name || pair.split('=').next() == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test::{self as actix_test}, App};

    #[test]
    fn test_has_flag() {
        assert!(has_flag("error", "error"));
        assert!(has_flag("a=1&error=", "error"));
        assert!(!has_flag("errors=1", "error"));
        assert!(!has_flag("", "error"));
    }

    #[actix_web::test]
    async fn test_login_failure_page() {
        let app = actix_test::init_service(App::new().service(login_failure)).await;

        let req = actix_test::TestRequest::get().uri("/loginFailure").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["error"], "login_failed");
        assert_eq!(body["login"], "/login");
    }

    #[actix_web::test]
    async fn test_anonymous_index_lists_login_links() {
        let app = actix_test::init_service(App::new().service(index)).await;

        let req = actix_test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["authenticated"], false);
        assert!(body["user"].is_null());
        assert_eq!(body["login"]["form_login_url"], "/login");
    }

    #[actix_web::test]
    async fn test_provider_page_requires_resolved_user() {
        let app = actix_test::init_service(App::new().service(kakao)).await;

        let req = actix_test::TestRequest::get().uri("/kakao").to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
