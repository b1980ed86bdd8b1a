//! # Route Configuration
//!
//! 모든 HTTP 라우트를 한곳에서 등록합니다. 접근 제어는 라우트별 미들웨어가 아니라
//! 앱 전체에 적용되는 [`SecurityMiddleware`](crate::middlewares::SecurityMiddleware)의
//! URL 규칙이 담당합니다.
//!
//! ```text
//! /                                      공개
//! /login, /login/**                      공개 (폼 로그인, 회원가입, OAuth2 콜백)
//! /oauth2/authorization/{id}             공개
//! /loginFailure, /logout                 공개
//! /console/**                            공개
//! /google, /facebook, /kakao             ROLE_GOOGLE, ROLE_FACEBOOK, ROLE_KAKAO
//! /loginSuccess, /board/**               로그인 필요
//! ```

use crate::handlers;
use actix_web::web;

/// 모든 라우트를 설정합니다
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_console_routes(cfg);
    configure_auth_routes(cfg);
    configure_page_routes(cfg);
    configure_board_routes(cfg);
}

/// 로그인/로그아웃 흐름
///
/// ```bash
/// # 카카오 로그인 시작
/// curl -i http://localhost:8080/oauth2/authorization/kakao
///
/// # 폼 회원가입 후 로그인
/// curl -X POST http://localhost:8080/login/signup \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Carol","email":"c@x.com","password":"Passw0rd"}'
/// curl -i -X POST http://localhost:8080/login -d 'email=c@x.com&password=Passw0rd'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::oauth2_authorization)
        .service(handlers::auth::oauth2_callback)
        .service(handlers::auth::signup)
        .service(handlers::auth::form_login)
        .service(handlers::auth::logout);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::index)
        .service(handlers::pages::login_page)
        .service(handlers::pages::login_success)
        .service(handlers::pages::login_failure)
        .service(handlers::pages::google)
        .service(handlers::pages::facebook)
        .service(handlers::pages::kakao);
}

/// 게시판 라우트
///
/// `/board/list`가 `/board/{id}`보다 먼저 등록되어야 합니다.
fn configure_board_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/board")
            .service(handlers::boards::list_boards)
            .service(handlers::boards::get_board)
            .service(handlers::boards::create_board)
    );
}

fn configure_console_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/console")
            .service(handlers::console::health_check)
            .service(handlers::console::status)
    );
}
