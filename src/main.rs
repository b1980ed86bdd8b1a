//! 소셜 로그인 게시판 서버 진입점
//!
//! ```text
//! .env 로드 → 로깅 → MongoDB/Redis 연결 → ServiceLocator 초기화
//!          → 인덱스 생성 → OAuth2 등록 확인 → HTTP 서버
//! ```

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info, warn};
use social_board_backend::caching::redis::RedisClient;
use social_board_backend::config::{OAuth2ClientConfig, RateLimitConfig, ServerConfig};
use social_board_backend::core::registry::ServiceLocator;
use social_board_backend::db::Database;
use social_board_backend::middlewares::SecurityMiddleware;
use social_board_backend::repositories::{
    boards::BoardRepository,
    users::UserRepository,
};
use social_board_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    load_env_file();
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));

    info!("🚀 소셜 로그인 게시판 서버 기동");

    let database = Database::new()
        .await
        .map_err(|e| startup_error("MongoDB 연결 실패", e))?;
    let redis_client = RedisClient::new()
        .await
        .map_err(|e| startup_error("Redis 연결 실패", e))?;

    ServiceLocator::set(Arc::new(database));
    ServiceLocator::set(Arc::new(redis_client));
    ServiceLocator::initialize_all()
        .await
        .map_err(|e| startup_error("서비스 초기화 실패", e))?;

    ensure_indexes().await;
    log_registrations();

    run_server().await
}

/// `PROFILE`에 맞는 env 파일을 읽습니다.
///
/// * `dev` (기본값) → `.env.dev`
/// * `prod` → `.env.prod`
/// * 그 외 → `.env`
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "dev" => dotenv::from_filename(".env.dev"),
        "prod" => dotenv::from_filename(".env.prod"),
        _ => dotenv::dotenv(),
    };

    if let Err(e) = loaded {
        eprintln!("[{}] env 파일을 읽지 못했습니다: {}", profile, e);
    }
}

fn startup_error(stage: &str, e: impl std::fmt::Display) -> io::Error {
    error!("❌ {}: {}", stage, e);
    io::Error::other(format!("{}: {}", stage, e))
}

/// `users.email` 유니크 인덱스와 `boards.user_id` 인덱스를 만듭니다.
/// 실패해도 서버는 계속 실행됩니다.
async fn ensure_indexes() {
    if let Err(e) = UserRepository::instance().create_indexes().await {
        error!("users 인덱스 생성 실패: {}", e);
    }

    if let Err(e) = BoardRepository::instance().create_indexes().await {
        error!("boards 인덱스 생성 실패: {}", e);
    }
}

/// 등록 정보를 처음 구성하므로 미설정 프로바이더 경고는 여기서 한 번만 출력됩니다.
fn log_registrations() {
    let registrations = OAuth2ClientConfig::registrations();

    if registrations.is_empty() {
        warn!("⚠️ 등록된 OAuth2 클라이언트가 없습니다. 폼 로그인만 사용할 수 있습니다");
    }

    for registration in registrations {
        info!("🔑 OAuth2 클라이언트: {} → {}", registration.registration_id, registration.redirect_uri());
    }
}

/// 미들웨어는 나중에 `wrap`한 것이 먼저 실행됩니다.
///
/// ```text
/// Governor → CORS → Logger → NormalizePath → SecurityMiddleware → handler
/// ```
async fn run_server() -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(RateLimitConfig::per_second())
        .burst_size(RateLimitConfig::burst_size())
        .use_headers()
        .finish()
        .ok_or_else(|| startup_error("Rate Limiting 설정 오류", "0이 아닌 값이 필요합니다"))?;

    info!(
        "🛡️ Rate Limiting: 초당 {}요청, 버스트 {}",
        RateLimitConfig::per_second(),
        RateLimitConfig::burst_size()
    );
    info!("🌐 http://{} (로그인: {}/login)", bind_address, ServerConfig::base_url());

    HttpServer::new(move || {
        App::new()
            .wrap(SecurityMiddleware::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .wrap(cors())
            .wrap(Governor::new(&governor_conf))
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 세션 쿠키를 주고받으므로 자격 증명을 허용합니다.
fn cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin(&ServerConfig::base_url())
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE, header::COOKIE])
        .supports_credentials()
        .max_age(3600)
}
