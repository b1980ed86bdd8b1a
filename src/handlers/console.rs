//! # Console HTTP Handlers
//!
//! 운영 확인용 공개 엔드포인트입니다.
use actix_web::{get, HttpResponse};
use serde_json::json;
use crate::{
    caching::redis::RedisClient,
    config::{Environment, OAuth2ClientConfig},
    core::registry::ServiceLocator,
    db::Database,
};

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/console/health
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// 저장소 연결 상태와 등록된 OAuth2 클라이언트를 보고합니다.
///
/// 저장소 중 하나라도 응답하지 않으면 503을 반환합니다.
#[get("/status")]
pub async fn status() -> HttpResponse {
    let database = ServiceLocator::get::<Database>();
    let mongodb = match database.ping().await {
        Ok(()) => "up",
        Err(e) => {
            log::warn!("MongoDB 상태 확인 실패: {}", e);
            "down"
        }
    };

    let redis = match ServiceLocator::get::<RedisClient>().ping().await {
        Ok(()) => "up",
        Err(e) => {
            log::warn!("Redis 상태 확인 실패: {}", e);
            "down"
        }
    };

    let providers: Vec<serde_json::Value> = OAuth2ClientConfig::registrations()
        .iter()
        .map(|registration| {
            json!({
                "registration_id": registration.registration_id,
                "redirect_uri": registration.redirect_uri(),
                "jwk_set_uri": registration.jwk_set_uri,
            })
        })
        .collect();

    let body = json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": format!("{:?}", Environment::current()),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "components": {
            "mongodb": mongodb,
            "database": database.database_name(),
            "redis": redis,
        },
        "oauth2_clients": providers,
    });

    if mongodb == "up" && redis == "up" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
