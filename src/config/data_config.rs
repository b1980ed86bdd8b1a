//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩 주소, 요청 속도 제한, 세션 쿠키, 비밀번호 해싱 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 폼 로그인 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그 값을 사용하고,
    /// 아니면 실행 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|cost| cost.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 외부에서 접근 가능한 서버 주소
    ///
    /// OAuth2 `redirect_uri` 생성에 사용됩니다. 끝의 `/`는 제거됩니다.
    pub fn base_url() -> String {
        let base_url = env::var("APP_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", Self::port()));
        base_url.trim_end_matches('/').to_string()
    }

    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|workers| workers.parse().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }
}

/// 요청 속도 제한 설정 (`actix-governor`)
pub struct RateLimitConfig;

impl RateLimitConfig {
    /// 초당 보충되는 요청 수 (`RATE_LIMIT_PER_SECOND`, 기본값: 100)
    pub fn per_second() -> u64 {
        env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|value| *value > 0)
            .unwrap_or(100)
    }

    /// 버스트 허용량 (`RATE_LIMIT_BURST_SIZE`, 기본값: 200)
    pub fn burst_size() -> u32 {
        env::var("RATE_LIMIT_BURST_SIZE")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|value| *value > 0)
            .unwrap_or(200)
    }
}

/// 서버 측 세션 설정
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 식별자를 담는 쿠키 이름 (기본값: `JSESSIONID`)
    pub fn cookie_name() -> String {
        env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "JSESSIONID".to_string())
    }

    /// 세션 만료 시간(분). 요청마다 갱신되지 않는 절대 만료입니다.
    pub fn timeout_minutes() -> u64 {
        env::var("SESSION_TIMEOUT_MINUTES")
            .ok()
            .and_then(|minutes| minutes.parse().ok())
            .filter(|minutes| *minutes > 0)
            .unwrap_or(30)
    }

    pub fn timeout_seconds() -> usize {
        (Self::timeout_minutes() * 60) as usize
    }

    /// 프로덕션에서는 HTTPS 전용 쿠키를 사용합니다.
    pub fn secure_cookie() -> bool {
        Environment::current().is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }

        if env::var("APP_BASE_URL").is_err() && env::var("PORT").is_err() {
            assert_eq!(ServerConfig::base_url(), "http://localhost:8080");
        }
    }

    #[test]
    fn test_rate_limit_defaults() {
        if env::var("RATE_LIMIT_PER_SECOND").is_err() {
            assert_eq!(RateLimitConfig::per_second(), 100);
        }

        if env::var("RATE_LIMIT_BURST_SIZE").is_err() {
            assert_eq!(RateLimitConfig::burst_size(), 200);
        }
    }

    #[test]
    fn test_session_config_defaults() {
        if env::var("SESSION_COOKIE_NAME").is_err() {
            assert_eq!(SessionConfig::cookie_name(), "JSESSIONID");
        }

        if env::var("SESSION_TIMEOUT_MINUTES").is_err() {
            assert_eq!(SessionConfig::timeout_minutes(), 30);
            assert_eq!(SessionConfig::timeout_seconds(), 1800);
        }
    }
}
