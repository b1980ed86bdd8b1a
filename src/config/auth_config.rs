//! 소셜 로그인 설정 관리 모듈
//!
//! 소셜 프로바이더 구분([`SocialType`])과 OAuth2 클라이언트 등록 정보
//! ([`ClientRegistration`])를 관리합니다.
//!
//! # 지원 프로바이더
//!
//! | registration id | 권한 | 비고 |
//! |-----------------|------|------|
//! | `google` | `ROLE_GOOGLE` | OIDC, `sub`를 사용자 식별자로 사용 |
//! | `facebook` | `ROLE_FACEBOOK` | Graph API v2.8 |
//! | `kakao` | `ROLE_KAKAO` | 커스텀 엔드포인트, 시크릿/JWK URI는 `test` |
//!
//! # Environment Variables
//!
//! * `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`
//! * `FACEBOOK_CLIENT_ID`, `FACEBOOK_CLIENT_SECRET`
//! * `KAKAO_CLIENT_ID`
//!
//! 클라이언트 ID가 설정되지 않은 프로바이더는 등록되지 않습니다.
//! 등록 정보는 프로세스 시작 후 처음 조회할 때 한 번 구성됩니다.

use std::env;
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use crate::config::data_config::ServerConfig;

const KAKAO_PLACEHOLDER: &str = "test";

/// 사용자의 가입 경로
///
/// 소셜 로그인으로 생성된 사용자는 프로바이더 값을, 폼 회원가입으로 생성된
/// 사용자는 `Guest`를 가집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialType {
    Google,
    Facebook,
    Kakao,
    Guest,
}

impl SocialType {
    /// registration id와 동일한 소문자 값
    pub fn value(&self) -> &'static str {
        match self {
            SocialType::Google => "google",
            SocialType::Facebook => "facebook",
            SocialType::Kakao => "kakao",
            SocialType::Guest => "guest",
        }
    }

    /// 해당 가입 경로의 사용자에게 부여되는 권한
    pub fn role_type(&self) -> &'static str {
        match self {
            SocialType::Google => "ROLE_GOOGLE",
            SocialType::Facebook => "ROLE_FACEBOOK",
            SocialType::Kakao => "ROLE_KAKAO",
            SocialType::Guest => "ROLE_GUEST",
        }
    }

    pub fn is_equals(&self, registration_id: &str) -> bool {
        self.value() == registration_id
    }

    /// registration id로 소셜 프로바이더를 찾습니다. `guest`는 OAuth2 프로바이더가 아니므로 제외됩니다.
    pub fn from_registration_id(registration_id: &str) -> Option<Self> {
        [SocialType::Google, SocialType::Facebook, SocialType::Kakao]
            .into_iter()
            .find(|social_type| social_type.is_equals(registration_id))
    }
}

impl std::fmt::Display for SocialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

/// OAuth2 클라이언트 등록 정보
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRegistration {
    pub registration_id: String,
    pub social_type: SocialType,
    pub client_id: String,
    pub client_secret: String,
    pub scopes: Vec<String>,
    pub authorization_uri: String,
    pub token_uri: String,
    pub user_info_uri: String,
    pub jwk_set_uri: Option<String>,
}

impl ClientRegistration {
    pub fn google(client_id: String, client_secret: String) -> Self {
        Self {
            registration_id: SocialType::Google.value().to_string(),
            social_type: SocialType::Google,
            client_id,
            client_secret,
            scopes: vec!["openid".into(), "profile".into(), "email".into()],
            authorization_uri: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_uri: "https://www.googleapis.com/oauth2/v4/token".to_string(),
            user_info_uri: "https://www.googleapis.com/oauth2/v3/userinfo".to_string(),
            jwk_set_uri: Some("https://www.googleapis.com/oauth2/v3/certs".to_string()),
        }
    }

    pub fn facebook(client_id: String, client_secret: String) -> Self {
        Self {
            registration_id: SocialType::Facebook.value().to_string(),
            social_type: SocialType::Facebook,
            client_id,
            client_secret,
            scopes: vec!["email".into()],
            authorization_uri: "https://www.facebook.com/v2.8/dialog/oauth".to_string(),
            token_uri: "https://graph.facebook.com/v2.8/oauth/access_token".to_string(),
            user_info_uri: "https://graph.facebook.com/me?fields=id,name,email".to_string(),
            jwk_set_uri: None,
        }
    }

    /// 카카오는 클라이언트 시크릿과 JWK URI에 자리표시자 값을 사용합니다.
    pub fn kakao(client_id: String) -> Self {
        Self {
            registration_id: SocialType::Kakao.value().to_string(),
            social_type: SocialType::Kakao,
            client_id,
            client_secret: KAKAO_PLACEHOLDER.to_string(),
            scopes: Vec::new(),
            authorization_uri: "https://kauth.kakao.com/oauth/authorize".to_string(),
            token_uri: "https://kauth.kakao.com/oauth/token".to_string(),
            user_info_uri: "https://kapi.kakao.com/v2/user/me".to_string(),
            jwk_set_uri: Some(KAKAO_PLACEHOLDER.to_string()),
        }
    }

    /// `{base_url}/login/oauth2/code/{registration_id}`
    pub fn redirect_uri_for(&self, base_url: &str) -> String {
        format!("{}/login/oauth2/code/{}", base_url.trim_end_matches('/'), self.registration_id)
    }

    pub fn redirect_uri(&self) -> String {
        self.redirect_uri_for(&ServerConfig::base_url())
    }

    /// 프로바이더 인가 페이지 URL을 생성합니다.
    pub fn authorization_url(&self, state: &str, redirect_uri: &str) -> String {
        let scope = self.scopes.join(" ");

        let mut params = vec![
            ("response_type", "code"),
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("state", state),
        ];
        if !scope.is_empty() {
            params.push(("scope", scope.as_str()));
        }

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let separator = if self.authorization_uri.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.authorization_uri, separator, query_string)
    }
}

static REGISTRATIONS: Lazy<Vec<ClientRegistration>> =
    Lazy::new(|| OAuth2ClientConfig::registrations_from(|key| env::var(key).ok()));

/// 환경 변수 기반 OAuth2 클라이언트 설정
pub struct OAuth2ClientConfig;

impl OAuth2ClientConfig {
    /// 설정된 모든 클라이언트 등록 정보
    ///
    /// 처음 호출될 때 한 번만 환경 변수를 읽습니다.
    pub fn registrations() -> &'static [ClientRegistration] {
        REGISTRATIONS.as_slice()
    }

    pub fn find(registration_id: &str) -> Option<ClientRegistration> {
        Self::registrations()
            .iter()
            .find(|registration| registration.registration_id == registration_id)
            .cloned()
    }

    /// 값 조회 함수로부터 등록 정보를 구성합니다.
    pub fn registrations_from<F>(lookup: F) -> Vec<ClientRegistration>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut registrations = Vec::new();

        match (lookup("GOOGLE_CLIENT_ID"), lookup("GOOGLE_CLIENT_SECRET")) {
            (Some(id), Some(secret)) => registrations.push(ClientRegistration::google(id, secret)),
            _ => warn!("⚠️ Google OAuth2 클라이언트가 설정되지 않아 등록하지 않습니다"),
        }

        match (lookup("FACEBOOK_CLIENT_ID"), lookup("FACEBOOK_CLIENT_SECRET")) {
            (Some(id), Some(secret)) => registrations.push(ClientRegistration::facebook(id, secret)),
            _ => warn!("⚠️ Facebook OAuth2 클라이언트가 설정되지 않아 등록하지 않습니다"),
        }

        match lookup("KAKAO_CLIENT_ID") {
            Some(id) => registrations.push(ClientRegistration::kakao(id)),
            None => warn!("⚠️ Kakao OAuth2 클라이언트가 설정되지 않아 등록하지 않습니다"),
        }

        registrations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_social_type_values_and_roles() {
        assert_eq!(SocialType::Google.value(), "google");
        assert_eq!(SocialType::Facebook.value(), "facebook");
        assert_eq!(SocialType::Kakao.value(), "kakao");
        assert_eq!(SocialType::Guest.value(), "guest");

        assert_eq!(SocialType::Google.role_type(), "ROLE_GOOGLE");
        assert_eq!(SocialType::Facebook.role_type(), "ROLE_FACEBOOK");
        assert_eq!(SocialType::Kakao.role_type(), "ROLE_KAKAO");
        assert_eq!(SocialType::Guest.role_type(), "ROLE_GUEST");
    }

    #[test]
    fn test_social_type_from_registration_id() {
        assert_eq!(SocialType::from_registration_id("google"), Some(SocialType::Google));
        assert_eq!(SocialType::from_registration_id("facebook"), Some(SocialType::Facebook));
        assert_eq!(SocialType::from_registration_id("kakao"), Some(SocialType::Kakao));

        assert_eq!(SocialType::from_registration_id("guest"), None);
        assert_eq!(SocialType::from_registration_id("github"), None);
        assert_eq!(SocialType::from_registration_id("GOOGLE"), None);
    }

    #[test]
    fn test_social_type_serialization() {
        assert_eq!(serde_json::to_string(&SocialType::Kakao).unwrap(), "\"kakao\"");
        let parsed: SocialType = serde_json::from_str("\"facebook\"").unwrap();
        assert_eq!(parsed, SocialType::Facebook);
    }

    #[test]
    fn test_registrations_skip_unconfigured_providers() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("GOOGLE_CLIENT_ID", "google-id"),
            ("GOOGLE_CLIENT_SECRET", "google-secret"),
            ("FACEBOOK_CLIENT_ID", "fb-id"),
            ("KAKAO_CLIENT_ID", "kakao-id"),
        ]);

        let registrations =
            OAuth2ClientConfig::registrations_from(|key| env.get(key).map(|v| v.to_string()));
        let ids: Vec<_> = registrations.iter().map(|r| r.registration_id.as_str()).collect();

        // 페이스북은 시크릿이 없어 제외
        assert_eq!(ids, vec!["google", "kakao"]);
    }

    #[test]
    fn test_registrations_are_built_once() {
        let first = OAuth2ClientConfig::registrations();
        let second = OAuth2ClientConfig::registrations();

        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_kakao_registration_uses_placeholders() {
        let kakao = ClientRegistration::kakao("kakao-id".to_string());

        assert_eq!(kakao.client_secret, "test");
        assert_eq!(kakao.jwk_set_uri.as_deref(), Some("test"));
        assert_eq!(kakao.authorization_uri, "https://kauth.kakao.com/oauth/authorize");
        assert_eq!(kakao.token_uri, "https://kauth.kakao.com/oauth/token");
        assert_eq!(kakao.user_info_uri, "https://kapi.kakao.com/v2/user/me");
        assert_eq!(kakao.social_type, SocialType::Kakao);
    }

    #[test]
    fn test_facebook_registration_requests_email_scope() {
        let facebook = ClientRegistration::facebook("fb-id".to_string(), "fb-secret".to_string());
        assert_eq!(facebook.scopes, vec!["email".to_string()]);
        assert!(facebook.user_info_uri.contains("fields=id,name,email"));
    }

    #[test]
    fn test_redirect_uri() {
        let google = ClientRegistration::google("id".to_string(), "secret".to_string());
        assert_eq!(
            google.redirect_uri_for("http://localhost:8080/"),
            "http://localhost:8080/login/oauth2/code/google"
        );
    }

    #[test]
    fn test_authorization_url() {
        let google = ClientRegistration::google("client 1".to_string(), "secret".to_string());
        let url = google.authorization_url("abc123", "http://localhost:8080/login/oauth2/code/google");

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=client%201"));
        assert!(url.contains("state=abc123"));
        assert!(url.contains("scope=openid%20profile%20email"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Flogin%2Foauth2%2Fcode%2Fgoogle"));
    }

    #[test]
    fn test_authorization_url_without_scopes() {
        let kakao = ClientRegistration::kakao("kakao-id".to_string());
        let url = kakao.authorization_url("s", "http://localhost/login/oauth2/code/kakao");

        assert!(url.starts_with("https://kauth.kakao.com/oauth/authorize?"));
        assert!(!url.contains("scope="));
    }
}
