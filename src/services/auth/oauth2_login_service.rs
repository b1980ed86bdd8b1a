//! OAuth2 로그인 클라이언트
//!
//! Authorization Code 흐름의 클라이언트 측 단계를 담당합니다.
//!
//! ```text
//! 1. /oauth2/authorization/{id}   → state 발급, 프로바이더 인가 페이지로 리다이렉트
//! 2. /login/oauth2/code/{id}      → state 검증
//! 3. token_uri (POST, form)       → access token 교환
//! 4. user_info_uri (GET, Bearer)  → 사용자 속성 조회
//! 5. Authentication::OAuth2 생성  → ROLE_USER + SCOPE_*
//! ```

use log::{debug, info};
use once_cell::sync::Lazy;
use serde_json::Value;
use singleton_macro::service;
use uuid::Uuid;
use crate::{
    config::ClientRegistration,
    core::errors::AppError,
    domain::models::{
        auth::authentication::Authentication,
        oauth::{OAuth2TokenResponse, ProviderAttributes},
    },
};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// 인가 요청 리다이렉트 정보
#[derive(Debug, Clone)]
pub struct AuthorizationRedirect {
    pub url: String,
    pub state: String,
}

#[service(name = "oauth2_login")]
pub struct OAuth2LoginService {}

impl OAuth2LoginService {
    /// 새 state를 발급하고 프로바이더 인가 URL을 생성합니다.
    pub fn authorization_redirect(&self, registration: &ClientRegistration) -> AuthorizationRedirect {
        build_authorization_redirect(registration, &registration.redirect_uri())
    }

    /// 인가 코드로 로그인을 완료하고 인증 정보를 반환합니다.
    pub async fn complete_login(
        &self,
        registration: &ClientRegistration,
        code: &str,
    ) -> Result<Authentication, AppError> {
        let token = self.exchange_code_for_token(registration, code).await?;
        let user_info = self.fetch_user_info(registration, &token.access_token).await?;

        let attributes = ProviderAttributes::from_user_info(&registration.registration_id, user_info)?;
        let scopes = token.granted_scopes(&registration.scopes);

        info!("🔐 OAuth2 로그인 완료: {}", attributes.registration_id());
        Ok(Authentication::oauth2(&registration.registration_id, attributes, &scopes))
    }

    async fn exchange_code_for_token(
        &self,
        registration: &ClientRegistration,
        code: &str,
    ) -> Result<OAuth2TokenResponse, AppError> {
        let redirect_uri = registration.redirect_uri();
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
            ("client_id", registration.client_id.as_str()),
            ("client_secret", registration.client_secret.as_str()),
        ];

        let response = HTTP_CLIENT
            .post(&registration.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 요청 실패: {}", registration.registration_id, e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 토큰 교환 실패: {}", registration.registration_id, error_text
            )));
        }

        response
            .json::<OAuth2TokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 응답 파싱 실패: {}", registration.registration_id, e)))
    }

    async fn fetch_user_info(
        &self,
        registration: &ClientRegistration,
        access_token: &str,
    ) -> Result<Value, AppError> {
        let response = HTTP_CLIENT
            .get(&registration.user_info_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 사용자 정보 요청 실패: {}", registration.registration_id, e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 사용자 정보 조회 실패: {}", registration.registration_id, error_text
            )));
        }

        let user_info = response
            .json::<Value>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 사용자 정보 파싱 실패: {}", registration.registration_id, e)))?;

        debug!("{} 사용자 정보 수신", registration.registration_id);
        Ok(user_info)
    }
}

fn build_authorization_redirect(registration: &ClientRegistration, redirect_uri: &str) -> AuthorizationRedirect {
    let state = Uuid::new_v4().simple().to_string();
    let url = registration.authorization_url(&state, redirect_uri);

    AuthorizationRedirect { url, state }
}

/// 콜백의 state가 세션에 저장된 값과 일치하는지 확인합니다.
pub fn verify_state(expected: Option<&str>, received: Option<&str>) -> Result<(), AppError> {
    match (expected, received) {
        (Some(expected), Some(received)) if !expected.is_empty() && expected == received => Ok(()),
        _ => Err(AppError::AuthenticationError("유효하지 않은 OAuth state".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_state() {
        assert!(verify_state(Some("abc"), Some("abc")).is_ok());

        assert!(verify_state(Some("abc"), Some("abd")).is_err());
        assert!(verify_state(None, Some("abc")).is_err());
        assert!(verify_state(Some("abc"), None).is_err());
        assert!(verify_state(Some(""), Some("")).is_err());
    }

    #[test]
    fn test_authorization_redirect_embeds_fresh_state() {
        let registration = ClientRegistration::kakao("kakao-id".to_string());
        let redirect_uri = "http://localhost:8080/login/oauth2/code/kakao";

        let first = build_authorization_redirect(&registration, redirect_uri);
        let second = build_authorization_redirect(&registration, redirect_uri);

        assert_ne!(first.state, second.state);
        assert!(first.url.contains(&format!("state={}", first.state)));
        assert!(first.url.contains("client_id=kakao-id"));
    }
}
