use serde::Serialize;
use crate::config::{ClientRegistration, SecurityPaths};

/// 로그인 페이지에 노출되는 소셜 로그인 링크
#[derive(Debug, Clone, Serialize)]
pub struct ProviderLink {
    pub registration_id: String,
    pub name: String,
    pub authorization_url: String,
}

impl From<&ClientRegistration> for ProviderLink {
    fn from(registration: &ClientRegistration) -> Self {
        Self {
            registration_id: registration.registration_id.clone(),
            name: registration.social_type.value().to_string(),
            authorization_url: format!(
                "{}/{}",
                SecurityPaths::AUTHORIZATION_BASE,
                registration.registration_id
            ),
        }
    }
}

/// `GET /login` 응답
#[derive(Debug, Clone, Serialize)]
pub struct LoginPageResponse {
    pub providers: Vec<ProviderLink>,
    /// 폼 로그인 제출 경로
    pub form_login_url: String,
    pub signup_url: String,
    /// 직전 폼 로그인이 실패했는지 (`/login?error`)
    pub error: bool,
}

impl LoginPageResponse {
    pub fn new(registrations: &[ClientRegistration], error: bool) -> Self {
        Self {
            providers: registrations.iter().map(ProviderLink::from).collect(),
            form_login_url: SecurityPaths::LOGIN_PAGE.to_string(),
            signup_url: format!("{}/signup", SecurityPaths::LOGIN_PAGE),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_links_point_to_authorization_endpoint() {
        let registrations = vec![
            ClientRegistration::google("g".to_string(), "gs".to_string()),
            ClientRegistration::kakao("k".to_string()),
        ];

        let page = LoginPageResponse::new(&registrations, false);

        assert_eq!(page.providers.len(), 2);
        assert_eq!(page.providers[0].authorization_url, "/oauth2/authorization/google");
        assert_eq!(page.providers[1].authorization_url, "/oauth2/authorization/kakao");
        assert_eq!(page.signup_url, "/login/signup");
        assert!(!page.error);
    }
}
