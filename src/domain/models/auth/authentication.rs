//! 현재 인증 정보
//!
//! 세션에 저장되는 인증 주체입니다. 값은 불변이며, 권한 변경은
//! 새 값을 만들어 세션에 다시 저장하는 방식으로 이루어집니다.

use serde::{Deserialize, Serialize};
use crate::domain::models::oauth::ProviderAttributes;

/// OAuth2 로그인 직후 부여되는 기본 권한
pub const ROLE_USER: &str = "ROLE_USER";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Authentication {
    /// 소셜 로그인으로 인증된 주체
    OAuth2 {
        registration_id: String,
        attributes: ProviderAttributes,
        authorities: Vec<String>,
    },
    /// 이메일/비밀번호 폼 로그인으로 인증된 주체
    Form {
        email: String,
        authorities: Vec<String>,
    },
}

impl Authentication {
    /// 코드 교환 직후의 OAuth2 인증. 권한은 `ROLE_USER`와 부여된 scope별 `SCOPE_*`입니다.
    pub fn oauth2(registration_id: &str, attributes: ProviderAttributes, scopes: &[String]) -> Self {
        let authorities = std::iter::once(ROLE_USER.to_string())
            .chain(scopes.iter().map(|scope| format!("SCOPE_{}", scope)))
            .collect();

        Authentication::OAuth2 {
            registration_id: registration_id.to_string(),
            attributes,
            authorities,
        }
    }

    pub fn form(email: &str, role: &str) -> Self {
        Authentication::Form {
            email: email.to_string(),
            authorities: vec![role.to_string()],
        }
    }

    pub fn authorities(&self) -> &[String] {
        match self {
            Authentication::OAuth2 { authorities, .. } | Authentication::Form { authorities, .. } => authorities,
        }
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities().iter().any(|granted| granted == authority)
    }

    /// 권한 목록만 바꾼 새 인증 값을 반환합니다.
    pub fn with_authorities(&self, authorities: Vec<String>) -> Self {
        match self {
            Authentication::OAuth2 { registration_id, attributes, .. } => Authentication::OAuth2 {
                registration_id: registration_id.clone(),
                attributes: attributes.clone(),
                authorities,
            },
            Authentication::Form { email, .. } => Authentication::Form {
                email: email.clone(),
                authorities,
            },
        }
    }

    /// `role`이 없으면 권한 목록이 정확히 `[role]`인 새 값을, 있으면 `None`을 반환합니다.
    pub fn synced_to_role(&self, role: &str) -> Option<Self> {
        if self.has_authority(role) {
            None
        } else {
            Some(self.with_authorities(vec![role.to_string()]))
        }
    }

    /// 로그 출력용 주체 이름
    pub fn name(&self) -> String {
        match self {
            Authentication::OAuth2 { registration_id, attributes, .. } => attributes
                .to_profile()
                .map(|profile| format!("{}:{}", registration_id, profile.principal))
                .unwrap_or_else(|| registration_id.clone()),
            Authentication::Form { email, .. } => email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kakao_attributes() -> ProviderAttributes {
        ProviderAttributes::from_user_info(
            "kakao",
            json!({ "id": 456, "properties": { "profile_nickname": "Bob" }, "account_email": "b@x.com" }),
        )
        .unwrap()
    }

    #[test]
    fn test_oauth2_initial_authorities() {
        let authentication = Authentication::oauth2(
            "google",
            ProviderAttributes::Unknown { registration_id: "google".into(), attributes: json!({}) },
            &["openid".to_string(), "email".to_string()],
        );

        assert_eq!(authentication.authorities(), ["ROLE_USER", "SCOPE_openid", "SCOPE_email"]);
    }

    #[test]
    fn test_synced_to_role_replaces_authorities() {
        let original = Authentication::oauth2("kakao", kakao_attributes(), &[]);

        let synced = original.synced_to_role("ROLE_KAKAO").unwrap();

        assert_eq!(synced.authorities(), ["ROLE_KAKAO"]);
        // 원래 값은 변경되지 않음
        assert_eq!(original.authorities(), ["ROLE_USER"]);
    }

    #[test]
    fn test_synced_to_role_is_none_when_role_present() {
        let authentication = Authentication::oauth2("kakao", kakao_attributes(), &[])
            .with_authorities(vec!["ROLE_KAKAO".to_string(), "SCOPE_profile".to_string()]);

        assert!(authentication.synced_to_role("ROLE_KAKAO").is_none());
    }

    #[test]
    fn test_form_authentication() {
        let authentication = Authentication::form("c@x.com", "ROLE_GUEST");

        assert!(authentication.has_authority("ROLE_GUEST"));
        assert_eq!(authentication.name(), "c@x.com");
    }

    #[test]
    fn test_name_uses_principal() {
        let authentication = Authentication::oauth2("kakao", kakao_attributes(), &[]);
        assert_eq!(authentication.name(), "kakao:456");
    }

    #[test]
    fn test_serde_roundtrip_keeps_provider_shape() {
        let authentication = Authentication::oauth2("kakao", kakao_attributes(), &[]);

        let json = serde_json::to_string(&authentication).unwrap();
        let restored: Authentication = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, authentication);
    }
}
