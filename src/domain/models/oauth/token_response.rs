use serde::Deserialize;

/// 인가 코드 교환 응답
///
/// 프로바이더마다 `scope` 형식이 다르므로 공백/쉼표 구분을 모두 허용합니다.
/// 카카오와 페이스북은 `scope`를 생략할 수 있습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuth2TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl OAuth2TokenResponse {
    /// 부여된 scope 목록. 응답에 없으면 `requested`를 사용합니다.
    pub fn granted_scopes(&self, requested: &[String]) -> Vec<String> {
        match self.scope.as_deref() {
            Some(scope) if !scope.trim().is_empty() => scope
                .split(|c: char| c == ' ' || c == ',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            _ => requested.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granted_scopes_from_response() {
        let response: OAuth2TokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "ya29",
            "token_type": "Bearer",
            "expires_in": 3599,
            "scope": "openid https://www.googleapis.com/auth/userinfo.email"
        }))
        .unwrap();

        assert_eq!(
            response.granted_scopes(&[]),
            vec!["openid", "https://www.googleapis.com/auth/userinfo.email"]
        );
    }

    #[test]
    fn test_granted_scopes_fall_back_to_requested() {
        let response: OAuth2TokenResponse =
            serde_json::from_value(serde_json::json!({ "access_token": "EAAB" })).unwrap();

        assert_eq!(response.granted_scopes(&["email".to_string()]), vec!["email"]);
    }
}
