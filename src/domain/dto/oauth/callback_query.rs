use serde::Deserialize;
use crate::utils::string_utils::deserialize_optional_string;

/// 프로바이더가 리다이렉트 URI로 되돌려주는 쿼리 파라미터
///
/// 사용자가 동의를 거부하면 `code` 대신 `error`가 옵니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_callback() {
        let query: OAuthCallbackQuery =
            parse(r#"{"code": "abc", "state": "s1"}"#);

        assert_eq!(query.code.as_deref(), Some("abc"));
        assert_eq!(query.state.as_deref(), Some("s1"));
        assert!(query.error.is_none());
    }

    #[test]
    fn test_blank_values_become_none() {
        let query: OAuthCallbackQuery =
            parse(r#"{"code": "  ", "error": "access_denied"}"#);

        assert!(query.code.is_none());
        assert!(query.state.is_none());
        assert_eq!(query.error.as_deref(), Some("access_denied"));
    }

    fn parse(json: &str) -> OAuthCallbackQuery {
        serde_json::from_str(json).unwrap()
    }
}
