//! # 문자열 유틸리티

use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 공백만 있는 값은 `ValidationError`, 그 외에는 앞뒤 공백을 제거한 값을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  Hello  ", "제목").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "제목").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 빈 문자열이나 공백만 있는 값을 `None`으로 정리합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// `#[serde(deserialize_with = "deserialize_optional_string")]`용 역직렬화 함수
///
/// `""`, `"   "`, `null`은 모두 `None`이 됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
