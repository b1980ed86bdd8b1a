//! # 폼 회원가입 요청 DTO
//!
//! 소셜 계정 없이 이메일/비밀번호로 가입하는 `Guest` 사용자의 요청입니다.
//!
//! ## 검증 규칙
//!
//! - `name`: 1-50자
//! - `email`: 이메일 형식. 중복 여부는 서비스 계층에서 검증
//! - `password`: 8자 이상, 대문자/소문자/숫자 포함
//! - `password_confirm`: 있으면 `password`와 일치
//!
//! ```json
//! {
//!   "name": "Carol",
//!   "email": "c@x.com",
//!   "password": "Passw0rd",
//!   "password_confirm": "Passw0rd"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_passwords_match"))]
pub struct SignupRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(
        min = 8,
        message = "비밀번호는 최소 8자 이상이어야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 생략하면 확인하지 않습니다.
    #[serde(default)]
    pub password_confirm: Option<String>,
}

fn validate_passwords_match(req: &SignupRequest) -> Result<(), ValidationError> {
    if matches!(&req.password_confirm, Some(confirm) if confirm != &req.password) {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}

/// 비밀번호 보안 강도 검증 (대문자, 소문자, 숫자 필수 포함)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}
