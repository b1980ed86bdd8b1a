use serde::Deserialize;
use validator::Validate;

/// 폼 로그인 요청 (`application/x-www-form-urlencoded` 또는 JSON)
#[derive(Debug, Deserialize, Validate)]
pub struct LocalLoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
