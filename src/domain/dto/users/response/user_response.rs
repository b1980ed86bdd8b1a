use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::config::SocialType;
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,

    /// 프로바이더 측 사용자 식별자 (폼 가입 사용자는 없음)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,

    pub social_type: SocialType,

    /// `ROLE_GOOGLE`, `ROLE_FACEBOOK`, `ROLE_KAKAO`, `ROLE_GUEST`
    pub role: String,

    pub created_date: DateTime,
    pub updated_date: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let role = user.role_type().to_string();
        let User {
            id,
            name,
            email,
            principal,
            social_type,
            created_date,
            updated_date,
            ..
        } = user;

        Self {
            id,
            name,
            email,
            principal,
            social_type,
            role,
            created_date,
            updated_date,
        }
    }
}

/// 회원가입 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user: UserResponse,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_hides_password_and_exposes_role() {
        let now = DateTime::now();
        let user = User {
            id: 3,
            name: "Carol".to_string(),
            password: Some("$2b$12$hash".to_string()),
            email: "c@x.com".to_string(),
            principal: None,
            social_type: SocialType::Guest,
            created_date: now,
            updated_date: now,
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["role"], "ROLE_GUEST");
        assert_eq!(json["social_type"], "guest");
        assert!(json.get("password").is_none());
        assert!(json.get("principal").is_none());
    }
}
