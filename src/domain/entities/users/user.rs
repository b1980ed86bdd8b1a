//! User Entity Implementation
//!
//! 소셜 로그인 사용자와 폼 회원가입(`Guest`) 사용자를 모두 표현하는 엔티티입니다.
//! 이메일이 프로바이더 간 사용자를 식별하는 자연 키입니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::config::SocialType;

/// 사용자 엔티티
///
/// `id`, `created_date`, `updated_date`는 저장 시점에 리포지토리가 채웁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// `counters` 컬렉션의 `users` 시퀀스에서 발급된 식별자
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    /// bcrypt 해시. 소셜 사용자는 `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub email: String,
    /// 프로바이더가 발급한 사용자 식별자
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    pub social_type: SocialType,
    pub created_date: DateTime,
    pub updated_date: DateTime,
}

impl User {
    /// 사용자의 가입 경로에 대응하는 권한 (`ROLE_KAKAO` 등)
    pub fn role_type(&self) -> &'static str {
        self.social_type.role_type()
    }
}

/// 저장 전 사용자
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub password: Option<String>,
    pub email: String,
    pub principal: Option<String>,
    pub social_type: SocialType,
}

impl NewUser {
    pub fn social(name: String, email: String, principal: String, social_type: SocialType) -> Self {
        Self {
            name,
            password: None,
            email,
            principal: Some(principal),
            social_type,
        }
    }

    /// 폼 회원가입 사용자. `password_hash`는 이미 해싱된 값이어야 합니다.
    pub fn guest(name: String, email: String, password_hash: String) -> Self {
        Self {
            name,
            password: Some(password_hash),
            email,
            principal: None,
            social_type: SocialType::Guest,
        }
    }

    /// 발급된 식별자와 저장 시각으로 엔티티를 완성합니다.
    pub fn into_user(self, id: i64, now: DateTime) -> User {
        User {
            id,
            name: self.name,
            password: self.password,
            email: self.email,
            principal: self.principal,
            social_type: self.social_type,
            created_date: now,
            updated_date: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_user_has_no_password() {
        let user = NewUser::social(
            "Bob".to_string(),
            "b@x.com".to_string(),
            "456".to_string(),
            SocialType::Kakao,
        )
        .into_user(1, DateTime::from_millis(1_700_000_000_000));

        assert_eq!(user.id, 1);
        assert_eq!(user.principal.as_deref(), Some("456"));
        assert!(user.password.is_none());
        assert_eq!(user.role_type(), "ROLE_KAKAO");
    }

    #[test]
    fn test_guest_user() {
        let user = NewUser::guest("Carol".to_string(), "c@x.com".to_string(), "$2b$04$hash".to_string())
            .into_user(2, DateTime::from_millis(0));

        assert_eq!(user.social_type, SocialType::Guest);
        assert_eq!(user.password.as_deref(), Some("$2b$04$hash"));
        assert!(user.principal.is_none());
        assert_eq!(user.role_type(), "ROLE_GUEST");
    }

    #[test]
    fn test_timestamps_are_set_together() {
        let now = DateTime::from_millis(1_700_000_000_000);
        let user = NewUser::guest("Dan".to_string(), "d@x.com".to_string(), "h".to_string())
            .into_user(3, now);

        assert_eq!(user.created_date, now);
        assert_eq!(user.updated_date, now);
    }

    #[test]
    fn test_serialized_shape() {
        let user = NewUser::social(
            "Alice".to_string(),
            "a@x.com".to_string(),
            "123".to_string(),
            SocialType::Google,
        )
        .into_user(10, DateTime::from_millis(0));

        let doc = mongodb::bson::to_document(&user).unwrap();
        assert_eq!(doc.get_i64("_id").unwrap(), 10);
        assert_eq!(doc.get_str("social_type").unwrap(), "google");
        assert!(!doc.contains_key("password"));
    }
}
