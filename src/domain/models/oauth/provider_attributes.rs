//! 프로바이더별 사용자 속성
//!
//! 프로바이더 user-info 응답을 registration id에 따라 타입이 있는 구조로 해석하고,
//! 로컬 사용자 생성에 필요한 [`SocialProfile`]로 변환합니다.
//!
//! | 프로바이더 | 이름 | 이메일 | 식별자 |
//! |------------|------|--------|--------|
//! | Google | `name` | `email` | `sub` (또는 `id`) |
//! | Facebook | `name` | `email` | `id` |
//! | Kakao | `properties.profile_nickname` | `account_email` | `id` (숫자) |

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::config::SocialType;
use crate::core::errors::AppError;
use crate::domain::entities::users::user::NewUser;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleAttributes {
    #[serde(alias = "sub")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacebookAttributes {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KakaoProperties {
    pub profile_nickname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KakaoAttributes {
    pub id: i64,
    pub properties: KakaoProperties,
    pub account_email: String,
}

/// 인증된 주체의 프로바이더 속성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum ProviderAttributes {
    Google(GoogleAttributes),
    Facebook(FacebookAttributes),
    Kakao(KakaoAttributes),
    /// 매핑 규칙이 없는 프로바이더. 원본 속성을 그대로 보관합니다.
    Unknown {
        registration_id: String,
        attributes: Value,
    },
}

impl ProviderAttributes {
    /// user-info 응답을 registration id에 맞는 구조로 해석합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 알려진 프로바이더의 필수 속성이 없거나 형식이 다른 경우
    pub fn from_user_info(registration_id: &str, user_info: Value) -> Result<Self, AppError> {
        let invalid = |e: serde_json::Error| {
            AppError::AuthenticationError(format!("{} 사용자 정보 형식 오류: {}", registration_id, e))
        };

        match SocialType::from_registration_id(registration_id) {
            Some(SocialType::Google) => serde_json::from_value(user_info).map(Self::Google).map_err(invalid),
            Some(SocialType::Facebook) => serde_json::from_value(user_info).map(Self::Facebook).map_err(invalid),
            Some(SocialType::Kakao) => serde_json::from_value(user_info).map(Self::Kakao).map_err(invalid),
            Some(SocialType::Guest) | None => Ok(Self::Unknown {
                registration_id: registration_id.to_string(),
                attributes: user_info,
            }),
        }
    }

    pub fn registration_id(&self) -> &str {
        match self {
            ProviderAttributes::Google(_) => SocialType::Google.value(),
            ProviderAttributes::Facebook(_) => SocialType::Facebook.value(),
            ProviderAttributes::Kakao(_) => SocialType::Kakao.value(),
            ProviderAttributes::Unknown { registration_id, .. } => registration_id,
        }
    }

    /// 로컬 사용자 생성에 필요한 프로필을 추출합니다. 알 수 없는 프로바이더는 `None`입니다.
    pub fn to_profile(&self) -> Option<SocialProfile> {
        match self {
            ProviderAttributes::Google(google) => Some(SocialProfile {
                name: google.name.clone(),
                email: google.email.clone(),
                principal: google.id.clone(),
                social_type: SocialType::Google,
            }),
            ProviderAttributes::Facebook(facebook) => Some(SocialProfile {
                name: facebook.name.clone(),
                email: facebook.email.clone(),
                principal: facebook.id.clone(),
                social_type: SocialType::Facebook,
            }),
            ProviderAttributes::Kakao(kakao) => Some(SocialProfile {
                name: kakao.properties.profile_nickname.clone(),
                email: kakao.account_email.clone(),
                principal: kakao.id.to_string(),
                social_type: SocialType::Kakao,
            }),
            ProviderAttributes::Unknown { .. } => None,
        }
    }
}

/// 프로바이더 공통 사용자 프로필
#[derive(Debug, Clone, PartialEq)]
pub struct SocialProfile {
    pub name: String,
    pub email: String,
    pub principal: String,
    pub social_type: SocialType,
}

impl From<SocialProfile> for NewUser {
    fn from(profile: SocialProfile) -> Self {
        NewUser::social(profile.name, profile.email, profile.principal, profile.social_type)
    }
}
