//! OAuth2 프로바이더 응답 모델

pub mod provider_attributes;
pub mod token_response;

pub use provider_attributes::{ProviderAttributes, SocialProfile};
pub use token_response::OAuth2TokenResponse;
