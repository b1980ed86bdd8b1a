//! OAuth2 콜백 쿼리와 로그인 페이지 응답

pub mod callback_query;
pub mod login_page_response;

pub use callback_query::OAuthCallbackQuery;
pub use login_page_response::{LoginPageResponse, ProviderLink};
