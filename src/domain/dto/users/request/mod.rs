pub mod login_request;
pub mod signup_request;

pub use login_request::LocalLoginRequest;
pub use signup_request::SignupRequest;
