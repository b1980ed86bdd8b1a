//! URL 접근 정책 미들웨어
//!
//! 세션 쿠키로 서버 측 세션을 불러오고 [`SecurityPolicy`]로 접근 여부를 판정합니다.
//! 통과한 요청에는 [`RequestSession`](crate::domain::models::auth::session::RequestSession)이
//! 요청 확장에 들어가며, 핸들러와 사용자 추출자가 이를 사용합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::config::SecurityPolicy;
use crate::middlewares::security_inner::SecurityMiddlewareService;
use crate::repositories::sessions::{SessionRepository, SessionStore};

pub struct SecurityMiddleware {
    policy: Rc<SecurityPolicy>,
    sessions: Arc<dyn SessionStore>,
}

impl SecurityMiddleware {
    pub fn new(policy: SecurityPolicy, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            policy: Rc::new(policy),
            sessions,
        }
    }
}

/// 기본 URL 정책과 Redis 세션 저장소를 사용합니다.
/// `ServiceLocator` 초기화 이후에 생성해야 합니다.
impl Default for SecurityMiddleware {
    fn default() -> Self {
        Self::new(SecurityPolicy::default(), SessionRepository::instance())
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SecurityMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            policy: self.policy.clone(),
            sessions: self.sessions.clone(),
        }))
    }
}
