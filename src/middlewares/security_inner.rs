//! SecurityMiddleware 접근 판정 로직
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;
use log::{debug, warn};
use crate::config::{AccessDecision, SecurityPaths, SecurityPolicy, SessionConfig};
use crate::core::errors::AppError;
use crate::domain::models::auth::session::RequestSession;
use crate::repositories::sessions::SessionStore;
use crate::services::auth::session_service::load_session;

pub struct SecurityMiddlewareService<S> {
    pub service: Rc<S>,
    pub policy: Rc<SecurityPolicy>,
    pub sessions: Arc<dyn SessionStore>,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let policy = self.policy.clone();
        let sessions = self.sessions.clone();

        Box::pin(async move {
            let session = match req.cookie(&SessionConfig::cookie_name()) {
                Some(cookie) => load_session(sessions.as_ref(), Some(cookie.value())).await,
                None => RequestSession::anonymous(),
            };

            // 라우터와 같은 디코딩된 경로로 판정 (`/%6Bakao` == `/kakao`)
            let path = req.match_info().as_str().to_string();
            let decision = policy.decide(&path, session.data.authorities());

            let response = match decision {
                AccessDecision::Permit => {
                    req.extensions_mut().insert(session);
                    let res = service.call(req).await?;
                    return Ok(res.map_into_left_body());
                }
                AccessDecision::LoginRequired => {
                    debug!("로그인 필요: {}", path);
                    HttpResponse::Found()
                        .insert_header((header::LOCATION, SecurityPaths::LOGIN_PAGE))
                        .finish()
                }
                AccessDecision::Forbidden { required_role } => {
                    warn!("권한 부족: {} (필요 권한: {})", path, required_role);
                    AppError::AuthorizationError(format!("{} 권한이 필요합니다", required_role))
                        .error_response()
                }
            };

            let (req, _) = req.into_parts();
            Ok(ServiceResponse::new(req, response).map_into_right_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test::{self as actix_test}, web, App, HttpResponse};
    use actix_web::cookie::Cookie;
    use actix_web::http::{header, StatusCode};
    use crate::config::{SecurityPolicy, SessionConfig};
    use crate::domain::models::auth::{
        authentication::Authentication,
        session::{RequestSession, SessionData},
    };
    use crate::middlewares::SecurityMiddleware;
    use crate::repositories::sessions::session_store::MemorySessionStore;

    async fn current_session(session: RequestSession) -> HttpResponse {
        HttpResponse::Ok().body(session.id.unwrap_or_default())
    }

    fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/login", web::get().to(current_session))
            .route("/board/list", web::get().to(current_session))
            .route("/kakao", web::get().to(current_session));
    }

    fn middleware(store: MemorySessionStore) -> SecurityMiddleware {
        SecurityMiddleware::new(SecurityPolicy::default(), Arc::new(store))
    }

    fn store_with_role(role: &str) -> MemorySessionStore {
        let data = SessionData::authenticated(Authentication::form("c@x.com", role));
        MemorySessionStore::with_session("sid-1", data, 1800)
    }

    fn session_cookie() -> Cookie<'static> {
        Cookie::new(SessionConfig::cookie_name(), "sid-1")
    }

    #[actix_web::test]
    async fn test_anonymous_request_to_public_path_passes() {
        let app = actix_test::init_service(
            App::new().wrap(middleware(MemorySessionStore::default())).configure(routes),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/login").to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_anonymous_request_to_protected_path_redirects_to_login() {
        let app = actix_test::init_service(
            App::new().wrap(middleware(MemorySessionStore::default())).configure(routes),
        )
        .await;

        for uri in ["/board/list", "/kakao"] {
            let req = actix_test::TestRequest::get().uri(uri).to_request();
            let resp = actix_test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::FOUND);
            assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
        }
    }

    #[actix_web::test]
    async fn test_unknown_session_cookie_is_anonymous() {
        let app = actix_test::init_service(
            App::new().wrap(middleware(MemorySessionStore::default())).configure(routes),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/board/list")
            .cookie(session_cookie())
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
    }

    #[actix_web::test]
    async fn test_matching_role_is_permitted_with_session() {
        let app = actix_test::init_service(
            App::new().wrap(middleware(store_with_role("ROLE_KAKAO"))).configure(routes),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/kakao")
            .cookie(session_cookie())
            .to_request();
        let body = actix_test::call_and_read_body(&app, req).await;

        assert_eq!(body, "sid-1");
    }

    #[actix_web::test]
    async fn test_authenticated_guest_opens_general_paths() {
        let app = actix_test::init_service(
            App::new().wrap(middleware(store_with_role("ROLE_GUEST"))).configure(routes),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/board/list")
            .cookie(session_cookie())
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_missing_role_is_forbidden_with_error_body() {
        let app = actix_test::init_service(
            App::new().wrap(middleware(store_with_role("ROLE_GUEST"))).configure(routes),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/kakao")
            .cookie(session_cookie())
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("ROLE_KAKAO"));
    }

    #[actix_web::test]
    async fn test_percent_encoded_path_is_checked_as_decoded() {
        let app = actix_test::init_service(
            App::new().wrap(middleware(store_with_role("ROLE_GUEST"))).configure(routes),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/%6Bakao")
            .cookie(session_cookie())
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
