//! URL 보안 정책
//!
//! 요청 경로별 접근 규칙을 선언합니다. 규칙은 선언 순서대로 평가되며
//! 처음 일치한 규칙이 적용됩니다.
//!
//! ```text
//! 1. permitAll      /, /oauth2/**, /login/**, /loginFailure, /logout,
//!                   /css/**, /images/**, /js/**, /console/**
//! 2. hasRole        /facebook → ROLE_FACEBOOK
//!                   /google   → ROLE_GOOGLE
//!                   /kakao    → ROLE_KAKAO
//! 3. authenticated  그 외 모든 경로
//! ```
//!
//! 인증되지 않은 요청이 보호된 경로에 접근하면 로그인 페이지로 리다이렉트되고,
//! 인증되었지만 역할이 없으면 403 응답을 받습니다.

/// 보안 관련 경로 상수
pub struct SecurityPaths;

impl SecurityPaths {
    /// 로그인 진입점. 인증되지 않은 사용자는 이곳으로 리다이렉트됩니다.
    pub const LOGIN_PAGE: &'static str = "/login";
    /// OAuth2 로그인 성공 후 이동 경로
    pub const LOGIN_SUCCESS: &'static str = "/loginSuccess";
    /// OAuth2 로그인 실패 후 이동 경로
    pub const LOGIN_FAILURE: &'static str = "/loginFailure";
    /// 폼 로그인 성공 후 이동 경로
    pub const FORM_LOGIN_SUCCESS: &'static str = "/board/list";
    pub const LOGOUT: &'static str = "/logout";
    pub const LOGOUT_SUCCESS: &'static str = "/";
    /// 프로바이더 인가 요청 경로 접두사 (`/oauth2/authorization/{registration_id}`)
    pub const AUTHORIZATION_BASE: &'static str = "/oauth2/authorization";
}

/// Ant 스타일 경로 패턴
///
/// `"/x"`는 정확히 일치하는 경로만, `"/x/**"`는 `/x` 자신과 그 하위 경로를 모두 포함합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    Exact(String),
    Prefix(String),
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(prefix) => PathPattern::Prefix(prefix.to_string()),
            None => PathPattern::Exact(pattern.to_string()),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(exact) => path == exact,
            PathPattern::Prefix(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    PermitAll,
    HasRole(String),
    Authenticated,
}

#[derive(Debug, Clone)]
pub struct SecurityRule {
    pub patterns: Vec<PathPattern>,
    pub access: Access,
}

impl SecurityRule {
    fn new(patterns: &[&str], access: Access) -> Self {
        Self {
            patterns: patterns.iter().map(|p| PathPattern::parse(p)).collect(),
            access,
        }
    }

    fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }
}

/// 접근 판정 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Permit,
    /// 인증 필요 → 로그인 페이지로 리다이렉트
    LoginRequired,
    /// 인증되었지만 권한 부족
    Forbidden { required_role: String },
}

#[derive(Debug, Clone)]
pub struct SecurityPolicy {
    rules: Vec<SecurityRule>,
}

impl SecurityPolicy {
    pub fn new(rules: Vec<SecurityRule>) -> Self {
        Self { rules }
    }

    /// 요청 경로와 현재 인증의 권한 목록으로 접근 여부를 판정합니다.
    ///
    /// `authorities`가 `None`이면 인증되지 않은 요청입니다.
    pub fn decide(&self, path: &str, authorities: Option<&[String]>) -> AccessDecision {
        let access = self
            .rules
            .iter()
            .find(|rule| rule.matches(path))
            .map(|rule| &rule.access)
            .unwrap_or(&Access::Authenticated);

        match (access, authorities) {
            (Access::PermitAll, _) => AccessDecision::Permit,
            (_, None) => AccessDecision::LoginRequired,
            (Access::Authenticated, Some(_)) => AccessDecision::Permit,
            (Access::HasRole(role), Some(granted)) => {
                if granted.iter().any(|authority| authority == role) {
                    AccessDecision::Permit
                } else {
                    AccessDecision::Forbidden { required_role: role.clone() }
                }
            }
        }
    }
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        use crate::config::auth_config::SocialType;

        Self::new(vec![
            SecurityRule::new(
                &[
                    "/",
                    "/oauth2/**",
                    "/login/**",
                    SecurityPaths::LOGIN_FAILURE,
                    SecurityPaths::LOGOUT,
                    "/css/**",
                    "/images/**",
                    "/js/**",
                    "/console/**",
                ],
                Access::PermitAll,
            ),
            SecurityRule::new(&["/facebook"], Access::HasRole(SocialType::Facebook.role_type().to_string())),
            SecurityRule::new(&["/google"], Access::HasRole(SocialType::Google.role_type().to_string())),
            SecurityRule::new(&["/kakao"], Access::HasRole(SocialType::Kakao.role_type().to_string())),
            SecurityRule::new(&["/**"], Access::Authenticated),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorities(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_path_pattern_matching() {
        let prefix = PathPattern::parse("/login/**");
        assert!(prefix.matches("/login"));
        assert!(prefix.matches("/login/oauth2/code/google"));
        assert!(!prefix.matches("/loginSuccess"));

        let exact = PathPattern::parse("/google");
        assert!(exact.matches("/google"));
        assert!(!exact.matches("/google/x"));

        let root = PathPattern::parse("/**");
        assert!(root.matches("/board/list"));
    }

    #[test]
    fn test_public_paths_are_permitted_without_authentication() {
        let policy = SecurityPolicy::default();

        for path in [
            "/",
            "/login",
            "/login/signup",
            "/oauth2/authorization/kakao",
            "/login/oauth2/code/google",
            "/loginFailure",
            "/logout",
            "/css/app.css",
            "/images/logo.png",
            "/js/app.js",
            "/console/status",
        ] {
            assert_eq!(policy.decide(path, None), AccessDecision::Permit, "path: {}", path);
        }
    }

    #[test]
    fn test_protected_paths_require_login() {
        let policy = SecurityPolicy::default();

        for path in ["/loginSuccess", "/board/list", "/board/3", "/google", "/kakao"] {
            assert_eq!(policy.decide(path, None), AccessDecision::LoginRequired, "path: {}", path);
        }
    }

    #[test]
    fn test_any_authentication_opens_general_paths() {
        let policy = SecurityPolicy::default();
        let granted = authorities(&["ROLE_USER", "SCOPE_email"]);

        assert_eq!(policy.decide("/board/list", Some(&granted)), AccessDecision::Permit);
        assert_eq!(policy.decide("/loginSuccess", Some(&granted)), AccessDecision::Permit);
    }

    #[test]
    fn test_role_gated_paths() {
        let policy = SecurityPolicy::default();
        let kakao = authorities(&["ROLE_KAKAO"]);

        assert_eq!(policy.decide("/kakao", Some(&kakao)), AccessDecision::Permit);
        assert_eq!(
            policy.decide("/google", Some(&kakao)),
            AccessDecision::Forbidden { required_role: "ROLE_GOOGLE".to_string() }
        );
        assert_eq!(
            policy.decide("/facebook", Some(&kakao)),
            AccessDecision::Forbidden { required_role: "ROLE_FACEBOOK".to_string() }
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let policy = SecurityPolicy::new(vec![
            SecurityRule::new(&["/google"], Access::PermitAll),
            SecurityRule::new(&["/google"], Access::HasRole("ROLE_GOOGLE".to_string())),
        ]);

        assert_eq!(policy.decide("/google", None), AccessDecision::Permit);
    }

    #[test]
    fn test_unmatched_path_defaults_to_authenticated() {
        let policy = SecurityPolicy::new(Vec::new());
        assert_eq!(policy.decide("/anything", None), AccessDecision::LoginRequired);
    }
}
