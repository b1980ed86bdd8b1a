//! # Core Framework Module
//!
//! 서비스 전반에서 공유하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 싱글톤 인스턴스 저장소
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스/리포지토리 등록
//! - **의존성 해결**: `Arc<T>` 필드 타입 기반 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Service` | `#[service]` 매크로 |
//! | `@Repository` | `#[repository]` 매크로 |
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//!
//! ServiceLocator::set(database);
//! ServiceLocator::set(redis);
//! ServiceLocator::initialize_all().await?;
//!
//! let social_user_service = SocialUserService::instance();
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Service not found: BoardRepository. Make sure it's registered...
//! ```
//! **해결**: `#[repository]` 매크로 적용 또는 `ServiceLocator::set()` 으로 수동 등록.
//! 필드로 주입되는 리포지토리는 한 단어 이름(`user`, `board`, `session`)으로 등록합니다.

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
