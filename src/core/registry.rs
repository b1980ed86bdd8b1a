//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! `#[service]`, `#[repository]` 매크로가 생성한 등록 정보를 `inventory`로 수집하고,
//! 타입별 싱글톤 인스턴스를 보관하는 전역 컨테이너입니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ #[service] 매크로 → ServiceRegistration 생성
//!    ├─ #[repository] 매크로 → RepositoryRegistration 생성
//!    └─ inventory::collect! → 전역 레지스트리에 등록
//!
//! 2. 런타임 초기화
//!    ├─ Database, RedisClient 직접 등록 (ServiceLocator::set)
//!    └─ ServiceLocator::initialize_all() → 모든 리포지토리/서비스 생성
//!
//! 3. 의존성 주입
//!    ├─ Arc<T> 필드 감지 → ServiceLocator::get::<T>() 호출
//!    ├─ 타입 이름 → 엔티티 이름 ("BoardRepository" → "board")
//!    └─ 생성된 인스턴스 캐싱
//! ```
//!
//! ## 이름 규칙
//!
//! 타입 이름에서 `Repository`/`Service` 접미사를 떼고 소문자로 바꾼 값이
//! 등록 이름(`_repository`/`_service` 접미사 제거)과 일치해야 주입됩니다.
//!
//! ```rust,ignore
//! #[repository(name = "board", collection = "boards")]
//! pub struct BoardRepository { db: Arc<Database>, redis: Arc<RedisClient> }
//!
//! #[service(name = "board")]
//! pub struct BoardService {
//!     board_repo: Arc<BoardRepository>, // "board" 로 조회되어 주입
//!     user_repo: Arc<UserRepository>,   // "user" 로 조회되어 주입
//! }
//! ```
//!
//! 여러 단어 이름의 서비스(`SocialUserService` 등)는 필드로 주입하지 않고
//! `instance()`로만 사용합니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use log::{debug, error, info};
use once_cell::sync::Lazy;

/// 비즈니스 로직 컴포넌트
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 컴포넌트
///
/// 매크로가 `collection::<T>()`, `cache_key()`, `invalidate_cache()`,
/// `invalidate_collection_cache()` 헬퍼를 함께 생성합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (extract_clean_name_static(registration.name), registration))
        .collect();

    debug!("🗂️ Service 이름 캐시 초기화: {}개", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (extract_clean_name_static(registration.name), registration))
        .collect();

    debug!("🗂️ Repository 이름 캐시 초기화: {}개", cache.len());
    cache
});

/// 등록 이름에서 `_service` / `_repository` 접미사를 제거합니다.
fn extract_clean_name_static(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 타입 이름에서 엔티티 이름을 추출합니다. (`"BoardRepository"` → `"board"`)
fn entity_name(clean_type_name: &str, suffix: &str) -> String {
    clean_type_name
        .strip_suffix(suffix)
        .unwrap_or(clean_type_name)
        .to_lowercase()
}

pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    fn read_instances(&self) -> RwLockReadGuard<'_, HashMap<TypeId, Arc<dyn Any + Send + Sync>>> {
        self.instances.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_instances(&self) -> RwLockWriteGuard<'_, HashMap<TypeId, Arc<dyn Any + Send + Sync>>> {
        self.instances.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_initializing(&self) -> RwLockWriteGuard<'_, HashSet<TypeId>> {
        self.initializing.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 타입 `T`의 싱글톤 인스턴스를 반환합니다.
    ///
    /// # Panics
    ///
    /// * 등록되지 않은 타입
    /// * 순환 의존성
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = LOCATOR.read_instances().get(&type_id) {
            return downcast_instance::<T>(instance.clone(), type_name);
        }

        // 순환 참조 감지
        if !LOCATOR.write_initializing().insert(type_id) {
            error!("❌ Circular dependency detected for type: {}", type_name);
            panic!("Circular dependency detected: {} is already being initialized", type_name);
        }

        let result = std::panic::catch_unwind(|| Self::create_instance::<T>(type_id, type_name));

        LOCATOR.write_initializing().remove(&type_id);

        match result {
            Ok(instance) => instance,
            Err(e) => {
                error!("Failed to create instance for {}: {:?}", type_name, e);
                panic!("Failed to create instance for {}", type_name);
            }
        }
    }

    fn create_instance<T: 'static + Send + Sync>(type_id: TypeId, type_name: &str) -> Arc<T> {
        let clean_type_name = Self::extract_clean_type_name(type_name);

        let constructor = if clean_type_name.ends_with("Repository") {
            let name = entity_name(&clean_type_name, "Repository");
            REPOSITORY_NAME_CACHE
                .get(&name)
                .map(|registration| (registration.name, registration.constructor))
                .unwrap_or_else(|| panic!("No repository found for entity: {}", name))
        } else if clean_type_name.ends_with("Service") {
            let name = entity_name(&clean_type_name, "Service");
            SERVICE_NAME_CACHE
                .get(&name)
                .map(|registration| (registration.name, registration.constructor))
                .unwrap_or_else(|| panic!("No service found for entity: {}", name))
        } else {
            panic!(
                "Service not found: {}. Make sure it's registered with #[service] or #[repository] macro, or manually registered with ServiceLocator::set()",
                type_name
            );
        };

        let (registration_name, constructor) = constructor;
        let boxed_instance = constructor();

        let instance = match boxed_instance.downcast::<Arc<T>>() {
            Ok(arc_instance) => (*arc_instance).clone(),
            Err(_) => panic!("Type mismatch for registration: {}", registration_name),
        };

        // 생성 도중 다른 경로에서 먼저 등록되었다면 기존 인스턴스를 유지
        let mut instances = LOCATOR.write_instances();
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>)
            .clone();
        drop(instances);

        downcast_instance::<T>(stored, type_name)
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }

    /// 매크로로 생성되지 않는 인프라 컴포넌트(Database, RedisClient)를 등록합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        info!("📦 Registering: {}", clean_name);

        LOCATOR.write_instances().insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        info!("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        for registration in &repo_registrations {
            debug!("  ├─ repository {} 생성", registration.name);
            let _instance = (registration.constructor)();
        }
        info!("✅ [1/2] Repository instances created: {}", repo_registrations.len());

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        for registration in &service_registrations {
            debug!("  ├─ service {} 생성", registration.name);
            let _instance = (registration.constructor)();
        }
        info!("✅ [2/2] Service instances created: {}", service_registrations.len());

        Ok(())
    }
}

fn downcast_instance<T: 'static + Send + Sync>(instance: Arc<dyn Any + Send + Sync>, type_name: &str) -> Arc<T> {
    instance
        .downcast::<T>()
        .unwrap_or_else(|_| panic!("Type mismatch in ServiceLocator: {}", type_name))
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct SessionCookieSecret(&'static str);

    #[test]
    fn test_extract_clean_name_static() {
        assert_eq!(extract_clean_name_static("user_repository"), "user");
        assert_eq!(extract_clean_name_static("board_service"), "board");
        assert_eq!(extract_clean_name_static("social_user"), "social_user");
    }

    #[test]
    fn test_entity_name_from_type_name() {
        assert_eq!(entity_name("BoardRepository", "Repository"), "board");
        assert_eq!(entity_name("SessionService", "Service"), "session");
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            ServiceLocator::extract_clean_type_name("social_board_backend::repositories::boards::BoardRepository"),
            "BoardRepository"
        );
        assert_eq!(ServiceLocator::extract_clean_type_name("Database"), "Database");
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        let secret = Arc::new(SessionCookieSecret("s3cr3t"));
        ServiceLocator::set(secret.clone());

        let resolved = ServiceLocator::get::<SessionCookieSecret>();
        assert!(Arc::ptr_eq(&secret, &resolved));
        assert_eq!(resolved.0, "s3cr3t");
    }
}
