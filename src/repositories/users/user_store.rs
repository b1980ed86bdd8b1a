//! 사용자 저장소 추상화
//!
//! 로그인 어댑터가 의존하는 최소 연산입니다. 운영 환경에서는
//! [`UserRepository`](super::user_repo::UserRepository)가 구현하고,
//! 테스트에서는 [`MemoryUserStore`]를 사용합니다.

use async_trait::async_trait;
use crate::core::errors::AppError;
use crate::domain::entities::users::user::{NewUser, User};

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자를 저장하고 식별자와 시각이 채워진 엔티티를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 같은 이메일의 사용자가 이미 존재
    async fn insert(&self, user: NewUser) -> Result<User, AppError>;
}

#[cfg(test)]
pub use memory::MemoryUserStore;

#[cfg(test)]
mod memory {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use mongodb::bson::DateTime;
    use super::UserStore;
    use crate::core::errors::AppError;
    use crate::domain::entities::users::user::{NewUser, User};

    /// 호출 횟수를 기록하는 메모리 저장소
    #[derive(Default)]
    pub struct MemoryUserStore {
        users: Mutex<Vec<User>>,
        pub find_calls: AtomicUsize,
        pub insert_calls: AtomicUsize,
        /// 다음 `insert`를 충돌로 실패시키고 이 사용자를 대신 저장합니다.
        racing_user: Mutex<Option<NewUser>>,
    }

    impl MemoryUserStore {
        pub fn with_users(users: Vec<User>) -> Self {
            Self {
                users: Mutex::new(users),
                ..Self::default()
            }
        }

        /// 다른 요청이 먼저 같은 이메일로 가입한 상황을 재현합니다.
        pub fn racing(winner: NewUser) -> Self {
            Self {
                racing_user: Mutex::new(Some(winner)),
                ..Self::default()
            }
        }

        pub fn users(&self) -> Vec<User> {
            self.users.lock().unwrap().clone()
        }

        pub fn finds(&self) -> usize {
            self.find_calls.load(Ordering::SeqCst)
        }

        pub fn inserts(&self) -> usize {
            self.insert_calls.load(Ordering::SeqCst)
        }

        fn store(&self, user: NewUser) -> User {
            let mut users = self.users.lock().unwrap();
            let user = user.into_user(users.len() as i64 + 1, DateTime::from_millis(0));
            users.push(user.clone());
            user
        }
    }

    #[async_trait]
    impl UserStore for MemoryUserStore {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
            self.find_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.users.lock().unwrap().iter().find(|u| u.email == email).cloned())
        }

        async fn insert(&self, user: NewUser) -> Result<User, AppError> {
            self.insert_calls.fetch_add(1, Ordering::SeqCst);

            if let Some(winner) = self.racing_user.lock().unwrap().take() {
                self.store(winner);
                return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
            }

            if self.users.lock().unwrap().iter().any(|u| u.email == user.email) {
                return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
            }

            Ok(self.store(user))
        }
    }
}
