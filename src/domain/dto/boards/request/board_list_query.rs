use serde::Deserialize;
use crate::core::errors::{AppError, AppResult};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// 게시글 목록 조회 쿼리 (`?page=0&size=10`)
///
/// `page`는 0부터 시작합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardListQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl BoardListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    /// 1 이상 `MAX_PAGE_SIZE` 이하로 보정한 페이지 크기
    pub fn size(&self) -> u64 {
        self.size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// 건너뛸 게시글 수 (`page * size`)
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - MongoDB `skip` 범위(i64)를 넘는 페이지
    pub fn offset(&self) -> AppResult<u64> {
        self.page()
            .checked_mul(self.size())
            .filter(|offset| *offset <= i64::MAX as u64)
            .ok_or_else(|| AppError::ValidationError(format!("페이지 번호가 너무 큽니다: {}", self.page())))
    }
}
