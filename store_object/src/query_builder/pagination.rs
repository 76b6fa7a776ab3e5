//! Paging
//!
//! `PageInfo` describes which slice of an ordered result to fetch,
//! `PagedResult` bundles that slice with the total number of matches.

use crate::errors::StoreError;
use crate::query_builder::ordering::OrderBy;
use config::PagingConfig;
use serde::Serialize;

/// Page number (1-based), page size and ordering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PageInfo {
    page_number: u32,
    page_size: u32,
    order_by: OrderBy,
}

impl PageInfo {
    pub fn new(page_number: u32, page_size: u32, order_by: OrderBy) -> Result<Self, StoreError> {
        if page_number == 0 {
            return Err(StoreError::validation("PageNumber must be at least 1."));
        }
        if page_size == 0 {
            return Err(StoreError::validation("PageSize must be at least 1."));
        }

        Ok(Self {
            page_number,
            page_size,
            order_by,
        })
    }

    /// Build from optional request parameters, falling back to the configured defaults.
    /// Page sizes above the configured maximum are clamped to it.
    pub fn from_request(
        page_number: Option<u32>,
        page_size: Option<u32>,
        order_by: Option<&str>,
        defaults: &PagingConfig,
    ) -> Result<Self, StoreError> {
        let page_size = page_size
            .unwrap_or(defaults.default_page_size)
            .min(defaults.max_page_size);
        let order_by = OrderBy::parse(order_by.unwrap_or(&defaults.default_order_by))?;

        Self::new(page_number.unwrap_or(1), page_size, order_by)
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn order_by(&self) -> &OrderBy {
        &self.order_by
    }

    /// Rows to skip: (page_number - 1) * page_size
    pub fn offset(&self) -> i64 {
        (i64::from(self.page_number) - 1) * i64::from(self.page_size)
    }

    /// Rows to fetch
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// One page of results plus the number of rows matching the filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedResult<T> {
    result: Vec<T>,
    page_info: PageInfo,
    total_count: i64,
}

impl<T> PagedResult<T> {
    pub fn new(result: Vec<T>, page_info: PageInfo, total_count: i64) -> Self {
        Self {
            result,
            page_info,
            total_count,
        }
    }

    pub fn result(&self) -> &[T] {
        &self.result
    }

    pub fn into_result(self) -> Vec<T> {
        self.result
    }

    pub fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    pub fn total_count(&self) -> i64 {
        self.total_count
    }

    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    pub fn total_pages(&self) -> i64 {
        let size = self.page_info.limit();
        (self.total_count + size - 1) / size
    }

    pub fn has_next(&self) -> bool {
        i64::from(self.page_info.page_number()) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page_info.page_number() > 1
    }
}
