//! Pagination utilities for service layer
//!
//! `Pagination` normalizes client input, `Page` is the paged result envelope.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::*;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 0-based page index
    pub page: u64,
    /// items per page
    pub size: u64,
}

impl Pagination {
    pub fn new(page: Option<u64>, size: Option<u64>) -> Self {
        Self { page: page.unwrap_or(0), size: size.unwrap_or(DEFAULT_PAGE_SIZE) }.normalize()
    }

    /// Clamp size into `1..=MAX_PAGE_SIZE`
    pub fn normalize(self) -> Self {
        Self { page: self.page, size: self.size.clamp(1, MAX_PAGE_SIZE) }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 0, size: DEFAULT_PAGE_SIZE } }
}

/// One page of results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(
    BankPage = Page<BankDto>,
    BankDivisionPage = Page<BankDivisionDto>,
    BankRegionPage = Page<BankRegionDto>,
    BranchPage = Page<BranchDto>,
    BranchDepartmentPage = Page<BranchDepartmentDto>,
    BranchPositionPage = Page<BranchPositionDto>,
    BranchHoursPage = Page<BranchHoursDto>,
    BankHolidayPage = Page<BankHolidayDto>,
    WorkingCalendarPage = Page<WorkingCalendarDto>,
    CalendarAssignmentPage = Page<CalendarAssignmentDto>,
    BankAuditLogPage = Page<BankAuditLogDto>,
    BranchAuditLogPage = Page<BranchAuditLogDto>
)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pagination: Pagination, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(pagination.size);
        Self { content, page: pagination.page, size: pagination.size, total_elements, total_pages }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_zero_size() {
        let p = Pagination { page: 0, size: 0 }.normalize();
        assert_eq!(p, Pagination { page: 0, size: 1 });
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let p = Pagination::new(Some(4), Some(1000));
        assert_eq!(p.size, MAX_PAGE_SIZE);
        assert_eq!(p.offset(), 400);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::new(None, None);
        assert_eq!(d.page, 0);
        assert_eq!(d.size, 20);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(vec![1, 2], Pagination { page: 2, size: 2 }, 5);
        assert_eq!(page.total_pages, 3);
        let empty: Page<u8> = Page::new(vec![], Pagination::default(), 0);
        assert_eq!(empty.total_pages, 0);
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.content, vec![10, 20]);
        assert_eq!(mapped.total_elements, 5);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Page::new(vec!["a"], Pagination::default(), 1)).unwrap();
        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["totalPages"], 1);
    }
}
