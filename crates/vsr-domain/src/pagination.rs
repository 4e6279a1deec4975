//! Page-number parsing for list endpoints.

use serde::Serialize;

/// Fixed number of items per page on every paginated endpoint.
pub const PAGE_LIMIT: u64 = 20;

/// Largest page whose offset still fits the `i64` the SQL drivers bind.
pub const MAX_PAGE: u64 = i64::MAX as u64 / PAGE_LIMIT + 1;

/// Errors returned by [`PageRequest::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("invalid page number")]
    NotNumeric,
    #[error("page number out of range")]
    OutOfRange,
}

/// A 1-based page request with the fixed [`PAGE_LIMIT`].
///
/// - absent or empty `page` → 1
/// - non-numeric → [`PageError::NotNumeric`]
/// - `page ≤ 0` → 1
/// - `page > MAX_PAGE` → [`PageError::OutOfRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageRequest {
    /// Parse the raw `page` query-string value.
    pub fn parse(raw: Option<&str>) -> Result<Self, PageError> {
        let raw = match raw {
            None | Some("") => return Ok(Self::default()),
            Some(raw) => raw,
        };
        let page: i64 = raw.parse().map_err(|_| PageError::NotNumeric)?;
        if page <= 0 {
            return Ok(Self::default());
        }
        let page = page as u64;
        if page > MAX_PAGE {
            return Err(PageError::OutOfRange);
        }
        Ok(Self { page })
    }

    pub fn limit(&self) -> u64 {
        PAGE_LIMIT
    }

    pub fn offset(&self) -> u64 {
        PAGE_LIMIT * (self.page - 1)
    }

    /// Pagination metadata echoed in list responses.
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            page: self.page,
            limit: self.limit(),
            offset: self.offset(),
        }
    }
}

/// `page` / `limit` / `offset` triple flattened into list response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub offset: u64,
}
