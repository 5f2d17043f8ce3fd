// ABOUTME: Offset pagination request/response types for list reads
// ABOUTME: Computes has_next/has_previous metadata from count, limit, and offset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

use serde::{Deserialize, Serialize};

/// Largest page a caller may request
pub const MAX_PAGE_LIMIT: i32 = 1000;

/// Page size used when a caller does not specify one
pub const DEFAULT_PAGE_LIMIT: i32 = 100;

/// Parameters for paginated list reads
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Maximum number of items to return (1..=1000)
    pub limit: i32,
    /// Number of items to skip (>= 0)
    pub offset: i32,
}

impl PaginationParams {
    /// Create pagination parameters, clamping out-of-range values
    ///
    /// `limit` is clamped to `1..=MAX_PAGE_LIMIT`; a negative `offset`
    /// becomes 0.
    #[must_use]
    pub fn new(limit: i32, offset: i32) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
            offset: offset.max(0),
        }
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

/// A page of items plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items of the current page
    pub items: Vec<T>,
    /// Total items across all pages
    pub total_count: i64,
    /// Page size that was requested
    pub limit: i32,
    /// Items skipped before this page
    pub offset: i32,
    /// Whether items exist after this page
    pub has_next: bool,
    /// Whether items exist before this page
    pub has_previous: bool,
}

impl<T> PaginatedResponse<T> {
    /// Build a response, deriving `has_next`/`has_previous`.
    ///
    /// The invariants are `has_next == (offset + limit < total_count)` and
    /// `has_previous == (offset > 0)`.
    #[must_use]
    pub fn new(items: Vec<T>, total_count: i64, params: PaginationParams) -> Self {
        Self {
            items,
            total_count,
            limit: params.limit,
            offset: params.offset,
            has_next: i64::from(params.offset) + i64::from(params.limit) < total_count,
            has_previous: params.offset > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total_count: i64, limit: i32, offset: i32) -> PaginatedResponse<()> {
        PaginatedResponse::new(Vec::new(), total_count, PaginationParams { limit, offset })
    }

    #[test]
    fn test_boundary_law() {
        // total_count in {0, 1, limit, limit + 1}, offset in {0, total_count}
        let limit = 10;
        for total in [0_i64, 1, i64::from(limit), i64::from(limit) + 1] {
            for offset in [0_i32, i32::try_from(total).unwrap()] {
                let p = page(total, limit, offset);
                assert_eq!(p.has_next, i64::from(offset + limit) < total, "total={total} offset={offset}");
                assert_eq!(p.has_previous, offset > 0, "total={total} offset={offset}");
            }
        }
    }

    #[test]
    fn test_exact_last_page_has_no_next() {
        let p = page(20, 10, 10);
        assert!(!p.has_next);
        assert!(p.has_previous);
    }

    #[test]
    fn test_first_page_with_more() {
        let p = page(11, 10, 0);
        assert!(p.has_next);
        assert!(!p.has_previous);
    }

    #[test]
    fn test_params_clamping() {
        let p = PaginationParams::new(0, -5);
        assert_eq!(p.limit, 1);
        assert_eq!(p.offset, 0);
        assert_eq!(PaginationParams::new(5000, 3).limit, MAX_PAGE_LIMIT);
        let d = PaginationParams::default();
        assert_eq!((d.limit, d.offset), (DEFAULT_PAGE_LIMIT, 0));
    }
}
