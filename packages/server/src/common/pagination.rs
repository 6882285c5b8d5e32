//! Page-number pagination types for list queries.
//!
//! The job feed paginates by 1-based page number rather than cursors: clients
//! hold a [`PageMeta`] descriptor and ask for `page + 1` until
//! `has_next_page` goes false.
//!
//! # Usage
//!
//! ```rust,ignore
//! // In GraphQL query resolver
//! let args = PageArgs { page, limit }.validate()?;
//!
//! // In model
//! let items = Model::find_page(&filters, args.fetch_limit(), args.offset(), pool).await?;
//! let total = Model::count(&filters, pool).await?;
//!
//! // Build descriptor
//! let meta = PageMeta::compute(args.page, args.limit, total);
//! ```

use juniper::GraphQLObject;

/// Default number of items per page when the client does not ask for one.
pub const DEFAULT_PAGE_LIMIT: i32 = 20;

/// Upper bound on items per page.
pub const MAX_PAGE_LIMIT: i32 = 100;

// ============================================================================
// Page arguments
// ============================================================================

/// Raw pagination arguments as they arrive from a client.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// 1-based page number to fetch.
    pub page: Option<i32>,
    /// Number of items per page.
    pub limit: Option<i32>,
}

impl PageArgs {
    /// Validate pagination arguments, applying defaults and bounds.
    pub fn validate(&self) -> Result<ValidatedPageArgs, &'static str> {
        if matches!(self.page, Some(p) if p < 1) {
            return Err("page must be >= 1");
        }

        let page = self.page.unwrap_or(1);

        // Get limit with default (20) and bounds (1-100)
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        let limit = limit.clamp(1, MAX_PAGE_LIMIT);

        Ok(ValidatedPageArgs { page, limit })
    }
}

/// Validated and normalized pagination arguments.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedPageArgs {
    /// 1-based page number (>= 1).
    pub page: i32,
    /// Items per page (1-100, default 20).
    pub limit: i32,
}

impl ValidatedPageArgs {
    /// Get the SQL OFFSET value for this page.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }

    /// Get the SQL LIMIT value.
    pub fn fetch_limit(&self) -> i64 {
        self.limit as i64
    }
}

// ============================================================================
// PageMeta (descriptor)
// ============================================================================

/// Pagination descriptor returned alongside every page of results.
///
/// Invariants: `has_next_page` iff `page < total_pages`; `has_prev_page` iff
/// `page > 1`; `total_pages` is `ceil(total / limit)`. Clients trust these
/// flags instead of recomputing them.
#[derive(Debug, Clone, PartialEq, Eq, GraphQLObject)]
#[graphql(description = "Metadata describing one page of a paginated result")]
pub struct PageMeta {
    /// 1-based number of the page these results belong to.
    pub page: i32,
    /// Number of items requested per page.
    pub limit: i32,
    /// Total number of items matching the query.
    pub total: i32,
    /// Total number of pages.
    pub total_pages: i32,
    /// Whether a page exists after this one.
    pub has_next_page: bool,
    /// Whether a page exists before this one.
    pub has_prev_page: bool,
}

impl PageMeta {
    /// Build the descriptor for one page of a result set of `total` items.
    pub fn compute(page: i32, limit: i32, total: i64) -> Self {
        let total = total.max(0) as i32;
        let total_pages = if total == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };

        PageMeta {
            page,
            limit,
            total,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_args_validate_defaults() {
        let validated = PageArgs::default().validate().unwrap();
        assert_eq!(validated.page, 1);
        assert_eq!(validated.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(validated.offset(), 0);
    }

    #[test]
    fn test_page_args_validate_clamps_limit() {
        let validated = PageArgs {
            page: Some(2),
            limit: Some(500),
        }
        .validate()
        .unwrap();
        assert_eq!(validated.limit, MAX_PAGE_LIMIT);

        let validated = PageArgs {
            page: Some(2),
            limit: Some(0),
        }
        .validate()
        .unwrap();
        assert_eq!(validated.limit, 1);
    }

    #[test]
    fn test_page_args_validate_rejects_bad_page() {
        assert!(PageArgs {
            page: Some(0),
            limit: None
        }
        .validate()
        .is_err());
        assert!(PageArgs {
            page: Some(-3),
            limit: None
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_offset_advances_by_limit() {
        let validated = PageArgs {
            page: Some(3),
            limit: Some(10),
        }
        .validate()
        .unwrap();
        assert_eq!(validated.offset(), 20);
        assert_eq!(validated.fetch_limit(), 10);
    }

    #[test]
    fn test_compute_walks_through_25_items_in_tens() {
        let first = PageMeta::compute(1, 10, 25);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next_page);
        assert!(!first.has_prev_page);

        let second = PageMeta::compute(2, 10, 25);
        assert!(second.has_next_page);
        assert!(second.has_prev_page);

        let last = PageMeta::compute(3, 10, 25);
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);
    }

    #[test]
    fn test_compute_empty_result_set() {
        let meta = PageMeta::compute(1, 10, 0);
        assert_eq!(meta.total, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_prev_page);
    }

    #[test]
    fn test_compute_exact_multiple() {
        let meta = PageMeta::compute(2, 10, 20);
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next_page);
    }

    #[test]
    fn test_has_next_matches_page_versus_total_pages() {
        for total in [0i64, 1, 9, 10, 11, 25, 100] {
            for page in 1..=12 {
                let meta = PageMeta::compute(page, 10, total);
                assert_eq!(meta.has_next_page, page < meta.total_pages);
            }
        }
    }
}
