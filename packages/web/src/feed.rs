//! Accumulating page state behind the job feed's infinite scroll.
//!
//! [`ListingFeed`] owns everything one feed instance has loaded so far: the
//! accumulated listings, the latest pagination descriptor, whether a fetch is
//! in flight, and the last fetch error. The UI layer asks it for a
//! [`PageRequest`] ticket before fetching and hands the outcome back through
//! [`ListingFeed::settle`]; the struct enforces the feed's invariants so the
//! component cannot:
//!
//! - issue two overlapping fetches (at most one ticket is out at a time),
//! - fetch past the end of the result set (`has_next_page` gates tickets),
//! - half-apply a failed page (errors leave items and descriptor untouched),
//! - apply a response that raced a filter change (tickets carry a generation
//!   stamp and stale ones are dropped on the floor).

use crate::types::{JobListing, PageMeta, QuerySpec};

/// User-facing message recorded when a page fetch fails.
pub const LOAD_MORE_ERROR: &str = "Failed to load more job listings";

/// Ticket for a single page fetch, handed out by [`ListingFeed::begin_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number to fetch.
    pub page: i32,
    /// Items per page, carried over from the current descriptor.
    pub limit: i32,
    generation: u32,
}

/// State of one infinite-scroll feed instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFeed {
    query: QuerySpec,
    items: Vec<JobListing>,
    page_meta: PageMeta,
    in_flight: bool,
    error: Option<String>,
    generation: u32,
}

impl ListingFeed {
    /// Start a feed from a server-rendered seed page.
    pub fn new(query: QuerySpec, seed: Vec<JobListing>, seed_meta: PageMeta) -> Self {
        Self {
            query,
            items: seed,
            page_meta: seed_meta,
            in_flight: false,
            error: None,
            generation: 0,
        }
    }

    /// Discard accumulated state and restart from a fresh seed page.
    ///
    /// Bumps the generation so a fetch still in flight for the previous
    /// filter set is ignored when it settles.
    pub fn reset(&mut self, query: QuerySpec, seed: Vec<JobListing>, seed_meta: PageMeta) {
        self.query = query;
        self.items = seed;
        self.page_meta = seed_meta;
        self.in_flight = false;
        self.error = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Ask to fetch the next page.
    ///
    /// Returns `None` (a no-op) while a fetch is already in flight or when
    /// the descriptor says there is nothing left; otherwise marks the feed
    /// in-flight, clears any prior error, and returns the request ticket.
    /// Retry after a failure goes through here too and reissues the same
    /// page, since a failed fetch never advanced the descriptor.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        if self.in_flight || !self.page_meta.has_next_page {
            return None;
        }

        self.in_flight = true;
        self.error = None;

        Some(PageRequest {
            page: self.page_meta.page + 1,
            limit: self.page_meta.limit,
            generation: self.generation,
        })
    }

    /// Apply the outcome of a fetch started with [`Self::begin_fetch`].
    ///
    /// A ticket from before the last [`Self::reset`] is stale: it is dropped
    /// without touching anything, including a newer fetch's in-flight flag.
    /// On success the page's items are appended after the existing ones and
    /// the descriptor is replaced; on failure only the error is recorded.
    pub fn settle(
        &mut self,
        request: PageRequest,
        outcome: Result<(Vec<JobListing>, PageMeta), String>,
    ) {
        if request.generation != self.generation {
            return;
        }

        self.in_flight = false;

        match outcome {
            Ok((new_items, meta)) => {
                self.items.extend(new_items);
                self.page_meta = meta;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn query(&self) -> &QuerySpec {
        &self.query
    }

    pub fn items(&self) -> &[JobListing] {
        &self.items
    }

    pub fn page_meta(&self) -> &PageMeta {
        &self.page_meta
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when even the seed page was empty: the feed renders a terminal
    /// empty state and mounts no sentinel.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True once the descriptor reports no further pages.
    pub fn is_exhausted(&self) -> bool {
        !self.page_meta.has_next_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        ExperienceLevel, JobListingStatus, JobType, LocationRequirement, OrganizationSummary,
    };

    fn listing(n: usize) -> JobListing {
        JobListing {
            id: format!("listing-{n}"),
            title: format!("Engineer {n}"),
            city: Some("Minneapolis".to_string()),
            state_abbreviation: Some("MN".to_string()),
            wage: Some(120_000),
            wage_interval: Some("yearly".to_string()),
            wage_currency: Some("USD".to_string()),
            experience_level: ExperienceLevel::MidLevel,
            job_type: JobType::FullTime,
            location_requirement: LocationRequirement::Remote,
            status: JobListingStatus::Published,
            is_featured: false,
            posted_at: Some("2026-07-01T12:00:00Z".to_string()),
            description: None,
            organization: OrganizationSummary {
                id: "org-1".to_string(),
                name: "Acme".to_string(),
                image_url: None,
            },
        }
    }

    fn listings(range: std::ops::Range<usize>) -> Vec<JobListing> {
        range.map(listing).collect()
    }

    fn meta(page: i32, total: i32, has_next: bool) -> PageMeta {
        PageMeta {
            page,
            limit: 10,
            total,
            total_pages: (total + 9) / 10,
            has_next_page: has_next,
            has_prev_page: page > 1,
        }
    }

    fn seeded_feed() -> ListingFeed {
        ListingFeed::new(QuerySpec::new(), listings(0..10), meta(1, 25, true))
    }

    #[test]
    fn accumulates_pages_in_request_order() {
        let mut feed = seeded_feed();

        let first = feed.begin_fetch().expect("first fetch allowed");
        assert_eq!(first.page, 2);
        assert_eq!(first.limit, 10);
        feed.settle(first, Ok((listings(10..20), meta(2, 25, true))));
        assert_eq!(feed.items().len(), 20);

        let second = feed.begin_fetch().expect("second fetch allowed");
        assert_eq!(second.page, 3);
        feed.settle(second, Ok((listings(20..25), meta(3, 25, false))));

        assert_eq!(feed.items().len(), 25);
        assert!(feed.is_exhausted());
        assert_eq!(feed.page_meta().total, 25);

        // Order preserved, no duplicates: ids are exactly 0..25 in sequence
        let ids: Vec<String> = feed.items().iter().map(|l| l.id.clone()).collect();
        let expected: Vec<String> = (0..25).map(|n| format!("listing-{n}")).collect();
        assert_eq!(ids, expected);

        // The exhausted feed hands out no more tickets
        assert!(feed.begin_fetch().is_none());
    }

    #[test]
    fn at_most_one_fetch_in_flight() {
        let mut feed = seeded_feed();

        let ticket = feed.begin_fetch().expect("first fetch allowed");
        // Repeated sentinel events and retry clicks while pending are no-ops
        assert!(feed.begin_fetch().is_none());
        assert!(feed.begin_fetch().is_none());
        assert!(feed.is_loading());

        feed.settle(ticket, Ok((listings(10..20), meta(2, 25, true))));
        assert!(!feed.is_loading());
        assert!(feed.begin_fetch().is_some());
    }

    #[test]
    fn exhausted_feed_never_fetches() {
        let mut feed = ListingFeed::new(QuerySpec::new(), listings(0..5), meta(1, 5, false));
        assert!(feed.begin_fetch().is_none());
        assert!(feed.is_exhausted());
    }

    #[test]
    fn failure_leaves_accumulated_state_untouched() {
        let mut feed = seeded_feed();
        let items_before = feed.items().to_vec();
        let meta_before = feed.page_meta().clone();

        let ticket = feed.begin_fetch().expect("fetch allowed");
        feed.settle(ticket, Err(LOAD_MORE_ERROR.to_string()));

        assert_eq!(feed.items(), items_before.as_slice());
        assert_eq!(feed.page_meta(), &meta_before);
        assert!(!feed.is_loading());
        assert!(!feed.error().unwrap().is_empty());

        // Retry reissues the identical request and clears the error
        let retry = feed.begin_fetch().expect("retry allowed");
        assert_eq!(retry.page, 2);
        assert!(feed.error().is_none());
    }

    #[test]
    fn reset_replaces_state_and_clears_error() {
        let mut feed = seeded_feed();
        let ticket = feed.begin_fetch().expect("fetch allowed");
        feed.settle(ticket, Err("boom".to_string()));
        assert!(feed.error().is_some());

        let mut narrower = QuerySpec::new();
        narrower.set("search", "rust");
        feed.reset(narrower.clone(), listings(0..3), meta(1, 3, false));

        assert_eq!(feed.query(), &narrower);
        assert_eq!(feed.items().len(), 3);
        assert!(feed.error().is_none());
        assert!(!feed.is_loading());
    }

    #[test]
    fn response_from_before_reset_is_ignored() {
        let mut feed = seeded_feed();

        // A fetch goes out, then the user changes filters mid-flight
        let stale = feed.begin_fetch().expect("fetch allowed");
        feed.reset(QuerySpec::new(), listings(0..2), meta(1, 12, true));

        // The superseded response arrives late; nothing may change
        feed.settle(stale, Ok((listings(10..20), meta(2, 25, true))));
        assert_eq!(feed.items().len(), 2);
        assert_eq!(feed.page_meta().page, 1);
        assert!(!feed.is_loading());

        // And a late *failure* must not paint an error over the new feed
        let stale2 = feed.begin_fetch().expect("fetch allowed");
        feed.reset(QuerySpec::new(), listings(0..2), meta(1, 12, true));
        feed.settle(stale2, Err("boom".to_string()));
        assert!(feed.error().is_none());

        // A stale settle must not clear a newer fetch's in-flight flag either
        let fresh = feed.begin_fetch().expect("fetch allowed");
        assert!(feed.is_loading());
        feed.settle(stale2, Ok((listings(2..4), meta(2, 12, true))));
        assert!(feed.is_loading());
        feed.settle(fresh, Ok((listings(2..4), meta(2, 12, true))));
        assert!(!feed.is_loading());
        assert_eq!(feed.items().len(), 4);
    }

    #[test]
    fn empty_seed_renders_empty_state() {
        let feed = ListingFeed::new(QuerySpec::new(), Vec::new(), meta(1, 0, false));
        assert!(feed.is_empty());
        assert!(feed.is_exhausted());
    }
}
