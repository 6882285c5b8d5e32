//! Infinite-scroll job feed component.

use dioxus::prelude::*;

use crate::components::{JobCard, LoadingSpinner, VisibilitySentinel};
use crate::feed::{ListingFeed, LOAD_MORE_ERROR};
use crate::graphql::{GraphQLClient, JOB_LISTINGS};
use crate::routes::Route;
use crate::types::{filter_keys, JobListing, JobListingPage, JobListingsResponse, PageMeta, QuerySpec};

/// Items requested per page of the feed.
pub const FEED_PAGE_LIMIT: i32 = 10;

/// Props for InfiniteJobListings
#[derive(Props, Clone, PartialEq)]
pub struct InfiniteJobListingsProps {
    /// Filter set this feed instance was created for.
    pub query: QuerySpec,
    /// Server-rendered first page.
    pub seed: Vec<JobListing>,
    /// Pagination descriptor matching `seed`.
    pub seed_meta: PageMeta,
}

/// Ever-growing list of job listings with infinite-scroll semantics.
///
/// Owns one [`ListingFeed`]; a sentinel near the end of the list triggers the
/// next page fetch, and a change to any prop resets the feed to the new seed.
#[component]
pub fn InfiniteJobListings(props: InfiniteJobListingsProps) -> Element {
    let InfiniteJobListingsProps { query, seed, seed_meta } = props;

    let mut feed = use_signal({
        let query = query.clone();
        let seed = seed.clone();
        let seed_meta = seed_meta.clone();
        move || ListingFeed::new(query, seed, seed_meta)
    });

    // Restart from the new seed whenever the caller hands us a different
    // filter set or seed page; responses still in flight for the previous
    // feed are ignored when they settle.
    use_effect(use_reactive!(|(query, seed, seed_meta)| {
        feed.write().reset(query, seed, seed_meta);
    }));

    let load_more = move || {
        // One guarded entry for sentinel events and retry clicks alike
        let Some(request) = feed.write().begin_fetch() else {
            return;
        };
        let query = feed.peek().query().clone();

        spawn(async move {
            let outcome = fetch_job_listings_page(query, request.page, request.limit)
                .await
                .map(|page| (page.nodes, page.pagination))
                .map_err(|err| {
                    tracing::error!(error = %err, "Error loading more job listings");
                    LOAD_MORE_ERROR.to_string()
                });
            feed.write().settle(request, outcome);
        });
    };

    let state = feed.read();
    let items = state.items().to_vec();
    let is_loading = state.is_loading();
    let error = state.error().map(str::to_string);
    let is_exhausted = state.is_exhausted();
    let total = state.page_meta().total;
    let query_string = state.query().to_query_string();
    drop(state);

    // Terminal empty state: nothing to scroll, so no sentinel is mounted
    if items.is_empty() {
        return rsx! {
            div {
                class: "text-gray-500 p-4 text-center text-2xl my-10",
                "No job listings found"
            }
        };
    }

    let shown = items.len();

    rsx! {
        div {
            class: "space-y-4",

            for listing in items {
                Link {
                    key: "{listing.id}",
                    class: "block",
                    to: Route::JobListingDetail {
                        id: listing.id.clone(),
                        query: query_string.clone(),
                    },
                    JobCard { listing: listing.clone() }
                }
            }

            // Load more trigger
            VisibilitySentinel { on_visible: move |_| load_more() }

            // Loading state
            if is_loading {
                div { class: "flex justify-center py-8", LoadingSpinner {} }
            }

            // Error state
            if let Some(message) = error {
                div {
                    class: "text-center py-8",
                    p { class: "text-red-600 mb-4", "{message}" }
                    button {
                        class: "px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700",
                        onclick: move |_| load_more(),
                        "Try Again"
                    }
                }
            }

            // End of results
            if is_exhausted {
                div {
                    class: "text-center py-8 text-gray-500",
                    p { "You've reached the end of the job listings" }
                    p { class: "text-sm mt-1", "Showing {shown} of {total} jobs" }
                }
            }
        }
    }
}

/// Fetch one page of the feed from the GraphQL API.
///
/// The query spec is forwarded unchanged on every request; only the page
/// number advances between calls for one feed instance.
#[server]
pub async fn fetch_job_listings_page(
    query: QuerySpec,
    page: i32,
    limit: i32,
) -> Result<JobListingPage, ServerFnError> {
    let url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080/graphql".to_string());
    let client = GraphQLClient::new(url);

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        #[serde(skip_serializing_if = "Option::is_none")]
        search: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        city: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        state_abbreviation: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        experience_level: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        job_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        location_requirement: Option<String>,
        page: i32,
        limit: i32,
    }

    let variables = Variables {
        search: query.first(filter_keys::SEARCH).map(str::to_string),
        city: query.first(filter_keys::CITY).map(str::to_string),
        state_abbreviation: query.first(filter_keys::STATE).map(str::to_string),
        experience_level: query.first(filter_keys::EXPERIENCE_LEVEL).map(str::to_string),
        job_type: query.first(filter_keys::JOB_TYPE).map(str::to_string),
        location_requirement: query
            .first(filter_keys::LOCATION_REQUIREMENT)
            .map(str::to_string),
        page,
        limit,
    };

    let response: JobListingsResponse = client
        .query(JOB_LISTINGS, Some(variables))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.job_listings)
}
