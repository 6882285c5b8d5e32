//! Home page - the job seeker feed

use dioxus::prelude::*;

use crate::components::{
    fetch_job_listings_page, InfiniteJobListings, JobCardSkeleton, FEED_PAGE_LIMIT,
};
use crate::routes::Route;
use crate::state::JobTypeFilter;
use crate::types::{filter_keys, QuerySpec};

/// Home page - browse published listings with infinite scroll
#[component]
pub fn Home() -> Element {
    let mut search_input = use_signal(String::new);
    let mut submitted_search = use_signal(String::new);
    let mut job_type_filter = use_signal(|| JobTypeFilter::All);
    let mut location_filter = use_signal(|| None::<&'static str>);

    // The opaque filter map handed to the feed; a new value restarts the feed
    let query_spec = use_memo(move || {
        let mut spec = QuerySpec::new();
        let search = submitted_search();
        if !search.trim().is_empty() {
            spec.set(filter_keys::SEARCH, search.trim());
        }
        if let Some(value) = job_type_filter().wire_value() {
            spec.set(filter_keys::JOB_TYPE, value);
        }
        if let Some(value) = location_filter() {
            spec.set(filter_keys::LOCATION_REQUIREMENT, value);
        }
        spec
    });

    // Server-rendered seed page, re-fetched whenever the filters change
    let seed = use_server_future(move || fetch_job_listings_page(query_spec(), 1, FEED_PAGE_LIMIT))?;

    let handle_search = move |_| {
        submitted_search.set(search_input());
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            // Hero Section
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-3xl mx-auto px-4 py-8 sm:py-12",
                    div {
                        class: "text-center",
                        h1 {
                            class: "text-4xl sm:text-5xl font-bold text-gray-900 mb-4",
                            "Find Your Dream Job"
                        }
                        p {
                            class: "text-lg text-gray-600 mb-8",
                            "Browse thousands of opportunities - remote, hybrid, and in-office."
                        }

                        // Search Bar
                        form {
                            class: "flex gap-3 max-w-xl mx-auto mb-4",
                            onsubmit: handle_search,
                            input {
                                r#type: "text",
                                value: "{search_input}",
                                oninput: move |e| search_input.set(e.value()),
                                placeholder: "Search job titles...",
                                class: "flex-1 px-4 py-3 bg-gray-50 border border-gray-200 rounded-xl text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-blue-500"
                            }
                            button {
                                r#type: "submit",
                                class: "px-6 py-3 bg-blue-600 text-white rounded-xl hover:bg-blue-700 transition-colors font-medium",
                                "Search"
                            }
                        }

                        Link {
                            to: Route::EmployerHome {},
                            class: "text-sm text-blue-600 hover:text-blue-700",
                            "Hiring? Post a job"
                        }
                    }
                }
            }

            // Filter Tabs
            div {
                class: "bg-white border-b border-gray-100 sticky top-0 z-10",
                div {
                    class: "max-w-3xl mx-auto px-4",
                    div {
                        class: "flex items-center gap-1 overflow-x-auto py-3",
                        for filter in JobTypeFilter::variants() {
                            {
                                let filter = *filter;
                                let is_active = job_type_filter() == filter;
                                rsx! {
                                    button {
                                        key: "{filter:?}",
                                        class: if is_active {
                                            "px-4 py-2 rounded-lg text-sm font-medium whitespace-nowrap transition-all bg-blue-100 text-blue-700"
                                        } else {
                                            "px-4 py-2 rounded-lg text-sm font-medium whitespace-nowrap transition-all bg-gray-50 text-gray-600 hover:bg-gray-100"
                                        },
                                        onclick: move |_| job_type_filter.set(filter),
                                        "{filter.label()}"
                                    }
                                }
                            }
                        }

                        select {
                            class: "ml-auto px-3 py-2 rounded-lg text-sm bg-gray-50 border border-gray-200 text-gray-600",
                            onchange: move |e| {
                                location_filter.set(match e.value().as_str() {
                                    "REMOTE" => Some("REMOTE"),
                                    "HYBRID" => Some("HYBRID"),
                                    "IN_OFFICE" => Some("IN_OFFICE"),
                                    _ => None,
                                });
                            },
                            option { value: "", "Any location" }
                            option { value: "REMOTE", "Remote" }
                            option { value: "HYBRID", "Hybrid" }
                            option { value: "IN_OFFICE", "In office" }
                        }
                    }
                }
            }

            // Main Content
            main {
                class: "max-w-3xl mx-auto px-4 py-8",
                match seed.value().as_ref() {
                    Some(Ok(page)) => rsx! {
                        InfiniteJobListings {
                            query: query_spec(),
                            seed: page.nodes.clone(),
                            seed_meta: page.pagination.clone(),
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div {
                            class: "text-center py-12",
                            h3 { class: "text-lg font-medium text-gray-900 mb-2", "Unable to load job listings" }
                            p { class: "text-gray-500", "{e}" }
                        }
                    },
                    None => rsx! {
                        div {
                            class: "space-y-4",
                            for i in 0..4 {
                                JobCardSkeleton { key: "{i}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
