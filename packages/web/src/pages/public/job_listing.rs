//! Job listing detail page

use dioxus::prelude::*;

use crate::components::JobCard;
use crate::graphql::{GraphQLClient, JOB_LISTING_DETAIL};
use crate::types::{JobListing, JobListingDetailResponse};

/// Detail page for one published listing.
///
/// `query` carries the feed's filter query string so the back link restores
/// the filtered view.
#[component]
pub fn JobListingDetail(id: String, query: String) -> Element {
    let listing = use_server_future({
        let id = id.clone();
        move || fetch_job_listing(id.clone())
    })?;

    let back_href = if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",
            div {
                class: "max-w-3xl mx-auto px-4 py-8",

                Link {
                    to: back_href,
                    class: "text-blue-600 hover:text-blue-700 text-sm mb-6 inline-block",
                    "\u{2190} Back to jobs"
                }

                match listing.value().as_ref() {
                    Some(Ok(Some(listing))) => rsx! {
                        JobCard { listing: listing.clone() }

                        div {
                            class: "bg-white border border-gray-200 rounded-xl p-6 mt-4",
                            h2 { class: "text-lg font-semibold text-gray-900 mb-3", "About this role" }
                            p {
                                class: "text-gray-700 whitespace-pre-line",
                                {listing.description.clone().unwrap_or_default()}
                            }
                        }
                    },
                    Some(Ok(None)) => rsx! {
                        div {
                            class: "text-center py-16",
                            h2 { class: "text-xl font-semibold text-gray-900 mb-2", "Listing not found" }
                            p { class: "text-gray-500", "This job listing may have been removed or delisted." }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Error loading listing: {e}"
                        }
                    },
                    None => rsx! {
                        div { class: "text-center py-12 text-gray-500", "Loading..." }
                    }
                }
            }
        }
    }
}

#[server]
async fn fetch_job_listing(id: String) -> Result<Option<JobListing>, ServerFnError> {
    let url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080/graphql".to_string());
    let client = GraphQLClient::new(url);

    #[derive(serde::Serialize)]
    struct Variables {
        id: String,
    }

    let response: JobListingDetailResponse = client
        .query(JOB_LISTING_DETAIL, Some(Variables { id }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.job_listing)
}
