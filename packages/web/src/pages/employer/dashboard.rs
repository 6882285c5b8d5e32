//! Employer dashboard - manage an organization's listings

use dioxus::prelude::*;

use crate::graphql::{
    GraphQLClient, DELETE_JOB_LISTING, ORGANIZATION_JOB_LISTINGS, SET_JOB_LISTING_STATUS,
};
use crate::routes::Route;
use crate::types::{
    DeleteJobListingResponse, JobListing, JobListingStatus, OrganizationJobListingsResponse,
    SetJobListingStatusResponse,
};

/// Employer dashboard: every listing the organization owns, any status.
#[component]
pub fn EmployerDashboard(organization_id: String) -> Element {
    let mut refresh = use_signal(|| 0);

    let listings = use_server_future({
        let organization_id = organization_id.clone();
        move || {
            // Reading the counter re-runs the fetch after each mutation
            let _ = refresh();
            fetch_organization_listings(organization_id.clone())
        }
    })?;

    let handle_status = move |(id, status): (String, &'static str)| {
        spawn(async move {
            match set_listing_status(id, status.to_string()).await {
                Ok(()) => refresh.set(refresh.peek().wrapping_add(1)),
                Err(e) => tracing::error!(error = %e, "Failed to change listing status"),
            }
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            match delete_listing(id).await {
                Ok(()) => refresh.set(refresh.peek().wrapping_add(1)),
                Err(e) => tracing::error!(error = %e, "Failed to delete listing"),
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            div {
                class: "max-w-3xl mx-auto px-4 py-8",

                div {
                    class: "flex items-center justify-between mb-6",
                    h1 { class: "text-2xl font-bold text-gray-900", "Your Job Listings" }
                    Link {
                        to: Route::NewJobListing { organization_id: organization_id.clone() },
                        class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 text-sm font-medium",
                        "New listing"
                    }
                }

                match listings.value().as_ref() {
                    Some(Ok(listings)) if !listings.is_empty() => rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                            for listing in listings.iter() {
                                ListingRow {
                                    listing: listing.clone(),
                                    on_status: handle_status,
                                    on_delete: handle_delete,
                                }
                            }
                        }
                    },
                    Some(Ok(_)) => rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                            p { class: "text-gray-500", "No listings yet. Create your first one." }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Error loading listings: {e}"
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

#[derive(Props, Clone, PartialEq)]
struct ListingRowProps {
    listing: JobListing,
    on_status: EventHandler<(String, &'static str)>,
    on_delete: EventHandler<String>,
}

#[component]
fn ListingRow(props: ListingRowProps) -> Element {
    let listing = &props.listing;

    let (badge_class, badge_label) = match listing.status {
        JobListingStatus::Draft => ("bg-gray-100 text-gray-700", "Draft"),
        JobListingStatus::Published => ("bg-green-100 text-green-700", "Published"),
        JobListingStatus::Delisted => ("bg-yellow-100 text-yellow-700", "Delisted"),
    };

    rsx! {
        div {
            class: "p-4 hover:bg-gray-50",
            div {
                class: "flex items-start justify-between",
                div {
                    class: "flex-1 min-w-0",
                    div {
                        class: "flex items-center gap-2",
                        h3 { class: "text-sm font-medium text-gray-900 truncate", "{listing.title}" }
                        span {
                            class: "px-2 py-0.5 rounded-full text-xs font-medium {badge_class}",
                            "{badge_label}"
                        }
                    }
                    p {
                        class: "text-sm text-gray-500 mt-1",
                        "{listing.job_type.label()} \u{00B7} {listing.location_requirement.label()}"
                    }
                }
                div {
                    class: "flex items-center gap-2 ml-4",
                    match listing.status {
                        JobListingStatus::Draft => rsx! {
                            ActionButton {
                                label: "Publish",
                                classes: "bg-green-100 text-green-700 hover:bg-green-200",
                                onclick: {
                                    let id = listing.id.clone();
                                    move |_| props.on_status.call((id.clone(), "PUBLISHED"))
                                }
                            }
                        },
                        JobListingStatus::Published => rsx! {
                            ActionButton {
                                label: "Delist",
                                classes: "bg-yellow-100 text-yellow-700 hover:bg-yellow-200",
                                onclick: {
                                    let id = listing.id.clone();
                                    move |_| props.on_status.call((id.clone(), "DELISTED"))
                                }
                            }
                        },
                        JobListingStatus::Delisted => rsx! {
                            ActionButton {
                                label: "Republish",
                                classes: "bg-green-100 text-green-700 hover:bg-green-200",
                                onclick: {
                                    let id = listing.id.clone();
                                    move |_| props.on_status.call((id.clone(), "PUBLISHED"))
                                }
                            }
                        },
                    }
                    ActionButton {
                        label: "Delete",
                        classes: "bg-red-100 text-red-700 hover:bg-red-200",
                        onclick: {
                            let id = listing.id.clone();
                            move |_| props.on_delete.call(id.clone())
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ActionButtonProps {
    label: &'static str,
    classes: &'static str,
    onclick: EventHandler<MouseEvent>,
}

#[component]
fn ActionButton(props: ActionButtonProps) -> Element {
    rsx! {
        button {
            class: "px-3 py-1.5 text-sm rounded {props.classes}",
            onclick: move |e| props.onclick.call(e),
            "{props.label}"
        }
    }
}

#[server]
async fn fetch_organization_listings(
    organization_id: String,
) -> Result<Vec<JobListing>, ServerFnError> {
    let url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080/graphql".to_string());
    let client = GraphQLClient::new(url);

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        organization_id: String,
    }

    let response: OrganizationJobListingsResponse = client
        .query(ORGANIZATION_JOB_LISTINGS, Some(Variables { organization_id }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(response.organization_job_listings)
}

#[server]
async fn set_listing_status(id: String, status: String) -> Result<(), ServerFnError> {
    let url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080/graphql".to_string());
    let client = GraphQLClient::new(url);

    #[derive(serde::Serialize)]
    struct Variables {
        id: String,
        status: String,
    }

    let _: SetJobListingStatusResponse = client
        .mutate(SET_JOB_LISTING_STATUS, Some(Variables { id, status }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[server]
async fn delete_listing(id: String) -> Result<(), ServerFnError> {
    let url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080/graphql".to_string());
    let client = GraphQLClient::new(url);

    #[derive(serde::Serialize)]
    struct Variables {
        id: String,
    }

    let _: DeleteJobListingResponse = client
        .mutate(DELETE_JOB_LISTING, Some(Variables { id }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}
