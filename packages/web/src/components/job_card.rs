//! Job listing card component

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::types::JobListing;

/// Props for JobCard
#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    pub listing: JobListing,
}

/// Card showing one listing in the feed
#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let listing = &props.listing;
    let org = &listing.organization;

    let card_class = if listing.is_featured {
        "bg-amber-50 border border-amber-300 rounded-xl p-5 hover:shadow-md transition-shadow"
    } else {
        "bg-white border border-gray-200 rounded-xl p-5 hover:shadow-md transition-shadow"
    };

    let initials = name_initials(&org.name);
    let location = format_location(listing);
    let wage = format_wage(listing);

    rsx! {
        div {
            class: "{card_class}",

            div {
                class: "flex gap-4",

                // Organization avatar
                if let Some(image_url) = &org.image_url {
                    img {
                        class: "size-14 rounded-full object-cover",
                        src: "{image_url}",
                        alt: "{org.name}",
                    }
                } else {
                    div {
                        class: "size-14 rounded-full bg-blue-600 text-white flex items-center justify-center uppercase font-semibold",
                        "{initials}"
                    }
                }

                div {
                    class: "flex flex-col gap-1 flex-1 min-w-0",
                    h3 { class: "text-xl font-semibold text-gray-900", "{listing.title}" }
                    p { class: "text-base text-gray-600", "{org.name}" }
                }

                if let Some(posted_at) = &listing.posted_at {
                    div {
                        class: "text-sm font-medium text-blue-600 ml-auto whitespace-nowrap",
                        PostedBadge { posted_at: posted_at.clone() }
                    }
                }
            }

            // Badges
            div {
                class: "flex flex-wrap gap-2 mt-4",
                Badge { text: listing.job_type.label().to_string() }
                Badge { text: listing.location_requirement.label().to_string() }
                Badge { text: listing.experience_level.label().to_string() }
                if let Some(location) = location {
                    Badge { text: location }
                }
                if let Some(wage) = wage {
                    Badge { text: wage }
                }
                if listing.is_featured {
                    span {
                        class: "px-2.5 py-1 rounded-full text-xs font-semibold bg-amber-200 text-amber-900",
                        "Featured"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BadgeProps {
    text: String,
}

#[component]
fn Badge(props: BadgeProps) -> Element {
    rsx! {
        span {
            class: "px-2.5 py-1 rounded-full text-xs font-medium bg-gray-100 text-gray-700",
            "{props.text}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PostedBadgeProps {
    posted_at: String,
}

/// "New" for listings posted today, otherwise days since posting
#[component]
fn PostedBadge(props: PostedBadgeProps) -> Element {
    match days_since(&props.posted_at) {
        Some(0) => rsx! {
            span {
                class: "px-2 py-0.5 rounded-full border border-blue-300 text-blue-600 text-xs font-semibold",
                "New"
            }
        },
        Some(days) => rsx! {
            span { "{days}d ago" }
        },
        None => rsx! {},
    }
}

/// Placeholder card shown while the seed page loads
#[component]
pub fn JobCardSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-white border border-gray-200 rounded-xl p-5 animate-pulse",
            div {
                class: "flex gap-4",
                div { class: "size-14 rounded-full bg-gray-200" }
                div {
                    class: "flex flex-col gap-2 flex-1",
                    div { class: "h-5 bg-gray-200 rounded w-2/3" }
                    div { class: "h-4 bg-gray-200 rounded w-1/3" }
                }
            }
            div {
                class: "flex gap-2 mt-4",
                div { class: "h-6 bg-gray-200 rounded-full w-20" }
                div { class: "h-6 bg-gray-200 rounded-full w-16" }
                div { class: "h-6 bg-gray-200 rounded-full w-24" }
            }
        }
    }
}

fn name_initials(name: &str) -> String {
    name.split_whitespace()
        .take(4)
        .filter_map(|word| word.chars().next())
        .collect()
}

fn format_location(listing: &JobListing) -> Option<String> {
    match (&listing.city, &listing.state_abbreviation) {
        (Some(city), Some(state)) => Some(format!("{city}, {state}")),
        (Some(city), None) => Some(city.clone()),
        (None, Some(state)) => Some(state.clone()),
        (None, None) => None,
    }
}

fn format_wage(listing: &JobListing) -> Option<String> {
    let wage = listing.wage?;
    let symbol = match listing.wage_currency.as_deref() {
        Some("EUR") => "\u{20AC}",
        _ => "$",
    };
    match listing.wage_interval.as_deref() {
        Some("hourly") => Some(format!("{symbol}{wage} / hr")),
        Some("monthly") => Some(format!("{symbol}{wage} / mo")),
        Some("yearly") => Some(format!("{symbol}{wage} / yr")),
        _ => Some(format!("{symbol}{wage}")),
    }
}

fn days_since(posted_at: &str) -> Option<i64> {
    let posted = DateTime::parse_from_rfc3339(posted_at).ok()?;
    let days = (Utc::now() - posted.with_timezone(&Utc)).num_days();
    Some(days.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letters_of_up_to_four_words() {
        assert_eq!(name_initials("Acme Web Services Inc Extra"), "AWSI");
        assert_eq!(name_initials("Solo"), "S");
    }

    #[test]
    fn wage_formats_with_interval_and_currency() {
        let mut listing = JobListing {
            id: "x".into(),
            title: "t".into(),
            city: None,
            state_abbreviation: None,
            wage: Some(50),
            wage_interval: Some("hourly".into()),
            wage_currency: Some("USD".into()),
            experience_level: crate::types::ExperienceLevel::Junior,
            job_type: crate::types::JobType::FullTime,
            location_requirement: crate::types::LocationRequirement::Remote,
            status: crate::types::JobListingStatus::Published,
            is_featured: false,
            posted_at: None,
            description: None,
            organization: crate::types::OrganizationSummary {
                id: "o".into(),
                name: "Acme".into(),
                image_url: None,
            },
        };
        assert_eq!(format_wage(&listing).unwrap(), "$50 / hr");

        listing.wage_currency = Some("EUR".into());
        listing.wage_interval = Some("yearly".into());
        assert_eq!(format_wage(&listing).unwrap(), "\u{20AC}50 / yr");

        listing.wage = None;
        assert!(format_wage(&listing).is_none());
    }
}
