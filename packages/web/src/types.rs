//! Type definitions for GraphQL API responses and the feed's filter map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Query specification
// ============================================================================

/// Keys recognized inside a [`QuerySpec`].
pub mod filter_keys {
    pub const SEARCH: &str = "search";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const EXPERIENCE_LEVEL: &str = "experienceLevel";
    pub const JOB_TYPE: &str = "jobType";
    pub const LOCATION_REQUIREMENT: &str = "locationRequirement";
}

/// The filter set one feed instance was created for.
///
/// Treated as an opaque key -> values map: it is compared by value, passed
/// through unchanged on every page request, and never interpreted by the
/// loader itself. A map with different contents is a different feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec(BTreeMap<String, Vec<String>>);

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the values under `key` with a single value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    /// First value under `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a URL query string (`key=value&key=value`), percent-encoded.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        for (key, values) in &self.0 {
            for value in values {
                parts.push(format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                ));
            }
        }
        parts.join("&")
    }
}

// ============================================================================
// Common types
// ============================================================================

/// Pagination descriptor accompanying every page of the feed.
///
/// The flags are computed server-side; the client trusts them rather than
/// recomputing from `total` and `limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: i32,
    pub limit: i32,
    pub total: i32,
    pub total_pages: i32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

// ============================================================================
// Job listing types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceLevel {
    Junior,
    MidLevel,
    Senior,
    CLevel,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::MidLevel => "Mid-level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::CLevel => "C-level",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    Internship,
    PartTime,
    FullTime,
    Contract,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::Internship => "Internship",
            JobType::PartTime => "Part-time",
            JobType::FullTime => "Full-time",
            JobType::Contract => "Contract",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationRequirement {
    InOffice,
    Hybrid,
    Remote,
}

impl LocationRequirement {
    pub fn label(&self) -> &'static str {
        match self {
            LocationRequirement::InOffice => "In office",
            LocationRequirement::Hybrid => "Hybrid",
            LocationRequirement::Remote => "Remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobListingStatus {
    Draft,
    Published,
    Delisted,
}

impl JobListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            JobListingStatus::Draft => "Draft",
            JobListingStatus::Published => "Published",
            JobListingStatus::Delisted => "Delisted",
        }
    }
}

/// A job listing as shown in the feed and employer dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub city: Option<String>,
    pub state_abbreviation: Option<String>,
    pub wage: Option<i32>,
    pub wage_interval: Option<String>,
    pub wage_currency: Option<String>,
    pub experience_level: ExperienceLevel,
    pub job_type: JobType,
    pub location_requirement: LocationRequirement,
    pub status: JobListingStatus,
    pub is_featured: bool,
    pub posted_at: Option<String>,
    /// Only requested by the detail page.
    #[serde(default)]
    pub description: Option<String>,
    pub organization: OrganizationSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSummary {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
}

/// One page of the feed plus its pagination descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListingPage {
    pub nodes: Vec<JobListing>,
    pub pagination: PageMeta,
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListingsResponse {
    pub job_listings: JobListingPage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListingDetailResponse {
    pub job_listing: Option<JobListing>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationJobListingsResponse {
    pub organization_job_listings: Vec<JobListing>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobListingResponse {
    pub create_job_listing: JobListing,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetJobListingStatusResponse {
    pub set_job_listing_status: JobListing,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteJobListingResponse {
    pub delete_job_listing: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationResponse {
    pub create_organization: OrganizationSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_spec_compares_by_value() {
        let mut a = QuerySpec::new();
        a.set(filter_keys::SEARCH, "rust");
        a.set(filter_keys::CITY, "Berlin");

        let mut b = QuerySpec::new();
        b.set(filter_keys::CITY, "Berlin");
        b.set(filter_keys::SEARCH, "rust");

        assert_eq!(a, b);

        b.set(filter_keys::SEARCH, "go");
        assert_ne!(a, b);
    }

    #[test]
    fn query_spec_renders_encoded_query_string() {
        let mut spec = QuerySpec::new();
        spec.set(filter_keys::SEARCH, "rust engineer");
        spec.set(filter_keys::JOB_TYPE, "FULL_TIME");

        // BTreeMap keeps key order stable
        assert_eq!(
            spec.to_query_string(),
            "jobType=FULL_TIME&search=rust%20engineer"
        );
        assert_eq!(QuerySpec::new().to_query_string(), "");
    }
}
