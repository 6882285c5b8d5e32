use juniper::{FieldError, FieldResult};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::common::{JobListingId, OrganizationId, PageArgs, PageMeta};
use crate::domains::job_listings::data::{
    ExperienceLevelData, JobListingData, JobListingPage, JobTypeData, LocationRequirementData,
};
use crate::domains::job_listings::models::{JobListing, JobListingFilters};

/// Query one page of the public job feed with filters and pagination
#[allow(clippy::too_many_arguments)]
pub async fn query_job_listings(
    pool: &PgPool,
    search: Option<String>,
    city: Option<String>,
    state_abbreviation: Option<String>,
    experience_level: Option<ExperienceLevelData>,
    job_type: Option<JobTypeData>,
    location_requirement: Option<LocationRequirementData>,
    page: Option<i32>,
    limit: Option<i32>,
) -> FieldResult<JobListingPage> {
    let args = PageArgs { page, limit }
        .validate()
        .map_err(|e| FieldError::new(e, juniper::Value::null()))?;

    let filters = JobListingFilters {
        search: search.filter(|s| !s.trim().is_empty()),
        city: city.filter(|s| !s.trim().is_empty()),
        state_abbreviation: state_abbreviation.filter(|s| !s.trim().is_empty()),
        experience_level: experience_level.map(Into::into),
        job_type: job_type.map(Into::into),
        location_requirement: location_requirement.map(Into::into),
    };

    let listings = JobListing::find_page(&filters, args.fetch_limit(), args.offset(), pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query job listings page");
            FieldError::new("Failed to fetch job listings", juniper::Value::null())
        })?;

    let total = JobListing::count(&filters, pool).await.map_err(|e| {
        error!(error = %e, "Failed to count job listings");
        FieldError::new("Failed to fetch job listings", juniper::Value::null())
    })?;

    Ok(JobListingPage {
        nodes: listings.into_iter().map(JobListingData::from).collect(),
        pagination: PageMeta::compute(args.page, args.limit, total),
    })
}

/// Get a single published listing by ID (public detail page)
pub async fn query_job_listing(pool: &PgPool, id: Uuid) -> FieldResult<Option<JobListingData>> {
    let listing_id = JobListingId::from_uuid(id);

    let listing = JobListing::find_published_with_organization(listing_id, pool)
        .await
        .map_err(|e| {
            error!(error = %e, listing_id = %listing_id, "Failed to fetch job listing");
            FieldError::new("Failed to fetch job listing", juniper::Value::null())
        })?;

    Ok(listing.map(JobListingData::from))
}

/// Get every listing owned by an organization, any status (employer dashboard)
pub async fn query_organization_job_listings(
    pool: &PgPool,
    organization_id: Uuid,
) -> FieldResult<Vec<JobListingData>> {
    let organization_id = OrganizationId::from_uuid(organization_id);

    let listings = JobListing::find_by_organization(organization_id, pool)
        .await
        .map_err(|e| {
            error!(error = %e, organization_id = %organization_id, "Failed to fetch organization listings");
            FieldError::new("Failed to fetch job listings", juniper::Value::null())
        })?;

    Ok(listings.into_iter().map(JobListingData::from).collect())
}
