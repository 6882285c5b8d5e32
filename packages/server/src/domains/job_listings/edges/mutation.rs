use juniper::{FieldError, FieldResult};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::common::{JobListingId, OrganizationId};
use crate::domains::job_listings::data::{JobListingData, JobListingInput, JobListingStatusData};
use crate::domains::job_listings::models::JobListing;
use crate::domains::organizations::models::Organization;

fn db_error(e: anyhow::Error, what: &str) -> FieldError {
    error!(error = %e, "{}", what);
    FieldError::new(what, juniper::Value::null())
}

/// Look up the owning organization and pair it with a listing row.
async fn with_organization(listing: JobListing, pool: &PgPool) -> FieldResult<JobListingData> {
    let org = Organization::find_by_id(listing.organization_id, pool)
        .await
        .map_err(|e| db_error(e, "Failed to load organization"))?
        .ok_or_else(|| FieldError::new("Organization not found", juniper::Value::null()))?;

    Ok(JobListingData::from_parts(listing, org.name, org.image_url))
}

/// Create a new draft listing for an organization
pub async fn create_job_listing(
    pool: &PgPool,
    organization_id: Uuid,
    input: JobListingInput,
) -> FieldResult<JobListingData> {
    let organization_id = OrganizationId::from_uuid(organization_id);

    // Reject unknown organizations up front so the FK violation does not
    // surface as an opaque database error.
    if Organization::find_by_id(organization_id, pool)
        .await
        .map_err(|e| db_error(e, "Failed to load organization"))?
        .is_none()
    {
        return Err(FieldError::new(
            "Organization not found",
            juniper::Value::null(),
        ));
    }

    let listing = JobListing::create(
        organization_id,
        input.title,
        input.description,
        input.city,
        input.state_abbreviation,
        input.wage,
        input.wage_interval,
        input.wage_currency,
        input.experience_level.into(),
        input.job_type.into(),
        input.location_requirement.into(),
        pool,
    )
    .await
    .map_err(|e| db_error(e, "Failed to create job listing"))?;

    with_organization(listing, pool).await
}

/// Update a listing's content fields
pub async fn update_job_listing(
    pool: &PgPool,
    id: Uuid,
    input: JobListingInput,
) -> FieldResult<JobListingData> {
    let listing = JobListing::update(
        JobListingId::from_uuid(id),
        input.title,
        input.description,
        input.city,
        input.state_abbreviation,
        input.wage,
        input.wage_interval,
        input.wage_currency,
        input.experience_level.into(),
        input.job_type.into(),
        input.location_requirement.into(),
        pool,
    )
    .await
    .map_err(|e| db_error(e, "Failed to update job listing"))?
    .ok_or_else(|| FieldError::new("Job listing not found", juniper::Value::null()))?;

    with_organization(listing, pool).await
}

/// Publish, delist, or move a listing back to draft
pub async fn set_job_listing_status(
    pool: &PgPool,
    id: Uuid,
    status: JobListingStatusData,
) -> FieldResult<JobListingData> {
    let listing = JobListing::set_status(JobListingId::from_uuid(id), status.into(), pool)
        .await
        .map_err(|e| db_error(e, "Failed to change job listing status"))?
        .ok_or_else(|| FieldError::new("Job listing not found", juniper::Value::null()))?;

    with_organization(listing, pool).await
}

/// Delete a listing permanently
pub async fn delete_job_listing(pool: &PgPool, id: Uuid) -> FieldResult<bool> {
    JobListing::delete(JobListingId::from_uuid(id), pool)
        .await
        .map_err(|e| db_error(e, "Failed to delete job listing"))
}
