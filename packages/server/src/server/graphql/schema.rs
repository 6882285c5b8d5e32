//! GraphQL schema definition.

use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::error;
use uuid::Uuid;

use super::context::GraphQLContext;

// Domain edges (resolver bodies)
use crate::domains::job_listings::edges::{mutation as job_listing_mutations, query as job_listing_queries};

// Domain data types (GraphQL types)
use crate::domains::job_listings::data::{
    ExperienceLevelData, JobListingData, JobListingInput, JobListingPage, JobListingStatusData,
    JobTypeData, LocationRequirementData,
};
use crate::domains::organizations::data::OrganizationData;

// Domain models (for queries)
use crate::common::OrganizationId;
use crate::domains::organizations::models::Organization;

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Job listing queries
    // =========================================================================

    /// Get one page of published job listings with filters
    ///
    /// Arguments:
    /// - search: Case-insensitive substring match on the title
    /// - city / state_abbreviation: Location filters
    /// - experience_level / job_type / location_requirement: Attribute filters
    /// - page: 1-based page number (default 1)
    /// - limit: Items per page (default 20, max 100)
    async fn job_listings(
        ctx: &GraphQLContext,
        search: Option<String>,
        city: Option<String>,
        state_abbreviation: Option<String>,
        experience_level: Option<ExperienceLevelData>,
        job_type: Option<JobTypeData>,
        location_requirement: Option<LocationRequirementData>,
        page: Option<i32>,
        limit: Option<i32>,
    ) -> FieldResult<JobListingPage> {
        job_listing_queries::query_job_listings(
            &ctx.db_pool,
            search,
            city,
            state_abbreviation,
            experience_level,
            job_type,
            location_requirement,
            page,
            limit,
        )
        .await
    }

    /// Get a single published listing by ID
    async fn job_listing(ctx: &GraphQLContext, id: Uuid) -> FieldResult<Option<JobListingData>> {
        job_listing_queries::query_job_listing(&ctx.db_pool, id).await
    }

    /// Get every listing owned by an organization, any status (employer dashboard)
    async fn organization_job_listings(
        ctx: &GraphQLContext,
        organization_id: Uuid,
    ) -> FieldResult<Vec<JobListingData>> {
        job_listing_queries::query_organization_job_listings(&ctx.db_pool, organization_id).await
    }

    // =========================================================================
    // Organization queries
    // =========================================================================

    /// Get an organization by ID
    async fn organization(ctx: &GraphQLContext, id: Uuid) -> FieldResult<Option<OrganizationData>> {
        let org = Organization::find_by_id(OrganizationId::from_uuid(id), &ctx.db_pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch organization");
                FieldError::new("Failed to fetch organization", juniper::Value::null())
            })?;

        Ok(org.map(OrganizationData::from))
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Employer mutations
    // =========================================================================

    /// Create a new draft listing for an organization
    async fn create_job_listing(
        ctx: &GraphQLContext,
        organization_id: Uuid,
        input: JobListingInput,
    ) -> FieldResult<JobListingData> {
        job_listing_mutations::create_job_listing(&ctx.db_pool, organization_id, input).await
    }

    /// Update a listing's content fields
    async fn update_job_listing(
        ctx: &GraphQLContext,
        id: Uuid,
        input: JobListingInput,
    ) -> FieldResult<JobListingData> {
        job_listing_mutations::update_job_listing(&ctx.db_pool, id, input).await
    }

    /// Change a listing's status (publish stamps posted_at on first use)
    async fn set_job_listing_status(
        ctx: &GraphQLContext,
        id: Uuid,
        status: JobListingStatusData,
    ) -> FieldResult<JobListingData> {
        job_listing_mutations::set_job_listing_status(&ctx.db_pool, id, status).await
    }

    /// Delete a listing permanently
    async fn delete_job_listing(ctx: &GraphQLContext, id: Uuid) -> FieldResult<bool> {
        job_listing_mutations::delete_job_listing(&ctx.db_pool, id).await
    }

    /// Create an organization
    async fn create_organization(
        ctx: &GraphQLContext,
        name: String,
        image_url: Option<String>,
    ) -> FieldResult<OrganizationData> {
        if name.trim().is_empty() {
            return Err(FieldError::new(
                "Organization name must not be empty",
                juniper::Value::null(),
            ));
        }

        let org = Organization::create(name, image_url, &ctx.db_pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to create organization");
                FieldError::new("Failed to create organization", juniper::Value::null())
            })?;

        Ok(OrganizationData::from(org))
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
