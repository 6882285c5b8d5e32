use chrono::{DateTime, Utc};
use juniper::{GraphQLEnum, GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use crate::common::PageMeta;
use crate::domains::job_listings::models::{
    ExperienceLevel, JobListingStatus, JobListingWithOrganization, JobType, LocationRequirement,
};
use crate::domains::organizations::data::OrganizationData;

/// GraphQL type for a job listing as shown in the feed
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A job listing with its owning organization")]
pub struct JobListingData {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub city: Option<String>,
    pub state_abbreviation: Option<String>,
    pub wage: Option<i32>,
    pub wage_interval: Option<String>,
    pub wage_currency: Option<String>,
    pub experience_level: ExperienceLevelData,
    pub job_type: JobTypeData,
    pub location_requirement: LocationRequirementData,
    pub status: JobListingStatusData,
    pub is_featured: bool,
    pub posted_at: Option<DateTime<Utc>>,
    pub organization: OrganizationData,
}

/// One page of the job feed plus its pagination descriptor
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A page of job listings")]
pub struct JobListingPage {
    pub nodes: Vec<JobListingData>,
    pub pagination: PageMeta,
}

/// Fields an employer supplies when creating or editing a listing
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct JobListingInput {
    pub title: String,
    pub description: String,
    pub city: Option<String>,
    pub state_abbreviation: Option<String>,
    pub wage: Option<i32>,
    pub wage_interval: Option<String>,
    pub wage_currency: Option<String>,
    pub experience_level: ExperienceLevelData,
    pub job_type: JobTypeData,
    pub location_requirement: LocationRequirementData,
}

/// Experience level for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum ExperienceLevelData {
    Junior,
    MidLevel,
    Senior,
    CLevel,
}

/// Employment type for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum JobTypeData {
    Internship,
    PartTime,
    FullTime,
    Contract,
}

/// Location requirement for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum LocationRequirementData {
    InOffice,
    Hybrid,
    Remote,
}

/// Listing status for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum)]
pub enum JobListingStatusData {
    Draft,
    Published,
    Delisted,
}

impl From<ExperienceLevel> for ExperienceLevelData {
    fn from(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Junior => ExperienceLevelData::Junior,
            ExperienceLevel::MidLevel => ExperienceLevelData::MidLevel,
            ExperienceLevel::Senior => ExperienceLevelData::Senior,
            ExperienceLevel::CLevel => ExperienceLevelData::CLevel,
        }
    }
}

impl From<ExperienceLevelData> for ExperienceLevel {
    fn from(level: ExperienceLevelData) -> Self {
        match level {
            ExperienceLevelData::Junior => ExperienceLevel::Junior,
            ExperienceLevelData::MidLevel => ExperienceLevel::MidLevel,
            ExperienceLevelData::Senior => ExperienceLevel::Senior,
            ExperienceLevelData::CLevel => ExperienceLevel::CLevel,
        }
    }
}

impl From<JobType> for JobTypeData {
    fn from(job_type: JobType) -> Self {
        match job_type {
            JobType::Internship => JobTypeData::Internship,
            JobType::PartTime => JobTypeData::PartTime,
            JobType::FullTime => JobTypeData::FullTime,
            JobType::Contract => JobTypeData::Contract,
        }
    }
}

impl From<JobTypeData> for JobType {
    fn from(job_type: JobTypeData) -> Self {
        match job_type {
            JobTypeData::Internship => JobType::Internship,
            JobTypeData::PartTime => JobType::PartTime,
            JobTypeData::FullTime => JobType::FullTime,
            JobTypeData::Contract => JobType::Contract,
        }
    }
}

impl From<LocationRequirement> for LocationRequirementData {
    fn from(req: LocationRequirement) -> Self {
        match req {
            LocationRequirement::InOffice => LocationRequirementData::InOffice,
            LocationRequirement::Hybrid => LocationRequirementData::Hybrid,
            LocationRequirement::Remote => LocationRequirementData::Remote,
        }
    }
}

impl From<LocationRequirementData> for LocationRequirement {
    fn from(req: LocationRequirementData) -> Self {
        match req {
            LocationRequirementData::InOffice => LocationRequirement::InOffice,
            LocationRequirementData::Hybrid => LocationRequirement::Hybrid,
            LocationRequirementData::Remote => LocationRequirement::Remote,
        }
    }
}

impl From<JobListingStatus> for JobListingStatusData {
    fn from(status: JobListingStatus) -> Self {
        match status {
            JobListingStatus::Draft => JobListingStatusData::Draft,
            JobListingStatus::Published => JobListingStatusData::Published,
            JobListingStatus::Delisted => JobListingStatusData::Delisted,
        }
    }
}

impl From<JobListingStatusData> for JobListingStatus {
    fn from(status: JobListingStatusData) -> Self {
        match status {
            JobListingStatusData::Draft => JobListingStatus::Draft,
            JobListingStatusData::Published => JobListingStatus::Published,
            JobListingStatusData::Delisted => JobListingStatus::Delisted,
        }
    }
}

impl From<JobListingWithOrganization> for JobListingData {
    fn from(row: JobListingWithOrganization) -> Self {
        JobListingData::from_parts(row.listing, row.organization_name, row.organization_image_url)
    }
}

impl JobListingData {
    /// Build the API type from a listing row plus its organization projection.
    pub fn from_parts(
        listing: crate::domains::job_listings::models::JobListing,
        organization_name: String,
        organization_image_url: Option<String>,
    ) -> Self {
        Self {
            id: listing.id.into_uuid(),
            title: listing.title,
            description: listing.description,
            city: listing.city,
            state_abbreviation: listing.state_abbreviation,
            wage: listing.wage,
            wage_interval: listing.wage_interval,
            wage_currency: listing.wage_currency,
            // Stored strings are constrained by the model layer; fall back to
            // the most common value if a row predates a rename.
            experience_level: listing
                .experience_level
                .parse::<ExperienceLevel>()
                .unwrap_or(ExperienceLevel::Junior)
                .into(),
            job_type: listing
                .job_type
                .parse::<JobType>()
                .unwrap_or(JobType::FullTime)
                .into(),
            location_requirement: listing
                .location_requirement
                .parse::<LocationRequirement>()
                .unwrap_or(LocationRequirement::InOffice)
                .into(),
            status: listing
                .status
                .parse::<JobListingStatus>()
                .unwrap_or(JobListingStatus::Draft)
                .into(),
            is_featured: listing.is_featured,
            posted_at: listing.posted_at,
            organization: OrganizationData {
                id: listing.organization_id.into_uuid(),
                name: organization_name,
                image_url: organization_image_url,
            },
        }
    }
}
