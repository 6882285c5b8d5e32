use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{JobListingId, OrganizationId};

/// JobListing - a job posting owned by an organization
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobListing {
    pub id: JobListingId,
    pub organization_id: OrganizationId,

    // Content
    pub title: String,
    pub description: String,

    // Location
    pub city: Option<String>,
    pub state_abbreviation: Option<String>,
    pub location_requirement: String, // 'in-office', 'hybrid', 'remote'

    // Compensation
    pub wage: Option<i32>,
    pub wage_interval: Option<String>, // 'hourly', 'monthly', 'yearly'
    pub wage_currency: Option<String>, // 'USD', 'EUR'

    // Employment attributes
    pub experience_level: String, // 'junior', 'mid-level', 'senior', 'c-level'
    pub job_type: String,         // 'internship', 'part-time', 'full-time', 'contract'

    // Lifecycle
    pub status: String, // 'draft', 'published', 'delisted'
    pub is_featured: bool,
    pub posted_at: Option<DateTime<Utc>>, // stamped on first publish

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A listing row joined with its owning organization, as shown in the feed
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobListingWithOrganization {
    #[sqlx(flatten)]
    pub listing: JobListing,
    pub organization_name: String,
    pub organization_image_url: Option<String>,
}

/// Id + timestamp projection of a published listing, for the sitemap
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PublishedListingRef {
    pub id: JobListingId,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Enums for type-safe edges
// =============================================================================

/// Experience level enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Junior,
    MidLevel,
    Senior,
    CLevel,
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceLevel::Junior => write!(f, "junior"),
            ExperienceLevel::MidLevel => write!(f, "mid-level"),
            ExperienceLevel::Senior => write!(f, "senior"),
            ExperienceLevel::CLevel => write!(f, "c-level"),
        }
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "junior" => Ok(ExperienceLevel::Junior),
            "mid-level" => Ok(ExperienceLevel::MidLevel),
            "senior" => Ok(ExperienceLevel::Senior),
            "c-level" => Ok(ExperienceLevel::CLevel),
            _ => Err(anyhow::anyhow!("Invalid experience level: {}", s)),
        }
    }
}

/// Employment type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    Internship,
    PartTime,
    FullTime,
    Contract,
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobType::Internship => write!(f, "internship"),
            JobType::PartTime => write!(f, "part-time"),
            JobType::FullTime => write!(f, "full-time"),
            JobType::Contract => write!(f, "contract"),
        }
    }
}

impl std::str::FromStr for JobType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "internship" => Ok(JobType::Internship),
            "part-time" => Ok(JobType::PartTime),
            "full-time" => Ok(JobType::FullTime),
            "contract" => Ok(JobType::Contract),
            _ => Err(anyhow::anyhow!("Invalid job type: {}", s)),
        }
    }
}

/// Location requirement enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LocationRequirement {
    InOffice,
    Hybrid,
    Remote,
}

impl std::fmt::Display for LocationRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationRequirement::InOffice => write!(f, "in-office"),
            LocationRequirement::Hybrid => write!(f, "hybrid"),
            LocationRequirement::Remote => write!(f, "remote"),
        }
    }
}

impl std::str::FromStr for LocationRequirement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "in-office" => Ok(LocationRequirement::InOffice),
            "hybrid" => Ok(LocationRequirement::Hybrid),
            "remote" => Ok(LocationRequirement::Remote),
            _ => Err(anyhow::anyhow!("Invalid location requirement: {}", s)),
        }
    }
}

/// Status enum for type-safe edges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobListingStatus {
    Draft,
    Published,
    Delisted,
}

impl std::fmt::Display for JobListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobListingStatus::Draft => write!(f, "draft"),
            JobListingStatus::Published => write!(f, "published"),
            JobListingStatus::Delisted => write!(f, "delisted"),
        }
    }
}

impl std::str::FromStr for JobListingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "draft" => Ok(JobListingStatus::Draft),
            "published" => Ok(JobListingStatus::Published),
            "delisted" => Ok(JobListingStatus::Delisted),
            _ => Err(anyhow::anyhow!("Invalid listing status: {}", s)),
        }
    }
}

// =============================================================================
// Filters
// =============================================================================

/// Optional filters applied to the public feed query.
///
/// Absent filters match everything; the SQL below is null-tolerant so one
/// statement serves every filter combination.
#[derive(Debug, Clone, Default)]
pub struct JobListingFilters {
    /// Case-insensitive substring match on the title.
    pub search: Option<String>,
    pub city: Option<String>,
    pub state_abbreviation: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub job_type: Option<JobType>,
    pub location_requirement: Option<LocationRequirement>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl JobListing {
    /// Find listing by ID
    pub async fn find_by_id(id: JobListingId, pool: &PgPool) -> Result<Option<Self>> {
        let listing = sqlx::query_as::<_, JobListing>("SELECT * FROM job_listings WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(listing)
    }

    /// Find a published listing joined with its organization
    pub async fn find_published_with_organization(
        id: JobListingId,
        pool: &PgPool,
    ) -> Result<Option<JobListingWithOrganization>> {
        let listing = sqlx::query_as::<_, JobListingWithOrganization>(
            "SELECT l.*, o.name AS organization_name, o.image_url AS organization_image_url
             FROM job_listings l
             JOIN organizations o ON o.id = l.organization_id
             WHERE l.id = $1 AND l.status = 'published'",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(listing)
    }

    /// Find one page of published listings matching the filters.
    ///
    /// Featured listings sort first, then newest postings.
    pub async fn find_page(
        filters: &JobListingFilters,
        limit: i64,
        offset: i64,
        pool: &PgPool,
    ) -> Result<Vec<JobListingWithOrganization>> {
        let listings = sqlx::query_as::<_, JobListingWithOrganization>(
            "SELECT l.*, o.name AS organization_name, o.image_url AS organization_image_url
             FROM job_listings l
             JOIN organizations o ON o.id = l.organization_id
             WHERE l.status = 'published'
               AND ($1::text IS NULL OR l.title ILIKE '%' || $1 || '%')
               AND ($2::text IS NULL OR l.city ILIKE $2)
               AND ($3::text IS NULL OR l.state_abbreviation = $3)
               AND ($4::text IS NULL OR l.experience_level = $4)
               AND ($5::text IS NULL OR l.job_type = $5)
               AND ($6::text IS NULL OR l.location_requirement = $6)
             ORDER BY l.is_featured DESC, l.posted_at DESC NULLS LAST, l.id DESC
             LIMIT $7 OFFSET $8",
        )
        .bind(filters.search.as_deref())
        .bind(filters.city.as_deref())
        .bind(filters.state_abbreviation.as_deref())
        .bind(filters.experience_level.map(|v| v.to_string()))
        .bind(filters.job_type.map(|v| v.to_string()))
        .bind(filters.location_requirement.map(|v| v.to_string()))
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
        Ok(listings)
    }

    /// Count published listings matching the filters
    pub async fn count(filters: &JobListingFilters, pool: &PgPool) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*)
             FROM job_listings l
             WHERE l.status = 'published'
               AND ($1::text IS NULL OR l.title ILIKE '%' || $1 || '%')
               AND ($2::text IS NULL OR l.city ILIKE $2)
               AND ($3::text IS NULL OR l.state_abbreviation = $3)
               AND ($4::text IS NULL OR l.experience_level = $4)
               AND ($5::text IS NULL OR l.job_type = $5)
               AND ($6::text IS NULL OR l.location_requirement = $6)",
        )
        .bind(filters.search.as_deref())
        .bind(filters.city.as_deref())
        .bind(filters.state_abbreviation.as_deref())
        .bind(filters.experience_level.map(|v| v.to_string()))
        .bind(filters.job_type.map(|v| v.to_string()))
        .bind(filters.location_requirement.map(|v| v.to_string()))
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Find all listings owned by an organization, any status (employer dashboard)
    pub async fn find_by_organization(
        organization_id: OrganizationId,
        pool: &PgPool,
    ) -> Result<Vec<JobListingWithOrganization>> {
        let listings = sqlx::query_as::<_, JobListingWithOrganization>(
            "SELECT l.*, o.name AS organization_name, o.image_url AS organization_image_url
             FROM job_listings l
             JOIN organizations o ON o.id = l.organization_id
             WHERE l.organization_id = $1
             ORDER BY l.created_at DESC",
        )
        .bind(organization_id)
        .fetch_all(pool)
        .await?;
        Ok(listings)
    }

    /// Published listing refs for the sitemap
    pub async fn find_published_refs(pool: &PgPool) -> Result<Vec<PublishedListingRef>> {
        let refs = sqlx::query_as::<_, PublishedListingRef>(
            "SELECT id, updated_at FROM job_listings
             WHERE status = 'published'
             ORDER BY posted_at DESC NULLS LAST",
        )
        .fetch_all(pool)
        .await?;
        Ok(refs)
    }

    /// Create a new listing (starts as draft)
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        organization_id: OrganizationId,
        title: String,
        description: String,
        city: Option<String>,
        state_abbreviation: Option<String>,
        wage: Option<i32>,
        wage_interval: Option<String>,
        wage_currency: Option<String>,
        experience_level: ExperienceLevel,
        job_type: JobType,
        location_requirement: LocationRequirement,
        pool: &PgPool,
    ) -> Result<Self> {
        let listing = sqlx::query_as::<_, JobListing>(
            "INSERT INTO job_listings (
                id, organization_id, title, description, city, state_abbreviation,
                wage, wage_interval, wage_currency,
                experience_level, job_type, location_requirement, status
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, 'draft')
             RETURNING *",
        )
        .bind(JobListingId::new())
        .bind(organization_id)
        .bind(title)
        .bind(description)
        .bind(city)
        .bind(state_abbreviation)
        .bind(wage)
        .bind(wage_interval)
        .bind(wage_currency)
        .bind(experience_level.to_string())
        .bind(job_type.to_string())
        .bind(location_requirement.to_string())
        .fetch_one(pool)
        .await?;
        Ok(listing)
    }

    /// Update a listing's content fields
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        id: JobListingId,
        title: String,
        description: String,
        city: Option<String>,
        state_abbreviation: Option<String>,
        wage: Option<i32>,
        wage_interval: Option<String>,
        wage_currency: Option<String>,
        experience_level: ExperienceLevel,
        job_type: JobType,
        location_requirement: LocationRequirement,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let listing = sqlx::query_as::<_, JobListing>(
            "UPDATE job_listings SET
                title = $2,
                description = $3,
                city = $4,
                state_abbreviation = $5,
                wage = $6,
                wage_interval = $7,
                wage_currency = $8,
                experience_level = $9,
                job_type = $10,
                location_requirement = $11,
                updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(city)
        .bind(state_abbreviation)
        .bind(wage)
        .bind(wage_interval)
        .bind(wage_currency)
        .bind(experience_level.to_string())
        .bind(job_type.to_string())
        .bind(location_requirement.to_string())
        .fetch_optional(pool)
        .await?;
        Ok(listing)
    }

    /// Change a listing's status.
    ///
    /// The first transition to 'published' stamps posted_at; later
    /// delist/republish cycles keep the original posting time.
    pub async fn set_status(
        id: JobListingId,
        status: JobListingStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let listing = sqlx::query_as::<_, JobListing>(
            "UPDATE job_listings SET
                status = $2,
                posted_at = CASE
                    WHEN $2 = 'published' AND posted_at IS NULL THEN now()
                    ELSE posted_at
                END,
                updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(status.to_string())
        .fetch_optional(pool)
        .await?;
        Ok(listing)
    }

    /// Delete a listing permanently
    pub async fn delete(id: JobListingId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM job_listings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_level_display_matches_stored_values() {
        assert_eq!(ExperienceLevel::MidLevel.to_string(), "mid-level");
        assert_eq!(
            "c-level".parse::<ExperienceLevel>().unwrap(),
            ExperienceLevel::CLevel
        );
        assert!("principal".parse::<ExperienceLevel>().is_err());
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert_eq!(
            "published".parse::<JobListingStatus>().unwrap(),
            JobListingStatus::Published
        );
        assert!("archived".parse::<JobListingStatus>().is_err());
    }
}
