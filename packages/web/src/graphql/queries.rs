//! GraphQL query definitions

// ============================================================================
// PUBLIC QUERIES
// ============================================================================

pub const JOB_LISTINGS: &str = r#"
  query JobListings(
    $search: String,
    $city: String,
    $stateAbbreviation: String,
    $experienceLevel: ExperienceLevelData,
    $jobType: JobTypeData,
    $locationRequirement: LocationRequirementData,
    $page: Int,
    $limit: Int
  ) {
    jobListings(
      search: $search
      city: $city
      stateAbbreviation: $stateAbbreviation
      experienceLevel: $experienceLevel
      jobType: $jobType
      locationRequirement: $locationRequirement
      page: $page
      limit: $limit
    ) {
      nodes {
        id
        title
        city
        stateAbbreviation
        wage
        wageInterval
        wageCurrency
        experienceLevel
        jobType
        locationRequirement
        status
        isFeatured
        postedAt
        organization {
          id
          name
          imageUrl
        }
      }
      pagination {
        page
        limit
        total
        totalPages
        hasNextPage
        hasPrevPage
      }
    }
  }
"#;

pub const JOB_LISTING_DETAIL: &str = r#"
  query JobListingDetail($id: Uuid!) {
    jobListing(id: $id) {
      id
      title
      description
      city
      stateAbbreviation
      wage
      wageInterval
      wageCurrency
      experienceLevel
      jobType
      locationRequirement
      status
      isFeatured
      postedAt
      organization {
        id
        name
        imageUrl
      }
    }
  }
"#;

// ============================================================================
// EMPLOYER QUERIES
// ============================================================================

pub const ORGANIZATION_JOB_LISTINGS: &str = r#"
  query OrganizationJobListings($organizationId: Uuid!) {
    organizationJobListings(organizationId: $organizationId) {
      id
      title
      city
      stateAbbreviation
      wage
      wageInterval
      wageCurrency
      experienceLevel
      jobType
      locationRequirement
      status
      isFeatured
      postedAt
      organization {
        id
        name
        imageUrl
      }
    }
  }
"#;
