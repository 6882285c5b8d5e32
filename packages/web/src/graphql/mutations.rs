//! GraphQL mutation definitions

pub const CREATE_JOB_LISTING: &str = r#"
  mutation CreateJobListing($organizationId: Uuid!, $input: JobListingInput!) {
    createJobListing(organizationId: $organizationId, input: $input) {
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

pub const SET_JOB_LISTING_STATUS: &str = r#"
  mutation SetJobListingStatus($id: Uuid!, $status: JobListingStatusData!) {
    setJobListingStatus(id: $id, status: $status) {
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

pub const DELETE_JOB_LISTING: &str = r#"
  mutation DeleteJobListing($id: Uuid!) {
    deleteJobListing(id: $id)
  }
"#;

pub const CREATE_ORGANIZATION: &str = r#"
  mutation CreateOrganization($name: String!, $imageUrl: String) {
    createOrganization(name: $name, imageUrl: $imageUrl) {
      id
      name
      imageUrl
    }
  }
"#;
