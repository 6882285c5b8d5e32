pub mod data;
pub mod edges;
pub mod models;

// Re-export data types (GraphQL types)
pub use data::{
    JobListingData, JobListingInput, JobListingPage, JobListingStatusData, JobTypeData,
    ExperienceLevelData, LocationRequirementData,
};

// Re-export models (domain models)
pub use models::{
    ExperienceLevel, JobListing, JobListingFilters, JobListingStatus, JobListingWithOrganization,
    JobType, LocationRequirement,
};
