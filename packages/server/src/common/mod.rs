// Common types and utilities shared across the application

pub mod ids;
pub mod pagination;

pub use ids::*;
pub use pagination::*;
