//! GraphQL client for communicating with the API server

mod client;
mod mutations;
mod queries;

pub use client::*;
pub use mutations::*;
pub use queries::*;
