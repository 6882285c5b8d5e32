// HTTP routes
pub mod graphql;
pub mod health;
pub mod seo;

pub use graphql::*;
pub use health::*;
pub use seo::*;
