//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::employer::{EmployerDashboard, EmployerHome, NewJobListing};
use crate::pages::public::{Home, JobListingDetail};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[route("/")]
    Home {},

    // Detail pages carry the active filter set in the query string so the
    // back button restores the filtered feed.
    #[route("/job-listings/:id?:..query")]
    JobListingDetail { id: String, query: String },

    // Employer routes
    #[route("/employer")]
    EmployerHome {},

    #[route("/employer/:organization_id")]
    EmployerDashboard { organization_id: String },

    #[route("/employer/:organization_id/new")]
    NewJobListing { organization_id: String },
}
