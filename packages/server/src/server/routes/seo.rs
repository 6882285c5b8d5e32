//! Crawler-facing surfaces: sitemap.xml and robots.txt.

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::fmt::Write as _;
use tracing::error;

use crate::domains::job_listings::models::JobListing;
use crate::server::app::AppState;

/// Sitemap endpoint: static pages plus one entry per published listing.
pub async fn sitemap_handler(Extension(state): Extension<AppState>) -> Response {
    let refs = match JobListing::find_published_refs(&state.db_pool).await {
        Ok(refs) => refs,
        Err(e) => {
            error!(error = %e, "Failed to build sitemap");
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
    };

    let base = state.public_base_url.trim_end_matches('/');

    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
"#,
    );

    // Static pages
    for (path, changefreq, priority) in [
        ("", "daily", "1.0"),
        ("/employer", "weekly", "0.7"),
    ] {
        let _ = write!(
            xml,
            "  <url><loc>{base}{path}</loc><changefreq>{changefreq}</changefreq><priority>{priority}</priority></url>\n",
        );
    }

    // Dynamic job listing pages
    for listing in refs {
        let _ = write!(
            xml,
            "  <url><loc>{base}/job-listings/{id}</loc><lastmod>{lastmod}</lastmod><changefreq>weekly</changefreq><priority>0.9</priority></url>\n",
            id = listing.id,
            lastmod = listing.updated_at.format("%Y-%m-%d"),
        );
    }

    xml.push_str("</urlset>\n");

    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}

/// Robots endpoint: allow the public site, keep crawlers out of the API and
/// employer surfaces, and opt out of AI training crawlers.
pub async fn robots_handler(Extension(state): Extension<AppState>) -> Response {
    let base = state.public_base_url.trim_end_matches('/');

    let body = format!(
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /graphql\n\
         Disallow: /employer/\n\
         \n\
         User-agent: GPTBot\n\
         Disallow: /\n\
         \n\
         User-agent: Google-Extended\n\
         Disallow: /\n\
         \n\
         Sitemap: {base}/sitemap.xml\n"
    );

    ([(header::CONTENT_TYPE, "text/plain")], body).into_response()
}
