use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::OrganizationId;

/// Organization - an employer that owns job listings
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Organization {
    /// Find organization by ID
    pub async fn find_by_id(id: OrganizationId, pool: &PgPool) -> Result<Option<Self>> {
        let org = sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(org)
    }

    /// Create a new organization
    pub async fn create(name: String, image_url: Option<String>, pool: &PgPool) -> Result<Self> {
        let org = sqlx::query_as::<_, Organization>(
            "INSERT INTO organizations (id, name, image_url)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(OrganizationId::new())
        .bind(name)
        .bind(image_url)
        .fetch_one(pool)
        .await?;
        Ok(org)
    }
}
