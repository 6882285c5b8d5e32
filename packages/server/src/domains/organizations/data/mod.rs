use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::organizations::models::Organization;

/// API representation of an organization
#[derive(Debug, Clone, GraphQLObject, Serialize, Deserialize)]
#[graphql(description = "An employer organization")]
pub struct OrganizationData {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
}

impl From<Organization> for OrganizationData {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id.into_uuid(),
            name: org.name,
            image_url: org.image_url,
        }
    }
}
