use sqlx::PgPool;

/// GraphQL request context
///
/// Contains shared resources available to all resolvers
pub struct GraphQLContext {
    pub db_pool: PgPool,
    // TODO: Add auth (Clerk verification) so employer mutations check the
    // caller's organization membership instead of trusting the supplied id.
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}
