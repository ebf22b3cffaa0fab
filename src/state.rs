use crate::{db::DbPool, processor::StripeClient};

/// Shared handles built once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub jwt_secret: String,
    pub stripe: StripeClient,
}
