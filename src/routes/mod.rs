use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod classes;
pub mod doc;
pub mod health;
pub mod payments;
pub mod selections;
pub mod users;

// Route paths are kept verbatim from the original server (misspellings
// included) so existing clients keep working.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(classes::router())
        .merge(selections::router())
        .merge(users::router())
        .merge(payments::router())
}
