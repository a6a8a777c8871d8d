//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! document store and sessions live entirely in Postgres, so the state is
//! just the shared pool.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
