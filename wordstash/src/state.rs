//! Application-wide state (shared between endpoint functions).

use actix_web::web::Data;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use wordstash_analysis::Analyzer;


/// Central application state.
///
/// Use [`ApplicationState`] instead as it already wraps this struct
/// in [`actix_web::web::Data`]!
///
/// If you need mutable state, opt for internal mutability as the struct
/// is internally essentially wrapped in an `Arc` by actix.
pub struct ApplicationStateInner {
    /// PostgreSQL database connection pool.
    pub database_pool: PgPool,

    /// The AI analysis pipeline, holding its completion client as an
    /// injected dependency rather than module-level state.
    pub analyzer: Analyzer,
}

impl ApplicationStateInner {
    pub async fn acquire_database_connection(
        &self,
    ) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        self.database_pool.acquire().await
    }
}


/// Central application state, wrapped in an actix [`Data`] wrapper,
/// which enables usage in endpoint functions.
pub type ApplicationState = Data<ApplicationStateInner>;
