use std::time::Duration;

use miette::{Context, IntoDiagnostic, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use wordstash_configuration::{Configuration, DatabaseConfiguration};

pub mod api;
pub mod logging;
pub mod state;

pub async fn establish_database_connection_pool(
    database_configuration: &DatabaseConfiguration,
) -> Result<PgPool, sqlx::Error> {
    let mut connection_options = PgConnectOptions::new_without_pgpass()
        .application_name(&format!(
            "wordstash-backend-api_v{}",
            env!("CARGO_PKG_VERSION")
        ))
        .host(&database_configuration.host)
        .port(database_configuration.port)
        .username(&database_configuration.username)
        .database(&database_configuration.database_name);

    if let Some(password) = &database_configuration.password {
        connection_options = connection_options.password(password.as_str());
    }


    PgPoolOptions::new()
        .idle_timeout(Some(Duration::from_secs(60 * 20)))
        .max_lifetime(Some(Duration::from_secs(60 * 60)))
        .min_connections(1)
        .max_connections(10)
        .test_before_acquire(true)
        .connect_with(connection_options)
        .await
}


/// Connects to PostgreSQL and makes sure the schema exists.
pub async fn connect_and_set_up_database(configuration: &Configuration) -> Result<PgPool> {
    let database_pool = establish_database_connection_pool(&configuration.database)
        .await
        .into_diagnostic()
        .wrap_err("Failed to establish a database connection pool.")?;

    wordstash_database::initialize_schema(&database_pool)
        .await
        .into_diagnostic()
        .wrap_err("Failed to initialize the database schema.")?;

    Ok(database_pool)
}
