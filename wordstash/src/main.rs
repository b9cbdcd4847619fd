use actix_web::{web, HttpServer};
use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use tracing::{info, warn};
use wordstash::api::api_router;
use wordstash::connect_and_set_up_database;
use wordstash::logging::initialize_tracing;
use wordstash::state::ApplicationStateInner;
use wordstash_analysis::{Analyzer, ChatCompletionsClient};
use wordstash_configuration::{Configuration, ANALYSIS_API_KEY_ENVIRONMENT_VARIABLE};

mod cli;

use crate::cli::CLIArgs;



#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments.
    let arguments = CLIArgs::parse();

    // Load configuration.
    let configuration = match arguments.configuration_file_path.as_ref() {
        Some(path) => {
            println!("Loading configuration: {}", path.display());
            Configuration::load_from_path(path)
        }
        None => {
            println!("Loading configuration at default path.");
            Configuration::load_from_default_path()
        }
    }
    .wrap_err("Failed to load configuration file.")?;


    let guard = initialize_tracing(
        configuration.logging.console_level_filter(),
        configuration.logging.file_level_filter(),
        &configuration.logging.file_output_directory,
        "wordstash.log",
    )
    .wrap_err("Failed to initialize tracing.")?;

    info!(
        file_path = configuration.file_path.to_string_lossy().as_ref(),
        "Configuration loaded."
    );


    if configuration.analysis.api_key.is_none() {
        // Not fatal: every endpoint except analyze still works.
        warn!(
            "No completion endpoint credential is set (neither in the configuration file \
             nor via {}); AI analysis calls will fail until one is provided.",
            ANALYSIS_API_KEY_ENVIRONMENT_VARIABLE
        );
    }


    // Initialize the database connection pool and the analysis pipeline.
    let database_pool = connect_and_set_up_database(&configuration).await?;

    let completion_client = ChatCompletionsClient::new(
        configuration.analysis.endpoint_url.clone(),
        configuration.analysis.model.clone(),
        configuration.analysis.api_key.clone(),
        configuration.analysis.request_timeout,
    )
    .into_diagnostic()
    .wrap_err("Failed to construct the completion client.")?;

    let state = web::Data::new(ApplicationStateInner {
        database_pool,
        analyzer: Analyzer::new(Box::new(completion_client)),
    });


    // Initialize and start the actix HTTP server.
    #[rustfmt::skip]
    #[allow(clippy::let_and_return)]
    let server = HttpServer::new(move || {
        let json_extractor_config = actix_web::web::JsonConfig::default();

        // FIXME Modify permissive CORS to something more safe in production.
        let cors = actix_cors::Cors::permissive().expose_headers(vec![
            "Date",
            "Content-Type",
            "Content-Length",
        ]);

        actix_web::App::new()
            .wrap(actix_web::middleware::NormalizePath::trim())
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(json_extractor_config)
            .app_data(state.clone())
            .service(api_router())
    })
        .bind((
            configuration.http.host.as_str(),
            configuration.http.port,
        ))
        .into_diagnostic()
        .wrap_err("Failed to set up actix HTTP server.")?;

    info!(
        host = configuration.http.host.as_str(),
        port = configuration.http.port,
        "HTTP server initialized and running."
    );

    // Run HTTP server until stopped.
    server
        .run()
        .await
        .into_diagnostic()
        .wrap_err("Errored while running actix HTTP server.")?;


    drop(guard);

    Ok(())
}
