use std::env::current_dir;
use std::fs;
use std::path::{Path, PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};
use serde::Deserialize;

mod analysis;
mod database;
mod http;
mod logging;

pub use self::analysis::{AnalysisConfiguration, ANALYSIS_API_KEY_ENVIRONMENT_VARIABLE};
use self::analysis::UnresolvedAnalysisConfiguration;
pub use self::database::DatabaseConfiguration;
use self::database::UnresolvedDatabaseConfiguration;
pub use self::http::HttpConfiguration;
use self::http::UnresolvedHttpConfiguration;
pub use self::logging::LoggingConfiguration;
use self::logging::UnresolvedLoggingConfiguration;
use crate::traits::ResolvableConfiguration;


/// Path the server looks at when no configuration file is given on
/// the command line, relative to the current working directory.
pub const DEFAULT_CONFIGURATION_FILE_PATH: &str = "data/configuration.toml";

#[derive(Deserialize, Debug)]
pub(crate) struct UnresolvedConfiguration {
    /// Logging-related configuration.
    logging: UnresolvedLoggingConfiguration,

    /// Configuration related to the HTTP server.
    http: UnresolvedHttpConfiguration,

    /// Configuration related to the database.
    database: UnresolvedDatabaseConfiguration,

    /// Configuration related to the external completion endpoint.
    analysis: UnresolvedAnalysisConfiguration,
}


/// The entire Wordstash backend configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// This is the file path this `Configuration` instance was loaded from.
    pub file_path: PathBuf,

    /// Logging-related configuration.
    pub logging: LoggingConfiguration,

    /// Configuration related to the HTTP server.
    pub http: HttpConfiguration,

    /// Configuration related to the database.
    pub database: DatabaseConfiguration,

    /// Configuration related to the external completion endpoint.
    pub analysis: AnalysisConfiguration,
}


impl UnresolvedConfiguration {
    fn resolve(self, file_path: PathBuf) -> Result<Configuration> {
        let logging = self
            .logging
            .resolve()
            .wrap_err("Failed to resolve logging table.")?;

        let http = self
            .http
            .resolve()
            .wrap_err("Failed to resolve http table.")?;

        let database = self
            .database
            .resolve()
            .wrap_err("Failed to resolve database table.")?;

        let analysis = self
            .analysis
            .resolve()
            .wrap_err("Failed to resolve analysis table.")?;


        Ok(Configuration {
            file_path,
            logging,
            http,
            database,
            analysis,
        })
    }
}


impl Configuration {
    /// Load the configuration from a specific file path.
    pub fn load_from_path<S: AsRef<Path>>(configuration_file_path: S) -> Result<Self> {
        // Read the configuration file into memory.
        let configuration_string = fs::read_to_string(configuration_file_path.as_ref())
            .into_diagnostic()
            .wrap_err("Could not read configuration file!")?;


        // Parse the string into the `UnresolvedConfiguration` structure and then resolve it.
        let unresolved_configuration =
            toml::from_str::<UnresolvedConfiguration>(&configuration_string)
                .into_diagnostic()
                .wrap_err("Could not load configuration file!")?;


        let configuration_file_path = dunce::canonicalize(configuration_file_path)
            .into_diagnostic()
            .wrap_err("Could not canonicalize configuration file path!")?;

        let resolved_configuration = unresolved_configuration
            .resolve(configuration_file_path)
            .wrap_err("Failed to resolve configuration.")?;

        Ok(resolved_configuration)
    }

    /// Load the configuration from [`DEFAULT_CONFIGURATION_FILE_PATH`],
    /// resolved against the current working directory.
    pub fn load_from_default_path() -> Result<Configuration> {
        let configuration_file_path = current_dir()
            .into_diagnostic()
            .wrap_err("Could not get the current directory.")?
            .join(DEFAULT_CONFIGURATION_FILE_PATH);

        if !configuration_file_path.exists() {
            return Err(miette!(
                "No configuration file at the default path {}.",
                configuration_file_path.display()
            ));
        }

        Configuration::load_from_path(configuration_file_path)
    }
}
