use std::path::PathBuf;

use miette::{miette, Context, IntoDiagnostic, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::traits::ResolvableConfiguration;


/// Checks that a tracing filter directive parses, without keeping the
/// parsed filter around ([`EnvFilter`] is not `Clone`, so the resolved
/// configuration stores the directive string and re-parses on demand).
fn ensure_filter_directive_parses(field_name: &str, directive: &str) -> Result<()> {
    EnvFilter::try_new(directive)
        .map(|_| ())
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!("Invalid tracing filter directive in field {field_name}: \"{directive}\"")
        })
}


#[derive(Deserialize, Clone, Debug)]
pub(super) struct UnresolvedLoggingConfiguration {
    console_level_filter: String,

    file_level_filter: String,

    file_output_directory: String,
}

/// Tracing output configuration: one filter for the console, one for
/// the daily-rolling log file.
#[derive(Clone, Debug)]
pub struct LoggingConfiguration {
    console_level_filter: String,

    file_level_filter: String,

    pub file_output_directory: PathBuf,
}

impl ResolvableConfiguration for UnresolvedLoggingConfiguration {
    type Resolved = LoggingConfiguration;

    fn resolve(self) -> Result<Self::Resolved> {
        for (field_name, directive) in [
            ("console_level_filter", &self.console_level_filter),
            ("file_level_filter", &self.file_level_filter),
        ] {
            ensure_filter_directive_parses(field_name, directive)?;
        }

        Ok(Self::Resolved {
            console_level_filter: self.console_level_filter,
            file_level_filter: self.file_level_filter,
            file_output_directory: PathBuf::from(self.file_output_directory),
        })
    }
}

impl LoggingConfiguration {
    pub fn console_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: the directive was parsed once already in `resolve`.
        EnvFilter::try_new(&self.console_level_filter).unwrap()
    }

    pub fn file_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: the directive was parsed once already in `resolve`.
        EnvFilter::try_new(&self.file_level_filter).unwrap()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn unresolved(console: &str, file: &str) -> UnresolvedLoggingConfiguration {
        UnresolvedLoggingConfiguration {
            console_level_filter: console.to_string(),
            file_level_filter: file.to_string(),
            file_output_directory: "./data/logs".to_string(),
        }
    }

    #[test]
    fn valid_filter_directives_resolve_and_reparse() {
        let resolved = unresolved("info,wordstash=debug", "info").resolve().unwrap();

        // The accessors must not panic for directives that resolved.
        let _ = resolved.console_level_filter();
        let _ = resolved.file_level_filter();

        assert_eq!(resolved.file_output_directory, PathBuf::from("./data/logs"));
    }

    #[test]
    fn invalid_console_filter_directive_is_rejected_at_resolve_time() {
        assert!(unresolved("wordstash=notalevel", "info").resolve().is_err());
    }

    #[test]
    fn invalid_file_filter_directive_is_rejected_at_resolve_time() {
        assert!(unresolved("info", "wordstash=notalevel").resolve().is_err());
    }
}
