//! Tracing initialization: console output plus a daily-rolling log file.

use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};


/// Sets up the global tracing subscriber with two outputs:
/// human-readable console logging and a daily-rolling log file.
///
/// The returned [`WorkerGuard`] must be kept alive for the duration of
/// the program; dropping it flushes and stops the background log writer.
pub fn initialize_tracing<P>(
    console_level_filter: EnvFilter,
    log_file_level_filter: EnvFilter,
    log_file_output_directory: P,
    log_file_name_prefix: &str,
) -> Result<WorkerGuard>
where
    P: AsRef<Path>,
{
    let log_file_appender = tracing_appender::rolling::daily(
        log_file_output_directory.as_ref(),
        log_file_name_prefix,
    );

    let (non_blocking_log_file_writer, worker_guard) =
        tracing_appender::non_blocking(log_file_appender);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(console_level_filter);

    let log_file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_log_file_writer)
        .with_ansi(false)
        .with_filter(log_file_level_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(log_file_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to initialize the global tracing subscriber.")?;

    Ok(worker_guard)
}
