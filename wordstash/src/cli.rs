//! Command-line interface definitions for the server binary.

use std::path::PathBuf;

use clap::Parser;


/// Server command-line arguments.
#[derive(Parser)]
#[command(
    name = "wordstash",
    author,
    about = "API server for the Wordstash personal vocabulary capture tool.",
    version
)]
pub struct CLIArgs {
    /// This is the path to the configuration file to use.
    /// If unspecified, this defaults to `./data/configuration.toml`.
    #[arg(
        short = 'c',
        long = "configurationFilePath",
        help = "Path to the configuration file to use. Defaults to ./data/configuration.toml"
    )]
    pub configuration_file_path: Option<PathBuf>,
}
