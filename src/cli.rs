//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for shots-studio using the `clap` crate.
//!
//! # Commands
//!
//! - **serve**: Run the HTTP server (default)
//! - **scan**: Scan a directory once, optionally tag it, and print the result
//!
//! # Examples
//!
//! ```
//! use shots_studio::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["shots-studio", "scan", "/tmp", "--process"]);
//! assert!(matches!(cli.get_command(), Commands::Scan { process: true, .. }));
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "shots-studio")]
#[command(about = "Scan, tag and group screenshots", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the web server (default)
    #[command(visible_alias = "s")]
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long = "host", value_name = "HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short = 'p', long = "port", value_name = "PORT")]
        port: Option<u16>,
    },

    /// Scan a directory once and print what was found
    Scan {
        /// Directory to scan (defaults to the configured directory, then the
        /// current directory)
        #[arg(value_name = "DIR")]
        path: Option<PathBuf>,

        /// Assign demo tags and build collections after scanning
        #[arg(long = "process")]
        process: bool,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Serve if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve {
            host: None,
            port: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_serve() {
        let cli = Cli::parse_from(["shots-studio"]);
        assert_eq!(
            cli.get_command(),
            Commands::Serve {
                host: None,
                port: None
            }
        );
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["shots-studio", "serve", "--host", "0.0.0.0", "-p", "8080"]);
        assert_eq!(
            cli.get_command(),
            Commands::Serve {
                host: Some("0.0.0.0".into()),
                port: Some(8080)
            }
        );
    }

    #[test]
    fn test_parse_serve_alias() {
        let cli = Cli::parse_from(["shots-studio", "s"]);
        assert!(matches!(cli.get_command(), Commands::Serve { .. }));
    }

    #[test]
    fn test_parse_scan() {
        let cli = Cli::parse_from(["shots-studio", "-q", "scan", "shots", "--process"]);
        assert!(cli.quiet);
        assert_eq!(
            cli.get_command(),
            Commands::Scan {
                path: Some(PathBuf::from("shots")),
                process: true
            }
        );
    }

    #[test]
    fn test_parse_scan_without_dir() {
        let cli = Cli::parse_from(["shots-studio", "scan", "--config", "/etc/shots.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/shots.toml")));
        assert_eq!(
            cli.get_command(),
            Commands::Scan {
                path: None,
                process: false
            }
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["shots-studio", "serve", "--port", "99999"]).is_err());
    }
}
