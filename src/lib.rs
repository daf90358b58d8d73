//! Client library for the OpenBMC REST API.
//!
//! [`OpenBmc`] logs in to a baseboard management controller and exposes
//! power control and state queries. All traffic goes through a
//! [`CachedSession`]: online, every interaction is recorded to disk; offline,
//! the recorded interactions are replayed and the network is never touched.

pub mod adapters;
pub mod cache;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod ports;
pub mod power;
pub mod session;

pub use crate::cache::CachedResponse;
pub use crate::client::OpenBmc;
pub use crate::config::ClientConfig;
pub use crate::error::{Error, Result};
pub use crate::filter::{ControlObject, FilterMapping};
pub use crate::power::{ChassisAction, PowerState};
pub use crate::session::CachedSession;

use clap::error::ErrorKind;
use clap::Parser;

/// Parse CLI arguments.
///
/// Returns `Ok(None)` after printing `--help` or `--version` output to stdout.
///
/// # Errors
///
/// Returns the clap error message when the arguments are invalid.
pub fn parse_args<I, T>(args: I) -> std::result::Result<Option<cli::Cli>, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match cli::Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            Ok(None)
        }
        Err(err) => Err(err.to_string()),
    }
}

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match parse_args(args)? {
        Some(cli) => commands::dispatch(&cli),
        None => Ok(()),
    }
}
