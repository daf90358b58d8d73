//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{ClientConfig, ENV_CACHE_DIR, ENV_HOST, ENV_OFFLINE, ENV_PASSWORD, ENV_USER};

/// Top-level CLI parser for `openbmctool`.
#[derive(Debug, Parser)]
#[command(name = "openbmctool", version, about = "Query and control an OpenBMC controller")]
pub struct Cli {
    /// BMC host name or address.
    #[arg(long, env = ENV_HOST)]
    pub host: String,
    /// Login user.
    #[arg(long, env = ENV_USER)]
    pub user: String,
    /// Login password.
    #[arg(long, env = ENV_PASSWORD, hide_env_values = true)]
    pub password: String,
    /// Replay recorded responses instead of contacting the BMC.
    #[arg(long, env = ENV_OFFLINE)]
    pub offline: bool,
    /// Directory holding recorded responses.
    #[arg(long, env = ENV_CACHE_DIR, default_value = ".")]
    pub cache_dir: PathBuf,
    /// Log every request.
    #[arg(short, long)]
    pub verbose: bool,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Client configuration described by the flags.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.host, &self.user, &self.password)
            .online(!self.offline)
            .cache_dir(&self.cache_dir)
            .verbose(self.verbose)
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enumerate an object subtree.
    Enumerate {
        /// Object path, e.g. `/org/openbmc/control/`.
        key: String,
    },
    /// Read one object.
    Get {
        /// Object path, e.g. `/org/openbmc/control/flash/bios`.
        key: String,
    },
    /// Power on every chassis that is off.
    PowerOn,
    /// Power off every chassis that is on.
    PowerOff,
    /// Show the power state of the first chassis.
    PowerState,
    /// Warm-reset the BMC.
    WarmReset,
    /// Show the flash BIOS object.
    FlashBios,
    /// Show the BMC system state.
    BmcState,
}
