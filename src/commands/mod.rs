//! Command dispatch and handlers.

pub mod power;
pub mod query;

use crate::cli::{Cli, Command};
use crate::client::OpenBmc;

/// Log in and run the selected command, printing its output.
///
/// Offline (`--offline`) the login and every request are served from the
/// cache directory; online every interaction is recorded there.
///
/// # Errors
///
/// Returns an error string if login or the command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let client = OpenBmc::connect(&cli.client_config()).map_err(|e| e.to_string())?;
    let output = dispatch_with_client(&cli.command, &client)?;
    println!("{output}");
    Ok(())
}

/// Run a command against an already authenticated client.
///
/// # Errors
///
/// Returns an error string if the command fails.
pub fn dispatch_with_client(command: &Command, client: &OpenBmc) -> Result<String, String> {
    match command {
        Command::Enumerate { key } => query::enumerate(client, key),
        Command::Get { key } => query::get(client, key),
        Command::PowerState => query::power_state(client),
        Command::FlashBios => query::flash_bios(client),
        Command::BmcState => query::bmc_state(client),
        Command::PowerOn => power::power_on(client),
        Command::PowerOff => power::power_off(client),
        Command::WarmReset => power::warm_reset(client),
    }
}
