//! Read-only commands: `enumerate`, `get`, `power-state`, `flash-bios`, `bmc-state`.

use serde_json::Value;

use crate::client::OpenBmc;

/// Execute the `enumerate` command.
///
/// # Errors
///
/// Returns an error string if the enumeration fails.
pub fn enumerate(client: &OpenBmc, key: &str) -> Result<String, String> {
    render(&client.enumerate(key).map_err(|e| e.to_string())?)
}

/// Execute the `get` command.
///
/// # Errors
///
/// Returns an error string if the read fails.
pub fn get(client: &OpenBmc, key: &str) -> Result<String, String> {
    render(&client.get(key).map_err(|e| e.to_string())?)
}

/// Execute the `power-state` command.
///
/// Prints `null` when the BMC has no chassis object.
///
/// # Errors
///
/// Returns an error string if the query fails.
pub fn power_state(client: &OpenBmc) -> Result<String, String> {
    let state = client.get_power_state().map_err(|e| e.to_string())?;
    render(&state.unwrap_or(Value::Null))
}

/// Execute the `flash-bios` command.
///
/// # Errors
///
/// Returns an error string if the read fails.
pub fn flash_bios(client: &OpenBmc) -> Result<String, String> {
    render(&client.get_flash_bios().map_err(|e| e.to_string())?)
}

/// Execute the `bmc-state` command.
///
/// # Errors
///
/// Returns an error string if the query fails.
pub fn bmc_state(client: &OpenBmc) -> Result<String, String> {
    render(&client.get_bmc_state().map_err(|e| e.to_string())?)
}

fn render(value: &Value) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to render response: {e}"))
}
