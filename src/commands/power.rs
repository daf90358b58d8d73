//! State-changing commands: `power-on`, `power-off`, `warm-reset`.

use crate::client::OpenBmc;

/// Execute the `power-on` command.
///
/// Prints `true` if a power/chassis pair was found, `false` otherwise.
///
/// # Errors
///
/// Returns an error string if reading the state or posting the action fails.
pub fn power_on(client: &OpenBmc) -> Result<String, String> {
    client.power_on().map(|found| found.to_string()).map_err(|e| e.to_string())
}

/// Execute the `power-off` command.
///
/// Prints `true` if a power/chassis pair was found, `false` otherwise.
///
/// # Errors
///
/// Returns an error string if reading the state or posting the action fails.
pub fn power_off(client: &OpenBmc) -> Result<String, String> {
    client.power_off().map(|found| found.to_string()).map_err(|e| e.to_string())
}

/// Execute the `warm-reset` command.
///
/// # Errors
///
/// Returns an error string if a reset is refused.
pub fn warm_reset(client: &OpenBmc) -> Result<String, String> {
    client.trigger_warm_reset().map(|found| found.to_string()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CachedResponse;
    use crate::ports::{HttpRequest, HttpTransport};
    use crate::session::CachedSession;
    use serde_json::{json, Value};

    struct Echo(Value);

    impl HttpTransport for Echo {
        fn perform(&self, _request: &HttpRequest) -> crate::Result<CachedResponse> {
            CachedResponse::new(200, self.0.clone())
        }
    }

    #[test]
    fn reports_false_when_nothing_matches() {
        let session = CachedSession::with_transport(Box::new(Echo(json!({"data": {}}))), true);
        let client = OpenBmc::with_session("bmc", "root", "0penBmc", session).unwrap();
        assert_eq!(power_on(&client).unwrap(), "false");
        assert_eq!(power_off(&client).unwrap(), "false");
        assert_eq!(warm_reset(&client).unwrap(), "false");
    }
}
