//! OpenBMC REST client.
//!
//! The client logs in once when it is constructed and keeps the session for
//! its whole lifetime. Every request disables TLS verification and carries
//! `Content-Type: application/json`; payloads use the `{"data": ...}`
//! envelope.

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::cache::{CacheStore, CachedResponse};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::filter::{filter_entries, FilterMapping};
use crate::ports::{json_body, Method};
use crate::power::{action_for, PowerState};
use crate::session::CachedSession;

/// TLS verification flag sent with every request.
const VERIFY: bool = false;
/// Body of every action call.
const EMPTY_DATA: &str = r#"{"data": []}"#;

const CONTROL_ROOT: &str = "/org/openbmc/control/";
const OPENBMC_ROOT: &str = "/org/openbmc/";
const FLASH_BIOS: &str = "/org/openbmc/control/flash/bios";
const SYSTEM_MANAGER: &str = "/org/openbmc/managers/System";

const POWER_FILTER: &str = "control/power";
const CHASSIS_FILTER: &str = "control/chassis";
const BMC_FILTER: &str = "control/bmc";

/// An authenticated connection to one BMC.
pub struct OpenBmc {
    session: CachedSession,
    hostname: String,
    verbose: bool,
}

impl OpenBmc {
    /// Logs in to `hostname`, online or replaying from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the login is refused, or a cache error when
    /// offline and no matching login was recorded.
    pub fn new(hostname: &str, user: &str, password: &str, online: bool) -> Result<Self> {
        Self::connect(&ClientConfig::new(hostname, user, password).online(online))
    }

    /// Logs in using `config`.
    ///
    /// # Errors
    ///
    /// Same as [`OpenBmc::new`], plus failures building the HTTP client.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let session = CachedSession::new(config.online, CacheStore::new(&config.cache_dir))?;
        let mut client =
            Self::with_session(&config.hostname, &config.user, &config.password, session)?;
        client.set_verbose(config.verbose);
        Ok(client)
    }

    /// Logs in over an existing session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] carrying the login body if the status is not 200.
    pub fn with_session(
        hostname: &str,
        user: &str,
        password: &str,
        session: CachedSession,
    ) -> Result<Self> {
        let url = format!("https://{hostname}/login");
        let data = json_body(&json!({ "data": [user, password] }))?;

        let response = session.post(&url, &data, VERIFY)?;
        if response.status_code() != 200 {
            warn!(%url, status = response.status_code(), "login refused");
            return Err(Error::Http { url, status: response.status_code(), data: Some(data) });
        }

        debug!(hostname, online = session.is_online(), "logged in");
        Ok(Self { session, hostname: hostname.to_string(), verbose: false })
    }

    /// Host this client talks to.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Turns per-request logging at `info` level on or off.
    pub fn set_verbose(&mut self, value: bool) {
        self.verbose = value;
    }

    /// Whether per-request logging is on.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Enumerates the object tree under `key`.
    ///
    /// # Errors
    ///
    /// See [`OpenBmc::get`].
    pub fn enumerate(&self, key: &str) -> Result<Value> {
        self.get(&enumerate_path(key))
    }

    /// Returns the `data` member of `GET https://<host>/<key>`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] unless the status is 200.
    pub fn get(&self, key: &str) -> Result<Value> {
        let url = self.url_for(key);
        self.narrate(Method::Get, &url, None);

        let response = self.session.get(&url, VERIFY)?;
        if response.status_code() != 200 {
            return Err(Error::Http { url, status: response.status_code(), data: None });
        }
        response.into_data()
    }

    /// Enumerates `/org/openbmc/control/` and groups the objects matching
    /// `filters` by identity suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingControlNamespace`] if the control tree itself
    /// answers 404, and propagates every other failure unchanged.
    pub fn filter_org_openbmc_control(&self, filters: &[&str]) -> Result<FilterMapping> {
        let data = match self.enumerate(CONTROL_ROOT) {
            Ok(data) => data,
            Err(err) if err.status_code() == Some(404) => {
                let entries = self.get(OPENBMC_ROOT)?;
                return Err(Error::MissingControlNamespace { entries: entries.to_string() });
            }
            Err(err) => return Err(err),
        };

        let Value::Object(items) = data else {
            return Err(Error::invalid_response(format!(
                "enumeration of {CONTROL_ROOT} is not an object: {data}"
            )));
        };

        let mappings = filter_entries(&items, filters);
        if self.verbose {
            for objects in mappings.values() {
                for object in objects.values() {
                    info!(path = %object.path, properties = %object.properties, "found");
                }
            }
        }
        Ok(mappings)
    }

    /// Powers on every chassis that is off.
    ///
    /// Returns `false` if no power/chassis pair exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if an action is refused, or
    /// [`Error::InvalidResponse`] if a power state cannot be read.
    pub fn power_on(&self) -> Result<bool> {
        self.power_to(PowerState::On)
    }

    /// Powers off every chassis that is on.
    ///
    /// Returns `false` if no power/chassis pair exists.
    ///
    /// # Errors
    ///
    /// See [`OpenBmc::power_on`].
    pub fn power_off(&self) -> Result<bool> {
        self.power_to(PowerState::Off)
    }

    fn power_to(&self, target: PowerState) -> Result<bool> {
        let mappings = self.filter_org_openbmc_control(&[POWER_FILTER, CHASSIS_FILTER])?;

        let mut found = false;
        for (ident, objects) in &mappings {
            let (Some(power), Some(chassis)) =
                (objects.get(POWER_FILTER), objects.get(CHASSIS_FILTER))
            else {
                warn!(
                    ident = ident.as_str(),
                    "control objects without a power/chassis pair, skipping"
                );
                continue;
            };
            found = true;

            let state = power.properties.get("state").unwrap_or(&Value::Null);
            let current = PowerState::try_from(state)?;
            if self.verbose {
                info!(path = %power.path, state = %current, "current power state");
            }

            if let Some(action) = action_for(current, target) {
                self.post_action(&chassis.path, action.endpoint())?;
            }
        }
        Ok(found)
    }

    /// Asks the first chassis for its power state.
    ///
    /// Returns `None` if there is no chassis object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the action is refused.
    pub fn get_power_state(&self) -> Result<Option<Value>> {
        let mappings = self.filter_org_openbmc_control(&[CHASSIS_FILTER])?;
        let Some(chassis) = mappings.values().find_map(|objects| objects.get(CHASSIS_FILTER))
        else {
            return Ok(None);
        };
        let response = self.post_action(&chassis.path, "getPowerState")?;
        response.into_data().map(Some)
    }

    /// Warm-resets every BMC control object.
    ///
    /// Returns `false` if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if a reset is refused.
    pub fn trigger_warm_reset(&self) -> Result<bool> {
        let mappings = self.filter_org_openbmc_control(&[BMC_FILTER])?;
        for bmc in mappings.values().filter_map(|objects| objects.get(BMC_FILTER)) {
            self.post_action(&bmc.path, "warmReset")?;
        }
        Ok(!mappings.is_empty())
    }

    /// Returns the flash BIOS object.
    ///
    /// # Errors
    ///
    /// See [`OpenBmc::get`].
    pub fn get_flash_bios(&self) -> Result<Value> {
        self.get(FLASH_BIOS)
    }

    /// Returns the system state reported by the BMC's system manager.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the action is refused.
    pub fn get_bmc_state(&self) -> Result<Value> {
        self.post_action(SYSTEM_MANAGER, "getSystemState")?.into_data()
    }

    /// POSTs the empty envelope to `<object_path>/action/<action>`.
    fn post_action(&self, object_path: &str, action: &str) -> Result<CachedResponse> {
        let url = self.url_for(&format!("{object_path}/action/{action}"));
        self.narrate(Method::Post, &url, Some(EMPTY_DATA));

        let response = self.session.post(&url, EMPTY_DATA, VERIFY)?;
        if response.status_code() != 200 {
            return Err(Error::Http {
                url,
                status: response.status_code(),
                data: Some(EMPTY_DATA.to_string()),
            });
        }
        Ok(response)
    }

    fn url_for(&self, key: &str) -> String {
        format!("https://{}/{}", self.hostname, strip_root(key))
    }

    fn narrate(&self, method: Method, url: &str, data: Option<&str>) {
        if self.verbose {
            info!(%method, url, data, "request");
        } else {
            debug!(%method, url, data, "request");
        }
    }
}

fn strip_root(key: &str) -> &str {
    key.strip_prefix('/').unwrap_or(key)
}

/// `key` without its leading `/`, with `enumerate` as the last segment.
fn enumerate_path(key: &str) -> String {
    let path = strip_root(key);
    if path.ends_with('/') {
        format!("{path}enumerate")
    } else {
        format!("{path}/enumerate")
    }
}
