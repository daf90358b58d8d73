//! Client configuration.

use std::path::PathBuf;

/// Environment variable naming the BMC host.
pub const ENV_HOST: &str = "OPENBMC_HOST";
/// Environment variable naming the login user.
pub const ENV_USER: &str = "OPENBMC_USER";
/// Environment variable holding the login password.
pub const ENV_PASSWORD: &str = "OPENBMC_PASSWORD";
/// Environment variable selecting offline replay (`true` or `false`).
pub const ENV_OFFLINE: &str = "OPENBMC_OFFLINE";
/// Environment variable naming the cache directory.
pub const ENV_CACHE_DIR: &str = "OPENBMC_CACHE_DIR";

/// Everything needed to construct an [`OpenBmc`](crate::OpenBmc) client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Host name or address of the BMC, optionally with `:port`.
    pub hostname: String,
    /// Login user.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Talk to the BMC (and record) when `true`, replay from cache when `false`.
    pub online: bool,
    /// Directory holding recorded interactions.
    pub cache_dir: PathBuf,
    /// Log each request at `info` level.
    pub verbose: bool,
}

impl ClientConfig {
    /// An online configuration caching into the current directory.
    pub fn new(
        hostname: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            user: user.into(),
            password: password.into(),
            online: true,
            cache_dir: PathBuf::from("."),
            verbose: false,
        }
    }

    /// Sets online or offline mode.
    #[must_use]
    pub fn online(mut self, online: bool) -> Self {
        self.online = online;
        self
    }

    /// Sets the cache directory.
    #[must_use]
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Sets request logging.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_online_in_current_directory() {
        let config = ClientConfig::new("bmc", "root", "0penBmc");
        assert!(config.online);
        assert!(!config.verbose);
        assert_eq!(config.cache_dir, PathBuf::from("."));
    }

    #[test]
    fn builder_methods() {
        let config =
            ClientConfig::new("bmc", "u", "p").online(false).cache_dir("/tmp/c").verbose(true);
        assert!(!config.online);
        assert!(config.verbose);
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/c"));
    }
}
