//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::resrobot::ResRobotConfig;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Upstream client settings
    pub resrobot: ResRobotConfig,
    /// Address to listen on
    pub addr: SocketAddr,
    /// Saved trip response to serve instead of calling ResRobot
    pub mock_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    ///
    /// - `RESROBOT_API_KEY` - access key (empty if unset)
    /// - `RESROBOT_BASE_URL` - API base URL
    /// - `RESROBOT_TIMEOUT_SECS` - request timeout
    /// - `TRIP_SERVER_ADDR` - listen address
    /// - `RESROBOT_MOCK_FILE` - serve this saved response instead
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut resrobot = ResRobotConfig::new(lookup("RESROBOT_API_KEY").unwrap_or_default());

        if let Some(url) = lookup("RESROBOT_BASE_URL") {
            resrobot = resrobot.with_base_url(url);
        }

        if let Some(secs) = lookup("RESROBOT_TIMEOUT_SECS") {
            let parsed = secs.parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: "RESROBOT_TIMEOUT_SECS",
                value: secs.clone(),
                reason: e.to_string(),
            })?;
            resrobot = resrobot.with_timeout(parsed);
        }

        let addr_text = lookup("TRIP_SERVER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_text.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            var: "TRIP_SERVER_ADDR",
            value: addr_text.clone(),
            reason: e.to_string(),
        })?;

        let mock_file = lookup("RESROBOT_MOCK_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            resrobot,
            addr,
            mock_file,
        })
    }

    /// Returns true if the configured access key is empty.
    pub fn missing_api_key(&self) -> bool {
        self.resrobot.access_id.is_empty()
    }
}
