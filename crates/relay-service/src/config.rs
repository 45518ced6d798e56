//! Configuration for the relay service.
//!
//! All configuration comes from the environment. The only setting is the
//! listening port; the server always binds every interface.

use relay_server::{ServerConfig, DEFAULT_PORT};
use tracing::warn;

/// Environment variable holding the listening port.
pub const PORT_VAR: &str = "PORT";

/// Relay service configuration loaded from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayConfig {
    /// TCP port to listen on.
    pub port: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl RelayConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `PORT` -- TCP port (default 10000; unparsable values fall back
    ///   to the default with a warning)
    pub fn from_env() -> Self {
        Self::from_port_value(std::env::var(PORT_VAR).ok().as_deref())
    }

    /// Build configuration from the raw value of `PORT`, if set.
    pub fn from_port_value(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match raw.trim().parse::<u16>() {
            Ok(port) => Self { port },
            Err(e) => {
                warn!(
                    value = raw,
                    error = %e,
                    default = DEFAULT_PORT,
                    "Invalid PORT, using default"
                );
                Self::default()
            }
        }
    }

    /// Server configuration binding all interfaces on the configured port.
    pub fn server_config(self) -> ServerConfig {
        ServerConfig::on_port(self.port)
    }
}
