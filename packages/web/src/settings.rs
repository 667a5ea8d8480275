use std::net::SocketAddr;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[allow(unused)]
pub struct Server {
    /// Overrides the address handed out by the dioxus CLI.
    pub address: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(unused)]
pub struct Log {
    pub filter: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            filter: "info".into(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[allow(unused)]
pub struct Settings {
    #[serde(default)]
    pub server: Server,
    pub log: Log,
}

impl Settings {
    /// Defaults, then `config.toml`, then `LOOP_`-prefixed environment variables.
    pub(crate) fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("log.filter", "info")?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("LOOP").separator("_"))
            .build()?;

        config.try_deserialize()
    }

    /// The configured listen address, if it is set and parses.
    pub fn server_address(&self) -> Option<SocketAddr> {
        let address = self.server.address.as_deref()?;
        match address.parse() {
            Ok(addr) => Some(addr),
            Err(e) => {
                tracing::warn!("Ignoring invalid server.address {:?}: {}", address, e);
                None
            }
        }
    }
}
