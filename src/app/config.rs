//! Configuration types for agents and the server session.

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, search::SearchEngine};

/// Deepest search the configuration accepts.
pub const MAX_DEPTH: u32 = 16;

/// Configuration for creating an agent.
///
/// # Examples
///
/// ```
/// use kalaha_agent::app::AgentConfig;
///
/// let config = AgentConfig::default().with_depth(6).with_seed(42);
/// assert_eq!(config.depth, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Plies searched below the root
    pub depth: u32,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Set the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the depth exceeds [`MAX_DEPTH`].
    pub fn validate(&self) -> Result<()> {
        if self.depth > MAX_DEPTH {
            return Err(Error::InvalidConfiguration {
                message: format!("depth {} exceeds the maximum of {MAX_DEPTH}", self.depth),
            });
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            depth: SearchEngine::DEFAULT_DEPTH,
            seed: None,
        }
    }
}

/// Connection settings for the game server session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    /// Pause between status polls, in milliseconds
    pub poll_interval_ms: u64,
    /// Resubmissions after the server rejects a move
    pub max_move_retries: u32,
}

impl ClientConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_poll_interval_ms(mut self, millis: u64) -> Self {
        self.poll_interval_ms = millis;
        self
    }

    pub fn with_max_move_retries(mut self, retries: u32) -> Self {
        self.max_move_retries = retries;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Host and port joined for socket connection.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an empty host or port 0.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "host must not be empty".to_string(),
            });
        }
        if self.port == 0 {
            return Err(Error::InvalidConfiguration {
                message: "port must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8888,
            poll_interval_ms: 100,
            max_move_retries: 3,
        }
    }
}

/// Top-level configuration file contents.
///
/// Every section and field is optional in the JSON file; missing values
/// take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub agent: AgentConfig,
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds invalid values.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("read config {}", path.display()), e))?;
        let config: AppConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.agent.validate()?;
        self.client.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"agent": {"depth": 5}}"#).unwrap();
        assert_eq!(config.agent.depth, 5);
        assert_eq!(config.agent.seed, None);
        assert_eq!(config.client, ClientConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(AgentConfig::default().with_depth(MAX_DEPTH + 1).validate().is_err());
        assert!(ClientConfig::default().with_port(0).validate().is_err());
        assert!(ClientConfig::default().with_host(" ").validate().is_err());
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_address() {
        let config = ClientConfig::default().with_host("127.0.0.1").with_port(9000);
        assert_eq!(config.address(), "127.0.0.1:9000");
    }
}
