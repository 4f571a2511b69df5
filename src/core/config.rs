/*!
 * Module Configuration
 *
 * Runtime configuration for the pid file node and its access policy
 */

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::errors::KernelError;
use super::limits::{DEFAULT_NODE_MODE, DEFAULT_NODE_NAME};

/// Access policy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Any caller may read and write (mode bits still apply)
    #[default]
    Permissive,
    /// Only uid 0 may read or write
    Privileged,
}

impl AccessMode {
    /// Parse from a configuration string
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" => Some(AccessMode::Permissive),
            "privileged" | "root" => Some(AccessMode::Privileged),
            _ => None,
        }
    }
}

/// Pid file module configuration
///
/// Environment variables:
/// - PROCPID_NODE_NAME: node name under the registry (default: pid)
/// - PROCPID_MODE: octal mode bits (default: 0666)
/// - PROCPID_ACCESS: permissive | privileged (default: permissive)
/// - PROCPID_TRACE_JSON: JSON log output (default: false)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
pub struct ModuleConfig {
    pub node_name: String,
    pub mode: u32,
    pub access: AccessMode,
    pub trace_json: bool,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            node_name: DEFAULT_NODE_NAME.to_string(),
            mode: DEFAULT_NODE_MODE,
            access: AccessMode::Permissive,
            trace_json: false,
        }
    }
}

impl ModuleConfig {
    /// Configuration restricted to the superuser
    pub fn privileged() -> Self {
        Self {
            access: AccessMode::Privileged,
            mode: 0o600,
            ..Default::default()
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("PROCPID_NODE_NAME") {
            let name = name.trim();
            if name.is_empty() || name.contains('/') {
                warn!(value = %name, "Ignoring invalid PROCPID_NODE_NAME");
            } else {
                config.node_name = name.to_string();
            }
        }

        if let Some(mode) = lookup("PROCPID_MODE") {
            let digits = mode.trim().trim_start_matches("0o");
            match u32::from_str_radix(digits, 8) {
                Ok(bits) if bits <= 0o777 => config.mode = bits,
                _ => warn!(value = %mode, "Ignoring invalid PROCPID_MODE"),
            }
        }

        if let Some(access) = lookup("PROCPID_ACCESS") {
            match AccessMode::parse(&access) {
                Some(mode) => config.access = mode,
                None => warn!(value = %access, "Ignoring invalid PROCPID_ACCESS"),
            }
        }

        if let Some(json) = lookup("PROCPID_TRACE_JSON") {
            config.trace_json = json == "1" || json.eq_ignore_ascii_case("true");
        }

        config
    }

    /// Parse configuration from JSON, rejecting unknown fields
    pub fn from_json(text: &str) -> Result<Self, KernelError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| KernelError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.node_name.is_empty() || self.node_name.contains('/') {
            return Err(KernelError::Configuration(format!(
                "invalid node name: {:?}",
                self.node_name
            )));
        }
        if self.mode > 0o777 {
            return Err(KernelError::Configuration(format!(
                "invalid mode: 0o{:o}",
                self.mode
            )));
        }
        Ok(())
    }
}
