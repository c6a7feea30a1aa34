use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution realm the embedding host is running the module in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostRealm {
    Menu,
    Client,
    Server,
}

impl fmt::Display for HostRealm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostRealm::Menu => "menu",
            HostRealm::Client => "client",
            HostRealm::Server => "server",
        };
        f.write_str(name)
    }
}

/// Module configuration supplied by the embedding host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option))]
pub struct ModuleConfig {
    /// Realms the module may be loaded into; empty permits any realm.
    #[serde(default)]
    #[builder(default)]
    pub allowed_realms: Vec<HostRealm>,

    /// Record spawned pids so module teardown can terminate them.
    #[serde(default = "default_track_spawned")]
    #[builder(default = "true")]
    pub track_spawned: bool,

    /// Exit code used when the caller omits one, and at teardown.
    #[serde(default)]
    #[builder(default)]
    pub default_exit_code: u32,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            allowed_realms: Vec::new(),
            track_spawned: default_track_spawned(),
            default_exit_code: 0,
        }
    }
}

impl ModuleConfig {
    pub fn builder() -> ModuleConfigBuilder {
        ModuleConfigBuilder::default()
    }

    /// Configuration permitting only the host's menu realm.
    pub fn menu_only() -> Self {
        Self {
            allowed_realms: vec![HostRealm::Menu],
            ..Default::default()
        }
    }

    /// Whether the module may be loaded into `realm`.
    pub fn permits(&self, realm: HostRealm) -> bool {
        self.allowed_realms.is_empty() || self.allowed_realms.contains(&realm)
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (i, realm) in self.allowed_realms.iter().enumerate() {
            if self.allowed_realms[..i].contains(realm) {
                return Err(anyhow::anyhow!("allowed realm {realm} listed twice"));
            }
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_track_spawned() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ModuleConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.track_spawned);
        assert_eq!(config.default_exit_code, 0);
        // Empty realm list permits loading anywhere.
        assert!(config.permits(HostRealm::Menu));
        assert!(config.permits(HostRealm::Server));
    }

    #[test]
    fn test_menu_only_config() {
        let config = ModuleConfig::menu_only();
        assert!(config.validate().is_ok());
        assert!(config.permits(HostRealm::Menu));
        assert!(!config.permits(HostRealm::Client));
        assert!(!config.permits(HostRealm::Server));
    }

    #[test]
    fn test_builder() {
        let config = ModuleConfig::builder()
            .allowed_realms(vec![HostRealm::Menu, HostRealm::Client])
            .track_spawned(false)
            .default_exit_code(1u32)
            .build()
            .unwrap();
        assert!(!config.track_spawned);
        assert_eq!(config.default_exit_code, 1);
        assert!(config.permits(HostRealm::Client));
        assert!(!config.permits(HostRealm::Server));
    }

    #[test]
    fn test_invalid_config() {
        let config = ModuleConfig {
            allowed_realms: vec![HostRealm::Menu, HostRealm::Menu],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = ModuleConfig::menu_only();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"menu\""));
        let deserialized: ModuleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialization_defaults() {
        let config: ModuleConfig = serde_json::from_str("{}").unwrap();
        assert!(config.track_spawned);
        assert!(config.allowed_realms.is_empty());
    }
}
