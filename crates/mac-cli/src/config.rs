use anyhow::{bail, Context};
use ieee_mac::Notation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Output preferences loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Notations printed by `show`, in order
    #[serde(default = "default_notations")]
    pub notations: Vec<Notation>,

    /// Width of the notation column
    #[serde(default = "default_label_width")]
    pub label_width: usize,

    /// Print addresses in upper case
    #[serde(default)]
    pub uppercase: bool,
}

fn default_notations() -> Vec<Notation> {
    Notation::ALL.to_vec()
}

fn default_label_width() -> usize {
    10
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the configuration to use
    ///
    /// An explicit path must exist and parse. Without one, the per-user file
    /// is used when present and the defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load_explicit(path),
            None => Ok(Self::load_implicit(Self::user_path().as_deref())),
        }
    }

    fn load_explicit(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            bail!("Configuration file {} does not exist", path.display());
        }

        let config = Self::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the per-user file, falling back to defaults when it is missing
    /// or unreadable
    pub fn load_implicit(path: Option<&Path>) -> Self {
        let Some(path) = path.filter(|p| p.exists()) else {
            debug!("No configuration file found, using defaults");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring configuration {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// ~/.config/macaddr/config.yaml
    fn user_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config/macaddr/config.yaml"))
    }

    /// Apply the case preference to a rendered address
    pub fn styled(&self, rendered: String) -> String {
        if self.uppercase {
            rendered.to_uppercase()
        } else {
            rendered
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notations: default_notations(),
            label_width: default_label_width(),
            uppercase: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.notations, Notation::ALL.to_vec());
        assert_eq!(config.label_width, 10);
        assert!(!config.uppercase);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("uppercase: true\n").unwrap();
        assert!(config.uppercase);
        assert_eq!(config.notations.len(), 4);
        assert_eq!(config.label_width, 10);
    }

    #[test]
    fn test_notation_list_from_yaml() {
        let yaml = "notations: [cisco, bare]\nlabel_width: 8\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.notations, vec![Notation::Cisco, Notation::Bare]);
        assert_eq!(config.label_width, 8);
    }

    #[test]
    fn test_unknown_notation_is_rejected() {
        assert!(serde_yaml::from_str::<Config>("notations: [linux]\n").is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let config = Config {
            notations: vec![Notation::Windows],
            label_width: 12,
            uppercase: true,
        };
        std::fs::write(&path, serde_yaml::to_string(&config).unwrap()).unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("missing.yaml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_explicit_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "- not\n- a config\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_implicit_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_implicit(None), Config::default());
        let missing = dir.path().join("missing.yaml");
        assert_eq!(Config::load_implicit(Some(&missing)), Config::default());
    }

    #[test]
    fn test_implicit_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "- not\n- a config\n").unwrap();
        assert_eq!(Config::load_implicit(Some(&path)), Config::default());
    }

    #[test]
    fn test_implicit_valid_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "uppercase: true\n").unwrap();
        assert!(Config::load_implicit(Some(&path)).uppercase);
    }

    #[test]
    fn test_styled() {
        let mut config = Config::default();
        assert_eq!(config.styled("aa:bb".to_string()), "aa:bb");
        config.uppercase = true;
        assert_eq!(config.styled("aa:bb".to_string()), "AA:BB");
    }
}
