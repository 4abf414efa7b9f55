//! Configuration parser for loading cluster configuration files.
//!
//! This module handles loading configuration from YAML files and environment
//! variables, with proper precedence and error handling.

use crate::error::{ConfigError, KubeforgeError, Result};
use std::path::Path;
use tracing::{debug, info};

use super::spec::ClusterConfig;

/// Configuration parser for loading cluster configuration.
#[derive(Debug, Default)]
pub struct ConfigParser {
    /// Base path for resolving relative paths.
    base_path: Option<std::path::PathBuf>,
}

impl ConfigParser {
    /// Creates a new configuration parser.
    #[must_use]
    pub const fn new() -> Self {
        Self { base_path: None }
    }

    /// Sets the base path for resolving relative paths.
    #[must_use]
    pub fn with_base_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<ClusterConfig> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());

        if !path.exists() {
            return Err(KubeforgeError::Config(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            KubeforgeError::Config(ConfigError::ParseError {
                message: format!("Failed to read file: {e}"),
                location: Some(path.display().to_string()),
            })
        })?;

        self.parse_yaml(&content, Some(path))
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse_yaml(&self, content: &str, source: Option<&Path>) -> Result<ClusterConfig> {
        debug!("Parsing YAML configuration");

        let config: ClusterConfig = serde_yaml::from_str(content).map_err(|e| {
            let location = source.map(|p| p.display().to_string());
            KubeforgeError::Config(ConfigError::ParseError {
                message: format!("YAML parse error: {e}"),
                location,
            })
        })?;

        debug!("Successfully parsed configuration");
        Ok(config)
    }

    /// Loads configuration with environment variable overrides.
    ///
    /// Environment variables are checked in the format:
    /// `KUBEFORGE_<KEY>` (e.g., `KUBEFORGE_NODE_IMAGE`)
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_with_env(&self, path: impl AsRef<Path>) -> Result<ClusterConfig> {
        let mut config = self.load_file(path)?;

        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(config: &mut ClusterConfig) {
        if let Ok(image) = std::env::var("KUBEFORGE_NODE_IMAGE") {
            debug!("Overriding image from environment");
            config.image = image;
        }
    }

    /// Loads the .env file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the .env file exists but cannot be loaded.
    pub fn load_dotenv(&self) -> Result<()> {
        let env_path = self
            .base_path
            .as_ref()
            .map_or_else(|| std::path::PathBuf::from(".env"), |p| p.join(".env"));

        if env_path.exists() {
            info!("Loading environment from: {}", env_path.display());
            dotenvy::from_path(&env_path).map_err(|e| {
                KubeforgeError::Config(ConfigError::ParseError {
                    message: format!("Failed to load .env file: {e}"),
                    location: Some(env_path.display().to_string()),
                })
            })?;
        } else {
            debug!(".env file not found at: {}", env_path.display());
        }

        Ok(())
    }
}

/// Default configuration file names to search for.
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "kubeforge.cluster.yaml",
    "kubeforge.cluster.yml",
    "cluster.yaml",
    "cluster.yml",
];

/// Finds the configuration file in the current directory or parent directories.
///
/// # Errors
///
/// Returns an error if no configuration file is found.
pub fn find_config_file(start_dir: impl AsRef<Path>) -> Result<std::path::PathBuf> {
    let start = start_dir.as_ref();
    let mut current = start.to_path_buf();

    loop {
        for filename in DEFAULT_CONFIG_FILES {
            let config_path = current.join(filename);
            if config_path.exists() {
                info!("Found configuration file: {}", config_path.display());
                return Ok(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    Err(KubeforgeError::Config(ConfigError::FileNotFound {
        path: start.join(DEFAULT_CONFIG_FILES[0]),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "image: kubeforge/node:v1.31.0";
        let parser = ConfigParser::new();
        let result = parser.parse_yaml(yaml, None);
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config.image, "kubeforge/node:v1.31.0");
        assert!(config.control_plane.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
image: kubeforge/node:v1.31.0

controlPlane:
  nodeLifecycle:
    preBoot:
      - name: preload images
        command: ["docker", "pull", "registry.k8s.io/pause:3.10"]
    preKubeadm:
      - command: ["sysctl", "-w", "net.ipv4.ip_forward=1"]
    postKubeadm:
      - name: label node
        command: ["kubectl", "label", "node", "control-plane", "tier=dev"]
"#;
        let parser = ConfigParser::new();
        let result = parser.parse_yaml(yaml, None);
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config.image, "kubeforge/node:v1.31.0");
        assert_eq!(config.hook_count(), 3);

        let lifecycle = config
            .control_plane
            .unwrap()
            .node_lifecycle
            .unwrap();
        assert_eq!(lifecycle.pre_boot[0].name.as_deref(), Some("preload images"));
        assert!(lifecycle.pre_kubeadm[0].name.is_none());
        assert_eq!(lifecycle.post_kubeadm[0].command.len(), 5);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let yaml = "image: [unclosed";
        let parser = ConfigParser::new();
        assert!(parser.parse_yaml(yaml, None).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let parser = ConfigParser::new();
        let result = parser.load_file(dir.path().join("missing.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kubeforge.cluster.yaml");
        std::fs::write(&path, "image: kubeforge/node:latest\n").unwrap();

        let parser = ConfigParser::new();
        let config = parser.load_file(&path).unwrap();
        assert_eq!(config.image, "kubeforge/node:latest");
    }

    #[test]
    fn test_find_config_file_searches_upward() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("cluster.yaml"), "image: x\n").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join("cluster.yaml"));
    }
}
