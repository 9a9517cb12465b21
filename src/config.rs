//! Configuration management for the genealogy graph

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

pub const REMOVAL_POLICY_ENV: &str = "GENEALOGY_REMOVAL_POLICY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Remove only the requested node; children left without parents stay in the graph
    #[default]
    Isolate,
    /// Also remove every non-root node left without parents, transitively
    Cascade,
}

impl FromStr for RemovalPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "isolate" => Ok(RemovalPolicy::Isolate),
            "cascade" => Ok(RemovalPolicy::Cascade),
            other => Err(anyhow::anyhow!("Unknown removal policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenealogyConfig {
    pub removal: RemovalPolicy,
}

impl GenealogyConfig {
    pub fn new(removal: RemovalPolicy) -> Self {
        Self { removal }
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse genealogy configuration")
    }

    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {:?}", path))?;
        Self::from_yaml_str(&content)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from environment variables
    pub fn load_from_env() -> Result<Self> {
        let mut config = GenealogyConfig::default();

        // Override with environment variables if present
        if let Ok(policy) = std::env::var(REMOVAL_POLICY_ENV) {
            config.removal = policy
                .parse::<RemovalPolicy>()
                .with_context(|| format!("Invalid value for {}", REMOVAL_POLICY_ENV))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_policy_is_isolate() {
        assert_eq!(GenealogyConfig::default().removal, RemovalPolicy::Isolate);
    }

    #[test]
    fn test_removal_policy_from_str() {
        assert_eq!("isolate".parse::<RemovalPolicy>().unwrap(), RemovalPolicy::Isolate);
        assert_eq!(" Cascade ".parse::<RemovalPolicy>().unwrap(), RemovalPolicy::Cascade);
        assert!("prune".parse::<RemovalPolicy>().is_err());
    }

    #[test]
    fn test_config_from_yaml() {
        let config = GenealogyConfig::from_yaml_str("removal: cascade\n").unwrap();
        assert_eq!(config.removal, RemovalPolicy::Cascade);

        // Missing keys fall back to defaults
        let config = GenealogyConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.removal, RemovalPolicy::Isolate);

        assert!(GenealogyConfig::from_yaml_str("removal: prune\n").is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let config = GenealogyConfig::new(RemovalPolicy::Cascade);
        let temp_file = NamedTempFile::new().unwrap();

        config.save_to_file(temp_file.path()).unwrap();
        let loaded_config = GenealogyConfig::load_from_file(temp_file.path()).unwrap();

        assert_eq!(config, loaded_config);
    }

    #[test]
    fn test_load_from_env() {
        std::env::set_var(REMOVAL_POLICY_ENV, "cascade");
        let config = GenealogyConfig::load_from_env();
        std::env::remove_var(REMOVAL_POLICY_ENV);

        assert_eq!(config.unwrap().removal, RemovalPolicy::Cascade);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = GenealogyConfig::load_from_file(dir.path().join("absent.yml"));
        assert!(result.is_err());
    }
}
