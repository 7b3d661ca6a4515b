/*
[INPUT]:  Defaults, optional YAML settings file, COMPREHEND_* environment, flags
[OUTPUT]: Merged CLI settings
[POS]:    Configuration layer - where the CLI sends requests and how it logs
[UPDATE]: When adding new settings
*/

use anyhow::{Context, Result};
use comprehend_model::ServiceConfig;
use comprehend_model::config::DEFAULT_REGION;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file picked up from the working directory when `--settings` is not given
pub const DEFAULT_SETTINGS_FILE: &str = "comprehend.yaml";

/// Prefix of environment overrides (`COMPREHEND_REGION`, ...)
pub const ENV_PREFIX: &str = "COMPREHEND";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// AWS region used to build the endpoint
    pub region: String,
    /// Endpoint override, e.g. a VPC endpoint or a local mock
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Tracing filter directives
    pub log_level: String,
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub log_level: Option<String>,
}

impl Settings {
    /// Merge defaults, the settings file, environment and flags, in that order.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let (file, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
        };

        let config = Config::builder()
            .set_default("region", DEFAULT_REGION)?
            .set_default("log_level", "info")?
            .add_source(
                File::from(file.as_path())
                    .format(FileFormat::Yaml)
                    .required(required),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option("region", overrides.region.clone())?
            .set_override_option("endpoint", overrides.endpoint.clone())?
            .set_override_option("log_level", overrides.log_level.clone())?
            .build()
            .with_context(|| format!("load settings from {}", file.display()))?;

        config
            .try_deserialize::<Settings>()
            .context("parse settings")
    }

    pub fn service_config(&self) -> Result<ServiceConfig> {
        let config = ServiceConfig::default().with_region(self.region.clone());
        match self.endpoint.as_deref() {
            Some(endpoint) => config
                .with_endpoint_str(endpoint)
                .with_context(|| format!("invalid endpoint {endpoint}")),
            None => Ok(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn settings_file(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("create temp file");
        file.write_all(content.as_bytes()).expect("write settings");
        file
    }

    #[test]
    fn test_file_values_loaded() {
        let file = settings_file("region: eu-central-1\nendpoint: http://localhost:4566\n");
        let settings = Settings::load(Some(file.path()), &Overrides::default()).unwrap();

        assert_eq!(settings.region, "eu-central-1");
        assert_eq!(settings.endpoint.as_deref(), Some("http://localhost:4566"));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_flags_override_file() {
        let file = settings_file("region: eu-central-1\nlog_level: debug\n");
        let overrides = Overrides {
            region: Some("ap-northeast-1".to_string()),
            ..Overrides::default()
        };
        let settings = Settings::load(Some(file.path()), &overrides).unwrap();

        assert_eq!(settings.region, "ap-northeast-1");
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("absent.yaml");
        assert!(Settings::load(Some(&missing), &Overrides::default()).is_err());
    }

    #[test]
    fn test_service_config_rejects_bad_endpoint() {
        let settings = Settings {
            region: "us-west-2".to_string(),
            endpoint: Some("::nope".to_string()),
            log_level: "info".to_string(),
        };
        assert!(settings.service_config().is_err());
    }
}
