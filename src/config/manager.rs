use super::{
    clustering::ClusteringConfig,
    evaluation::EvaluationConfig,
    logging::LoggingConfig,
    report::ReportConfig,
    traits::ConfigSection,
};
use crate::error::FloraError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `FLORA_EVALUATION__PARALLEL=true`
pub const ENV_PREFIX: &str = "FLORA";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub clustering: ClusteringConfig,
    pub evaluation: EvaluationConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), FloraError> {
        validate_section(&self.clustering)?;
        validate_section(&self.evaluation)?;
        validate_section(&self.report)?;
        validate_section(&self.logging)?;
        Ok(())
    }
}

fn validate_section<S: ConfigSection>(section: &S) -> Result<(), FloraError> {
    section.validate().map_err(|e| match e {
        FloraError::Configuration(msg) => {
            FloraError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Layer defaults, an optional TOML/JSON file and `FLORA_*` environment
    /// variables, in that order of precedence.
    pub fn load(path: Option<&Path>) -> Result<Self, FloraError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(Self { config })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FloraError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| FloraError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| FloraError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), FloraError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, NeighborOrder, ReportFormat};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("flora-config-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_are_valid() {
        let manager = ConfigManager::new();
        assert!(manager.get().validate().is_ok());
        assert_eq!(manager.get().clustering.neighbor_order, NeighborOrder::Reverse);
        assert!(!manager.get().evaluation.parallel);
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = temp_path("load.toml");
        std::fs::write(
            &path,
            "[clustering]\nneighbor_order = \"Declaration\"\n\n[report]\nformat = \"Json\"\n",
        )
        .unwrap();

        let manager = ConfigManager::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(manager.get().clustering.neighbor_order, NeighborOrder::Declaration);
        assert_eq!(manager.get().report.format, ReportFormat::Json);
        // Untouched sections keep their defaults
        assert!(manager.get().report.show_members);
        assert_eq!(manager.get().evaluation.parallel_threshold, 1024);
    }

    #[test]
    fn test_load_rejects_invalid_section() {
        let path = temp_path("invalid.toml");
        std::fs::write(&path, "[evaluation]\nparallel_threshold = 0\n").unwrap();

        let result = ConfigManager::load(Some(&path));
        std::fs::remove_file(&path).ok();

        match result {
            Err(FloraError::Configuration(msg)) => assert!(msg.starts_with("[evaluation]")),
            other => panic!("expected configuration error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = temp_path("does-not-exist.toml");
        assert!(ConfigManager::load(Some(&path)).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved.toml");
        let mut manager = ConfigManager::new();
        manager
            .update(|c| {
                c.evaluation.parallel = true;
                c.evaluation.parallel_threshold = 8;
            })
            .unwrap();
        manager.save_to_file(&path).unwrap();

        let reloaded = ConfigManager::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(reloaded.get().evaluation.parallel);
        assert_eq!(reloaded.get().evaluation.parallel_threshold, 8);
    }

    #[test]
    fn test_environment_overrides_file() {
        let path = temp_path("env.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        std::env::set_var("FLORA_LOGGING__LEVEL", "debug");
        let result = ConfigManager::load(Some(&path));
        std::env::remove_var("FLORA_LOGGING__LEVEL");
        std::fs::remove_file(&path).ok();

        let manager = result.unwrap();
        assert_eq!(manager.get().logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_update_keeps_previous_config_on_error() {
        let mut manager = ConfigManager::new();
        let result = manager.update(|c| c.evaluation.parallel_threshold = 0);
        assert!(result.is_err());
        assert_eq!(manager.get().evaluation.parallel_threshold, 1024);
    }
}
