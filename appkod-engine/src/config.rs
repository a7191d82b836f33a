//! `appkod.toml` loading.

use std::path::Path;

use appkod_codegen::generation::OutputLayout;
use serde::Deserialize;

use crate::EngineError;

/// Default configuration file name, looked up next to the blueprint.
pub const CONFIG_FILENAME: &str = "appkod.toml";

/// Engine settings.
///
/// ```toml
/// [output]
/// schema = "prisma/schema.prisma"
/// models = "api/models.py"
/// routes = "api/routes.py"
/// pages_dir = "web/app"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub output: OutputLayout,
}

impl EngineConfig {
    /// Parse a configuration from TOML text.
    pub fn parse(content: &str, path: &Path) -> Result<Self, EngineError> {
        toml::from_str(content).map_err(|e| EngineError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Load a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EngineError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Load a configuration file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = EngineConfig::parse("", Path::new(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_output_overrides() {
        let config = EngineConfig::parse(
            r#"
            [output]
            schema = "db/schema.prisma"
            "#,
            Path::new(CONFIG_FILENAME),
        )
        .unwrap();
        assert_eq!(config.output.schema, "db/schema.prisma");
        assert_eq!(config.output.models, "api/models.py");
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = EngineConfig::parse("[outputs]\nschema = \"x\"", Path::new(CONFIG_FILENAME))
            .unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
        assert!(err.to_string().starts_with("invalid configuration in appkod.toml:"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let config = EngineConfig::load_or_default(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, EngineConfig::default());

        let err = EngineConfig::from_file(dir.path().join(CONFIG_FILENAME)).unwrap_err();
        assert!(matches!(err, EngineError::Config { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[output]\npages_dir = \"frontend/app\"\n").unwrap();

        let config = EngineConfig::load_or_default(&path).unwrap();
        assert_eq!(config.output.page_path("x"), "frontend/app/x/page.tsx");
    }
}
