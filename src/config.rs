use crate::core::types::ScriptMode;
use crate::error::{PaleoError, Result};
use crate::persistence::ArchiveFormat;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_LOG_FILTER: &str = "paleo_core=info,paleo_engine=info";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Script assumed by `transliterate` when no mode is given.
    pub mode: ScriptMode,
    /// Emit speech-ready text instead of hyphenated syllables.
    pub tts: bool,
    pub format: ArchiveFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PaleoError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Defaults when no file is named; a named file must exist and parse.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render.mode, ScriptMode::Hebrew);
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn parses_partial_sections() {
        let config = Config::from_toml(
            r#"
            [render]
            mode = "paleo"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.render.mode, ScriptMode::Paleo);
        assert_eq!(config.render.format, ArchiveFormat::Json);
        assert!(!config.render.tts);
    }

    #[test]
    fn rejects_unknown_mode() {
        let result = Config::from_toml("[render]\nmode = \"greek\"\n");
        assert!(matches!(result, Err(PaleoError::Toml(_))));
    }

    #[test]
    fn missing_named_file_is_a_config_error() {
        let result = Config::load_or_default(Some(Path::new("/nonexistent/paleo.toml")));
        assert!(matches!(result, Err(PaleoError::Config(_))));
        assert!(Config::load_or_default(None).is_ok());
    }
}
