use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};
use crate::entry::colour::ToneColours;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_path: PathBuf,
    pub max_connections: u32,                  // One connection per in-flight search
    pub read_only: bool,
    pub tone_colours: ToneColours,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,                        // Used when RUST_LOG is not set
    pub with_target: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: PathBuf::from("./dict.db"),
            max_connections: 8,
            read_only: true,
            tone_colours: ToneColours::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "jyutsearch=info".to_string(),
            with_target: true,
        }
    }
}

impl Config {
    /// Parse a config from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        if config.max_connections == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "max_connections must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_keep_defaults() {
        let config = Config::from_json_str(
            r##"{ "max_connections": 2, "tone_colours": { "pinyin": ["#000000"] } }"##,
        )
        .unwrap();
        assert_eq!(config.max_connections, 2);
        assert!(config.read_only);
        assert_eq!(config.tone_colours.pinyin, vec!["#000000"]);
        assert_eq!(config.tone_colours.jyutping, ToneColours::default().jyutping);
    }

    #[test]
    fn zero_connections_rejected() {
        let err = Config::from_json_str(r#"{ "max_connections": 0 }"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Io);
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jyutsearch.json");
        std::fs::write(&path, r#"{ "database_path": "dict.db", "read_only": false }"#).unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.database_path, PathBuf::from("dict.db"));
        assert!(!config.read_only);
    }
}
