use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use route_graph_core::WeightPolicy;
use serde::Deserialize;
use thiserror::Error;

/// Bounds for `max_vertices`.
pub const MAX_VERTICES_MIN: usize = 1;
pub const MAX_VERTICES_MAX: usize = 100_000_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from the optional TOML file. Command-line flags are applied
/// on top by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub format: OutputFormat,
    /// Weight handling for `transpose` and `routes`.
    pub weights: WeightPolicy,
    /// Largest vertex count accepted from a header or `--vertices`.
    pub max_vertices: usize,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            weights: WeightPolicy::Zeroed,
            max_vertices: 1_000_000,
            log: "warn".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("config key `{key}` must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

impl Settings {
    /// Load settings from `path`, or defaults when no path is given.
    /// An explicit path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::parse(&text).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => Self::default(),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("max_vertices", self.max_vertices, MAX_VERTICES_MIN, MAX_VERTICES_MAX)
    }
}

pub fn check_range(
    key: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let s = Settings::load(None).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.weights, WeightPolicy::Zeroed);
        assert_eq!(s.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_partial_file() {
        let s = Settings::parse("weights = \"preserve\"\nmax_vertices = 64\n").unwrap();
        assert_eq!(s.weights, WeightPolicy::Preserve);
        assert_eq!(s.max_vertices, 64);
        assert_eq!(s.log, "warn");
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(Settings::parse("max_memory_mb = 10").is_err());
        assert!(Settings::parse("weights = \"halved\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"json\"\nlog = \"debug\"").unwrap();
        let s = Settings::load(Some(file.path())).unwrap();
        assert_eq!(s.format, OutputFormat::Json);
        assert_eq!(s.log, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load(Some(Path::new("/nonexistent/route-graph.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_max_vertices_range() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_vertices = 0").unwrap();
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                key: "max_vertices",
                value: 0,
                ..
            }
        ));
    }
}
