//! `marquee.toml` configuration.
//!
//! Every key is optional. Without `--config` the CLI reads `./marquee.toml`
//! if it exists and falls back to the defaults otherwise.
//!
//! # Example
//!
//! ```toml
//! [store]
//! path = "/var/lib/marquee/movies.json"
//!
//! [catalog]
//! latest_count = 6
//!
//! [log]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use marquee_catalog::DEFAULT_LATEST_COUNT;
use serde::Deserialize;

/// Looked up in the working directory when no `--config` is given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "marquee.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub store: StoreConfig,
    pub catalog: CatalogConfig,
    pub log: LogConfig,
}

/// `[store]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct StoreConfig {
    /// JSON file backing the catalog.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: PathBuf::from("marquee.json"),
        }
    }
}

/// `[catalog]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CatalogConfig {
    pub latest_count: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            latest_count: DEFAULT_LATEST_COUNT,
        }
    }
}

/// `[log]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LogConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"marquee_catalog=debug"`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "warn".to_string(),
        }
    }
}

/// Load the configuration. An explicitly named file must exist; the default
/// file is optional.
pub(crate) fn load(explicit: Option<&Path>) -> Result<Config, String> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_config(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

pub(crate) fn read_config(path: &Path) -> Result<Config, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("could not parse '{}': {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.store.path, PathBuf::from("marquee.json"));
        assert_eq!(config.catalog.latest_count, 4);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            latest_count = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.latest_count, 10);
        assert_eq!(config.store.path, PathBuf::from("marquee.json"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = toml::from_str::<Config>("[store]\nfile = \"x.json\"\n").unwrap_err();
        assert!(err.to_string().contains("file"), "{err}");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.contains("could not read"), "{err}");
    }

    #[test]
    fn reads_all_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marquee.toml");
        std::fs::write(
            &path,
            "[store]\npath = \"movies.json\"\n[catalog]\nlatest_count = 2\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.store.path, PathBuf::from("movies.json"));
        assert_eq!(config.catalog.latest_count, 2);
        assert_eq!(config.log.level, "debug");
    }
}
