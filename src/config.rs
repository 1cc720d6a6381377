//! Configuration for the richfield binary.
//!
//! Configuration sources (highest priority first):
//! 1. Explicit file (`--config` or RICHFIELD_CONFIG)
//! 2. Config file (.richfield/config.yaml) in the current directory or a parent
//! 3. Config file in the home directory (~/.richfield/config.yaml)
//! 4. Defaults
//!
//! RICHFIELD_LIBRARY_NAME overrides the library name from any source.
//!
//! The config file is only ever read. Seed resources listed in it are added
//! to a fresh catalog on every invocation; nothing is written back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::library::{Catalog, Category, ResourceRecord};

/// Library name used when none is configured
pub const DEFAULT_LIBRARY_NAME: &str = "Richfield Library";

/// Tracing filter used when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub resources: Vec<SeedResource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibraryConfig {
    /// Display name shown in the CLI banner
    pub name: Option<String>,
}

/// A resource listed in the config file
#[derive(Debug, Clone, Deserialize)]
pub struct SeedResource {
    pub title: String,
    pub author: String,
    pub isbn: String,
    /// Category code (B/J/D) or label
    #[serde(rename = "type")]
    pub kind: String,
}

impl SeedResource {
    fn to_record(&self) -> Result<ResourceRecord> {
        let category: Category = self.kind.parse()?;
        Ok(ResourceRecord::new(
            &self.title,
            &self.author,
            &self.isbn,
            category,
        ))
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Library display name
    pub library_name: String,
    /// Default tracing filter
    pub log_level: String,
    /// Seed records, in file order
    pub resources: Vec<ResourceRecord>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            resources: Vec::new(),
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Build a fresh catalog holding the seed resources
    pub fn build_catalog(&self) -> Catalog {
        self.resources.iter().cloned().collect()
    }
}

/// Find config file by searching `start` and its parents, then the home directory
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".richfield").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let home_config = dirs::home_dir()?.join(".richfield").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge an optional config file and overrides into a resolved config
fn resolve(config_file: Option<PathBuf>, name_override: Option<String>) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(ref path) = config_file {
        let config = load_config_file(path)?;

        if let Some(name) = config.library.name {
            resolved.library_name = name;
        }
        if let Some(level) = config.log_level {
            resolved.log_level = level;
        }

        resolved.resources = config
            .resources
            .iter()
            .enumerate()
            .map(|(index, seed)| {
                seed.to_record().with_context(|| {
                    format!(
                        "Invalid resource #{} ({:?}) in {}: unknown type {:?}",
                        index + 1,
                        seed.title,
                        path.display(),
                        seed.kind
                    )
                })
            })
            .collect::<Result<_>>()?;
    }

    if let Some(name) = name_override {
        resolved.library_name = name;
    }
    resolved.config_file = config_file;

    Ok(resolved)
}

/// Load configuration from all sources
///
/// `explicit` is a path given on the command line (or via RICHFIELD_CONFIG);
/// it must exist. Without it, the usual search locations are tried.
pub fn load_config(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let config_file = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            find_config_file(&cwd)
        }
    };

    let name_override = std::env::var("RICHFIELD_LIBRARY_NAME").ok();
    resolve(config_file, name_override)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let richfield_dir = dir.join(".richfield");
        std::fs::create_dir_all(&richfield_dir).unwrap();

        let config_path = richfield_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, None).unwrap();

        assert_eq!(config.library_name, DEFAULT_LIBRARY_NAME);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.resources.is_empty());
        assert!(config.config_file.is_none());
        assert!(config.build_catalog().is_empty());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            temp.path(),
            r#"
version: "1.0"
library:
  name: Branch Library
log_level: debug
resources:
  - title: Dune
    author: Herbert
    isbn: "111"
    type: B
  - title: Nature
    author: N/A
    isbn: "222"
    type: Journal
"#,
        );

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.library.name, Some("Branch Library".to_string()));
        assert_eq!(config.log_level, Some("debug".to_string()));
        assert_eq!(config.resources.len(), 2);
        assert_eq!(config.resources[1].kind, "Journal");
    }

    #[test]
    fn test_resolve_builds_seed_catalog() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            temp.path(),
            r#"
version: "1.0"
resources:
  - { title: Dune, author: Herbert, isbn: "111", type: B }
  - { title: E-Guide, author: Smith, isbn: "333", type: D }
"#,
        );

        let config = resolve(Some(config_path.clone()), None).unwrap();
        assert_eq!(config.library_name, DEFAULT_LIBRARY_NAME);
        assert_eq!(config.config_file, Some(config_path));

        let catalog = config.build_catalog();
        assert_eq!(catalog.len(), 2);
        let categories: Vec<_> = catalog.iter().map(|r| r.category()).collect();
        assert_eq!(categories, [Category::Book, Category::Digital]);
    }

    #[test]
    fn test_name_override_wins() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            temp.path(),
            "version: \"1.0\"\nlibrary:\n  name: From File\n",
        );

        let config = resolve(Some(config_path), Some("From Env".to_string())).unwrap();
        assert_eq!(config.library_name, "From Env");
    }

    #[test]
    fn test_invalid_seed_type_is_rejected() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            temp.path(),
            r#"
version: "1.0"
resources:
  - { title: Odd, author: Nobody, isbn: "9", type: Z }
"#,
        );

        let err = resolve(Some(config_path), None).unwrap_err();
        assert!(err.to_string().contains("Invalid resource #1"));
    }

    #[test]
    fn test_find_config_file_in_parent() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(temp.path(), "version: \"1.0\"");

        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_file(&nested), Some(config_path));
    }

    #[test]
    fn test_explicit_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yaml");
        assert!(load_config(Some(&missing)).is_err());
    }
}
