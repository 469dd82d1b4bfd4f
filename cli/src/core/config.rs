//! # codetidy Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the codetidy configuration. It
//! supports a layered approach that combines defaults, user settings and
//! project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by each command after loading)
//! 2. Project-specific `.codetidy.toml` in the current directory or ancestors
//!    (the search stops at the first directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/codetidy/config.toml`)
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [formatter]
//! max_indent_level = 32
//!
//! [output]
//! directory = "~/tidied"
//! readme_file = "README.md"
//!
//! [serve]
//! port = 9000
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let options = cfg.formatter.to_options();
//! ```
//!
use crate::common::source::formatter::FormatOptions;
use crate::core::error::{CodetidyError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::IpAddr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub formatter: FormatterConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub serve: ServeConfig,
}

/// Settings for the heuristic formatter.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FormatterConfig {
    /// Deepest indent level a single line may request before the formatter
    /// gives up and passes the original text through.
    #[serde(default = "default_max_indent_level")]
    pub max_indent_level: usize,
}

/// Where generated artifacts are written by the CLI commands.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory (can use ~). Will be expanded.
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// File name of the generated README.
    #[serde(default = "default_readme_file")]
    pub readme_file: String,
}

/// Defaults for `codetidy serve`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    #[serde(default = "default_serve_host")]
    pub host: IpAddr,
    #[serde(default = "default_serve_port")]
    pub port: u16,
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            max_indent_level: default_max_indent_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            readme_file: default_readme_file(),
        }
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: default_serve_host(),
            port: default_serve_port(),
            enable_cors: default_enable_cors(),
        }
    }
}

impl FormatterConfig {
    /// Converts the file-level settings into the options the formatter takes.
    pub fn to_options(&self) -> FormatOptions {
        FormatOptions {
            max_indent_level: self.max_indent_level,
        }
    }
}

fn default_max_indent_level() -> usize {
    FormatOptions::default().max_indent_level
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_readme_file() -> String {
    "README.md".to_string()
}
fn default_serve_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::LOCALHOST)
}
fn default_serve_port() -> u16 {
    8000
}
fn default_enable_cors() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".codetidy.toml";

/// Loads, merges, expands and validates the configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "codetidy", "codetidy") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.codetidy.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.codetidy.toml`, stopping at a `.git` boundary.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Field-wise merge: a project value wins whenever it differs from the default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.formatter.max_indent_level =
        if project_cfg.formatter.max_indent_level != default_max_indent_level() {
            project_cfg.formatter.max_indent_level
        } else {
            user.formatter.max_indent_level
        };
    merged.output.directory = if project_cfg.output.directory != default_output_dir() {
        project_cfg.output.directory
    } else {
        user.output.directory
    };
    merged.output.readme_file = if project_cfg.output.readme_file != default_readme_file() {
        project_cfg.output.readme_file
    } else {
        user.output.readme_file
    };
    merged.serve.host = if project_cfg.serve.host != default_serve_host() {
        project_cfg.serve.host
    } else {
        user.serve.host
    };
    merged.serve.port = if project_cfg.serve.port != default_serve_port() {
        project_cfg.serve.port
    } else {
        user.serve.port
    };
    merged.serve.enable_cors = if project_cfg.serve.enable_cors != default_enable_cors() {
        project_cfg.serve.enable_cors
    } else {
        user.serve.enable_cors
    };
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.output.directory = shellexpand::tilde(&config.output.directory).into_owned();
    debug!("Expanded output directory: {}", config.output.directory);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.formatter.max_indent_level == 0 {
        return Err(anyhow!(CodetidyError::Config(
            "formatter.max_indent_level must be greater than zero.".to_string()
        )));
    }
    let readme = &config.output.readme_file;
    if readme.is_empty() || readme.contains('/') || readme.contains('\\') {
        return Err(anyhow!(CodetidyError::Config(format!(
            "output.readme_file must be a plain file name, got '{}'.",
            readme
        ))));
    }
    let out_dir = PathBuf::from(&config.output.directory);
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(anyhow!(CodetidyError::Config(format!(
            "Configured output path '{}' exists but is not a directory.",
            out_dir.display()
        ))));
    }
    info!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [formatter]
            max_indent_level = 12

            [output]
            directory = "~/tidied"

            [serve]
            port = 9100
            enable_cors = false
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.formatter.max_indent_level, 12);
        assert_eq!(config.output.directory, "~/tidied"); // Not yet expanded
        assert_eq!(config.output.readme_file, "README.md"); // Default
        assert_eq!(config.serve.port, 9100);
        assert!(!config.serve.enable_cors);
        assert_eq!(config.serve.host, default_serve_host());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[formatter]\nindent = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_prefers_project_values() {
        let user = Config {
            output: OutputConfig {
                directory: "/user/out".into(),
                ..Default::default()
            },
            serve: ServeConfig {
                port: 9001,
                ..Default::default()
            },
            ..Default::default()
        };
        let project = Config {
            formatter: FormatterConfig {
                max_indent_level: 8,
            },
            serve: ServeConfig {
                port: 9002,
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.formatter.max_indent_level, 8);
        assert_eq!(merged.output.directory, "/user/out"); // project left it at default
        assert_eq!(merged.serve.port, 9002);
    }

    #[test]
    fn test_merge_without_project_returns_user() {
        let user = Config {
            formatter: FormatterConfig {
                max_indent_level: 3,
            },
            ..Default::default()
        };
        assert_eq!(merge_configs(user.clone(), None), user);
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            output: OutputConfig {
                directory: "~/tidy_test".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.output.directory,
            home_dir.join("tidy_test").to_string_lossy()
        );
    }

    #[test]
    fn test_find_project_config_stops_at_git() {
        let root = tempdir().unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = root.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        let nested = repo.join("src/deep");
        fs::create_dir_all(&nested).unwrap();

        // The config above the repository boundary is not picked up.
        assert_eq!(find_project_config_path(&nested), None);

        fs::write(repo.join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(
            find_project_config_path(&nested),
            Some(repo.join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_validate_config_valid() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            output: OutputConfig {
                directory: temp_dir.path().to_string_lossy().to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_zero_indent() {
        let config = Config {
            formatter: FormatterConfig {
                max_indent_level: 0,
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("max_indent_level must be greater than zero"));
    }

    #[test]
    fn test_validate_config_readme_with_separator() {
        let config = Config {
            output: OutputConfig {
                readme_file: "docs/README.md".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_output_path_is_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        fs::write(&file_path, "").unwrap();

        let config = Config {
            output: OutputConfig {
                directory: file_path.to_string_lossy().to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is not a directory"));
    }
}
