//! Configuration loading and discovery for `styl.toml` / `styl.json5`
//!
//! Provides functions to find, parse, and resolve project configuration.

use super::resolver::{self, ShapeError};
use super::schema::{Defaults, RawConfig, StyleConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names checked at each directory level, in preference order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["styl.toml", "styl.json5"];

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse TOML config: {0}")]
    ParseToml(#[from] toml::de::Error),
    /// JSON5 parsing error
    #[error("Failed to parse JSON5 config: {0}")]
    ParseJson5(#[from] json5::Error),
    /// Extension is neither .toml nor .json5/.json
    #[error("Unrecognized config extension: {}", .0.display())]
    UnknownFormat(PathBuf),
    /// Structural errors in the record
    #[error("Config shape check failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Shape(Vec<ShapeError>),
}

/// Supported config file formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `styl.toml`
    Toml,
    /// `styl.json5` (plain `.json` parses as JSON5 too)
    Json5,
}

impl ConfigFormat {
    /// Determine the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("json5") | Some("json") => Some(Self::Json5),
            _ => None,
        }
    }

    /// Parse a format name from a string.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json5" | "json" => Some(Self::Json5),
            _ => None,
        }
    }

    /// Canonical config file name for this format.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Toml => "styl.toml",
            Self::Json5 => "styl.json5",
        }
    }
}

/// Find a config file by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from the current directory, checking `styl.toml` then
///    `styl.json5` at each level
/// 2. Check XDG_CONFIG_HOME/stylepipe/ (or ~/.config/stylepipe/)
///
/// # Returns
/// - `Some(path)` if a config file is found
/// - `None` if no config file is found
///
/// # Example
/// ```ignore
/// if let Some(config_path) = find_config() {
///     println!("Found config at: {}", config_path.display());
/// }
/// ```
pub fn find_config() -> Option<PathBuf> {
    // First try walking up from current directory
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    // Fall back to XDG config
    find_xdg_config()
}

/// Find a config file in the XDG config directory.
///
/// Checks XDG_CONFIG_HOME/stylepipe/ or ~/.config/stylepipe/ for each
/// supported file name.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_dir = xdg_config.join("stylepipe");
    for name in CONFIG_FILE_NAMES {
        let config_path = config_dir.join(name);
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}

/// Find a config file by walking up from a specific directory.
///
/// This is the internal implementation that allows specifying the start
/// directory, useful for testing. At each level `styl.toml` is preferred
/// over `styl.json5`.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Move to parent directory
        if !current.pop() {
            // Reached root, no config found
            return None;
        }
    }
}

/// Load the partial record from a config file, without resolving it.
///
/// The parser is chosen by extension. Shape is not checked here; use the
/// resolver, or [`load_config`] which does both.
pub fn load_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnknownFormat(path.to_path_buf()))?;
    let contents = fs::read_to_string(path)?;

    let raw = match format {
        ConfigFormat::Toml => toml::from_str(&contents)?,
        ConfigFormat::Json5 => json5::from_str(&contents)?,
    };

    Ok(raw)
}

/// Load and resolve configuration against the standard defaults.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [`find_config`] to locate one. If no config file is found, the standard
/// defaults resolve on their own.
///
/// # Returns
/// - `Ok(StyleConfig)` on success
/// - `Err(ConfigError)` if the file cannot be read, parsed, or has shape
///   errors (all of them are reported, not just the first)
///
/// # Example
/// ```ignore
/// // Load from discovered config
/// let config = load_config(None)?;
///
/// // Load from specific path
/// let config = load_config(Some(Path::new("my-site/styl.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<StyleConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => resolve_checked(&RawConfig::default()),
    }
}

/// Load and resolve configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<StyleConfig, ConfigError> {
    let raw = load_raw(path)?;
    resolve_checked(&raw)
}

/// Shape-check a record, then resolve it against the standard defaults.
fn resolve_checked(raw: &RawConfig) -> Result<StyleConfig, ConfigError> {
    let errors = resolver::check(raw);
    if !errors.is_empty() {
        return Err(ConfigError::Shape(errors));
    }

    resolver::resolve(raw, &Defaults::standard()).map_err(|e| ConfigError::Shape(vec![e]))
}

/// Get the project root directory from a config file path.
///
/// Returns the parent directory of the config file.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}
