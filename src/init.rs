//! Config scaffolding for stylepipe
//!
//! Provides starter config files for new projects with various presets.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::loader::ConfigFormat;

/// Error during config scaffolding
#[derive(Debug)]
pub enum InitError {
    /// Config file already exists
    FileExists(PathBuf),
    /// Failed to create directory
    CreateDir(std::io::Error),
    /// Failed to write file
    WriteFile(std::io::Error),
    /// Unknown preset
    UnknownPreset(String),
    /// Unknown config format
    UnknownFormat(String),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::FileExists(path) => {
                write!(f, "Config file already exists: {}", path.display())
            }
            InitError::CreateDir(e) => write!(f, "Failed to create directory: {}", e),
            InitError::WriteFile(e) => write!(f, "Failed to write file: {}", e),
            InitError::UnknownPreset(preset) => {
                write!(f, "Unknown preset '{}'. Available: minimal, tailwind", preset)
            }
            InitError::UnknownFormat(format) => {
                write!(f, "Unknown config format '{}'. Available: toml, json5", format)
            }
        }
    }
}

impl std::error::Error for InitError {}

/// Available starter presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// No entry points, everything from the standard defaults
    Minimal,
    /// Tailwind entry stylesheet with explicit plugin tables
    Tailwind,
}

impl Preset {
    /// Parse preset name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "minimal" => Some(Preset::Minimal),
            "tailwind" => Some(Preset::Tailwind),
            _ => None,
        }
    }
}

/// Write a starter config file into a directory.
///
/// The file name follows the chosen format (`styl.toml` or `styl.json5`).
/// An existing file is never overwritten unless `force` is set. The target
/// directory is created if missing.
///
/// # Arguments
/// - `dir` - Directory to create the config file in
/// - `preset` - Preset name ("minimal", "tailwind")
/// - `format` - Config format name ("toml", "json5")
/// - `force` - Overwrite an existing config file
///
/// # Returns
/// - `Ok(path)` with the written file path on success
/// - `Err(InitError)` if scaffolding fails
pub fn init_config(
    dir: &Path,
    preset: &str,
    format: &str,
    force: bool,
) -> Result<PathBuf, InitError> {
    let preset =
        Preset::from_str(preset).ok_or_else(|| InitError::UnknownPreset(preset.to_string()))?;
    let format = ConfigFormat::from_name(format)
        .ok_or_else(|| InitError::UnknownFormat(format.to_string()))?;

    if !dir.exists() {
        create_dir(dir)?;
    }

    let config_path = dir.join(format.file_name());
    if config_path.exists() && !force {
        return Err(InitError::FileExists(config_path));
    }

    let contents = match (preset, format) {
        (Preset::Minimal, ConfigFormat::Toml) => generate_minimal_toml(),
        (Preset::Minimal, ConfigFormat::Json5) => generate_minimal_json5(),
        (Preset::Tailwind, ConfigFormat::Toml) => generate_tailwind_toml(),
        (Preset::Tailwind, ConfigFormat::Json5) => generate_tailwind_json5(),
    };
    write_file(&config_path, &contents)?;

    Ok(config_path)
}

/// Create a directory and all parent directories.
fn create_dir(path: &Path) -> Result<(), InitError> {
    fs::create_dir_all(path).map_err(InitError::CreateDir)
}

/// Write content to a file.
fn write_file(path: &Path, content: &str) -> Result<(), InitError> {
    fs::write(path, content).map_err(InitError::WriteFile)
}

/// Generate the minimal TOML starter config.
fn generate_minimal_toml() -> String {
    r#"# Stylepipe configuration

# Stylesheet entry points, loaded globally in order.
css = []

# Post-processors run in registration order. The standard chain
# (tailwindcss, autoprefixer) applies even when this table is omitted.
#
# [postcss.plugins.cssnano]
"#
    .to_string()
}

/// Generate the minimal JSON5 starter config.
fn generate_minimal_json5() -> String {
    r#"{
  // Stylesheet entry points, loaded globally in order.
  css: [],

  // Post-processors run in registration order. The standard chain
  // (tailwindcss, autoprefixer) applies even when this table is omitted.
}
"#
    .to_string()
}

/// Generate the Tailwind TOML starter config.
fn generate_tailwind_toml() -> String {
    r#"# Stylepipe configuration

css = ["~/assets/css/tailwind.css"]

[postcss.plugins.tailwindcss]

[postcss.plugins.autoprefixer]
"#
    .to_string()
}

/// Generate the Tailwind JSON5 starter config.
fn generate_tailwind_json5() -> String {
    r#"{
  css: ['~/assets/css/tailwind.css'],
  postcss: {
    plugins: {
      tailwindcss: {},
      autoprefixer: {},
    },
  },
}
"#
    .to_string()
}
