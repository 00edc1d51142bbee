//! Merging and shape validation for partial configuration records.
//!
//! The resolver turns a caller's partial record plus built-in defaults into
//! the canonical configuration handed to the pipeline. It is pure: no
//! filesystem access, no mutation of the input, deterministic output.

use serde_json::Value;
use thiserror::Error;

use crate::config::schema::{Defaults, PluginChain, PostcssConfig, RawConfig, StyleConfig};

/// Structural error in a partial configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{field}' {message}")]
pub struct ShapeError {
    /// Path to the offending field (e.g., "postcss.plugins")
    pub field: String,
    /// What the field must look like
    pub message: String,
}

impl ShapeError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Collect every shape problem in a partial record.
///
/// Problems are reported in field order, `css` before `postcss`, so the
/// first entry matches the error [`resolve`] fails with. An empty vec means
/// the record resolves cleanly against any defaults.
pub fn check(raw: &RawConfig) -> Vec<ShapeError> {
    let mut errors = Vec::new();

    if let Some(css) = &raw.css {
        match css.as_array() {
            Some(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    match entry.as_str() {
                        Some("") => errors.push(ShapeError::new(
                            format!("css[{}]", i),
                            "must be a non-empty path",
                        )),
                        Some(_) => {}
                        None => errors.push(ShapeError::new(
                            format!("css[{}]", i),
                            "must be a string path",
                        )),
                    }
                }
            }
            None => errors.push(ShapeError::new("css", "must be an array of stylesheet paths")),
        }
    }

    if let Some(postcss) = &raw.postcss {
        match postcss.as_object() {
            Some(table) => {
                if let Some(plugins) = table.get("plugins") {
                    match plugins.as_object() {
                        Some(chain) => {
                            for name in chain.keys() {
                                if name.is_empty() {
                                    errors.push(ShapeError::new(
                                        "postcss.plugins",
                                        "plugin names must be non-empty",
                                    ));
                                }
                            }
                        }
                        None => errors.push(ShapeError::new(
                            "postcss.plugins",
                            "must be a table mapping plugin names to options",
                        )),
                    }
                }
            }
            None => errors.push(ShapeError::new(
                "postcss",
                "must be a table of post-processor settings",
            )),
        }
    }

    errors
}

/// Check whether a partial record is structurally sound.
pub fn is_valid(raw: &RawConfig) -> bool {
    check(raw).is_empty()
}

/// Resolve a partial record against a set of defaults.
///
/// Merge rules:
/// - `css`: the caller's list wins whenever the field is present, even an
///   empty one; otherwise the default entry points are used.
/// - `postcss.plugins`: the default chain is taken in declared order, then
///   the caller's entries are applied in declared order. A name already in
///   the chain keeps its position and takes the caller's options; new names
///   are appended.
///
/// Plugin option payloads are opaque and pass through untouched. Fails fast
/// with the first shape problem; use [`check`] for the full list.
pub fn resolve(raw: &RawConfig, defaults: &Defaults) -> Result<StyleConfig, ShapeError> {
    let css = resolve_entry_points(raw.css.as_ref(), defaults)?;
    let plugins = resolve_plugins(raw.postcss.as_ref(), defaults)?;

    Ok(StyleConfig { css, postcss: PostcssConfig { plugins } })
}

/// Resolve the `css` field into the entry point list.
fn resolve_entry_points(
    css: Option<&Value>,
    defaults: &Defaults,
) -> Result<Vec<String>, ShapeError> {
    let value = match css {
        Some(v) => v,
        None => return Ok(defaults.css.clone()),
    };

    let entries = value
        .as_array()
        .ok_or_else(|| ShapeError::new("css", "must be an array of stylesheet paths"))?;

    let mut paths = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let path = entry
            .as_str()
            .ok_or_else(|| ShapeError::new(format!("css[{}]", i), "must be a string path"))?;
        if path.is_empty() {
            return Err(ShapeError::new(format!("css[{}]", i), "must be a non-empty path"));
        }
        paths.push(path.to_string());
    }

    Ok(paths)
}

/// Resolve the `postcss` field into the merged plugin chain.
fn resolve_plugins(
    postcss: Option<&Value>,
    defaults: &Defaults,
) -> Result<PluginChain, ShapeError> {
    let mut chain = defaults.plugins.clone();

    let value = match postcss {
        Some(v) => v,
        None => return Ok(chain),
    };

    let table = value
        .as_object()
        .ok_or_else(|| ShapeError::new("postcss", "must be a table of post-processor settings"))?;

    let plugins = match table.get("plugins") {
        Some(p) => p,
        None => return Ok(chain),
    };

    let entries = plugins.as_object().ok_or_else(|| {
        ShapeError::new("postcss.plugins", "must be a table mapping plugin names to options")
    })?;

    for (name, options) in entries {
        if name.is_empty() {
            return Err(ShapeError::new("postcss.plugins", "plugin names must be non-empty"));
        }
        chain.register(name.clone(), options.clone());
    }

    Ok(chain)
}
