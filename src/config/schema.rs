//! Configuration schema types for `styl.toml` / `styl.json5`
//!
//! Defines the partial record users write, the canonical record the pipeline
//! consumes, and the ordered plugin chain post-processors run from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Conventional default plugin: utility-class expansion
pub const PLUGIN_TAILWINDCSS: &str = "tailwindcss";
/// Conventional default plugin: vendor prefix insertion
pub const PLUGIN_AUTOPREFIXER: &str = "autoprefixer";

/// Empty options object, meaning "use the plugin's own defaults".
pub fn empty_options() -> Value {
    Value::Object(Map::new())
}

/// Partial configuration record as users write it.
///
/// Both fields are optional and loosely typed; their shape is checked by the
/// resolver rather than at parse time, so a malformed field produces a
/// field-path error instead of a parser error. Unrecognized top-level keys
/// are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Style entry points, loaded globally before all other styles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<Value>,
    /// Post-processing settings (plugin chain under `plugins`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcss: Option<Value>,
}

/// Ordered mapping from plugin name to plugin options.
///
/// Post-processors execute in registration order. Registering a name that is
/// already present replaces its options but keeps its original position in
/// the chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginChain {
    entries: Map<String, Value>,
}

impl PluginChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin, replacing its options in place if the name is taken.
    pub fn register(&mut self, name: impl Into<String>, options: Value) {
        self.entries.insert(name.into(), options);
    }

    /// Remove a plugin from the chain, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    /// Get the options registered for a plugin
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Check whether a plugin is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered plugins
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the chain has no plugins
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plugin names in execution order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate plugins in execution order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, options)| (name.as_str(), options))
    }
}

/// Post-processing section of the canonical configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostcssConfig {
    /// Plugin chain, in execution order
    #[serde(default)]
    pub plugins: PluginChain,
}

/// Canonical, fully-resolved configuration.
///
/// Produced by the resolver; every recognized field is populated. Serializes
/// to the same shape users write, so a resolved config is itself a valid
/// config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Global stylesheet entry points, in load order
    #[serde(default)]
    pub css: Vec<String>,
    /// Post-processing settings
    #[serde(default)]
    pub postcss: PostcssConfig,
}

impl StyleConfig {
    /// Plugin names in execution order
    pub fn plugin_names(&self) -> Vec<&str> {
        self.postcss.plugins.names().collect()
    }
}

/// Built-in defaults merged beneath a caller's partial record.
///
/// Always an explicit value handed to the resolver, never shared mutable
/// state, so concurrent resolutions cannot observe each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    /// Default style entry points
    pub css: Vec<String>,
    /// Default plugin chain
    pub plugins: PluginChain,
}

impl Defaults {
    /// Conventional deployment defaults: no entry points, `tailwindcss` then
    /// `autoprefixer`, both with empty options.
    pub fn standard() -> Self {
        let mut plugins = PluginChain::new();
        plugins.register(PLUGIN_TAILWINDCSS, empty_options());
        plugins.register(PLUGIN_AUTOPREFIXER, empty_options());

        Self { css: Vec::new(), plugins }
    }

    /// No defaults at all. Resolution against these returns exactly what the
    /// caller supplied.
    pub fn empty() -> Self {
        Self { css: Vec::new(), plugins: PluginChain::new() }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::standard()
    }
}
