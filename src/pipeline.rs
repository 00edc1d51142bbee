//! Pipeline plan construction.
//!
//! Renders a canonical configuration into the ordered execution description
//! downstream consumers run: the stylesheet entry points in load order and
//! the post-processor steps applied to each of them. The plan describes;
//! it never executes anything.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::schema::StyleConfig;

/// One post-processing step in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginStep {
    /// Plugin name
    pub plugin: String,
    /// Options handed to the plugin (empty object means plugin defaults)
    pub options: Value,
}

impl PluginStep {
    /// Whether the step runs with plugin-default options.
    pub fn uses_default_options(&self) -> bool {
        match &self.options {
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

/// Complete processing plan for a resolved configuration.
///
/// The step sequence is shared: every stylesheet runs through the same
/// post-processor chain, in registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelinePlan {
    /// Stylesheet entry points, in load order
    pub stylesheets: Vec<String>,
    /// Post-processor steps applied to every stylesheet, in execution order
    pub steps: Vec<PluginStep>,
}

impl PipelinePlan {
    /// Build the plan for a canonical configuration.
    pub fn from_config(config: &StyleConfig) -> Self {
        let stylesheets = config.css.clone();
        let steps = config
            .postcss
            .plugins
            .iter()
            .map(|(name, options)| PluginStep {
                plugin: name.to_string(),
                options: options.clone(),
            })
            .collect();

        Self { stylesheets, steps }
    }

    /// Number of stylesheet entry points
    pub fn entry_count(&self) -> usize {
        self.stylesheets.len()
    }

    /// Number of post-processor steps per stylesheet
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Check if the plan has nothing to do
    pub fn is_empty(&self) -> bool {
        self.stylesheets.is_empty() && self.steps.is_empty()
    }

    /// Format a one-line summary of the plan.
    pub fn summary(&self) -> String {
        format!(
            "{} entry point(s), {} post-processor(s)",
            self.entry_count(),
            self.step_count()
        )
    }
}

impl std::fmt::Display for PipelinePlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.stylesheets.is_empty() {
            writeln!(f, "Entry points: none")?;
        } else {
            writeln!(f, "Entry points:")?;
            for (i, stylesheet) in self.stylesheets.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, stylesheet)?;
            }
        }

        if self.steps.is_empty() {
            write!(f, "Post-processors: none")?;
        } else {
            write!(f, "Post-processors:")?;
            for (i, step) in self.steps.iter().enumerate() {
                write!(f, "\n  {}. {}", i + 1, step.plugin)?;
                if !step.uses_default_options() {
                    let options =
                        serde_json::to_string(&step.options).map_err(|_| std::fmt::Error)?;
                    write!(f, " {}", options)?;
                }
            }
        }

        Ok(())
    }
}
