//! Tool configuration records and derived view-models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::CategoryId;
use super::classify::classify;
use super::icon::Icon;

/// Raw tool configuration record as it appears in the catalog resource.
///
/// Only `provider`, `label`, and `description` feed the view-model; the
/// remaining fields are collaborator data, accepted and carried through
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Provider id, e.g. "prometheus-query"
    pub provider: String,
    /// Display name
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub component_type: Option<String>,
    #[serde(default)]
    pub component_version: Option<u32>,
    #[serde(default)]
    pub version: Option<u32>,
    /// Free-form provider-specific configuration payload
    #[serde(default)]
    pub config: Value,
}

/// UI-ready tool view-model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Stable identifier derived from the label. Not guaranteed unique if
    /// labels collide.
    pub id: String,
    /// Display name, the label verbatim
    pub name: String,
    pub description: String,
    pub icon: Icon,
    pub tags: Vec<String>,
    pub category_id: CategoryId,
    pub provider: String,
}

impl Tool {
    /// Build a view-model from a configuration record.
    pub fn from_config(config: &ToolConfig) -> Self {
        let classification = classify(&config.provider);

        Self {
            id: slugify(&config.label),
            name: config.label.clone(),
            description: config.description.clone(),
            icon: classification.icon,
            tags: classification.tags,
            category_id: classification.category_id,
            provider: config.provider.clone(),
        }
    }
}

/// Lowercase a label and collapse each whitespace run into a single hyphen.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut in_whitespace = false;

    for c in label.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
            for lc in c.to_lowercase() {
                slug.push(lc);
            }
        }
    }

    slug
}
