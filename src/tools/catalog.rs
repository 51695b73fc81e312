//! Tool catalog loading from JSON configuration
//!
//! Loads tool configuration records from a JSON resource and builds the
//! immutable catalog of classified tools and non-empty categories. The
//! catalog is constructed once by an explicit factory and only read after
//! that; there is no update path.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{Result, ToolrackError};

use super::category::{Category, CategoryId};
use super::definition::{Tool, ToolConfig};

/// Immutable catalog of tools and their derived categories.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
    categories: Vec<Category>,
    loaded_at: DateTime<Utc>,
}

impl ToolCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::from_configs(Vec::new())
    }

    /// Load the catalog from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ToolrackError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    /// Load the catalog from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let configs: Vec<ToolConfig> = serde_json::from_str(content)?;
        Ok(Self::from_configs(configs))
    }

    /// Load from a file, degrading to an empty catalog on failure.
    ///
    /// A missing or malformed resource is logged to the error stream and the
    /// catalog comes up empty; accessors then behave as if no tools were
    /// configured. Nothing propagates to callers.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::from_file(path.as_ref()) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to load tools configuration: {}", e);
                Self::new()
            }
        }
    }

    /// Build the catalog from already-deserialized configuration records.
    pub fn from_configs(configs: Vec<ToolConfig>) -> Self {
        let mut tools: Vec<Tool> = configs.iter().map(Tool::from_config).collect();

        // Stable sort: ties keep input order
        tools.sort_by(|a, b| a.category_id.as_str().cmp(b.category_id.as_str()));

        let categories: Vec<Category> = CategoryId::ALL
            .iter()
            .map(|&id| {
                let members: Vec<Tool> = tools
                    .iter()
                    .filter(|t| t.category_id == id)
                    .cloned()
                    .collect();
                Category::new(id, members)
            })
            .filter(|c| !c.tools.is_empty())
            .collect();

        Self {
            tools,
            categories,
            loaded_at: Utc::now(),
        }
    }

    /// All tools, sorted by category id.
    pub fn all_tools(&self) -> &[Tool] {
        &self.tools
    }

    /// First tool whose provider matches the argument exactly.
    pub fn tool_by_provider(&self, provider: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.provider == provider)
    }

    /// Tools in a category; empty when the category has no tools.
    pub fn tools_by_category(&self, category_id: CategoryId) -> &[Tool] {
        self.category(category_id)
            .map(|c| c.tools.as_slice())
            .unwrap_or(&[])
    }

    /// Category by id; `None` when the category has no tools and was
    /// filtered from the exported list.
    pub fn category(&self, category_id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Non-empty categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// When the catalog was built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new()
    }
}
