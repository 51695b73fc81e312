//! Tool catalog - configuration loading, classification, and lookup
//!
//! Tools arrive as raw configuration records, get classified by provider id
//! against an ordered rule table, and come out as UI-ready view-models
//! grouped into a fixed set of categories.

mod catalog;
mod category;
mod classify;
mod definition;
mod icon;

pub use catalog::ToolCatalog;
pub use category::{Category, CategoryId};
pub use classify::{Classification, Rule, RULES, classify};
pub use definition::{Tool, ToolConfig, slugify};
pub use icon::Icon;
