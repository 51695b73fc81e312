//! Category identifiers and view-models.
//!
//! The category set is closed: every tool lands in exactly one of the ids
//! below, with `Other` as the catch-all.

use serde::{Deserialize, Serialize};

use super::definition::Tool;
use super::icon::Icon;

/// Identifier for a tool category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Documentation,
    Prometheus,
    Kubernetes,
    Istio,
    Helm,
    Argo,
    Grafana,
    Cilium,
    Other,
}

impl CategoryId {
    /// All known categories in declaration order. The exported category list
    /// follows this order.
    pub const ALL: [CategoryId; 9] = [
        CategoryId::Documentation,
        CategoryId::Prometheus,
        CategoryId::Kubernetes,
        CategoryId::Istio,
        CategoryId::Helm,
        CategoryId::Argo,
        CategoryId::Grafana,
        CategoryId::Cilium,
        CategoryId::Other,
    ];

    /// String form of the id.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Documentation => "documentation",
            CategoryId::Prometheus => "prometheus",
            CategoryId::Kubernetes => "kubernetes",
            CategoryId::Istio => "istio",
            CategoryId::Helm => "helm",
            CategoryId::Argo => "argo",
            CategoryId::Grafana => "grafana",
            CategoryId::Cilium => "cilium",
            CategoryId::Other => "other",
        }
    }

    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "documentation" => Some(CategoryId::Documentation),
            "prometheus" => Some(CategoryId::Prometheus),
            "kubernetes" => Some(CategoryId::Kubernetes),
            "istio" => Some(CategoryId::Istio),
            "helm" => Some(CategoryId::Helm),
            "argo" => Some(CategoryId::Argo),
            "grafana" => Some(CategoryId::Grafana),
            "cilium" => Some(CategoryId::Cilium),
            "other" => Some(CategoryId::Other),
            _ => None,
        }
    }

    /// Display name shown in the dashboard.
    pub fn name(&self) -> &'static str {
        match self {
            CategoryId::Documentation => "Documentation",
            CategoryId::Prometheus => "Prometheus",
            CategoryId::Kubernetes => "Kubernetes",
            CategoryId::Istio => "Istio",
            CategoryId::Helm => "Helm",
            CategoryId::Argo => "Argo",
            CategoryId::Grafana => "Grafana",
            CategoryId::Cilium => "Cilium",
            CategoryId::Other => "Other",
        }
    }

    /// Category blurb shown in the dashboard.
    pub fn description(&self) -> &'static str {
        match self {
            CategoryId::Documentation => {
                "Tools for searching and managing documentation across different products and services"
            }
            CategoryId::Prometheus => {
                "Complete suite of tools for monitoring, querying, and managing Prometheus instances"
            }
            CategoryId::Kubernetes => "Tools for managing and interacting with Kubernetes clusters",
            CategoryId::Istio => "Tools for managing and interacting with Istio service mesh",
            CategoryId::Helm => "Tools for managing and interacting with Helm charts and repositories",
            CategoryId::Argo => "Tools for managing and interacting with Argo projects and workflows",
            CategoryId::Grafana => {
                "Tools for managing and interacting with Grafana dashboards and data sources"
            }
            CategoryId::Cilium => "Tools for managing and interacting with Cilium service mesh",
            CategoryId::Other => "Other tools that don't fit into the other categories",
        }
    }

    /// Icon shown next to the category.
    pub fn icon(&self) -> Icon {
        match self {
            CategoryId::Documentation => Icon::BookOpen,
            CategoryId::Prometheus => Icon::Prometheus,
            CategoryId::Kubernetes => Icon::Kubernetes,
            CategoryId::Istio => Icon::Istio,
            CategoryId::Helm => Icon::Helm,
            CategoryId::Argo => Icon::Argo,
            CategoryId::Grafana => Icon::Grafana,
            CategoryId::Cilium => Icon::Cilium,
            CategoryId::Other => Icon::BookOpen,
        }
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category with the tools classified into it.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub icon: Icon,
    pub tools: Vec<Tool>,
}

impl Category {
    /// Build a category view-model from its id and member tools.
    pub fn new(id: CategoryId, tools: Vec<Tool>) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            description: id.description().to_string(),
            icon: id.icon(),
            tools,
        }
    }
}
