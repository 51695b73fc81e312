//! Icon markers for tools and categories.
//!
//! Icons are opaque identifiers here; the front end resolves them to the
//! actual visual components.

use serde::{Deserialize, Serialize};

/// Visual marker attached to a tool or category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Prometheus,
    Kubernetes,
    Istio,
    /// Book marker for documentation search, also the generic fallback
    BookOpen,
    Helm,
    Argo,
    Grafana,
    Cilium,
    #[serde(rename = "kgateway")]
    KGateway,
}

impl Icon {
    /// Asset name the front end resolves to an icon component.
    pub fn asset(&self) -> &'static str {
        match self {
            Icon::Prometheus => "prometheus",
            Icon::Kubernetes => "kubernetes",
            Icon::Istio => "istio",
            Icon::BookOpen => "book-open-text",
            Icon::Helm => "helm",
            Icon::Argo => "argo",
            Icon::Grafana => "grafana",
            Icon::Cilium => "cilium",
            Icon::KGateway => "kgateway",
        }
    }
}
