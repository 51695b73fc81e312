//! Provider classification rules.
//!
//! Providers are matched against an ordered rule table; the first rule whose
//! needle occurs in the provider id decides the category, icon, and tags.
//! Order is significant: a provider matching several needles takes the
//! earliest rule.

use super::category::CategoryId;
use super::icon::Icon;

/// A single classification rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Substring searched for in the provider id
    pub needle: &'static str,
    pub category_id: CategoryId,
    pub icon: Icon,
    pub tags: &'static [&'static str],
}

/// Classification rules in priority order. KGateway tools keep their own
/// icon and tags but have no dedicated category.
pub const RULES: &[Rule] = &[
    Rule {
        needle: "prometheus",
        category_id: CategoryId::Prometheus,
        icon: Icon::Prometheus,
        tags: &["Prometheus", "Monitoring", "Observability"],
    },
    Rule {
        needle: "k8s",
        category_id: CategoryId::Kubernetes,
        icon: Icon::Kubernetes,
        tags: &["Kubernetes"],
    },
    Rule {
        needle: "istio",
        category_id: CategoryId::Istio,
        icon: Icon::Istio,
        tags: &["Istio"],
    },
    Rule {
        needle: "docs",
        category_id: CategoryId::Documentation,
        icon: Icon::BookOpen,
        tags: &["Documentation", "Vector DB", "Search"],
    },
    Rule {
        needle: "helm",
        category_id: CategoryId::Helm,
        icon: Icon::Helm,
        tags: &["Helm"],
    },
    Rule {
        needle: "argo",
        category_id: CategoryId::Argo,
        icon: Icon::Argo,
        tags: &["Argo"],
    },
    Rule {
        needle: "grafana",
        category_id: CategoryId::Grafana,
        icon: Icon::Grafana,
        tags: &["Grafana"],
    },
    Rule {
        needle: "cilium",
        category_id: CategoryId::Cilium,
        icon: Icon::Cilium,
        tags: &["Cilium"],
    },
    Rule {
        needle: "kgateway",
        category_id: CategoryId::Other,
        icon: Icon::KGateway,
        tags: &["KGateway"],
    },
];

/// Result of classifying a provider id.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category_id: CategoryId,
    pub icon: Icon,
    pub tags: Vec<String>,
}

/// Classify a provider id against the rule table.
///
/// Total: providers matching no rule fall back to the generic `Other`
/// classification.
pub fn classify(provider: &str) -> Classification {
    for rule in RULES {
        if provider.contains(rule.needle) {
            return Classification {
                category_id: rule.category_id,
                icon: rule.icon,
                tags: rule.tags.iter().map(|t| t.to_string()).collect(),
            };
        }
    }

    Classification {
        category_id: CategoryId::Other,
        icon: Icon::BookOpen,
        tags: vec!["Other".to_string()],
    }
}
