//! The walked configuration forest, ready for rendering.

use crate::extract::{Edge, Relationship};
use crate::kind::ElementKind;
use crate::registry::{Collision, NodeRegistry};
use crate::sanitize::sanitize;

/// A node declaration inside a document cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDecl {
    pub id: String,
    /// Original, unsanitized element name.
    pub name: String,
    pub kind: ElementKind,
}

/// One document's visual grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentCluster {
    pub id: String,
    /// The document path as given.
    pub label: String,
    pub items: Vec<ClusterItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClusterItem {
    Node(NodeDecl),
    Cluster(DocumentCluster),
}

impl DocumentCluster {
    pub fn new(path: &str) -> Self {
        Self {
            id: sanitize(path),
            label: path.to_string(),
            items: Vec::new(),
        }
    }

    /// Node declarations directly in this cluster, in order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeDecl> {
        self.items.iter().filter_map(|item| match item {
            ClusterItem::Node(node) => Some(node),
            ClusterItem::Cluster(_) => None,
        })
    }

    /// Nested document clusters, in include order.
    pub fn subclusters(&self) -> impl Iterator<Item = &DocumentCluster> {
        self.items.iter().filter_map(|item| match item {
            ClusterItem::Cluster(cluster) => Some(cluster),
            ClusterItem::Node(_) => None,
        })
    }
}

/// Process-wide state built up during a traversal: the registry and the edge
/// list. Created once per run and threaded through every recursive walk.
#[derive(Debug, Default)]
pub struct GraphAccumulator {
    pub registry: NodeRegistry,
    pub edges: Vec<Edge>,
}

impl GraphAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: &str, kind: &ElementKind) -> NodeDecl {
        let id = sanitize(name);
        self.registry.register_defined(&id, name);
        NodeDecl {
            id,
            name: name.to_string(),
            kind: kind.clone(),
        }
    }

    pub fn relate(&mut self, rel: &Relationship<'_>) {
        let edge = rel.to_edge();
        self.registry.register_used(&edge.from, rel.source);
        self.registry.register_used(&edge.to, rel.target_name());
        self.edges.push(edge);
    }

    pub fn finish(self, clusters: Vec<DocumentCluster>) -> ConfigGraph {
        ConfigGraph {
            clusters,
            registry: self.registry,
            edges: self.edges,
        }
    }
}

/// Result of walking every top-level document.
#[derive(Debug)]
pub struct ConfigGraph {
    pub clusters: Vec<DocumentCluster>,
    pub registry: NodeRegistry,
    pub edges: Vec<Edge>,
}

impl ConfigGraph {
    pub fn undefined(&self) -> Vec<&str> {
        self.registry.undefined()
    }

    pub fn collisions(&self) -> &[Collision] {
        self.registry.collisions()
    }

    /// Total node declarations across all clusters, duplicates included.
    pub fn node_count(&self) -> usize {
        fn count(cluster: &DocumentCluster) -> usize {
            cluster.nodes().count() + cluster.subclusters().map(count).sum::<usize>()
        }
        self.clusters.iter().map(count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relate_registers_both_endpoints() {
        let mut acc = GraphAccumulator::new();
        acc.define("Head Proxy", &ElementKind::PositionProxy);
        acc.relate(&Relationship {
            source: "Head Proxy",
            target: Some("Sim Head"),
            label: Some("Position".into()),
        });

        let graph = acc.finish(Vec::new());
        for edge in &graph.edges {
            assert!(graph.registry.is_used(&edge.from));
            assert!(graph.registry.is_used(&edge.to));
        }
        assert_eq!(graph.undefined(), vec!["Sim_Head"]);
    }

    #[test]
    fn cluster_ids_are_sanitized_paths() {
        let cluster = DocumentCluster::new("configs/sim.base.jconf");
        assert_eq!(cluster.id, "configs_sim_base");
        assert_eq!(cluster.label, "configs/sim.base.jconf");
    }

    #[test]
    fn node_count_includes_nested_clusters() {
        let mut inner = DocumentCluster::new("inner.jconf");
        inner.items.push(ClusterItem::Node(NodeDecl {
            id: "X".into(),
            name: "X".into(),
            kind: ElementKind::User,
        }));
        let mut outer = DocumentCluster::new("outer.jconf");
        outer.items.push(ClusterItem::Cluster(inner));
        outer.items.push(ClusterItem::Node(NodeDecl {
            id: "Y".into(),
            name: "Y".into(),
            kind: ElementKind::Alias,
        }));

        let graph = GraphAccumulator::new().finish(vec![outer]);
        assert_eq!(graph.node_count(), 2);
    }
}
