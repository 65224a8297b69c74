//! Graph rendering for producing DOT output from a walked jconf forest.
//!
//! Layout of the output, in order:
//!
//! 1. the `digraph` header with fixed page size and ratio hints
//! 2. one dotted cluster per top-level document, include clusters nested
//!    where their directive appeared
//! 3. a trailing cluster of referenced-but-undefined ids, if any
//! 4. every edge, in the order it was extracted
//!
//! All node declarations come before any edge so graphviz puts each node in
//! the cluster where it first appears.

mod dot;

use tracing::info;

use jconf_core::{ClusterItem, ConfigGraph, DocumentCluster};

pub use dot::{DotBuilder, NodeStyle, escape_label, node_label};

/// Id of the trailing cluster for undefined nodes.
pub const UNDEFINED_CLUSTER: &str = "undefined";
const UNDEFINED_LABEL: &str = "Not defined in these files";
const CLUSTER_STYLE: &str = "dotted";
const UNDEFINED_NODE_STYLE: &str = "style=dashed,";

/// Render the whole graph to DOT text.
pub fn render_graph(graph: &ConfigGraph) -> String {
    let mut dot = DotBuilder::new();
    dot.attr("size", "8.5,11").attr("ratio", "compress");

    for cluster in &graph.clusters {
        render_cluster(&mut dot, cluster);
    }

    let undefined = graph.undefined();
    if !undefined.is_empty() {
        dot.start_cluster(UNDEFINED_CLUSTER, UNDEFINED_LABEL, CLUSTER_STYLE);
        for id in &undefined {
            render_undefined_node(&mut dot, id);
        }
        dot.end_cluster();
    }

    for edge in &graph.edges {
        dot.edge(&edge.from, &edge.to, edge.label.as_deref());
    }

    info!(
        nodes = graph.node_count(),
        undefined = undefined.len(),
        edges = graph.edges.len(),
        "graph rendered"
    );

    dot.build()
}

fn render_cluster(dot: &mut DotBuilder, cluster: &DocumentCluster) {
    dot.start_cluster(&cluster.id, &cluster.label, CLUSTER_STYLE);
    for item in &cluster.items {
        match item {
            ClusterItem::Node(node) => {
                let kind = node.kind.as_str();
                dot.node(
                    &node.id,
                    NodeStyle::for_kind(kind).attrs(),
                    &node_label(&node.name, kind),
                );
            }
            ClusterItem::Cluster(nested) => render_cluster(dot, nested),
        }
    }
    dot.end_cluster();
}

/// Undefined nodes only have their sanitized id, which doubles as the label.
fn render_undefined_node(dot: &mut DotBuilder, id: &str) {
    let attrs = format!("{UNDEFINED_NODE_STYLE}{}", NodeStyle::for_kind("").attrs());
    dot.node(id, &attrs, &node_label(id, ""));
}
