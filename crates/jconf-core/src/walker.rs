//! Recursive traversal of a jconf forest.
//!
//! Includes are inlined where they appear, so a nested document's cluster sits
//! between the node declarations of the `elements` blocks around it. Include
//! cycles are not detected.

use std::path::{Path, PathBuf};

use jconf_error::Result;
use tracing::{debug, trace};

use crate::document::{Document, DocumentChild};
use crate::extract::extract;
use crate::graph::{ClusterItem, ConfigGraph, DocumentCluster, GraphAccumulator};

/// Walk every top-level document in order and collect the whole forest.
pub fn build_config_graph<S: AsRef<str>>(files: &[S]) -> Result<ConfigGraph> {
    let mut acc = GraphAccumulator::new();
    let mut clusters = Vec::with_capacity(files.len());
    for file in files {
        let file = file.as_ref();
        clusters.push(walk(&mut acc, file, Path::new(file))?);
    }
    Ok(acc.finish(clusters))
}

/// Walk the document at `location`, labelled `path`, recursing into includes.
pub fn walk(acc: &mut GraphAccumulator, path: &str, location: &Path) -> Result<DocumentCluster> {
    debug!(path, location = %location.display(), "walking document");
    let document = Document::load(location, path)?;
    walk_document(acc, &document, location.parent())
}

/// Walk an already-parsed document. Relative includes resolve against `base`.
pub fn walk_document(
    acc: &mut GraphAccumulator,
    document: &Document,
    base: Option<&Path>,
) -> Result<DocumentCluster> {
    let mut cluster = DocumentCluster::new(&document.path);

    for child in &document.children {
        match child {
            DocumentChild::Include(target) => {
                let location = resolve_include(base, target);
                let nested = walk(acc, target, &location)?;
                cluster.items.push(ClusterItem::Cluster(nested));
            }
            DocumentChild::Elements(elements) => {
                for element in elements {
                    if element.kind.is_ignored() {
                        trace!(kind = %element.kind, name = %element.name, "ignored element");
                        continue;
                    }

                    let node = acc.define(&element.name, &element.kind);
                    cluster.items.push(ClusterItem::Node(node));

                    if let Some(rel) = extract(element) {
                        acc.relate(&rel);
                    }
                }
            }
        }
    }

    Ok(cluster)
}

/// Resolve an include target. Relative paths are tried next to the including
/// document first, then as written.
pub fn resolve_include(base: Option<&Path>, target: &str) -> PathBuf {
    let target_path = Path::new(target);
    if target_path.is_absolute() {
        return target_path.to_path_buf();
    }
    if let Some(base) = base.filter(|b| !b.as_os_str().is_empty()) {
        let candidate = base.join(target_path);
        if candidate.is_file() {
            return candidate;
        }
    }
    target_path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementKind;
    use pretty_assertions::assert_eq;

    fn parse(text: &str, path: &str) -> Document {
        Document::parse(text, path).unwrap()
    }

    fn node_ids(cluster: &DocumentCluster) -> Vec<&str> {
        cluster.nodes().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn nodes_follow_element_order() {
        let doc = parse(
            r#"<configuration>
              <elements>
                <user name="U"><head_position>H</head_position></user>
                <alias name="H"><proxy>P</proxy></alias>
                <flock name="Flock Of Birds"/>
              </elements>
            </configuration>"#,
            "order.jconf",
        );
        let mut acc = GraphAccumulator::new();
        let cluster = walk_document(&mut acc, &doc, None).unwrap();

        assert_eq!(node_ids(&cluster), vec!["U", "H", "Flock_Of_Birds"]);
        assert_eq!(acc.edges.len(), 2);
        assert_eq!(acc.registry.undefined(), vec!["P"]);
    }

    #[test]
    fn ignored_kinds_leave_no_trace() {
        let doc = parse(
            r#"<configuration>
              <elements>
                <display_window name="Win"><proxy>X</proxy><device>Y</device></display_window>
                <cluster_node name="Node"><keyboard_mouse_proxy>K</keyboard_mouse_proxy></cluster_node>
              </elements>
            </configuration>"#,
            "ignored.jconf",
        );
        let mut acc = GraphAccumulator::new();
        let cluster = walk_document(&mut acc, &doc, None).unwrap();

        assert!(cluster.items.is_empty());
        assert!(acc.edges.is_empty());
        assert_eq!(acc.registry.defined_count(), 0);
        assert!(acc.registry.undefined().is_empty());
    }

    #[test]
    fn unrecognized_kinds_get_nodes_without_edges() {
        let doc = parse(
            r#"<configuration><elements><trackd name="T"><device>D</device></trackd></elements></configuration>"#,
            "t.jconf",
        );
        let mut acc = GraphAccumulator::new();
        let cluster = walk_document(&mut acc, &doc, None).unwrap();

        let node = cluster.nodes().next().unwrap();
        assert_eq!(node.kind, ElementKind::Other("trackd".into()));
        assert!(acc.edges.is_empty());
    }

    #[test]
    fn include_is_inlined_between_element_blocks() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("middle.jconf"),
            r#"<configuration><elements><alias name="M"><proxy>X</proxy></alias></elements></configuration>"#,
        )
        .unwrap();
        let top = dir.path().join("top.jconf");
        std::fs::write(
            &top,
            r#"<configuration>
              <elements><alias name="Before"><proxy>X</proxy></alias></elements>
              <include>middle.jconf</include>
              <elements><alias name="After"><proxy>X</proxy></alias></elements>
            </configuration>"#,
        )
        .unwrap();

        let mut acc = GraphAccumulator::new();
        let cluster = walk(&mut acc, "top.jconf", &top).unwrap();

        assert_eq!(cluster.items.len(), 3);
        assert!(matches!(&cluster.items[0], ClusterItem::Node(n) if n.id == "Before"));
        match &cluster.items[1] {
            ClusterItem::Cluster(nested) => {
                assert_eq!(nested.label, "middle.jconf");
                assert_eq!(nested.id, "middle");
                assert_eq!(node_ids(nested), vec!["M"]);
            }
            other => panic!("expected nested cluster, got {other:?}"),
        }
        assert!(matches!(&cluster.items[2], ClusterItem::Node(n) if n.id == "After"));

        let sources: Vec<_> = acc.edges.iter().map(|e| e.from.as_str()).collect();
        assert_eq!(sources, vec!["Before", "M", "After"]);
    }

    #[test]
    fn repeated_include_emits_duplicate_cluster() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("common.jconf"),
            r#"<configuration><elements><user name="U"/></elements></configuration>"#,
        )
        .unwrap();
        let top = dir.path().join("top.jconf");
        std::fs::write(
            &top,
            "<configuration><include>common.jconf</include><include>common.jconf</include></configuration>",
        )
        .unwrap();

        let mut acc = GraphAccumulator::new();
        let cluster = walk(&mut acc, "top.jconf", &top).unwrap();
        assert_eq!(cluster.subclusters().count(), 2);
        assert_eq!(acc.registry.defined_count(), 1);
    }

    #[test]
    fn missing_include_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let top = dir.path().join("top.jconf");
        std::fs::write(&top, "<configuration><include>nowhere.jconf</include></configuration>")
            .unwrap();

        let mut acc = GraphAccumulator::new();
        let err = walk(&mut acc, "top.jconf", &top).unwrap_err();
        assert_eq!(err.kind(), jconf_error::ErrorKind::FileNotFound);
    }

    #[test]
    fn resolve_include_prefers_sibling_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("base.jconf"), "<configuration/>").unwrap();

        assert_eq!(
            resolve_include(Some(dir.path()), "base.jconf"),
            dir.path().join("base.jconf")
        );
        assert_eq!(
            resolve_include(Some(dir.path()), "absent.jconf"),
            PathBuf::from("absent.jconf")
        );
        assert_eq!(resolve_include(None, "x.jconf"), PathBuf::from("x.jconf"));
        assert_eq!(
            resolve_include(Some(Path::new("")), "x.jconf"),
            PathBuf::from("x.jconf")
        );
    }
}
