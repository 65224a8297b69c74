//! Core of jconf2dot: reading jconf configuration forests and extracting the
//! device/proxy dependency graph they describe.
//!
//! The pipeline is a single depth-first walk:
//! load document → for each include recurse → for each element define a node
//! and apply its relationship rule. Everything accumulates into a
//! [`GraphAccumulator`] and comes out as a [`ConfigGraph`].

pub mod document;
pub mod extract;
pub mod graph;
pub mod kind;
pub mod registry;
pub mod sanitize;
pub mod walker;

pub use document::{Document, DocumentChild, Element, JCCL_NAMESPACE};
pub use extract::{Edge, Relationship, extract};
pub use graph::{ClusterItem, ConfigGraph, DocumentCluster, GraphAccumulator, NodeDecl};
pub use jconf_error::{Error, ErrorKind, Result};
pub use kind::{ElementKind, Relation};
pub use registry::{Collision, NodeRegistry};
pub use sanitize::sanitize;
pub use walker::{build_config_graph, resolve_include, walk, walk_document};
