//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// Node appearance, chosen from the element kind name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStyle {
    /// Proxies keep graphviz's default ellipse.
    Plain,
    /// Aliases: light-gray fill.
    Filled,
    /// Users.
    Egg,
    /// Devices and anything else, including undefined placeholders.
    Box3d,
}

impl NodeStyle {
    /// Substring checks in priority order; first match wins.
    pub fn for_kind(kind: &str) -> Self {
        if kind.contains("proxy") {
            NodeStyle::Plain
        } else if kind.contains("alias") {
            NodeStyle::Filled
        } else if kind.contains("user") {
            NodeStyle::Egg
        } else {
            NodeStyle::Box3d
        }
    }

    /// Attribute prefix, each entry followed by a comma.
    pub fn attrs(&self) -> &'static str {
        match self {
            NodeStyle::Plain => "",
            NodeStyle::Filled => "style=filled,color=lightgray,",
            NodeStyle::Egg => "shape=egg,",
            NodeStyle::Box3d => "shape=box3d,",
        }
    }
}

/// `name` alone, or `name\n[kind]` (a DOT newline escape) when kind is set.
pub fn node_label(name: &str, kind: &str) -> String {
    if kind.is_empty() {
        escape_label(name)
    } else {
        format!("{}\\n[{}]", escape_label(name), escape_label(kind))
    }
}

/// Escape backslashes and double quotes for use inside a quoted DOT string.
pub fn escape_label(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}

/// A DOT graph builder producing one statement per line.
pub struct DotBuilder {
    output: String,
    depth: usize,
}

impl DotBuilder {
    /// Open an anonymous digraph.
    pub fn new() -> Self {
        let mut output = String::with_capacity(4096);
        output.push_str("digraph {\n");
        Self { output, depth: 0 }
    }

    /// Add a graph attribute such as `size="8.5,11"`.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        let _ = writeln!(self.output, "{}=\"{}\"", key, escape_label(value));
        self
    }

    /// Start a subgraph cluster. `id` must already be a valid DOT id.
    pub fn start_cluster(&mut self, id: &str, label: &str, style: &str) -> &mut Self {
        let _ = writeln!(self.output, "subgraph cluster_{id} {{");
        let _ = writeln!(self.output, "label = \"{}\";", escape_label(label));
        let _ = writeln!(self.output, "style = \"{style}\";");
        self.depth += 1;
        self
    }

    /// End the current subgraph cluster.
    pub fn end_cluster(&mut self) -> &mut Self {
        debug_assert!(self.depth > 0, "end_cluster without start_cluster");
        self.depth = self.depth.saturating_sub(1);
        self.output.push_str("}\n");
        self
    }

    /// Add a node declaration. `attrs` is a comma-terminated prefix.
    pub fn node(&mut self, id: &str, attrs: &str, label: &str) -> &mut Self {
        let _ = writeln!(self.output, "{id} [{attrs}label = \"{label}\"];");
        self
    }

    /// Add an edge, labelled if `label` is set.
    pub fn edge(&mut self, from: &str, to: &str, label: Option<&str>) -> &mut Self {
        match label {
            Some(label) => {
                let _ = writeln!(
                    self.output,
                    "{from} -> {to} [label = \"{}\"];",
                    escape_label(label)
                );
            }
            None => {
                let _ = writeln!(self.output, "{from} -> {to};");
            }
        }
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

impl Default for DotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
