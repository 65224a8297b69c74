//! Identifier sanitization for DOT node and cluster ids.

/// Turn an arbitrary element name or path into something usable as a DOT id.
///
/// Each step is a literal substring replacement, applied in this order:
/// space, `.jconf`, `/`, `\`, `.`, `-`. Distinct names can map to the same id;
/// see [`crate::NodeRegistry::collisions`].
pub fn sanitize(name: &str) -> String {
    name.replace(' ', "_")
        .replace(".jconf", "")
        .replace('/', "_")
        .replace('\\', "_")
        .replace('.', "_")
        .replace('-', "_")
}
