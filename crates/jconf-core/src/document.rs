//! Loading jconf documents into an owned, minimal model.
//!
//! Only what the walker needs is kept: include directives, `elements` blocks,
//! and for each element its kind, `name` attribute and direct child values.
//! Tags are matched by local name; the namespace prefix is dropped.

use std::path::Path;

use jconf_error::{Error, ErrorKind, Result};
use roxmltree::{Node, ParsingOptions};
use tracing::debug;

use crate::kind::ElementKind;

/// Namespace of the jccl configuration schema.
pub const JCCL_NAMESPACE: &str = "http://www.vrjuggler.org/jccl/xsd/3.0/configuration";

/// One parsed configuration file.
#[derive(Debug, Clone)]
pub struct Document {
    /// The path as it was given (command line or include text).
    pub path: String,
    pub children: Vec<DocumentChild>,
}

/// A top-level child of the configuration root, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentChild {
    Include(String),
    Elements(Vec<Element>),
}

/// A named, kinded configuration entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub name: String,
    fields: Vec<(String, String)>,
}

impl Element {
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, tag: impl Into<String>, text: impl Into<String>) -> Self {
        self.fields.push((tag.into(), text.into()));
        self
    }

    /// Text of the first direct child with this local name. A child with no
    /// text yields `Some("")`.
    pub fn field(&self, tag: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, text)| text.as_str())
    }
}

impl Document {
    /// Read and parse the document at `path`.
    pub fn load(path: &Path, label: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::from(e)
                .with_operation("document::load")
                .with_context("path", path.display().to_string())
        })?;
        Self::parse(&text, label)
    }

    /// Parse document text. `label` is used for the cluster and in errors.
    pub fn parse(text: &str, label: &str) -> Result<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let xml = roxmltree::Document::parse_with_options(text, options).map_err(|e| {
            Error::parse_failed(e.to_string())
                .with_operation("document::load")
                .with_context("path", label)
                .set_source(e)
        })?;

        let root = xml.root_element();
        if root.tag_name().namespace() != Some(JCCL_NAMESPACE) {
            debug!(path = label, root = root.tag_name().name(), "root outside jccl namespace");
        }

        let mut children = Vec::new();
        for child in root.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "include" => {
                    let target = leading_text(child);
                    let target = target.trim();
                    if target.is_empty() {
                        return Err(Error::new(
                            ErrorKind::ParseFailed,
                            "include directive without a path",
                        )
                        .with_operation("document::load")
                        .with_context("path", label));
                    }
                    children.push(DocumentChild::Include(target.to_string()));
                }
                "elements" => {
                    let elements = child
                        .children()
                        .filter(|n| n.is_element())
                        .map(element_from_node)
                        .collect();
                    children.push(DocumentChild::Elements(elements));
                }
                _ => {}
            }
        }

        Ok(Document {
            path: label.to_string(),
            children,
        })
    }
}

/// Text before the first child element, with comments and processing
/// instructions skipped and the pieces around them joined.
fn leading_text(node: Node<'_, '_>) -> String {
    node.children()
        .take_while(|n| !n.is_element())
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn element_from_node(node: Node<'_, '_>) -> Element {
    let fields = node
        .children()
        .filter(|n| n.is_element())
        .map(|c| {
            (
                c.tag_name().name().to_string(),
                leading_text(c),
            )
        })
        .collect();

    Element {
        kind: ElementKind::from_tag(node.tag_name().name()),
        name: node.attribute("name").unwrap_or("").to_string(),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SIM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<?org-vrjuggler-jccl-settings configuration.version="3.0"?>
<configuration xmlns="http://www.vrjuggler.org/jccl/xsd/3.0/configuration"
               name="Simulator">
   <include>sim.base.jconf</include>
   <elements>
      <position_proxy name="Head Proxy" version="1">
         <device>SimHeadPos</device>
         <unit>0</unit>
      </position_proxy>
      <!-- comment -->
      <alias name="VJHead" version="1">
         <proxy>Head Proxy</proxy>
      </alias>
   </elements>
   <unknown_block/>
</configuration>
"#;

    #[test]
    fn parses_includes_and_elements_in_order() {
        let doc = Document::parse(SIM, "sim.jconf").unwrap();
        assert_eq!(doc.path, "sim.jconf");
        assert_eq!(doc.children.len(), 2);
        assert_eq!(doc.children[0], DocumentChild::Include("sim.base.jconf".into()));

        let DocumentChild::Elements(elements) = &doc.children[1] else {
            panic!("expected elements block");
        };
        assert_eq!(
            elements,
            &vec![
                Element::new(ElementKind::PositionProxy, "Head Proxy")
                    .with_field("device", "SimHeadPos")
                    .with_field("unit", "0"),
                Element::new(ElementKind::Alias, "VJHead").with_field("proxy", "Head Proxy"),
            ]
        );
    }

    #[test]
    fn field_lookup_returns_first_match() {
        let elt = Element::new(ElementKind::Alias, "a")
            .with_field("proxy", "first")
            .with_field("proxy", "second")
            .with_field("empty", "");
        assert_eq!(elt.field("proxy"), Some("first"));
        assert_eq!(elt.field("empty"), Some(""));
        assert_eq!(elt.field("missing"), None);
    }

    #[test]
    fn accepts_documents_without_namespace() {
        let doc = Document::parse(
            r#"<configuration><elements><alias name="A"><proxy>B</proxy></alias></elements></configuration>"#,
            "plain.jconf",
        )
        .unwrap();
        let DocumentChild::Elements(elements) = &doc.children[0] else {
            panic!("expected elements block");
        };
        assert_eq!(elements[0].kind, ElementKind::Alias);
        assert_eq!(elements[0].field("proxy"), Some("B"));
    }

    #[test]
    fn comments_inside_values_are_skipped() {
        let doc = Document::parse(
            r#"<configuration>
                 <include><!-- shared -->base<!-- x -->.jconf</include>
                 <elements>
                   <alias name="VJHead"><proxy><!-- note -->Head Proxy</proxy></alias>
                   <position_proxy name="P"><device>D</device><unit>1<!-- c -->0</unit></position_proxy>
                 </elements>
               </configuration>"#,
            "commented.jconf",
        )
        .unwrap();

        assert_eq!(doc.children[0], DocumentChild::Include("base.jconf".into()));
        let DocumentChild::Elements(elements) = &doc.children[1] else {
            panic!("expected elements block");
        };
        assert_eq!(elements[0].field("proxy"), Some("Head Proxy"));
        assert_eq!(elements[1].field("unit"), Some("10"));
    }

    #[test]
    fn value_stops_at_first_nested_element() {
        let doc = Document::parse(
            "<configuration><elements><alias name=\"A\"><proxy>B<extra>C</extra>D</proxy></alias></elements></configuration>",
            "nested.jconf",
        )
        .unwrap();
        let DocumentChild::Elements(elements) = &doc.children[0] else {
            panic!("expected elements block");
        };
        assert_eq!(elements[0].field("proxy"), Some("B"));
    }

    #[test]
    fn missing_name_is_empty() {
        let doc = Document::parse(
            "<configuration><elements><user/></elements></configuration>",
            "u.jconf",
        )
        .unwrap();
        let DocumentChild::Elements(elements) = &doc.children[0] else {
            panic!("expected elements block");
        };
        assert_eq!(elements[0].name, "");
    }

    #[test]
    fn malformed_xml_is_parse_failed() {
        let err = Document::parse("<configuration><elements>", "bad.jconf").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert_eq!(err.operation(), "document::load");
        assert_eq!(err.context_value("path"), Some("bad.jconf"));
    }

    #[test]
    fn empty_include_is_rejected() {
        let err = Document::parse(
            "<configuration><include>  </include></configuration>",
            "inc.jconf",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.jconf");
        let err = Document::load(&path, "absent.jconf").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.operation(), "document::load");
    }
}
