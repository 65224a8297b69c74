//! Per-kind edge extraction.

use crate::document::Element;
use crate::kind::Relation;
use crate::sanitize::sanitize;

/// A directed relationship between two sanitized identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

/// An edge before sanitization, still carrying the original names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship<'a> {
    pub source: &'a str,
    /// `None` when the expected child is absent.
    pub target: Option<&'a str>,
    pub label: Option<String>,
}

impl Relationship<'_> {
    /// A missing target passes through as the empty name.
    pub fn target_name(&self) -> &str {
        self.target.unwrap_or("")
    }

    pub fn to_edge(&self) -> Edge {
        Edge {
            from: sanitize(self.source),
            to: sanitize(self.target_name()),
            label: self.label.clone(),
        }
    }
}

/// The relationship implied by `element`, if its kind has a rule.
pub fn extract(element: &Element) -> Option<Relationship<'_>> {
    let relation = element.kind.relation()?;
    let source = element.name.as_str();

    let (target, label) = match relation {
        Relation::Alias => (element.field("proxy"), None),
        Relation::Proxy(prefix) => {
            let unit = element.field("unit");
            let label = prefix.map(|prefix| match unit {
                Some(unit) => format!("{prefix} Unit {unit}"),
                None => prefix.to_string(),
            });
            (element.field("device"), label)
        }
        Relation::HeadPosition => (
            element.field("head_position"),
            Some("Head Position".to_string()),
        ),
        Relation::Simulated => (
            element.field("keyboard_mouse_proxy"),
            Some("uses".to_string()),
        ),
    };

    Some(Relationship {
        source,
        target,
        label,
    })
}
