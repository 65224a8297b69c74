//! Element kinds recognized in a configuration `elements` block.

use std::str::FromStr;

use strum_macros::{EnumString, IntoStaticStr};

/// Kind of a configuration element, keyed by its tag's local name.
///
/// Unknown tags keep their name in [`ElementKind::Other`] so they still get a
/// node and can match the `simulated` rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ElementKind {
    Alias,
    PositionProxy,
    AnalogProxy,
    DigitalProxy,
    KeyboardMouseProxy,
    User,

    // Skipped entirely by the walker.
    InputManager,
    DisplaySystem,
    CorbaRemoteReconfig,
    DisplayWindow,
    ClusterNode,
    ClusterManager,
    StartBarrierPlugin,
    ApplicationData,

    #[strum(default)]
    Other(String),
}

/// Which edge an element implies, and how to read its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `alias` -> text of `<proxy>`, no label.
    Alias,
    /// `*_proxy` -> text of `<device>`; labelled `"{prefix}"` or
    /// `"{prefix} Unit {unit}"` when a prefix is given.
    Proxy(Option<&'static str>),
    /// `user` -> text of `<head_position>`, labelled "Head Position".
    HeadPosition,
    /// `*simulated*` -> text of `<keyboard_mouse_proxy>`, labelled "uses".
    Simulated,
}

impl ElementKind {
    /// Parse a tag's local name. Never fails.
    pub fn from_tag(local_name: &str) -> Self {
        match Self::from_str(local_name) {
            Ok(kind) => kind,
            Err(_) => ElementKind::Other(local_name.to_string()),
        }
    }

    /// The tag name this kind was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Other(name) => name.as_str(),
            known => {
                let name: &'static str = known.into();
                name
            }
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(
            self,
            ElementKind::InputManager
                | ElementKind::DisplaySystem
                | ElementKind::CorbaRemoteReconfig
                | ElementKind::DisplayWindow
                | ElementKind::ClusterNode
                | ElementKind::ClusterManager
                | ElementKind::StartBarrierPlugin
                | ElementKind::ApplicationData
        )
    }

    /// The relationship rule for this kind, if any.
    pub fn relation(&self) -> Option<Relation> {
        match self {
            ElementKind::Alias => Some(Relation::Alias),
            ElementKind::PositionProxy => Some(Relation::Proxy(Some("Position"))),
            ElementKind::AnalogProxy => Some(Relation::Proxy(Some("Analog"))),
            ElementKind::DigitalProxy => Some(Relation::Proxy(Some("Digital"))),
            ElementKind::KeyboardMouseProxy => Some(Relation::Proxy(None)),
            ElementKind::User => Some(Relation::HeadPosition),
            ElementKind::Other(name) if name.contains("simulated") => Some(Relation::Simulated),
            _ => None,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
