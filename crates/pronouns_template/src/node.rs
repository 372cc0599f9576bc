//! Template nodes and parsed examples.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use pronouns_foundation::{Declension, PronounRecord};

use crate::render::{Format, render};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Opaque identity of a node, stable for the node's lifetime.
///
/// Only meant as a key when rendering node lists; carries no meaning.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeId(u64);

impl NodeId {
    fn fresh() -> Self {
        Self(next_id())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Opaque identity of a parsed example.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExampleId(u64);

impl fmt::Display for ExampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "example-{}", self.0)
    }
}

/// How to case a substituted pronoun.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Casing {
    /// All lowercase.
    #[default]
    Lower,
    /// First letter uppercase, the rest lowercase.
    Upper,
}

impl Casing {
    /// Derives the casing from a tag name as written (`{S}` vs `{s}`).
    #[must_use]
    pub fn of(name: &str) -> Self {
        if name.starts_with(|c: char| c.is_ascii_uppercase()) {
            Self::Upper
        } else {
            Self::Lower
        }
    }

    /// Applies this casing to a value.
    #[must_use]
    pub fn apply(self, value: &str) -> String {
        let lower = value.to_ascii_lowercase();
        match self {
            Self::Lower => lower,
            Self::Upper => {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            }
        }
    }
}

/// A piece of an example.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Plain text, emitted verbatim.
    Text {
        /// The text, including surrounding whitespace.
        text: String,
    },
    /// Replaced by the record's value for a declension.
    Pronoun {
        /// Which value to substitute.
        declension: Declension,
        /// How to case it.
        casing: Casing,
    },
    /// A word that depends on the record's number.
    Number {
        /// Word used for singular sets ("is").
        singular: String,
        /// Word used for plural sets ("are").
        plural: String,
    },
}

/// A node together with its identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeInstance {
    id: NodeId,
    node: Node,
}

impl NodeInstance {
    /// Wraps a node with a fresh identity.
    #[must_use]
    pub fn new(node: Node) -> Self {
        Self {
            id: NodeId::fresh(),
            node,
        }
    }

    /// Returns the node's identity.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the node.
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }
}

/// A parsed example: an immutable sequence of nodes.
///
/// Cloning is O(1); clones share nodes and identities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Example {
    id: ExampleId,
    nodes: im::Vector<NodeInstance>,
}

impl Example {
    /// Creates an example from nodes, assigning fresh identities.
    #[must_use]
    pub fn new(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            id: ExampleId(next_id()),
            nodes: nodes.into_iter().map(NodeInstance::new).collect(),
        }
    }

    /// Returns the example's identity.
    #[must_use]
    pub fn id(&self) -> ExampleId {
        self.id
    }

    /// Iterates over the nodes in order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeInstance> {
        self.nodes.iter()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the example has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Renders this example for a record.
    #[must_use]
    pub fn render(&self, record: &PronounRecord, format: Format) -> String {
        render(self, record, format)
    }
}
