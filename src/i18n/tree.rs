// SPDX-License-Identifier: MPL-2.0
//! Message trees: nested translation mappings with fail-soft lookup.

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A node in a language's message hierarchy.
///
/// Leaves hold display text; nodes map path segments to further subtrees.
/// Lookup walks dot-separated key segments and pattern-matches the tag at
/// each step, so a malformed key degrades to "not found" instead of a
/// runtime type error.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageTree {
    Leaf(String),
    Node(BTreeMap<String, MessageTree>),
}

impl MessageTree {
    /// An empty mapping node.
    #[must_use]
    pub fn empty() -> Self {
        MessageTree::Node(BTreeMap::new())
    }

    /// Converts parsed JSON module content into a message tree.
    ///
    /// Strings become leaves; numbers and booleans become leaves rendered
    /// to their display form; objects recurse. Arrays and nulls carry no
    /// translatable content and contribute nothing.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(MessageTree::Leaf(text.clone())),
            Value::Number(number) => Some(MessageTree::Leaf(number.to_string())),
            Value::Bool(flag) => Some(MessageTree::Leaf(flag.to_string())),
            Value::Object(members) => {
                let mut children = BTreeMap::new();
                for (key, member) in members {
                    match Self::from_json(member) {
                        Some(subtree) => {
                            children.insert(key.clone(), subtree);
                        }
                        None => debug!(key = %key, "skipping message entry with no usable value"),
                    }
                }
                Some(MessageTree::Node(children))
            }
            Value::Array(_) | Value::Null => None,
        }
    }

    /// Looks up a dot-separated key.
    ///
    /// Returns `None` when a segment is missing, when the path descends
    /// through a leaf, or when it stops on an intermediate node.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut current = self;
        for segment in key.split('.') {
            match current {
                MessageTree::Node(children) => current = children.get(segment)?,
                MessageTree::Leaf(_) => return None,
            }
        }
        match current {
            MessageTree::Leaf(text) => Some(text),
            MessageTree::Node(_) => None,
        }
    }

    /// Whether the tree has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            MessageTree::Leaf(_) => false,
            MessageTree::Node(children) => children.is_empty(),
        }
    }

    /// Inserts `subtree` at the given segment path, creating intermediate
    /// nodes as needed.
    ///
    /// Merging is last-write-wins: an existing entry at the final segment
    /// is replaced, and a leaf in the middle of the path is replaced by a
    /// mapping node. Both cases log a warning.
    pub fn insert(&mut self, segments: &[&str], subtree: MessageTree) {
        if let MessageTree::Leaf(_) = self {
            warn!("module path descends through an existing leaf; replacing it with a group");
            *self = MessageTree::empty();
        }
        let MessageTree::Node(children) = self else {
            return;
        };
        match segments {
            [] => {}
            [last] => {
                if children.insert((*last).to_string(), subtree).is_some() {
                    warn!(segment = *last, "later module overwrites an existing message entry");
                }
            }
            [head, rest @ ..] => {
                children
                    .entry((*head).to_string())
                    .or_insert_with(MessageTree::empty)
                    .insert(rest, subtree);
            }
        }
    }
}
