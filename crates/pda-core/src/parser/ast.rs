//! Parsed line types
//!
//! A `Document` keeps every parsed transition in source order together with
//! its line number, including transitions that a table would later
//! overwrite. The verifier works on this form; `into_table` folds it into a
//! `TransitionTable`.

use serde::{Deserialize, Serialize};

use crate::options::DuplicatePolicy;
use crate::table::{TableBuilder, TransitionTable};
use crate::{Action, Result, StateInput};

/// Outcome of parsing one line that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// The empty line, skipped without an entry
    Blank,
    Transition(StateInput, Action),
}

/// A transition together with where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionNode {
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub key: StateInput,
    pub action: Action,
}

/// All transitions of a description, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<TransitionNode>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransitionNode> {
        self.nodes.iter()
    }

    /// Fold the nodes into a table, resolving repeated keys by `policy`
    pub fn into_table(self, policy: DuplicatePolicy) -> Result<TransitionTable> {
        let mut builder = TableBuilder::new(policy);
        for node in self.nodes {
            builder.insert(node)?;
        }
        Ok(builder.finish())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a TransitionNode;
    type IntoIter = std::slice::Iter<'a, TransitionNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
