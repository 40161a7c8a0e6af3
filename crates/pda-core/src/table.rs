//! Transition table — the parser's output
//!
//! A `TransitionTable` is an immutable snapshot: it is built by the parser
//! (through `TableBuilder`) and only read afterwards. Lookup is by
//! `StateInput`; iteration order of `iter` is unspecified, `sorted` and
//! `transitions` iterate by key.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::options::DuplicatePolicy;
use crate::parser::ast::TransitionNode;
use crate::{Action, Result, StateInput, Transition};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Transition>", from = "Vec<Transition>")]
pub struct TransitionTable {
    entries: HashMap<StateInput, Action>,
}

impl TransitionTable {
    pub fn get(&self, key: &StateInput) -> Option<&Action> {
        self.entries.get(key)
    }

    /// Look up the action for `state` reading `input`
    pub fn lookup(&self, state: &str, input: i64) -> Option<&Action> {
        // Borrowed composite keys are not supported by HashMap::get
        self.entries.get(&StateInput::new(state, input))
    }

    pub fn contains_key(&self, key: &StateInput) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&StateInput, &Action)> {
        self.entries.iter()
    }

    /// Entries ordered by key
    pub fn sorted(&self) -> Vec<(&StateInput, &Action)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Owned entries ordered by key
    pub fn transitions(&self) -> Vec<Transition> {
        self.sorted()
            .into_iter()
            .map(|(from, to)| Transition {
                from: from.clone(),
                to: to.clone(),
            })
            .collect()
    }

    /// Every state name mentioned, as a current or a next state
    pub fn states(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|(key, action)| [key.state.as_str(), action.next_state.as_str()])
            .collect()
    }
}

impl<'a> IntoIterator for &'a TransitionTable {
    type Item = (&'a StateInput, &'a Action);
    type IntoIter = std::collections::hash_map::Iter<'a, StateInput, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Later transitions overwrite earlier ones with the same key
impl FromIterator<Transition> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        TransitionTable {
            entries: iter.into_iter().map(|t| (t.from, t.to)).collect(),
        }
    }
}

impl From<Vec<Transition>> for TransitionTable {
    fn from(transitions: Vec<Transition>) -> Self {
        transitions.into_iter().collect()
    }
}

impl From<TransitionTable> for Vec<Transition> {
    fn from(table: TransitionTable) -> Self {
        table.transitions()
    }
}

// ── Builder ────────────────────────────────────────────────

/// Accumulates parsed nodes into a table, applying a duplicate policy
#[derive(Debug)]
pub(crate) struct TableBuilder {
    policy: DuplicatePolicy,
    entries: HashMap<StateInput, Action>,
    first_lines: HashMap<StateInput, usize>,
}

impl TableBuilder {
    pub(crate) fn new(policy: DuplicatePolicy) -> Self {
        TableBuilder {
            policy,
            entries: HashMap::new(),
            first_lines: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, node: TransitionNode) -> Result<()> {
        let TransitionNode {
            line,
            text,
            key,
            action,
        } = node;

        if let Some(&first_line) = self.first_lines.get(&key) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(Error::new(
                        line,
                        text,
                        ErrorKind::DuplicateKey { key, first_line },
                    ));
                }
                DuplicatePolicy::Overwrite => {
                    tracing::debug!(line, first_line, key = %key, "overwriting transition");
                }
            }
        } else {
            self.first_lines.insert(key.clone(), line);
        }

        self.entries.insert(key, action);
        Ok(())
    }

    pub(crate) fn finish(self) -> TransitionTable {
        TransitionTable {
            entries: self.entries,
        }
    }
}
