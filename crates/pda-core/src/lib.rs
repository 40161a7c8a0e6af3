//! PDA Core - transition table parser for pushdown automata
//!
//! Turns a line-oriented description of a pushdown automaton's
//! transitions into a lookup table keyed by (state, input).
//!
//! # Architecture
//!
//! ```text
//! Text → split '\n' → Tokenizer → Line parser → Document → TransitionTable
//!                                                   ↓
//!                                                Verifier → Diagnostics
//! ```
//!
//! # Grammar
//!
//! ```text
//! <line>    ::= <state> "," <input> "=" <stackop> "|" <nextstate>
//! <stackop> ::= ("^" | "!") <integer>
//! ```
//!
//! `A,4=^2|B` reads: in state `A` with input `4`, pop `2` and go to `B`.
//! `B,2=!4|A` reads: in state `B` with input `2`, push `4` and go to `A`.
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces the same table or error
//! - **All or nothing**: any malformed non-blank line fails the whole parse
//! - **Stateless**: no state survives between parse calls

pub mod error;
pub mod options;
pub mod parser;
pub mod table;
pub mod verifier;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::{Error, ErrorKind, Field, Result};
pub use options::{DuplicatePolicy, ParseOptions, Strictness};
pub use parser::ast::{Document, TransitionNode};
pub use parser::{parse, parse_document, parse_with};
pub use table::TransitionTable;

/// Lookup key: the automaton is in `state` and has read `input`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateInput {
    pub state: String,
    pub input: i64,
}

impl StateInput {
    pub fn new(state: impl Into<String>, input: i64) -> Self {
        Self {
            state: state.into(),
            input,
        }
    }
}

impl fmt::Display for StateInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.state, self.input)
    }
}

/// Stack operation performed by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackOp {
    Push,
    Pop,
}

impl StackOp {
    /// The grammar marker introducing this operation
    pub fn marker(self) -> char {
        match self {
            StackOp::Push => parser::tokenizer::PUSH,
            StackOp::Pop => parser::tokenizer::POP,
        }
    }
}

impl fmt::Display for StackOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StackOp::Push => write!(f, "push"),
            StackOp::Pop => write!(f, "pop"),
        }
    }
}

/// What a transition does: apply `op` with operand `value`, then move to `next_state`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub op: StackOp,
    pub value: i64,
    pub next_state: String,
}

impl Action {
    pub fn new(op: StackOp, value: i64, next_state: impl Into<String>) -> Self {
        Self {
            op,
            value,
            next_state: next_state.into(),
        }
    }

    pub fn push(value: i64, next_state: impl Into<String>) -> Self {
        Self::new(StackOp::Push, value, next_state)
    }

    pub fn pop(value: i64, next_state: impl Into<String>) -> Self {
        Self::new(StackOp::Pop, value, next_state)
    }
}

/// One table entry, the serialized form of a `TransitionTable` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: StateInput,
    pub to: Action,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_input_equality_uses_both_fields() {
        let a = StateInput::new("A", 4);
        assert_eq!(a, StateInput::new("A", 4));
        assert_ne!(a, StateInput::new("A", 5));
        assert_ne!(a, StateInput::new("B", 4));
    }

    #[test]
    fn test_state_input_ordering() {
        let mut keys = vec![
            StateInput::new("B", 1),
            StateInput::new("A", 7),
            StateInput::new("A", -3),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                StateInput::new("A", -3),
                StateInput::new("A", 7),
                StateInput::new("B", 1),
            ]
        );
    }

    #[test]
    fn test_stack_op_markers() {
        assert_eq!(StackOp::Push.marker(), '!');
        assert_eq!(StackOp::Pop.marker(), '^');
    }

    #[test]
    fn test_display() {
        assert_eq!(StateInput::new("q0", 2).to_string(), "(q0, 2)");
        assert_eq!(StackOp::Pop.to_string(), "pop");
    }

    #[test]
    fn test_transition_serialization() {
        let transition = Transition {
            from: StateInput::new("A", 4),
            to: Action::pop(2, "B"),
        };
        let json = serde_json::to_value(&transition).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from": {"state": "A", "input": 4},
                "to": {"op": "pop", "value": 2, "next_state": "B"}
            })
        );
        let back: Transition = serde_json::from_value(json).unwrap();
        assert_eq!(back, transition);
    }

    #[test]
    fn test_determinism_100_iterations() {
        let input = "A,4=^2|B\nB,2=!4|A\nB,3=^1|C\n";
        let first = parse(input).unwrap();
        for i in 0..100 {
            let result = parse(input).unwrap();
            assert_eq!(first, result, "Non-determinism at iteration {}", i);
        }
    }
}
