//! Line tokenizer — splits one line into its syntactic slots
//!
//! ```text
//! <state> "," <input> "=" <stackop> "|" <nextstate>
//! ```
//!
//! Splitting is delimiter driven. In lenient mode a line is cut at every
//! occurrence of a delimiter and only the first two pieces are kept, so
//! `B|C` after the `=` leaves `B` as the next state and drops `C`. Strict
//! mode cuts at the first occurrence only and lets the identifier and
//! integer checks reject what follows. No whitespace is skipped and there
//! is no comment syntax.
//!
//! Guarantees:
//! - Deterministic: same line always produces the same slots
//! - Borrowing: slots are subslices of the input line

use crate::error::ErrorKind;
use crate::options::Strictness;
use crate::StackOp;

// ── Grammar literals ───────────────────────────────────────

pub const COMMA: char = ',';
pub const EQUALS: char = '=';
pub const PUSH: char = '!';
pub const POP: char = '^';
pub const PIPE: char = '|';
pub const NEWLINE: char = '\n';

/// Characters with grammatical meaning inside a line
pub const GRAMMAR_LITERALS: [char; 5] = [COMMA, EQUALS, PUSH, POP, PIPE];

/// Raw slots of a single non-blank line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots<'a> {
    pub state: &'a str,
    pub input: &'a str,
    /// The stack operation token before classification, e.g. `^2`
    pub stack_op: &'a str,
    pub op: Option<StackOp>,
    pub operand: &'a str,
    pub next_state: &'a str,
}

/// Tokenizer for a single transition line
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    strictness: Strictness,
}

impl Tokenizer {
    pub fn new(strictness: Strictness) -> Self {
        Tokenizer { strictness }
    }

    /// Split `line` into slots.
    ///
    /// Lenient mode never fails here: a missing delimiter yields two empty
    /// pieces and an unmarked stack operation yields no tag and an empty
    /// operand, leaving integer parsing to report the problem.
    pub fn tokenize<'a>(&self, line: &'a str) -> Result<Slots<'a>, ErrorKind> {
        let (left, right) = self.split(line, EQUALS)?;
        let (state, input) = self.split(left, COMMA)?;
        let (stack_op, next_state) = self.split(right, PIPE)?;

        let (op, operand) = match classify_stack_op(stack_op) {
            Some((op, operand)) => (Some(op), operand),
            None if self.strictness == Strictness::Strict => {
                return Err(ErrorKind::MissingStackMarker(stack_op.to_string()));
            }
            None => (None, ""),
        };

        Ok(Slots {
            state,
            input,
            stack_op,
            op,
            operand,
            next_state,
        })
    }

    fn split<'a>(&self, text: &'a str, delimiter: char) -> Result<(&'a str, &'a str), ErrorKind> {
        match self.strictness {
            Strictness::Lenient => Ok(split_pair(text, delimiter).unwrap_or(("", ""))),
            Strictness::Strict => text
                .split_once(delimiter)
                .ok_or(ErrorKind::MissingDelimiter(delimiter)),
        }
    }
}

/// The first two pieces of `text` split on every `delimiter`; anything past
/// a second delimiter is dropped. `None` when the delimiter does not occur.
pub fn split_pair(text: &str, delimiter: char) -> Option<(&str, &str)> {
    let mut pieces = text.split(delimiter);
    match (pieces.next(), pieces.next()) {
        (Some(first), Some(second)) => Some((first, second)),
        _ => None,
    }
}

/// Classify a stack operation token by its marker.
///
/// The pop marker is checked first. The marker is stripped only when it is
/// the leading character; a marker elsewhere leaves the operand text intact
/// (and therefore not an integer).
pub fn classify_stack_op(text: &str) -> Option<(StackOp, &str)> {
    if text.contains(POP) {
        Some((StackOp::Pop, text.strip_prefix(POP).unwrap_or(text)))
    } else if text.contains(PUSH) {
        Some((StackOp::Push, text.strip_prefix(PUSH).unwrap_or(text)))
    } else {
        None
    }
}

/// A state name that is non-empty and free of grammar literals,
/// ASCII whitespace and control characters
pub fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| !GRAMMAR_LITERALS.contains(&c) && !c.is_ascii_whitespace() && !c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(line: &str) -> Slots<'_> {
        Tokenizer::new(Strictness::Lenient).tokenize(line).unwrap()
    }

    fn strict_err(line: &str) -> ErrorKind {
        Tokenizer::new(Strictness::Strict).tokenize(line).unwrap_err()
    }

    // ── Splitting ──────────────────────────────────────

    #[test]
    fn test_split_pair_keeps_first_two_pieces() {
        assert_eq!(split_pair("a=b=c", '='), Some(("a", "b")));
        assert_eq!(split_pair("a==c", '='), Some(("a", "")));
        assert_eq!(split_pair("=b", '='), Some(("", "b")));
        assert_eq!(split_pair("abc", '='), None);
    }

    #[test]
    fn test_tokenize_pop_line() {
        assert_eq!(
            lenient("A,4=^2|B"),
            Slots {
                state: "A",
                input: "4",
                stack_op: "^2",
                op: Some(StackOp::Pop),
                operand: "2",
                next_state: "B",
            }
        );
    }

    #[test]
    fn test_tokenize_push_line() {
        let slots = lenient("B,2=!4|A");
        assert_eq!(slots.op, Some(StackOp::Push));
        assert_eq!(slots.operand, "4");
        assert_eq!(slots.next_state, "A");
    }

    #[test]
    fn test_later_delimiters_are_dropped() {
        let slots = lenient("A,4=^2|B|C=D");
        assert_eq!(slots.stack_op, "^2");
        assert_eq!(slots.next_state, "B");

        let slots = lenient("A,4,9=^2|B");
        assert_eq!((slots.state, slots.input), ("A", "4"));
    }

    #[test]
    fn test_strict_keeps_text_after_first_delimiter() {
        let slots = Tokenizer::new(Strictness::Strict).tokenize("A,4,9=^2|B|C").unwrap();
        assert_eq!(slots.input, "4,9");
        assert_eq!(slots.next_state, "B|C");
    }

    #[test]
    fn test_state_may_contain_pipe() {
        let slots = lenient("A|X,4=^2|B");
        assert_eq!(slots.state, "A|X");
    }

    #[test]
    fn test_carriage_return_stays_in_next_state() {
        assert_eq!(lenient("A,4=^2|B\r").next_state, "B\r");
    }

    // ── Lenient degradation ────────────────────────────

    #[test]
    fn test_missing_equals_empties_everything() {
        let slots = lenient("A,4^2|B");
        assert_eq!(slots.state, "");
        assert_eq!(slots.input, "");
        assert_eq!(slots.op, None);
        assert_eq!(slots.operand, "");
        assert_eq!(slots.next_state, "");
    }

    #[test]
    fn test_missing_comma_empties_left_side() {
        let slots = lenient("A4=^2|B");
        assert_eq!((slots.state, slots.input), ("", ""));
        assert_eq!(slots.next_state, "B");
    }

    #[test]
    fn test_unmarked_stack_op() {
        let slots = lenient("A,4=2|B");
        assert_eq!(slots.stack_op, "2");
        assert_eq!(slots.op, None);
        assert_eq!(slots.operand, "");
    }

    // ── Stack op classification ────────────────────────

    #[test]
    fn test_marker_not_leading_is_not_stripped() {
        assert_eq!(classify_stack_op("2^"), Some((StackOp::Pop, "2^")));
        assert_eq!(classify_stack_op("2!"), Some((StackOp::Push, "2!")));
    }

    #[test]
    fn test_pop_marker_checked_first() {
        assert_eq!(classify_stack_op("!^3"), Some((StackOp::Pop, "!^3")));
        assert_eq!(classify_stack_op("^!3"), Some((StackOp::Pop, "!3")));
    }

    #[test]
    fn test_classify_only_strips_one_marker() {
        assert_eq!(classify_stack_op("^^1"), Some((StackOp::Pop, "^1")));
        assert_eq!(classify_stack_op("!-1"), Some((StackOp::Push, "-1")));
        assert_eq!(classify_stack_op(""), None);
    }

    // ── Strict mode ────────────────────────────────────

    #[test]
    fn test_strict_missing_delimiters() {
        assert_eq!(strict_err("A,4^2|B"), ErrorKind::MissingDelimiter('='));
        assert_eq!(strict_err("A4=^2|B"), ErrorKind::MissingDelimiter(','));
        assert_eq!(strict_err("A,4=^2B"), ErrorKind::MissingDelimiter('|'));
    }

    #[test]
    fn test_strict_missing_marker() {
        assert_eq!(strict_err("A,4=2|B"), ErrorKind::MissingStackMarker("2".into()));
    }

    #[test]
    fn test_strict_accepts_well_formed() {
        let slots = Tokenizer::new(Strictness::Strict).tokenize("A,4=^2|B").unwrap();
        assert_eq!(slots, lenient("A,4=^2|B"));
    }

    // ── Identifiers ────────────────────────────────────

    #[test]
    fn test_plain_identifiers() {
        assert!(is_plain_identifier("q0"));
        assert!(is_plain_identifier("accept-state"));
        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("B|C"));
        assert!(!is_plain_identifier("B\r"));
        assert!(!is_plain_identifier(" B"));
        assert!(!is_plain_identifier("B\t"));
        // only ASCII whitespace is rejected
        assert!(is_plain_identifier("B\u{a0}C"));
    }
}
