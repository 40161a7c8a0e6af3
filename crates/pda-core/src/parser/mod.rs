//! Transition table parser — line parser and table builder
//!
//! Splits the description on `\n` and parses every line on its own:
//! the empty line is skipped, any other line must be a complete transition
//! or the whole parse fails with the line's number.

pub mod ast;
pub mod tokenizer;

use crate::error::{Error, ErrorKind, Field};
use crate::options::ParseOptions;
use crate::table::{TableBuilder, TransitionTable};
use crate::{Action, Result, StateInput};

use ast::{Document, Line, TransitionNode};
use tokenizer::{Tokenizer, NEWLINE};

/// Parse a description into a transition table with default options
///
/// # Guarantees
/// - Deterministic: same input always produces the same table or error
/// - All or nothing: no partial table is returned on error
///
/// # Errors
/// Returns the first malformed line, numbered from 1.
///
/// # Example
/// ```
/// use pda_core::{parse, Action};
///
/// let table = parse("A,4=^2|B\nB,2=!4|A\n").unwrap();
/// assert_eq!(table.lookup("A", 4), Some(&Action::pop(2, "B")));
/// ```
pub fn parse(text: &str) -> Result<TransitionTable> {
    parse_with(text, &ParseOptions::default())
}

/// Parse a description into a transition table
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<TransitionTable> {
    tracing::debug!(bytes = text.len(), ?options, "parsing transition table");

    let mut builder = TableBuilder::new(options.duplicates);
    for node in nodes(text, options) {
        builder.insert(node?)?;
    }

    let table = builder.finish();
    tracing::debug!(entries = table.len(), "parsed transition table");
    Ok(table)
}

/// Parse a description into its transitions in source order, without
/// resolving repeated keys
pub fn parse_document(text: &str, options: &ParseOptions) -> Result<Document> {
    let nodes = nodes(text, options).collect::<Result<Vec<_>>>()?;
    Ok(Document { nodes })
}

/// Parse a single line (no embedded newline)
pub fn parse_line(line: &str, options: &ParseOptions) -> std::result::Result<Line, ErrorKind> {
    if line.is_empty() {
        return Ok(Line::Blank);
    }

    let slots = Tokenizer::new(options.strictness).tokenize(line)?;

    if options.is_strict() {
        for name in [slots.state, slots.next_state] {
            if !tokenizer::is_plain_identifier(name) {
                return Err(ErrorKind::InvalidIdentifier(name.to_string()));
            }
        }
    }

    let input = parse_integer(slots.input, Field::Input)?;
    let value = parse_integer(slots.operand, Field::StackValue)?;
    // Unreachable in lenient mode: an unmarked operation has an empty operand
    let op = slots
        .op
        .ok_or_else(|| ErrorKind::MissingStackMarker(slots.stack_op.to_string()))?;

    Ok(Line::Transition(
        StateInput::new(slots.state, input),
        Action::new(op, value, slots.next_state),
    ))
}

/// Non-blank lines as numbered nodes; stops being useful after the first error
fn nodes<'a>(
    text: &'a str,
    options: &'a ParseOptions,
) -> impl Iterator<Item = Result<TransitionNode>> + 'a {
    text.split(NEWLINE)
        .enumerate()
        .filter_map(move |(index, line)| {
            let number = index + 1;
            match parse_line(line, options) {
                Ok(Line::Blank) => {
                    tracing::trace!(line = number, "skipping blank line");
                    None
                }
                Ok(Line::Transition(key, action)) => {
                    tracing::trace!(line = number, key = %key, op = %action.op, value = action.value, next = %action.next_state, "parsed transition");
                    Some(Ok(TransitionNode {
                        line: number,
                        text: line.to_string(),
                        key,
                        action,
                    }))
                }
                Err(kind) => {
                    tracing::debug!(line = number, error = %kind, "rejecting line");
                    Some(Err(Error::new(number, line, kind)))
                }
            }
        })
}

fn parse_integer(text: &str, field: Field) -> std::result::Result<i64, ErrorKind> {
    text.parse::<i64>().map_err(|source| ErrorKind::InvalidInteger {
        field,
        text: text.to_string(),
        source,
    })
}
