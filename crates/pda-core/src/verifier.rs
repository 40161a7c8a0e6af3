//! Document verifier — flags suspicious but parseable descriptions
//!
//! The lenient parser accepts a few things that are usually mistakes:
//! repeated keys (silently overwritten), next states that are never
//! defined, and state names containing grammar characters or whitespace.
//! The verifier reports all of them at once instead of stopping at the
//! first one.
//!
//! # Checks
//!
//! 1. **Duplicates**: a key defined on more than one line (warning)
//! 2. **Unknown states**: a next state with no outgoing transition (warning,
//!    it may be a final state)
//! 3. **Identifiers**: empty names or names with grammar literals,
//!    whitespace or control characters (error)

use std::collections::{BTreeSet, HashMap};

use crate::parser::ast::Document;
use crate::parser::tokenizer::is_plain_identifier;
use crate::StateInput;

// ── Verification Result Types ─────────────────────────────

/// Result of document verification — accumulates all diagnostics
#[derive(Debug, Clone, Default)]
pub struct VerificationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl VerificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no errors were found (warnings are OK)
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .collect()
    }

    fn add(&mut self, severity: Severity, kind: DiagnosticKind, line: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            severity,
            kind,
            message,
            line,
        });
    }
}

/// A single verification diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
    /// 1-based line the diagnostic points at
    pub line: usize,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(
            f,
            "{} [{}] at line {}: {}",
            prefix, self.kind, self.line, self.message
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Duplicate,
    UnknownState,
    Identifier,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DiagnosticKind::Duplicate => write!(f, "duplicate"),
            DiagnosticKind::UnknownState => write!(f, "unknown-state"),
            DiagnosticKind::Identifier => write!(f, "identifier"),
        }
    }
}

// ── Public API ────────────────────────────────────────────

/// Verify a parsed document.
///
/// Runs every check and returns the accumulated diagnostics, ordered by
/// check and then by line.
pub fn verify(doc: &Document) -> VerificationResult {
    let mut result = VerificationResult::new();

    verify_duplicates(doc, &mut result);
    verify_next_states(doc, &mut result);
    verify_identifiers(doc, &mut result);

    tracing::debug!(
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "verified transition document"
    );
    result
}

// ── Checks ────────────────────────────────────────────────

fn verify_duplicates(doc: &Document, result: &mut VerificationResult) {
    let mut seen: HashMap<&StateInput, usize> = HashMap::new();

    for node in doc {
        if let Some(previous) = seen.insert(&node.key, node.line) {
            result.add(
                Severity::Warning,
                DiagnosticKind::Duplicate,
                previous,
                format!(
                    "transition for {} is overwritten by line {}",
                    node.key, node.line
                ),
            );
        }
    }
}

fn verify_next_states(doc: &Document, result: &mut VerificationResult) {
    let defined: BTreeSet<&str> = doc.iter().map(|n| n.key.state.as_str()).collect();
    let mut reported = BTreeSet::new();

    for node in doc {
        let next = node.action.next_state.as_str();
        if !defined.contains(next) && reported.insert(next) {
            result.add(
                Severity::Warning,
                DiagnosticKind::UnknownState,
                node.line,
                format!("state {:?} has no outgoing transitions", next),
            );
        }
    }
}

fn verify_identifiers(doc: &Document, result: &mut VerificationResult) {
    for node in doc {
        for name in [&node.key.state, &node.action.next_state] {
            if !is_plain_identifier(name) {
                result.add(
                    Severity::Error,
                    DiagnosticKind::Identifier,
                    node.line,
                    format!("suspicious state name {:?}", name),
                );
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────
