//! Triple statement parser
//!
//! Recovers structured triples from statement text. Parsing is tolerant:
//! blank lines are skipped, and lines that do not match the grammar are
//! collected on the report with their line numbers instead of failing the
//! run or vanishing silently.

use super::format::unescape_literal;
use super::types::{Datatype, Literal, NodeId, Term, Triple};
use once_cell::sync::Lazy;
use regex::Regex;

/// Statement line: `SUBJECT <PREDICATE> OBJECT .`
///
/// Anchored at the end-of-line terminator, so an escaped literal may
/// contain the ` .` sequence without truncating the object.
static STATEMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+)\s+<([^>]*)>\s+(.+)\s+\.$").expect("statement regex"));

/// A line rejected by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number within the input
    pub line_number: usize,
    /// The offending line, untrimmed
    pub text: String,
}

/// Outcome of parsing statement text
#[derive(Debug, Default)]
pub struct ParseReport {
    /// Statements recovered, in input order
    pub triples: Vec<Triple>,
    /// Lines that did not match the grammar
    pub skipped: Vec<SkippedLine>,
}

/// Parse line-oriented statement text into triples
pub fn parse_triples(input: &str) -> ParseReport {
    let mut report = ParseReport::default();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(triple) => report.triples.push(triple),
            None => report.skipped.push(SkippedLine {
                line_number: index + 1,
                text: raw.to_string(),
            }),
        }
    }
    report
}

fn parse_line(line: &str) -> Option<Triple> {
    let caps = STATEMENT_RE.captures(line)?;
    let subject = caps.get(1)?.as_str().strip_prefix("_:")?;
    if subject.is_empty() {
        return None;
    }
    let predicate = caps.get(2)?.as_str().to_string();
    let object = parse_term(caps.get(3)?.as_str().trim_end())?;
    Some(Triple {
        subject: NodeId::new(subject),
        predicate,
        object,
    })
}

fn parse_term(text: &str) -> Option<Term> {
    if let Some(id) = text.strip_prefix("_:") {
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return None;
        }
        return Some(Term::Node(NodeId::new(id)));
    }

    let rest = text.strip_prefix('"')?;
    let (value, tail) = scan_quoted(rest)?;
    if tail.is_empty() {
        return Some(Term::Literal(Literal::string(value)));
    }

    let tag = tail.strip_prefix("^^<xs:")?.strip_suffix('>')?;
    match Datatype::parse(tag) {
        Some(datatype) => Some(Term::Literal(Literal::typed(value, datatype))),
        // An annotation outside the known tag set defaults to string
        None => Some(Term::Literal(Literal::string(value))),
    }
}

/// Scan an escaped literal up to its closing quote
///
/// Returns the unescaped value and whatever follows the closing quote.
fn scan_quoted(rest: &str) -> Option<(String, &str)> {
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            return Some((unescape_literal(&rest[..i]), &rest[i + 1..]));
        }
    }
    None
}
