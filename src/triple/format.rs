//! Textual statement grammar
//!
//! Serializes the triple model into the line-oriented statement format:
//!
//! ```text
//! _:ID <dgraph.type> "TypeName" .
//! _:PARENT <predicate> _:CHILD .
//! _:SUBJ <predicate> "value"^^<xs:TYPE> .
//! _:SUBJ <predicate> "value" .
//! ```
//!
//! Every quoted value passes through [`escape_literal`], so a value may
//! contain quotes, backslashes, newlines, or the ` .` terminator without
//! corrupting the grammar.

use super::types::{Term, Triple};

/// Escape a value for embedding between quotes in a statement
pub fn escape_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

/// Reverse [`escape_literal`]
///
/// Unknown escape sequences are kept verbatim, backslash included.
pub fn unescape_literal(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Node(id) => write!(f, "{id}"),
            Term::Literal(literal) => {
                write!(f, "\"{}\"", escape_literal(&literal.value))?;
                if let Some(datatype) = literal.datatype {
                    write!(f, "^^<xs:{datatype}>")?;
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}
