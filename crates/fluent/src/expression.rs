// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Arguments accepted by the chain methods that take a sub-pattern.

use std::fmt;

use crate::builder::Builder;
use crate::error::{Error, Result};
use crate::flags::Flags;
use crate::fragment::Atom;

/// A literal, a finished builder, or a function that fills a fresh builder.
pub enum Expression {
    /// Text matched literally; metacharacters are escaped.
    Literal(String),
    /// A builder whose compiled pattern is spliced in verbatim.
    Pattern(Builder),
    /// Receives an empty builder sharing the parent's flags.
    Nested(Box<dyn FnOnce(Builder) -> Builder>),
}

/// An expression resolved to pattern text.
#[derive(Debug)]
pub(crate) struct Materialized {
    pub(crate) atom: Atom,
    /// Capture groups contained in `atom`.
    pub(crate) captures: usize,
}

impl Materialized {
    pub(crate) fn text(&self) -> String {
        self.atom.render()
    }
}

impl Expression {
    /// Resolve to pattern text for a parent compiled with `flags`.
    ///
    /// A nested builder that recorded a usage error fails the whole
    /// expression; nothing is produced for the parent to append.
    pub(crate) fn materialize(self, flags: Flags) -> Result<Materialized> {
        match self {
            Expression::Literal(text) => Ok(Materialized {
                atom: Atom::Literal(text),
                captures: 0,
            }),
            Expression::Pattern(builder) => splice(&builder, flags),
            Expression::Nested(fill) => splice(&fill(Builder::with_flags(flags)), flags),
        }
    }
}

fn splice(builder: &Builder, outer: Flags) -> Result<Materialized> {
    if let Some(err) = builder.error() {
        return Err(Error::Nested(Box::new(err.clone())));
    }
    let body = builder.flags().scope(&outer, &builder.pattern_body());
    Ok(Materialized {
        atom: Atom::Spliced(body),
        captures: builder.capture_count(),
    })
}

impl From<&str> for Expression {
    fn from(text: &str) -> Self {
        Expression::Literal(text.to_string())
    }
}

impl From<String> for Expression {
    fn from(text: String) -> Self {
        Expression::Literal(text)
    }
}

impl From<char> for Expression {
    fn from(c: char) -> Self {
        Expression::Literal(c.to_string())
    }
}

impl From<Builder> for Expression {
    fn from(builder: Builder) -> Self {
        Expression::Pattern(builder)
    }
}

impl From<&Builder> for Expression {
    fn from(builder: &Builder) -> Self {
        Expression::Pattern(builder.clone())
    }
}

impl<F> From<F> for Expression
where
    F: FnOnce(Builder) -> Builder + 'static,
{
    fn from(fill: F) -> Self {
        Expression::Nested(Box::new(fill))
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Expression::Pattern(builder) => f.debug_tuple("Pattern").field(builder).finish(),
            Expression::Nested(_) => f.write_str("Nested(..)"),
        }
    }
}

#[cfg(test)]
#[path = "expression_tests.rs"]
mod tests;
