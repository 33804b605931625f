// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern fragments and the quantifiers attached to them.

use std::fmt;

/// Repetition suffix attached to one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `{n}`
    Exactly(u32),
    /// `{n,}`
    AtLeast(u32),
    /// `{min,max}`
    Between { min: u32, max: u32 },
}

impl Quantifier {
    /// Name of the chain method that applies this quantifier.
    pub fn method(&self) -> &'static str {
        match self {
            Quantifier::Optional => "optional",
            Quantifier::ZeroOrMore => "zero_or_more",
            Quantifier::OneOrMore => "multiple_times",
            Quantifier::Exactly(1) => "once",
            Quantifier::Exactly(_) => "exactly",
            Quantifier::AtLeast(_) => "at_least",
            Quantifier::Between { .. } => "limit",
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::Optional => f.write_str("?"),
            Quantifier::ZeroOrMore => f.write_str("*"),
            Quantifier::OneOrMore => f.write_str("+"),
            Quantifier::Exactly(n) => write!(f, "{{{n}}}"),
            Quantifier::AtLeast(n) => write!(f, "{{{n},}}"),
            Quantifier::Between { min, max } => write!(f, "{{{min},{max}}}"),
        }
    }
}

/// The pattern text a fragment stands for, before any quantifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Atom {
    /// Plain text, escaped on render.
    Literal(String),
    /// A single-unit token such as `\d` or `[a-zA-Z]`.
    Token(&'static str),
    /// Zero-width assertion (`^`, `$`, lookahead).
    Assertion(String),
    /// Text that already forms one group.
    Group(String),
    /// Compiled text of a sub-builder, spliced verbatim.
    Spliced(String),
    /// Branches of an alternation, each already rendered.
    Alternation(Vec<String>),
}

impl Atom {
    pub(crate) fn render(&self) -> String {
        match self {
            Atom::Literal(text) => regex::escape(text),
            Atom::Token(token) => (*token).to_string(),
            Atom::Assertion(text) | Atom::Group(text) | Atom::Spliced(text) => text.clone(),
            Atom::Alternation(branches) => format!("(?:{})", branches.join("|")),
        }
    }

    /// Render so a following quantifier binds the whole atom.
    fn render_atomic(&self) -> String {
        match self {
            Atom::Literal(text) if text.chars().count() == 1 => regex::escape(text),
            Atom::Literal(_) | Atom::Assertion(_) | Atom::Spliced(_) => {
                format!("(?:{})", self.render())
            }
            Atom::Token(_) | Atom::Group(_) | Atom::Alternation(_) => self.render(),
        }
    }
}

/// One semantic unit of the accumulated pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    atom: Atom,
    /// Repetition the token carries on its own (`digits` is `\d+`).
    default: Option<Quantifier>,
    /// Explicit quantifier; replaces `default`.
    quantifier: Option<Quantifier>,
}

impl Fragment {
    pub(crate) fn new(atom: Atom) -> Self {
        Self {
            atom,
            default: None,
            quantifier: None,
        }
    }

    pub(crate) fn repeated(atom: Atom, default: Quantifier) -> Self {
        Self {
            atom,
            default: Some(default),
            quantifier: None,
        }
    }

    /// Set the explicit quantifier. A previous one is replaced.
    pub(crate) fn quantify(&mut self, quantifier: Quantifier) {
        self.quantifier = Some(quantifier);
    }

    /// The quantifier that will be rendered, if any.
    pub fn quantifier(&self) -> Option<Quantifier> {
        self.quantifier.or(self.default)
    }

    /// Zero-width assertion; quantifying it is rejected by the engines.
    pub(crate) fn is_assertion(&self) -> bool {
        matches!(self.atom, Atom::Assertion(_))
    }

    /// An alternation that can still take branches without changing meaning.
    pub(crate) fn is_open_alternation(&self) -> bool {
        matches!(self.atom, Atom::Alternation(_)) && self.quantifier().is_none()
    }

    /// Append a branch to an open alternation, or start a new alternation
    /// whose first branch is this fragment as rendered so far.
    pub(crate) fn push_branch(&mut self, branch: String) {
        if self.is_open_alternation() {
            if let Atom::Alternation(branches) = &mut self.atom {
                branches.push(branch);
            }
            return;
        }
        let first = self.render();
        *self = Fragment::new(Atom::Alternation(vec![first, branch]));
    }

    pub fn render(&self) -> String {
        match self.quantifier() {
            Some(q) => format!("{}{}", self.atom.render_atomic(), q),
            None => self.atom.render(),
        }
    }
}

#[cfg(test)]
#[path = "fragment_tests.rs"]
mod tests;
