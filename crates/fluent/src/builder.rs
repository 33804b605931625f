// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent pattern builder.
//!
//! A [`Builder`] keeps an ordered list of [`Fragment`]s and a pointer to the
//! current fragment, the target of every quantifier and of `or`. Chain
//! methods consume and return the builder. A call made in the wrong order
//! (a quantifier before any fragment, say) is recorded and reported by the
//! finalizing operations instead of panicking; once an error is recorded
//! the builder ignores further chain calls.

use std::fmt;

use crate::error::{Error, Result};
use crate::expression::{Expression, Materialized};
use crate::flags::Flags;
use crate::fragment::{Atom, Fragment, Quantifier};
use crate::matcher::Matcher;

const LINE_BREAK: &str = r"(?:\r\n|\n|\r)";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Builder {
    fragments: Vec<Fragment>,
    /// Index of the fragment quantifiers and `or` act on.
    current: Option<usize>,
    flags: Flags,
    /// Capture groups opened so far, nested ones included.
    captures: usize,
    /// `$` is pinned to the end of the pattern wherever it was requested.
    end_anchored: bool,
    error: Option<Error>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`Builder::new`].
    pub fn create() -> Self {
        Self::new()
    }

    pub fn with_flags(flags: Flags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// The first usage error recorded by a chain call, if any.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Number of groups `find_matches` reports after the whole match.
    pub fn capture_count(&self) -> usize {
        self.captures
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && !self.end_anchored
    }

    // -------------------------------------------------------------------------
    // Fragments
    // -------------------------------------------------------------------------

    /// Match `expression`. Text is escaped; builders and closures are
    /// spliced as patterns.
    pub fn find(self, expression: impl Into<Expression>) -> Self {
        self.append(expression.into(), 0, |m| Fragment::new(m.atom))
    }

    /// Alias of [`Builder::find`].
    pub fn then(self, expression: impl Into<Expression>) -> Self {
        self.find(expression)
    }

    /// Start an alternation whose first branch is `expression`.
    pub fn find_either(self, expression: impl Into<Expression>) -> Self {
        self.append(expression.into(), 0, |m| {
            Fragment::new(Atom::Alternation(vec![m.text()]))
        })
    }

    /// Add a branch to the current fragment's alternation.
    ///
    /// Without a preceding `find_either`, the current fragment becomes the
    /// first branch. Earlier fragments are not part of the alternation.
    pub fn or(mut self, expression: impl Into<Expression>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let Some(index) = self.current else {
            return self.record(Error::NothingToAlternate);
        };
        let expression: Expression = expression.into();
        let m = match expression.materialize(self.flags) {
            Ok(m) => m,
            Err(err) => return self.record(err),
        };
        let branch = m.text();
        tracing::trace!("or: {}", branch);
        self.captures += m.captures;
        self.fragments[index].push_branch(branch);
        self
    }

    /// Match `expression` zero or one time.
    pub fn maybe(self, expression: impl Into<Expression>) -> Self {
        self.find(expression).optional()
    }

    /// Assert that `expression` does not match at this position.
    pub fn not(self, expression: impl Into<Expression>) -> Self {
        self.append(expression.into(), 0, |m| {
            Fragment::new(Atom::Assertion(format!("(?!{})", m.text())))
        })
    }

    /// Match `expression` as a numbered capture group.
    pub fn capture(self, expression: impl Into<Expression>) -> Self {
        self.append(expression.into(), 1, |m| {
            Fragment::new(Atom::Group(format!("({})", m.text())))
        })
    }

    /// Any single character from `chars`.
    pub fn any_of(self, chars: &str) -> Self {
        if chars.is_empty() {
            return self.record(Error::EmptyCharacterSet);
        }
        let mut class = String::from("[");
        for c in chars.chars() {
            if matches!(c, '\\' | '[' | ']' | '^' | '-' | '&' | '~') {
                class.push('\\');
            }
            class.push(c);
        }
        class.push(']');
        self.push(Fragment::new(Atom::Group(class)))
    }

    /// Any characters, including none.
    pub fn anything(self) -> Self {
        self.push(Fragment::repeated(Atom::Token("."), Quantifier::ZeroOrMore))
    }

    pub fn line_break(self) -> Self {
        self.push(Fragment::new(Atom::Group(LINE_BREAK.to_string())))
    }

    /// Alias of [`Builder::line_break`].
    pub fn br(self) -> Self {
        self.line_break()
    }

    pub fn tab(self) -> Self {
        self.push(Fragment::new(Atom::Token(r"\t")))
    }

    pub fn whitespace(self) -> Self {
        self.push(Fragment::new(Atom::Token(r"\s")))
    }

    pub fn whitespaces(self) -> Self {
        self.push(Fragment::repeated(Atom::Token(r"\s"), Quantifier::OneOrMore))
    }

    pub fn digit(self) -> Self {
        self.push(Fragment::new(Atom::Token(r"\d")))
    }

    pub fn digits(self) -> Self {
        self.push(Fragment::repeated(Atom::Token(r"\d"), Quantifier::OneOrMore))
    }

    pub fn letter(self) -> Self {
        self.push(Fragment::new(Atom::Token("[a-zA-Z]")))
    }

    pub fn letters(self) -> Self {
        self.push(Fragment::repeated(
            Atom::Token("[a-zA-Z]"),
            Quantifier::OneOrMore,
        ))
    }

    pub fn alphanumeric(self) -> Self {
        self.push(Fragment::new(Atom::Token("[a-zA-Z0-9]")))
    }

    pub fn alphanumerics(self) -> Self {
        self.push(Fragment::repeated(
            Atom::Token("[a-zA-Z0-9]"),
            Quantifier::OneOrMore,
        ))
    }

    /// Word characters, one or more.
    pub fn word(self) -> Self {
        self.push(Fragment::repeated(Atom::Token(r"\w"), Quantifier::OneOrMore))
    }

    pub fn start_of_string(self) -> Self {
        self.push(Fragment::new(Atom::Assertion("^".to_string())))
    }

    /// Anchor the pattern at the end of the subject. The anchor always
    /// renders last and is not a quantifier target.
    pub fn end_of_string(mut self) -> Self {
        if self.error.is_none() {
            tracing::trace!("anchor at end of string");
            self.end_anchored = true;
        }
        self
    }

    // -------------------------------------------------------------------------
    // Quantifiers
    // -------------------------------------------------------------------------

    pub fn optional(self) -> Self {
        self.quantify(Quantifier::Optional)
    }

    /// One or more times.
    pub fn multiple_times(self) -> Self {
        self.quantify(Quantifier::OneOrMore)
    }

    /// Exactly once, overriding any repetition the fragment carries.
    pub fn once(self) -> Self {
        self.quantify(Quantifier::Exactly(1))
    }

    /// Between `min` and `max` times, inclusive.
    pub fn limit(self, min: u32, max: u32) -> Self {
        if min > max && self.error.is_none() {
            return self.record(Error::InvalidRange { min, max });
        }
        self.quantify(Quantifier::Between { min, max })
    }

    pub fn at_least(self, n: u32) -> Self {
        self.quantify(Quantifier::AtLeast(n))
    }

    pub fn exactly(self, n: u32) -> Self {
        self.quantify(Quantifier::Exactly(n))
    }

    fn quantify(mut self, quantifier: Quantifier) -> Self {
        if self.error.is_some() {
            return self;
        }
        let Some(index) = self.current else {
            return self.record(Error::NothingToQuantify {
                quantifier: quantifier.method(),
            });
        };
        if self.fragments[index].is_assertion() {
            return self.record(Error::QuantifiedAssertion {
                quantifier: quantifier.method(),
            });
        }
        tracing::trace!("quantify fragment {} with {}", index, quantifier);
        self.fragments[index].quantify(quantifier);
        self
    }

    // -------------------------------------------------------------------------
    // Accumulation
    // -------------------------------------------------------------------------

    /// Materialize `expression` and append the fragment `make` builds from
    /// it. `opens` counts capture groups the fragment itself adds.
    fn append(
        mut self,
        expression: Expression,
        opens: usize,
        make: impl FnOnce(Materialized) -> Fragment,
    ) -> Self {
        if self.error.is_some() {
            return self;
        }
        match expression.materialize(self.flags) {
            Ok(m) => {
                self.captures += opens + m.captures;
                self.push(make(m))
            }
            Err(err) => self.record(err),
        }
    }

    fn push(mut self, fragment: Fragment) -> Self {
        if self.error.is_some() {
            return self;
        }
        tracing::trace!("append fragment: {}", fragment.render());
        self.fragments.push(fragment);
        self.current = Some(self.fragments.len() - 1);
        self
    }

    fn record(mut self, err: Error) -> Self {
        if self.error.is_none() {
            tracing::warn!("pattern builder: {}", err);
            self.error = Some(err);
        }
        self
    }

    // -------------------------------------------------------------------------
    // Compilation
    // -------------------------------------------------------------------------

    /// Concatenated fragments, without the flag prefix.
    pub fn pattern_body(&self) -> String {
        let mut body: String = self.fragments.iter().map(Fragment::render).collect();
        if self.end_anchored {
            body.push('$');
        }
        body
    }

    /// The final pattern string handed to the engine.
    pub fn compile_pattern(&self) -> Result<String> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        Ok(format!("{}{}", self.flags.inline_prefix(), self.pattern_body()))
    }

    /// Compile into a reusable matcher.
    pub fn build(&self) -> Result<Matcher> {
        let pattern = self.compile_pattern()?;
        Matcher::compile(&pattern)
    }

    /// True if the pattern matches anywhere in `subject`.
    pub fn matches(&self, subject: &str) -> Result<bool> {
        self.build()?.is_match(subject)
    }

    /// The first match: index 0 is the whole match, then one entry per
    /// capture group in the order `capture` was called. Empty if nothing
    /// matches.
    pub fn find_matches(&self, subject: &str) -> Result<Vec<String>> {
        Ok(self.build()?.captures(subject)?.unwrap_or_default())
    }

    /// Every non-overlapping match, each shaped like [`Builder::find_matches`].
    pub fn find_all_matches(&self, subject: &str) -> Result<Vec<Vec<String>>> {
        self.build()?.captures_all(subject)
    }

    /// Replace every match; `$1` style references name capture groups.
    pub fn replace_all(&self, subject: &str, replacement: &str) -> Result<String> {
        self.build()?.replace_all(subject, replacement)
    }
}

impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.compile_pattern() {
            Ok(pattern) => f.write_str(&pattern),
            Err(err) => write!(f, "<error: {err}>"),
        }
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
