// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled matchers with automatic engine selection.
//!
//! Patterns are compiled with the `regex` crate when it accepts them and fall
//! up to `fancy-regex` otherwise (negative lookahead from `not`).

use crate::error::Result;

/// A compiled pattern bound to the engine that accepted it.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Linear-time automaton (regex crate).
    Basic(BasicMatcher),
    /// Backtracking engine with lookaround (fancy-regex).
    Fancy(FancyMatcher),
}

/// Matcher for patterns the regex crate supports.
#[derive(Debug, Clone)]
pub struct BasicMatcher {
    regex: regex::Regex,
}

/// Matcher for patterns that need lookaround.
#[derive(Debug, Clone)]
pub struct FancyMatcher {
    regex: fancy_regex::Regex,
}

impl Matcher {
    /// Compile a pattern string, picking the fastest engine that accepts it.
    pub fn compile(pattern: &str) -> Result<Self> {
        match BasicMatcher::new(pattern) {
            Ok(m) => {
                tracing::debug!("compiled `{}` with regex", pattern);
                Ok(Matcher::Basic(m))
            }
            Err(basic) => {
                tracing::debug!("regex rejected `{}` ({}), trying fancy-regex", pattern, basic);
                let m = FancyMatcher::new(pattern)?;
                tracing::debug!("compiled `{}` with fancy-regex", pattern);
                Ok(Matcher::Fancy(m))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Matcher::Basic(m) => m.regex.as_str(),
            Matcher::Fancy(m) => m.regex.as_str(),
        }
    }

    /// Number of groups, the whole match included.
    pub fn captures_len(&self) -> usize {
        match self {
            Matcher::Basic(m) => m.regex.captures_len(),
            Matcher::Fancy(m) => m.regex.captures_len(),
        }
    }

    pub fn is_match(&self, subject: &str) -> Result<bool> {
        match self {
            Matcher::Basic(m) => Ok(m.regex.is_match(subject)),
            Matcher::Fancy(m) => Ok(m.regex.is_match(subject)?),
        }
    }

    /// Groups of the first match as text, or `None` without a match.
    pub fn captures(&self, subject: &str) -> Result<Option<Vec<String>>> {
        match self {
            Matcher::Basic(m) => Ok(m
                .regex
                .captures(subject)
                .map(|caps| group_texts(caps.iter().map(|g| g.map(|g| g.as_str()))))),
            Matcher::Fancy(m) => Ok(m
                .regex
                .captures(subject)?
                .map(|caps| group_texts(caps.iter().map(|g| g.map(|g| g.as_str()))))),
        }
    }

    /// Groups of every non-overlapping match.
    pub fn captures_all(&self, subject: &str) -> Result<Vec<Vec<String>>> {
        match self {
            Matcher::Basic(m) => Ok(m
                .regex
                .captures_iter(subject)
                .map(|caps| group_texts(caps.iter().map(|g| g.map(|g| g.as_str()))))
                .collect()),
            Matcher::Fancy(m) => {
                let mut all = Vec::new();
                for caps in m.regex.captures_iter(subject) {
                    let caps = caps?;
                    all.push(group_texts(caps.iter().map(|g| g.map(|g| g.as_str()))));
                }
                Ok(all)
            }
        }
    }

    pub fn replace_all(&self, subject: &str, replacement: &str) -> Result<String> {
        match self {
            Matcher::Basic(m) => Ok(m.regex.replace_all(subject, replacement).into_owned()),
            Matcher::Fancy(m) => Ok(m.regex.try_replacen(subject, 0, replacement)?.into_owned()),
        }
    }
}

impl BasicMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = regex::Regex::new(pattern)?;
        Ok(Self { regex })
    }
}

impl FancyMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = fancy_regex::Regex::new(pattern)?;
        Ok(Self { regex })
    }
}

/// Owned group texts; groups that did not participate become empty strings.
fn group_texts<'t>(groups: impl Iterator<Item = Option<&'t str>>) -> Vec<String> {
    groups.map(|g| g.unwrap_or_default().to_string()).collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
