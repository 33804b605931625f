// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matching flags.
//!
//! Flags are fixed when a builder is created and rendered as an inline group
//! (`(?ims)`) in front of the compiled pattern. They can be read from a TOML
//! table or from a modifier string such as `"im"`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Keys recognized in a flags table.
const KNOWN_KEYS: &[&str] = &["case_insensitive", "multi_line", "dot_matches_new_line"];

/// Flag set applied to a whole pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct Flags {
    /// Letters match regardless of case (`i`).
    pub case_insensitive: bool,

    /// `^` and `$` match at line boundaries (`m`).
    pub multi_line: bool,

    /// `.` also matches `\n` (`s`).
    pub dot_matches_new_line: bool,
}

/// Flags table that keeps unknown keys for warnings.
#[derive(Deserialize)]
struct FlexibleFlags {
    #[serde(flatten)]
    flags: Flags,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    pub fn with_multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    pub fn with_dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Parse flags from a TOML table, warning on unknown keys.
    pub fn parse(content: &str) -> Result<Flags> {
        let flexible: FlexibleFlags = toml::from_str(content).map_err(|e| Error::Config {
            message: e.to_string(),
        })?;

        for key in flexible.unknown.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                tracing::warn!("unrecognized flag `{}` (ignored)", key);
            }
        }

        Ok(flexible.flags)
    }

    pub fn is_empty(&self) -> bool {
        !self.case_insensitive && !self.multi_line && !self.dot_matches_new_line
    }

    /// Modifier letters for the enabled flags, in `ims` order.
    pub fn letters(&self) -> String {
        self.pairs()
            .iter()
            .filter(|(_, on)| *on)
            .map(|(c, _)| *c)
            .collect()
    }

    /// Inline group enabling these flags, or an empty string.
    pub fn inline_prefix(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("(?{})", self.letters())
        }
    }

    /// Scope `body` so it keeps these flags when spliced into a pattern
    /// compiled with `outer`.
    pub fn scope(&self, outer: &Flags, body: &str) -> String {
        let mut on = String::new();
        let mut off = String::new();
        for ((c, mine), (_, theirs)) in self.pairs().into_iter().zip(outer.pairs()) {
            match (mine, theirs) {
                (true, false) => on.push(c),
                (false, true) => off.push(c),
                _ => {}
            }
        }

        match (on.is_empty(), off.is_empty()) {
            (true, true) => body.to_string(),
            (false, true) => format!("(?{on}:{body})"),
            _ => format!("(?{on}-{off}:{body})"),
        }
    }

    fn pairs(&self) -> [(char, bool); 3] {
        [
            ('i', self.case_insensitive),
            ('m', self.multi_line),
            ('s', self.dot_matches_new_line),
        ]
    }
}

impl FromStr for Flags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut flags = Flags::default();
        for c in s.chars() {
            match c {
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_new_line = true,
                other => {
                    return Err(Error::Config {
                        message: format!("unknown modifier `{other}` (expected one of: i, m, s)"),
                    });
                }
            }
        }
        Ok(flags)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;
