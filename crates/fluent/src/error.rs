// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

/// Fluent regex error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Quantifier applied before any fragment was added
    #[error("usage error: no fragment to quantify with `{quantifier}`")]
    NothingToQuantify { quantifier: &'static str },

    /// Quantifier applied to a zero-width assertion (anchor or `not`)
    #[error("usage error: cannot quantify an assertion with `{quantifier}`")]
    QuantifiedAssertion { quantifier: &'static str },

    /// Alternation branch added before any fragment was added
    #[error("usage error: no fragment to alternate with `or`")]
    NothingToAlternate,

    /// Interval quantifier with a lower bound above its upper bound
    #[error("usage error: invalid repetition range {{{min},{max}}}")]
    InvalidRange { min: u32, max: u32 },

    /// Character set with no characters
    #[error("usage error: empty character set")]
    EmptyCharacterSet,

    /// A nested sub-builder recorded a usage error
    #[error("nested pattern: {0}")]
    Nested(Box<Error>),

    /// The regex engine rejected the compiled pattern
    #[error("engine error: {0}")]
    Engine(String),

    /// Flag configuration could not be parsed
    #[error("config error: {message}")]
    Config { message: String },
}

impl Error {
    /// True for errors caused by the order of chained calls.
    pub fn is_usage(&self) -> bool {
        match self {
            Error::NothingToQuantify { .. }
            | Error::QuantifiedAssertion { .. }
            | Error::NothingToAlternate
            | Error::InvalidRange { .. }
            | Error::EmptyCharacterSet => true,
            Error::Nested(inner) => inner.is_usage(),
            Error::Engine(_) | Error::Config { .. } => false,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Engine(err.to_string())
    }
}

impl From<fancy_regex::Error> for Error {
    fn from(err: fancy_regex::Error) -> Self {
        Error::Engine(err.to_string())
    }
}

/// Result type using fluent regex Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
