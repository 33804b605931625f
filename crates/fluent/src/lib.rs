// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build regular expressions from readable, chained method calls.
//!
//! ```
//! use fluent_regex::Builder;
//!
//! let date = Builder::new()
//!     .start_of_string()
//!     .digits().exactly(4)
//!     .then("-")
//!     .digits().exactly(2)
//!     .end_of_string();
//!
//! assert!(date.matches("2016-04").unwrap());
//! ```

pub mod builder;
pub mod error;
pub mod expression;
pub mod flags;
pub mod fragment;
pub mod matcher;

pub use builder::Builder;
pub use error::{Error, Result};
pub use expression::Expression;
pub use flags::Flags;
pub use fragment::{Fragment, Quantifier};
pub use matcher::Matcher;
