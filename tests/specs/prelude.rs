// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(dead_code)]

pub use fluent_regex::{Builder, Error, Flags};

/// Route builder logs to the test writer; `RUST_LOG=fluent_regex=trace`
/// shows every appended fragment.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert the builder matches every subject.
pub fn assert_matches(builder: &Builder, subjects: &[&str]) {
    init_tracing();
    for subject in subjects {
        assert!(
            builder.matches(subject).unwrap(),
            "`{}` should match {:?}",
            builder,
            subject
        );
    }
}

/// Assert the builder matches none of the subjects.
pub fn assert_rejects(builder: &Builder, subjects: &[&str]) {
    init_tracing();
    for subject in subjects {
        assert!(
            !builder.matches(subject).unwrap(),
            "`{}` should not match {:?}",
            builder,
            subject
        );
    }
}
