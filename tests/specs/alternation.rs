// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;

#[test]
fn find_either_or() {
    let re = Builder::new().find_either("foo").or("baz").or("bar");
    assert_matches(&re, &["foo", "bar", "baz"]);
    assert_rejects(&re, &["No"]);
}

#[test]
fn or_without_either() {
    let re = Builder::new().find("foo").or("baz").or("bar");
    assert_matches(&re, &["foo", "bar", "baz"]);
    assert_rejects(&re, &["No"]);
}

#[test]
fn either_multiple_times() {
    let re = Builder::new()
        .find_either("foo")
        .multiple_times()
        .or("bar")
        .multiple_times();
    assert_matches(&re, &["foofoo", "barbar"]);
    assert_rejects(&re, &["No"]);
}

#[test]
fn alternation_stays_inside_anchors() {
    let re = Builder::new()
        .start_of_string()
        .find_either("foo")
        .or("bar")
        .end_of_string();
    assert_matches(&re, &["foo", "bar"]);
    assert_rejects(&re, &["foobar", "xfoo", "barx"]);
}

#[test]
fn builder_objects_are_spliced() {
    let foo_bar = Builder::create().find_either("foo").or("bar");
    let re = Builder::new()
        .start_of_string()
        .then(&foo_bar)
        .end_of_string();
    assert_matches(&re, &["foo", "bar"]);
    assert_rejects(&re, &["baz"]);
}

#[test]
fn or_accepts_closures() {
    let re = Builder::new()
        .start_of_string()
        .digits()
        .or(|r: Builder| r.letters().then("!"))
        .end_of_string();
    assert_matches(&re, &["123", "abc!"]);
    assert_rejects(&re, &["abc", "12!"]);
}

#[test]
fn or_first_is_reported() {
    let err = Builder::new().or("foo").compile_pattern().unwrap_err();
    assert_eq!(err, Error::NothingToAlternate);
}
