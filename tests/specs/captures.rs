// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::prelude::*;

#[test]
fn single_digit_match_text() {
    let re = Builder::new().find("f").digit();
    assert_matches(&re, &["f1"]);
    assert_eq!(re.find_matches("f12").unwrap()[0], "f1");
}

#[test]
fn multiple_digits_match_text() {
    let re = Builder::new().find("f").digits();
    assert_matches(&re, &["f1234"]);
    assert_eq!(re.find_matches("f1234").unwrap()[0], "f1234");
}

#[test]
fn single_letter_match_text() {
    let re = Builder::new().find("f").letter();
    assert_matches(&re, &["fo"]);
    assert_eq!(re.find_matches("foo").unwrap()[0], "fo");
}

#[test]
fn multiple_letters_match_text() {
    let re = Builder::new().find("f").letters();
    assert_matches(&re, &["fo"]);
    assert_eq!(re.find_matches("foo").unwrap()[0], "foo");
}

#[test]
fn single_alphanumeric_match_text() {
    let re = Builder::new().find("f").alphanumeric();
    assert_matches(&re, &["fo", "f0"]);
    assert_eq!(re.find_matches("fo0").unwrap()[0], "fo");
}

#[test]
fn multiple_alphanumerics_match_text() {
    let re = Builder::new().find("f").alphanumerics();
    assert_matches(&re, &["fo"]);
    assert_eq!(re.find_matches("fo0").unwrap()[0], "fo0");
}

#[test]
fn capture_group() {
    let re = Builder::new().capture(|r: Builder| r.find("foo"));
    assert_matches(&re, &["foo bar", "bar foo"]);
    assert_rejects(&re, &["bar baz"]);

    let matches = re.find_matches("bar foo bar").unwrap();
    assert_eq!(matches, vec!["foo", "foo"]);

    let matches = re.find_matches("foo something foo").unwrap();
    assert_eq!(matches, vec!["foo", "foo"]);
    let all = re.find_all_matches("foo something foo").unwrap();
    assert_eq!(all, vec![vec!["foo", "foo"], vec!["foo", "foo"]]);
}

#[test]
fn multiple_capture_groups() {
    let re = Builder::new()
        .start_of_string()
        .capture(|r: Builder| r.find("foo"))
        .anything()
        .capture(|r: Builder| r.find("bar"));
    assert_matches(&re, &["foo bar", "foo something bar"]);
    assert_rejects(&re, &["bar foo", "bar baz"]);

    let matches = re.find_matches("foo something bar").unwrap();
    assert_eq!(matches, vec!["foo something bar", "foo", "bar"]);
    assert_eq!(re.capture_count(), 2);
}

#[test]
fn capture_of_literal_text() {
    let re = Builder::new().capture("a.b");
    assert_eq!(re.find_matches("xa.by").unwrap(), vec!["a.b", "a.b"]);
    assert!(re.find_matches("axb").unwrap().is_empty());
}

#[test]
fn nested_captures_number_outer_first() {
    let re = Builder::new().capture(|r: Builder| {
        r.capture(|r: Builder| r.letters())
            .then(":")
            .capture(|r: Builder| r.digits())
    });
    let matches = re.find_matches("key:42").unwrap();
    assert_eq!(matches, vec!["key:42", "key:42", "key", "42"]);
}

#[test]
fn optional_capture_reports_empty_group() {
    let re = Builder::new()
        .find("v")
        .digits()
        .maybe(|r: Builder| r.then(".").capture(|r: Builder| r.digits()));
    assert_eq!(re.find_matches("v1").unwrap(), vec!["v1", ""]);
    assert_eq!(re.find_matches("v1.2").unwrap(), vec!["v1.2", "2"]);
}

#[test]
fn capture_inside_negation_keeps_numbering() {
    let re = Builder::new()
        .start_of_string()
        .not(|r: Builder| r.capture("x"))
        .capture(|r: Builder| r.letter());
    assert_eq!(re.capture_count(), 2);
    assert_eq!(re.find_matches("ab").unwrap(), vec!["a", "", "a"]);
}

#[test]
fn find_all_matches_collects_every_occurrence() {
    let re = Builder::new()
        .capture(|r: Builder| r.letters())
        .then("=")
        .capture(|r: Builder| r.digits());
    let all = re.find_all_matches("a=1 b=2").unwrap();
    assert_eq!(all, vec![vec!["a=1", "a", "1"], vec!["b=2", "b", "2"]]);
}

#[test]
fn replace_all_with_group_references() {
    let re = Builder::new()
        .start_of_string()
        .not("foo")
        .capture(|r: Builder| r.word());
    assert_eq!(re.replace_all("bar baz", "<$1>").unwrap(), "<bar> baz");
}
