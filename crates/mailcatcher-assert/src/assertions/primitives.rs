/// Assertion primitives
///
/// Every check panics on failure, so a failed assertion fails the running
/// test at the caller's location just like `assert!` would.
use regex::Regex;
use std::fmt::Display;

/// Fails the current test with `message`
#[track_caller]
pub fn fail(message: impl Display) -> ! {
    panic!("{}", message)
}

#[track_caller]
pub fn assert_contains(needle: &str, haystack: &str, what: &str) {
    if !haystack.contains(needle) {
        fail(format!(
            "Failed asserting that {} {:?} contains {:?}",
            what, haystack, needle
        ));
    }
}

#[track_caller]
pub fn assert_not_contains(needle: &str, haystack: &str, what: &str) {
    if haystack.contains(needle) {
        fail(format!(
            "Failed asserting that {} {:?} does not contain {:?}",
            what, haystack, needle
        ));
    }
}

#[track_caller]
pub fn assert_matches(pattern: &Regex, haystack: &str, what: &str) {
    if !pattern.is_match(haystack) {
        fail(format!(
            "Failed asserting that {} {:?} matches pattern {:?}",
            what,
            haystack,
            pattern.as_str()
        ));
    }
}

#[track_caller]
pub fn assert_not_matches(pattern: &Regex, haystack: &str, what: &str) {
    if pattern.is_match(haystack) {
        fail(format!(
            "Failed asserting that {} {:?} does not match pattern {:?}",
            what,
            haystack,
            pattern.as_str()
        ));
    }
}
