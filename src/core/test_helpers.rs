//! Shared test utilities for core module tests
//!
//! This module is only compiled in test mode.

use proptest::prelude::*;

/// A cookie file exercising every line class.
///
/// With the default allow-list: 4 directives, 4 matched records,
/// 1 malformed line and 3 unmatched records.
pub const SAMPLE_COOKIES: &str = "# Netscape HTTP Cookie File\n\
# https://curl.se/docs/http-cookies.html\n\
\n\
.youtube.com\tTRUE\t/\tTRUE\t1700000000\tPREF\tf6=40000000\n\
www.youtube.com\tFALSE\t/\tFALSE\t0\tVISITOR_INFO1_LIVE\tabc\n\
.googlevideo.com\tTRUE\t/\tTRUE\t0\tid\t123\n\
.example.com\tTRUE\t/\tFALSE\t0\tsession\txyz\n\
accounts.google.com\tFALSE\t/\tTRUE\t0\tSID\tsecret\n\
tracker.net\tTRUE\t/\tFALSE\t0\tuid\t42\n\
broken line without tabs\n\
#HttpOnly_.facebook.com\tTRUE\t/\tTRUE\t0\tc_user\t1\n\
.facebook.com\tTRUE\t/\tTRUE\t0\tdatr\tq\n";

/// Builds a well-formed record line for `domain`.
pub fn record(domain: &str) -> String {
    format!("{domain}\tTRUE\t/\tTRUE\t0\tname\tvalue\n")
}

const ARB_DOMAINS: &[&str] = &[
    ".youtube.com",
    "www.youtube.com",
    ".google.com",
    ".example.com",
    "notgoogle.com.evil.com",
    "localhost",
];

/// One arbitrary line: comment, blank, record or malformed text.
pub fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "#[ -~]{0,20}".prop_map(|s| format!("{s}\n")),
        Just("\n".to_string()),
        Just("  \r\n".to_string()),
        (
            proptest::sample::select(ARB_DOMAINS),
            "[A-Za-z0-9_]{1,8}",
            "[A-Za-z0-9=]{1,8}"
        )
            .prop_map(|(domain, name, value)| format!(
                "{domain}\tTRUE\t/\tFALSE\t0\t{name}\t{value}\n"
            )),
        "[a-z .]{0,20}".prop_map(|s| format!("{s}\n")),
    ]
}

/// An arbitrary cookie file, optionally missing its final newline.
pub fn arb_cookie_file() -> impl Strategy<Value = String> {
    (proptest::collection::vec(arb_line(), 0..20), any::<bool>()).prop_map(|(lines, chop)| {
        let mut text = lines.concat();
        if chop && text.ends_with('\n') {
            text.pop();
        }
        text
    })
}
