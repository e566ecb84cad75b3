// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Integer conversion for numeric flag values.
//!
//! Command lines written for the C tool rely on `atoi` behavior: leading
//! whitespace and a sign are accepted, the longest digit prefix is used, and
//! a token with no digits reads as 0. [`parse_int`] reproduces that and also
//! reports whether the token was an integer in full, so a strict caller can
//! tell `"12"` from `"12x"` or `"abc"`.

/// Result of converting one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInt {
    /// The `atoi`-style value, saturated to the `i64` range.
    pub value: i64,
    /// `true` when the whole token is a well-formed, in-range integer.
    pub exact: bool,
}

impl ParsedInt {
    /// The value if the token was exact.
    #[must_use]
    pub fn exact_value(self) -> Option<i64> {
        self.exact.then_some(self.value)
    }
}

/// Convert `token` the way `atoi` would, noting whether it was exact.
///
/// ```rust
/// use owl_args::numeric::parse_int;
///
/// assert_eq!(parse_int("42").value, 42);
/// assert_eq!(parse_int("  -7").value, -7);
/// assert_eq!(parse_int("12abc").value, 12);
/// assert_eq!(parse_int("abc").value, 0);
/// assert!(!parse_int("abc").exact);
/// ```
#[must_use]
pub fn parse_int(token: &str) -> ParsedInt {
    let rest = token.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\u{b}');
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    ParsedInt {
        value,
        exact: token.parse::<i64>().is_ok(),
    }
}
