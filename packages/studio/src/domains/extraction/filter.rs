//! Heuristic cleanup of scraped product text.
//!
//! Storefront descriptions mix the copy we want with boilerplate about
//! delivery, sizing and chat support. Lines mentioning those topics, and
//! fragments too short to carry meaning, are dropped.

/// Upper-cased substrings that disqualify a line
pub const DENYLIST: [&str; 5] = ["SHIPPING", "RETURNS", "SIZE", "WHATSAPP", "ADD TO CART"];

/// Lines must be longer than this many characters to survive
pub const MIN_LINE_CHARS: usize = 5;

/// At most this many lines are kept
pub const MAX_LINES: usize = 25;

/// Filter product text line by line and rejoin with `\n`.
///
/// Idempotent: every surviving line passes the same checks again, and the
/// line cap is already satisfied.
pub fn filter_description(text: &str) -> String {
    text.split('\n')
        .filter(|line| keep_line(line))
        .take(MAX_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}

fn keep_line(line: &str) -> bool {
    if line.chars().count() <= MIN_LINE_CHARS {
        return false;
    }
    let upper = line.to_uppercase();
    !DENYLIST.iter().any(|banned| upper.contains(banned))
}
