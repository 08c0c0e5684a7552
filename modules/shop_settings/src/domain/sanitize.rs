//! Input coercion and plain-text sanitization
//!
//! Bad input is coerced to a safe value, never rejected. Output is plain
//! text, not HTML-escaped.

use regex::Regex;
use std::sync::LazyLock;

/// `<script>`/`<style>` elements including their content
static SCRIPT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .unwrap_or_else(|_| unreachable!("static pattern"))
});

/// Anything that looks like a tag: `<` followed by a letter, `/`, `!` or `?`
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[A-Za-z/!?][^>]*>").unwrap_or_else(|_| unreachable!("static pattern"))
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap_or_else(|_| unreachable!("static pattern")));

/// Unsigned integer coercion.
///
/// Reads an optional sign and the leading decimal digits after any leading
/// whitespace. Empty, non-numeric and negative input all become 0; values
/// past `u64::MAX` saturate.
pub fn absint(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if negative || end == 0 {
        return 0;
    }
    rest[..end].bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}

fn strip_tags(raw: &str) -> String {
    let without_elements = SCRIPT_STYLE.replace_all(raw, "");
    TAG.replace_all(&without_elements, "").into_owned()
}

/// Single-line text: tags and control characters removed, whitespace
/// collapsed to single spaces, trimmed.
pub fn sanitize_text_field(raw: &str) -> String {
    let stripped: String = strip_tags(raw)
        .chars()
        .filter(|c| c.is_whitespace() || !c.is_control())
        .collect();
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

/// Multi-line text: like [`sanitize_text_field`] but line breaks and tabs
/// survive. `\r\n` and lone `\r` become `\n`.
pub fn sanitize_textarea_field(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    strip_tags(&normalized)
        .chars()
        .filter(|c| *c == '\n' || *c == '\t' || !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}
