//! Length and whitespace rules for free-text form input. Lengths are UTF-16 code units
//! and the whitespace set is the one browsers trim form values with, so the limits match
//! what the page itself enforces.

/// Browser trim set: Unicode `White_Space` plus U+FEFF, minus U+0085.
fn is_form_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(is_form_whitespace)
}

pub(crate) fn trimmed_len(s: &str) -> usize {
    trim(s).encode_utf16().count()
}
