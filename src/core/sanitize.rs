// src/core/sanitize.rs

/// Collapse any whitespace run (newlines included) to one space; trim both ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Double quotes become single quotes so the value sits safely in a delimited field.
pub fn quote_safe(s: &str) -> String {
    s.replace('"', "'")
}

/// Every `\r\n`, `\n` or `\r` becomes a single space.
pub fn flatten_newlines(s: &str) -> String {
    s.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Drop a trailing affordance label (e.g. "View More") and the whitespace before it.
pub fn strip_trailing_label<'a>(s: &'a str, label: &str) -> &'a str {
    let t = s.trim_end();
    match t.strip_suffix(label) {
        Some(rest) => rest.trim_end(),
        None => t,
    }
}

/// Characters `skip..skip+take`, counted in chars. Short input gives a short result.
pub fn char_slice(s: &str, skip: usize, take: usize) -> String {
    s.chars().skip(skip).take(take).collect()
}

/// Filesystem-friendly stem: alphanumerics kept, whitespace runs → '_', '-' and '_' kept.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_newlines() {
        assert_eq!(normalize_ws("  Mon,\n  Nov 26,\t10:30 AM "), "Mon, Nov 26, 10:30 AM");
    }

    #[test]
    fn strip_trailing_label_only_at_end() {
        assert_eq!(strip_trailing_label("Learn things. View More  ", "View More"), "Learn things.");
        assert_eq!(strip_trailing_label("View More of this", "View More"), "View More of this");
    }

    #[test]
    fn char_slice_is_lenient() {
        assert_eq!(char_slice("ARC301", 3, 3), "301");
        assert_eq!(char_slice("AR", 3, 3), "");
        assert_eq!(char_slice("ARC30", 3, 3), "30");
    }

    #[test]
    fn sanitize_filename_variants() {
        assert_eq!(sanitize_filename("Level 2  Murano", "x"), "Level_2_Murano");
        assert_eq!(sanitize_filename("???", "batch"), "batch");
    }

    #[test]
    fn flatten_newlines_handles_crlf() {
        assert_eq!(flatten_newlines("a\r\nb\nc"), "a b c");
    }
}
