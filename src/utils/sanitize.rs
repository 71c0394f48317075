//! Utilities for sanitizing and shortening text for display.
//!
//! Removes control characters from service responses before they are shown
//! to the user, and shortens long strings on character boundaries.

/// Sanitizes a message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) would
/// garble terminal output. Everything else, including non-ASCII, is kept.
pub fn sanitize_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            (code >= 0x20 && code != 0x7F) // Printable starts at 0x20 (space); 0x7F is DEL
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Keeps at most `max_chars` characters. Never splits a character.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Sanitizes, then truncates to `max_chars` characters.
pub fn sanitize_and_truncate(message: &str, max_chars: usize) -> String {
    truncate_chars(&sanitize_message(message), max_chars).to_string()
}

/// Shortens `s` to `max_chars` characters followed by `…` when it is longer.
pub fn shorten_for_display(s: &str, max_chars: usize) -> String {
    let head = truncate_chars(s, max_chars);
    if head.len() < s.len() {
        format!("{head}…")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_removes_control_characters() {
        assert_eq!(sanitize_message("a\u{0}b\u{1b}[31mc"), "ab[31mc");
        assert_eq!(sanitize_message("line1\nline2\tx\r"), "line1\nline2\tx\r");
        assert_eq!(sanitize_message("naïve ✓"), "naïve ✓");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 5), "");
        assert_eq!(truncate_chars("ééé", 2), "éé");
    }

    #[test]
    fn test_sanitize_and_truncate_limits_length() {
        let body = "x".repeat(500);
        let snippet = sanitize_and_truncate(&body, 200);
        assert_eq!(snippet.chars().count(), 200);
    }

    #[test]
    fn test_shorten_for_display() {
        let long = format!("https://{}.com", "a".repeat(60));
        let short = shorten_for_display(&long, 55);
        assert_eq!(short.chars().count(), 56);
        assert!(short.ends_with('…'));
        assert_eq!(shorten_for_display("https://example.com", 55), "https://example.com");
        let exact = "b".repeat(55);
        assert_eq!(shorten_for_display(&exact, 55), exact);
    }
}
