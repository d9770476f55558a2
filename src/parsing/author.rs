//! Author/body extractor.

use std::sync::LazyLock;

use regex::Regex;

use crate::event::Author;

// Shortest non-empty name before the first ": ". `.` spans newlines.
static AUTHOR_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\A(.+?): ").unwrap());

/// Splits a segment body into author and message text.
///
/// A body is authored when it starts with a name followed by `": "`; the
/// split happens at the first such occurrence. Otherwise the whole body is
/// the text of a system notice. An empty or whitespace-only body is a
/// system notice with empty text.
///
/// # Example
///
/// ```rust
/// use chatscan::event::Author;
/// use chatscan::parsing::extract_author;
///
/// assert_eq!(
///     extract_author("Alice: call me: now\n"),
///     (Author::user("Alice"), "call me: now\n")
/// );
/// assert_eq!(
///     extract_author("Missed voice call"),
///     (Author::System, "Missed voice call")
/// );
/// ```
pub fn extract_author(body: &str) -> (Author, &str) {
    if is_blank(body) {
        return (Author::System, "");
    }

    match AUTHOR_PREFIX.captures(body) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            let name = caps.get(1).map_or("", |m| m.as_str());
            (Author::user(name), &body[whole..])
        }
        None => (Author::System, body),
    }
}

/// Returns `true` for bodies the assembler reports as malformed.
pub fn is_blank(body: &str) -> bool {
    body.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_author() {
        assert_eq!(
            extract_author("Bob: hey there"),
            (Author::user("Bob"), "hey there")
        );
    }

    #[test]
    fn test_first_colon_wins() {
        let (author, text) = extract_author("Alice: call me: now");
        assert_eq!(author, Author::user("Alice"));
        assert_eq!(text, "call me: now");
    }

    #[test]
    fn test_system_notice() {
        let (author, text) = extract_author("Alice added Bob\n");
        assert!(author.is_system());
        assert_eq!(text, "Alice added Bob\n");
    }

    #[test]
    fn test_colon_without_space_is_not_author() {
        let (author, text) = extract_author("Meeting at 10:30\n");
        assert!(author.is_system());
        assert_eq!(text, "Meeting at 10:30\n");
    }

    #[test]
    fn test_blank_body() {
        assert_eq!(extract_author(""), (Author::System, ""));
        assert_eq!(extract_author("  \n"), (Author::System, ""));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("x"));
    }

    #[test]
    fn test_empty_message_text() {
        let (author, text) = extract_author("Alice: ");
        assert_eq!(author, Author::user("Alice"));
        assert_eq!(text, "");
    }

    #[test]
    fn test_media_marker_kept_verbatim() {
        let (_, text) = extract_author("Alice: <Media omitted>\n");
        assert_eq!(text, crate::event::MEDIA_OMITTED);
    }

    #[test]
    fn test_unicode_name() {
        let (author, text) = extract_author("Мария 🌸: привет\n");
        assert_eq!(author, Author::user("Мария 🌸"));
        assert_eq!(text, "привет\n");
    }

    #[test]
    fn test_phone_number_name() {
        let (author, _) = extract_author("+91 98765 43210: hi\n");
        assert_eq!(author, Author::user("+91 98765 43210"));
    }
}
