use regex::Regex;

/// Token identifying donation transfers among all bank memo lines.
pub const MARKER: &str = "SEVQR";
/// What the QR code pre-fills when the donor leaves the memo as is.
pub const DEFAULT_MESSAGE: &str = "chuyen tien nuoi toi";
pub const ANONYMOUS_SENDER: &str = "Đại Gia Ẩn Danh";
pub const SUPPORT_DESCRIPTION: &str = "Ủng hộ Admin";

lazy_static! {
    static ref MARKER_REGEX: Result<Regex, regex::Error> = Regex::new(r"(?i)SEVQR\s*(.*)");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMemo {
    pub sender_name: String,
    pub description: String,
}

impl ParsedMemo {
    fn anonymous(description: &str) -> Self {
        Self {
            sender_name: ANONYMOUS_SENDER.to_string(),
            description: description.to_string(),
        }
    }
}

pub fn contains_marker(content: &str) -> bool {
    content.to_uppercase().contains(MARKER)
}

/// Everything after the marker on its line, trimmed. Content without a marker comes back as is.
pub fn strip_marker(content: &str) -> String {
    strip_marker_with(&MARKER_REGEX, content)
}

fn strip_marker_with(regex: &Result<Regex, regex::Error>, content: &str) -> String {
    let regex = match regex {
        Ok(regex) => regex,
        Err(e) => {
            tracing::warn!(%e, "marker regex unavailable, keeping raw memo");
            return content.to_string();
        }
    };

    match regex.captures(content).and_then(|captures| captures.get(1)) {
        Some(rest) => rest.as_str().trim().to_string(),
        None => content.to_string(),
    }
}

/// Splits a raw transfer memo into who sent it and what they wrote.
pub fn parse_memo(content: &str) -> ParsedMemo {
    split_sender(&strip_marker(content))
}

/// `"Nam ho tro quan ly"` becomes sender `Nam` with description `ho tro quan ly`.
pub fn split_sender(candidate: &str) -> ParsedMemo {
    if candidate.to_lowercase().starts_with(DEFAULT_MESSAGE) {
        return ParsedMemo::anonymous(SUPPORT_DESCRIPTION);
    }

    let trimmed = candidate.trim();

    if trimmed.is_empty() {
        return ParsedMemo::anonymous(candidate);
    }

    match trimmed.split_once(char::is_whitespace) {
        Some((sender_name, description)) => ParsedMemo {
            sender_name: sender_name.to_string(),
            description: description.trim_start().to_string(),
        },
        None => ParsedMemo {
            sender_name: trimmed.to_string(),
            description: SUPPORT_DESCRIPTION.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(sender_name: &str, description: &str) -> ParsedMemo {
        ParsedMemo {
            sender_name: sender_name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_default_message_is_anonymous_support() {
        assert_eq!(
            parse_memo("SEVQR chuyen tien nuoi toi"),
            parsed(ANONYMOUS_SENDER, SUPPORT_DESCRIPTION)
        );
        assert_eq!(
            parse_memo("SEVQR Chuyen Tien Nuoi Toi nhe"),
            parsed(ANONYMOUS_SENDER, SUPPORT_DESCRIPTION)
        );
    }

    #[test]
    fn test_first_token_is_sender() {
        assert_eq!(
            parse_memo("SEVQR Nam ho tro quan ly"),
            parsed("Nam", "ho tro quan ly")
        );
    }

    #[test]
    fn test_single_token_gets_support_description() {
        assert_eq!(parse_memo("SEVQR Nam"), parsed("Nam", SUPPORT_DESCRIPTION));
    }

    #[test]
    fn test_marker_is_case_insensitive() {
        assert_eq!(parse_memo("sevqr Nam an com"), parsed("Nam", "an com"));
        assert_eq!(
            parse_memo("MBVCB.123.SeVqR   Lan  cam on"),
            parsed("Lan", "cam on")
        );
    }

    #[test]
    fn test_splits_on_first_whitespace_run_only() {
        assert_eq!(
            parse_memo("SEVQR Nam \t ho  tro"),
            parsed("Nam", "ho  tro")
        );
    }

    #[test]
    fn test_marker_only_is_anonymous() {
        assert_eq!(parse_memo("SEVQR"), parsed(ANONYMOUS_SENDER, ""));
        assert_eq!(parse_memo("SEVQR    "), parsed(ANONYMOUS_SENDER, ""));
    }

    #[test]
    fn test_without_marker_uses_whole_content() {
        assert_eq!(strip_marker("hello world"), "hello world");
        assert_eq!(parse_memo("hello world"), parsed("hello", "world"));
    }

    #[test]
    fn test_marker_capture_stops_at_line_end() {
        assert_eq!(strip_marker("SEVQR Nam ung ho\nFT2301"), "Nam ung ho");
    }

    #[test]
    fn test_contains_marker() {
        assert!(contains_marker("abc SEVQR def"));
        assert!(contains_marker("sevqr"));
        assert!(!contains_marker("hello world"));
        assert!(!contains_marker("SEV QR"));
    }

    #[test]
    fn test_broken_regex_falls_back_to_raw_content() {
        let broken = Regex::new("(");

        assert!(broken.is_err());
        assert_eq!(
            strip_marker_with(&broken, "SEVQR Nam ho tro"),
            "SEVQR Nam ho tro"
        );
    }
}
