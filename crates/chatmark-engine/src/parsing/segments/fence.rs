use std::sync::LazyLock;

use regex::Regex;

/// Matches a whole fenced code block, lazily: the first closing fence wins.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("Invalid fenced block regex"));

/// Fenced code block type with owned delimiter constant.
///
/// Fences do not nest and are not required to sit on their own line:
/// any triple backtick opens a block and the next one closes it.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the regex matching a complete fenced block, fences included.
    pub fn block_regex() -> &'static Regex {
        &FENCED_BLOCK
    }

    /// Splits the text between the fences into a language tag and a code body.
    ///
    /// The first line, trimmed, is the language tag (`None` when empty). The
    /// remaining lines form the body, minus one trailing newline that sits
    /// right before the closing fence.
    pub fn split_info(inner: &str) -> (Option<String>, String) {
        let (info, body) = inner.split_once('\n').unwrap_or((inner, ""));
        let language = info.trim();
        let language = if language.is_empty() {
            None
        } else {
            Some(language.to_string())
        };
        let body = body
            .strip_suffix("\r\n")
            .or_else(|| body.strip_suffix('\n'))
            .unwrap_or(body);
        (language, body.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_closed_fence() {
        let m = CodeFence::block_regex().find("a ```rust\nx\n``` b").unwrap();
        assert_eq!(m.as_str(), "```rust\nx\n```");
    }

    #[test]
    fn first_closing_fence_wins() {
        let text = "```a\n1\n``` mid ```b\n2\n```";
        let found: Vec<_> = CodeFence::block_regex()
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["```a\n1\n```", "```b\n2\n```"]);
    }

    #[test]
    fn unterminated_fence_does_not_match() {
        assert!(CodeFence::block_regex().find("```rust\nlet x = 1;").is_none());
    }

    #[test]
    fn split_info_with_language() {
        assert_eq!(
            CodeFence::split_info("js\nconsole.log(1)\n"),
            (Some("js".to_string()), "console.log(1)".to_string())
        );
    }

    #[test]
    fn split_info_without_language() {
        assert_eq!(
            CodeFence::split_info("\nplain\ncode\n"),
            (None, "plain\ncode".to_string())
        );
    }

    #[test]
    fn split_info_trims_language() {
        assert_eq!(
            CodeFence::split_info("  python  \nprint()"),
            (Some("python".to_string()), "print()".to_string())
        );
    }

    #[test]
    fn split_info_single_line_is_language_only() {
        assert_eq!(
            CodeFence::split_info("inline"),
            (Some("inline".to_string()), String::new())
        );
    }

    #[test]
    fn split_info_keeps_inner_blank_lines() {
        assert_eq!(
            CodeFence::split_info("\na\n\nb\n\n"),
            (None, "a\n\nb\n".to_string())
        );
    }
}
