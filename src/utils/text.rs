//! Plain-text helpers for message content

use regex::Regex;
use std::sync::LazyLock;

static HEADERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#{1,6}\s").expect("valid regex"));
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid regex"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").expect("valid regex"));
static IMAGES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[(.+?)\]\(.+?\)").expect("valid regex"));
static LINKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.+?)\]\(.+?\)").expect("valid regex"));

/// Strip markdown formatting, keeping the visible text
pub fn strip_markdown(markdown: &str) -> String {
    let text = HEADERS.replace_all(markdown, "");
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = IMAGES.replace_all(&text, "$1");
    let text = LINKS.replace_all(&text, "$1");
    text.trim().to_string()
}

/// Truncate to at most `max_len` characters, ending with "..." when cut
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Count whitespace separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markdown() {
        assert_eq!(strip_markdown("## Title"), "Title");
        assert_eq!(strip_markdown("some **bold** and *italic*"), "some bold and italic");
        assert_eq!(strip_markdown("run `cargo`"), "run cargo");
        assert_eq!(strip_markdown("see [docs](https://x.y)"), "see docs");
        assert_eq!(strip_markdown("![logo](a.png)"), "logo");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer sentence", 10), "a longe...");
        assert_eq!(truncate_text("ünïcödé text", 6), "ünï...");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("  one two\tthree\n"), 3);
        assert_eq!(count_words("   "), 0);
    }
}
