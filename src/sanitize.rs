//! Inbound text sanitization.
//!
//! The engine assumes plain text. This strips the obvious injection
//! vectors (script blocks, inline handlers, SQL fragments), HTML-escapes
//! what remains, and collapses runs of blank lines. Runs before length
//! validation, so the caller sees the post-sanitization text.

use std::sync::LazyLock;

use regex::Regex;

static DANGEROUS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)<script[^>]*>.*?</script>",
        r"(?i)on\w+\s*=",
        r"(?i)javascript:",
        r"(?i)data:text/html",
        r"(?i)drop\s+table",
        r"(?i)delete\s+from",
        r"(?i)insert\s+into",
        r"(?is)update\s+.+?\s+set",
        r"--",
        r"(?s)/\*.*?\*/",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static BLANK_LINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Sanitize caller-supplied email text. Empty input stays empty.
pub fn sanitize_email_text(text: &str) -> String {
    let mut text = text.trim().to_string();
    if text.is_empty() {
        return String::new();
    }

    for pattern in DANGEROUS_PATTERNS.iter() {
        text = pattern.replace_all(&text, "").into_owned();
    }

    let escaped = escape_html(&text);
    BLANK_LINE_RUNS.replace_all(&escaped, "\n\n").into_owned()
}

/// Escape the five HTML-special characters.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_script_blocks() {
        let dirty = "Olá, preciso de ajuda<script>alert('xss')</script> com o sistema.";
        let clean = sanitize_email_text(dirty);
        assert!(!clean.contains("script"));
        assert!(!clean.contains("alert"));
        assert!(clean.contains("preciso de ajuda"));
    }

    #[test]
    fn strips_inline_event_handlers() {
        let clean = sanitize_email_text("texto onclick=hack() mais texto");
        assert!(!clean.contains("onclick="));
    }

    #[test]
    fn strips_sql_fragments() {
        let clean = sanitize_email_text("ajuda urgente DROP TABLE users; obrigado");
        assert!(!clean.to_lowercase().contains("drop table"));
        assert!(clean.contains("ajuda urgente"));
    }

    #[test]
    fn escapes_html_characters() {
        let clean = sanitize_email_text("a < b & c > d \"quoted\" 'single'");
        assert!(clean.contains("&lt;"));
        assert!(clean.contains("&amp;"));
        assert!(clean.contains("&gt;"));
        assert!(clean.contains("&quot;"));
        assert!(clean.contains("&#x27;"));
    }

    #[test]
    fn collapses_blank_line_runs() {
        let clean = sanitize_email_text("primeira linha\n\n\n\n\nsegunda linha");
        assert!(clean.contains("primeira linha\n\nsegunda linha"));
    }

    #[test]
    fn empty_and_whitespace_stay_empty() {
        assert_eq!(sanitize_email_text(""), "");
        assert_eq!(sanitize_email_text("   \n\t "), "");
    }

    #[test]
    fn plain_text_passes_through() {
        let text = "Preciso de ajuda com o protocolo 12345.";
        assert_eq!(sanitize_email_text(text), text);
    }

    #[test]
    fn double_dash_comments_removed() {
        let clean = sanitize_email_text("texto -- comentário sql");
        assert!(!clean.contains("--"));
    }
}
