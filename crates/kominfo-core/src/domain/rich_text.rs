//! Helpers for the HTML produced by the admin rich text editor.
//!
//! The editor stores HTML strings verbatim; the portal only needs to know
//! whether a field is effectively empty and how to derive plain-text excerpts.

use std::sync::OnceLock;

use regex::Regex;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("static regex"))
}

fn block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<\s*(br|/p|/div|/li|/h[1-6]|/tr|/blockquote)\b[^>]*>").expect("static regex")
    })
}

fn script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<(script|style)\b.*?</(script|style)\s*>").expect("static regex"))
}

/// Plain text of an HTML fragment with whitespace collapsed.
pub fn html_to_text(html: &str) -> String {
    let without_code = script_re().replace_all(html, " ");
    let spaced = block_re().replace_all(&without_code, " ");
    let stripped = tag_re().replace_all(&spaced, "");
    let decoded = decode_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True for `""`, `<p><br></p>`, `<p>&nbsp;</p>` and other markup without text or media.
pub fn is_blank_html(html: &str) -> bool {
    let lower = html.to_ascii_lowercase();
    if ["<img", "<iframe", "<video", "<table"].iter().any(|t| lower.contains(t)) {
        return false;
    }
    html_to_text(html).is_empty()
}

/// First `max_chars` characters of the text, cut on a word boundary, with an ellipsis when cut.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = html_to_text(html);
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut: String = text.chars().take(max_chars).collect();
    let ends_on_word = text.chars().nth(max_chars).is_some_and(char::is_whitespace);
    let trimmed = match cut.rfind(' ') {
        _ if ends_on_word => cut.as_str(),
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches([',', '.', ';', ':']))
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_editor_markup() {
        assert!(is_blank_html(""));
        assert!(is_blank_html("<p><br></p>"));
        assert!(is_blank_html("<p>&nbsp;</p>\n<p> </p>"));
        assert!(!is_blank_html("<p>Halo</p>"));
        assert!(!is_blank_html("<p><img src=\"/storage/a.png\"></p>"));
    }

    #[test]
    fn test_html_to_text() {
        let html = "<h2>Judul</h2><p>Paragraf&nbsp;satu &amp; dua</p><script>alert(1)</script>";
        assert_eq!(html_to_text(html), "Judul Paragraf satu & dua");
    }

    #[test]
    fn test_excerpt_cuts_on_word_boundary() {
        let html = "<p>Dinas Komunikasi dan Informatika menyelenggarakan rapat koordinasi.</p>";
        assert_eq!(excerpt(html, 20), "Dinas Komunikasi dan…");
        assert_eq!(excerpt(html, 22), "Dinas Komunikasi dan…");
        assert_eq!(excerpt("<p>Pendek</p>", 20), "Pendek");
    }
}
