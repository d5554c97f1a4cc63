//! Copy-Text Markdown
//!
//! Renders the inline emphasis carried by taglines and paragraphs
//! (pulldown-cmark) and builds percent-encoded mailto links.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use pulldown_cmark::{html::push_html, Options, Parser};

/// Characters escaped inside a mailto subject, beyond controls
const SUBJECT_SET: &AsciiSet = &CONTROLS.add(b' ').add(b'&').add(b'?').add(b'#').add(b'%');

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

/// Render markdown to HTML
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Render markdown for inline use (strips the outer <p> tags)
pub fn render_inline(text: &str) -> String {
    let html = render_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

/// Build a mailto URL with a percent-encoded subject line
pub fn mailto_url(address: &str, subject: &str) -> String {
    format!(
        "mailto:{}?subject={}",
        address,
        utf8_percent_encode(subject, SUBJECT_SET)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_inline_keeps_emphasis() {
        let html = render_inline("vision without **execution** is hallucination");
        assert_eq!(html, "vision without <strong>execution</strong> is hallucination");
    }

    #[test]
    fn test_render_markdown_wraps_paragraphs() {
        let html = render_markdown("one\n\ntwo");
        assert!(html.contains("<p>one</p>"));
        assert!(html.contains("<p>two</p>"));
    }

    #[test]
    fn test_mailto_url_encodes_subject() {
        let url = mailto_url("winston@example.com", "Tutoring inquiry");
        assert_eq!(url, "mailto:winston@example.com?subject=Tutoring%20inquiry");
    }
}
