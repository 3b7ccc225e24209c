//! HTML rendering of token streams
//!
//! Every token is escaped and wrapped in an inline-styled span for its
//! category. Tokens may span lines, so the renderer splits them at each
//! line break (`\n`, `\r\n` or a lone `\r`, always written as `\n`):
//! category spans never cross a line boundary, and each physical line on
//! the highlight list is wrapped on its own.

use crate::html;
use crate::lines::LineSet;
use crate::syntax::{Token, TokenStream};

/// Default classes on the outer container
pub const DEFAULT_CSS_CLASS: &str = "mb-2 rounded";

/// Default background for highlighted lines
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#b3d7ff";

/// Class on each highlighted line's wrapper
pub const HIGHLIGHTED_LINE_CLASS: &str = "code-highlighted-line";

const CONTAINER_STYLE: &str = "padding: 0.5rem; margin-bottom: 0px; line-height: 125%; background: #f0f0f0";

/// Render settings, read-only for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Classes on the outer `<pre>`
    pub css_class: String,
    /// CSS color behind highlighted lines
    pub highlight_color: String,
    /// Whether tokens get per-category colors
    pub apply_color: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            css_class: DEFAULT_CSS_CLASS.to_string(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            apply_color: true,
        }
    }
}

impl StyleConfig {
    /// Builder: set the highlight color
    pub fn with_highlight_color(mut self, color: &str) -> Self {
        self.highlight_color = color.to_string();
        self
    }

    /// Builder: turn per-category colors on or off
    pub fn with_color(mut self, apply_color: bool) -> Self {
        self.apply_color = apply_color;
        self
    }
}

/// Render a token stream to an HTML fragment
pub fn render(tokens: TokenStream<'_>, highlighted: &LineSet, style: &StyleConfig) -> String {
    let mut writer = LineWriter::new(highlighted, style);
    for token in tokens {
        writer.push_token(token);
    }
    let body = writer.finish();

    format!(
        r#"<pre class="{}" style="{}">{}</pre>"#,
        html::escape(&style.css_class),
        CONTAINER_STYLE,
        body
    )
}

/// Accumulates one physical line at a time
struct LineWriter<'r> {
    highlighted: &'r LineSet,
    apply_color: bool,
    /// Opening tag for highlighted lines
    wrapper: String,
    /// Finished lines
    out: String,
    /// Markup of the current line, without its newline
    line: String,
    /// 1-based number of the current line
    line_no: usize,
    /// Last token ended in `\r`, so a leading `\n` completes that break
    after_cr: bool,
}

impl<'r> LineWriter<'r> {
    fn new(highlighted: &'r LineSet, style: &StyleConfig) -> Self {
        let wrapper = format!(
            r#"<span class="{}" style="background-color: {}">"#,
            HIGHLIGHTED_LINE_CLASS,
            html::escape(&style.highlight_color)
        );
        Self {
            highlighted,
            apply_color: style.apply_color,
            wrapper,
            out: String::new(),
            line: String::new(),
            line_no: 1,
            after_cr: false,
        }
    }

    fn push_token(&mut self, token: Token<'_>) {
        let css = if self.apply_color {
            token.kind.default_style().to_css()
        } else {
            String::new()
        };

        let mut rest = token.text;
        if self.after_cr {
            rest = rest.strip_prefix('\n').unwrap_or(rest);
        }
        if !token.text.is_empty() {
            self.after_cr = token.text.ends_with('\r');
        }

        while let Some(i) = rest.find(['\r', '\n']) {
            self.push_segment(&rest[..i], &css);
            self.end_line();
            let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[i + width..];
        }
        self.push_segment(rest, &css);
    }

    fn push_segment(&mut self, text: &str, css: &str) {
        if text.is_empty() {
            return;
        }
        if css.is_empty() {
            html::escape_into(&mut self.line, text);
        } else {
            self.line.push_str(r#"<span style=""#);
            self.line.push_str(css);
            self.line.push_str(r#"">"#);
            html::escape_into(&mut self.line, text);
            self.line.push_str("</span>");
        }
    }

    fn flush_line(&mut self) {
        if self.highlighted.contains(self.line_no) {
            self.out.push_str(&self.wrapper);
            self.out.push_str(&self.line);
            self.out.push_str("</span>");
        } else {
            self.out.push_str(&self.line);
        }
        self.line.clear();
    }

    fn end_line(&mut self) {
        self.flush_line();
        self.out.push('\n');
        self.line_no += 1;
    }

    /// Flush a final line that has no trailing newline
    fn finish(mut self) -> String {
        if !self.line.is_empty() {
            self.flush_line();
        }
        tracing::trace!(lines = self.line_no, "rendered code block");
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{PassThroughTokenizer, TokenType, Tokenizer};

    fn tokens<'a>(items: &'a [(TokenType, &'a str)]) -> TokenStream<'a> {
        Box::new(items.iter().map(|&(kind, text)| Token::new(kind, text)))
    }

    fn body(html: &str) -> &str {
        let start = html.find('>').unwrap() + 1;
        &html[start..html.len() - "</pre>".len()]
    }

    fn plain(source: &str, lines: &str, style: &StyleConfig) -> String {
        let set = LineSet::parse_optional(Some(lines).filter(|s| !s.is_empty())).unwrap();
        render(PassThroughTokenizer.tokenize(source), &set, style)
    }

    #[test]
    fn test_container() {
        let html = plain("x", "", &StyleConfig::default());
        assert_eq!(
            html,
            "<pre class=\"mb-2 rounded\" style=\"padding: 0.5rem; margin-bottom: 0px; line-height: 125%; background: #f0f0f0\">x</pre>"
        );
    }

    #[test]
    fn test_highlight_middle_line() {
        let style = StyleConfig::default().with_highlight_color("#ff0000");
        let html = plain("a\nb\nc", "2", &style);

        assert_eq!(
            body(&html),
            "a\n<span class=\"code-highlighted-line\" style=\"background-color: #ff0000\">b</span>\nc"
        );
    }

    #[test]
    fn test_category_spans_split_at_newlines() {
        let items = [
            (TokenType::Keyword, "let"),
            (TokenType::Default, " x = "),
            (TokenType::String, "\"a\nb\""),
            (TokenType::Default, ";\n"),
        ];
        let set = LineSet::parse("2").unwrap();
        let html = render(tokens(&items), &set, &StyleConfig::default());

        assert_eq!(
            body(&html),
            concat!(
                "<span style=\"color: #007020; font-weight: bold\">let</span> x = ",
                "<span style=\"color: #4070a0\">&quot;a</span>\n",
                "<span class=\"code-highlighted-line\" style=\"background-color: #b3d7ff\">",
                "<span style=\"color: #4070a0\">b&quot;</span>;</span>\n",
            )
        );
    }

    #[test]
    fn test_no_color_keeps_wrapping() {
        let items = [(TokenType::Keyword, "fn"), (TokenType::Default, " f()\n}")];
        let set = LineSet::parse("1").unwrap();
        let style = StyleConfig::default().with_color(false);
        let html = render(tokens(&items), &set, &style);

        assert_eq!(
            body(&html),
            "<span class=\"code-highlighted-line\" style=\"background-color: #b3d7ff\">fn f()</span>\n}"
        );
    }

    #[test]
    fn test_escapes_text() {
        let html = plain("if a < b && c > \"d\" {}", "", &StyleConfig::default());
        assert_eq!(body(&html), "if a &lt; b &amp;&amp; c &gt; &quot;d&quot; {}");
    }

    #[test]
    fn test_empty_highlighted_line_and_trailing_newline() {
        let html = plain("a\n\nb\n", "2,4", &StyleConfig::default());

        // Line 2 is empty but still wrapped; nothing follows the final newline
        assert_eq!(
            body(&html),
            "a\n<span class=\"code-highlighted-line\" style=\"background-color: #b3d7ff\"></span>\nb\n"
        );
    }

    #[test]
    fn test_out_of_range_lines_ignored() {
        let html = plain("a\nb", "7-9", &StyleConfig::default());
        assert_eq!(body(&html), "a\nb");
    }

    #[test]
    fn test_hostile_color_and_class_escaped() {
        let style = StyleConfig {
            css_class: "x\" onclick=\"y".to_string(),
            highlight_color: "red\"><script>".to_string(),
            apply_color: true,
        };
        let html = plain("a", "1", &style);

        assert!(!html.contains("<script>"));
        assert!(html.contains("class=\"x&quot; onclick=&quot;y\""));
        assert!(html.contains("background-color: red&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_crlf_breaks_outside_wrappers() {
        let style = StyleConfig::default().with_highlight_color("#ff0000");
        let html = plain("a\r\nb\r\nc\rd", "2,4", &style);

        assert!(!html.contains('\r'));
        assert_eq!(
            body(&html),
            concat!(
                "a\n<span class=\"code-highlighted-line\" style=\"background-color: #ff0000\">b</span>\n",
                "c\n<span class=\"code-highlighted-line\" style=\"background-color: #ff0000\">d</span>",
            )
        );
    }

    #[test]
    fn test_crlf_split_across_tokens() {
        let items = [
            (TokenType::Comment, "/* a\r"),
            (TokenType::Comment, "\nb */"),
            (TokenType::Default, "\r\n"),
        ];
        let set = LineSet::parse("1").unwrap();
        let html = render(tokens(&items), &set, &StyleConfig::default());

        assert_eq!(
            body(&html),
            concat!(
                "<span class=\"code-highlighted-line\" style=\"background-color: #b3d7ff\">",
                "<span style=\"color: #60a0b0; font-style: italic\">/* a</span></span>\n",
                "<span style=\"color: #60a0b0; font-style: italic\">b */</span>\n",
            )
        );
    }

    #[test]
    fn test_empty_source() {
        let html = plain("", "1", &StyleConfig::default());
        assert_eq!(body(&html), "");
    }
}
