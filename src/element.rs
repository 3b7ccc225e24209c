//! Code block elements
//!
//! A `CodeElement` carries the options of one code block as written by a
//! content author: where the code comes from, its language, and which
//! lines to emphasize. It validates those options, resolves the source
//! text, and assembles the final HTML fragment around the rendered code.

use std::fs;
use std::path::Path;

use crate::error::{HighlightError, Result};
use crate::lines::LineSet;
use crate::render::StyleConfig;
use crate::syntax::LanguageRegistry;
use crate::{highlight, html};

/// Options for one code block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeElement {
    /// Language name or alias; `None` renders plain text
    pub language: Option<String>,
    /// Render as plain text even when a language is given
    pub no_highlight: bool,
    /// File holding the code, relative to the base path
    pub source_file_name: Option<String>,
    /// Mark the block as not selectable
    pub prevent_select: bool,
    /// Line range specification such as "1-3,5"
    pub highlight_lines: Option<String>,
    /// Background for highlighted lines; the configured default if unset
    pub highlight_lines_color: Option<String>,
    /// Markup body of the element (HTML-escaped code)
    pub inline: Option<String>,
}

impl CodeElement {
    /// Element whose code is its escaped markup body
    pub fn inline(body: &str) -> Self {
        Self {
            inline: Some(body.to_string()),
            ..Default::default()
        }
    }

    /// Element whose code lives in a file
    pub fn from_file(name: &str) -> Self {
        Self {
            source_file_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Builder: set the language
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Builder: set the highlighted lines
    pub fn with_highlight_lines(mut self, spec: &str) -> Self {
        self.highlight_lines = Some(spec.to_string());
        self
    }

    /// Builder: set the highlight color
    pub fn with_highlight_color(mut self, color: &str) -> Self {
        self.highlight_lines_color = Some(color.to_string());
        self
    }

    /// Check the options before anything is rendered
    pub fn prepare(&self, registry: &LanguageRegistry) -> Result<()> {
        if let Some(language) = &self.language {
            registry.resolve(language)?;
        }

        if self.source_file_name.is_some() {
            let has_inline = self.inline.as_deref().is_some_and(|body| !body.trim().is_empty());
            if has_inline {
                return Err(HighlightError::InlineWithSourceFile);
            }
        }

        if let Some(spec) = &self.highlight_lines {
            LineSet::parse(spec)?;
        }

        Ok(())
    }

    /// Get the source text to highlight
    ///
    /// File contents lose one trailing line ending. Inline bodies lose
    /// one leading line ending (the one after the opening tag) and have
    /// their character references decoded.
    pub fn resolve_source(&self, base_path: Option<&Path>) -> Result<String> {
        if let Some(name) = &self.source_file_name {
            let base = base_path.ok_or(HighlightError::MissingBasePath)?;
            let path = base.join(name);
            if !path.exists() {
                return Err(HighlightError::FileNotFound(path.display().to_string()));
            }

            let code = fs::read_to_string(&path)?;
            let code = code
                .strip_suffix("\r\n")
                .or_else(|| code.strip_suffix('\n'))
                .unwrap_or(&code);
            tracing::debug!(path = %path.display(), bytes = code.len(), "read source file");
            return Ok(code.to_string());
        }

        let body = self.inline.as_deref().unwrap_or("");
        let body = body
            .strip_prefix("\r\n")
            .or_else(|| body.strip_prefix('\n'))
            .or_else(|| body.strip_prefix('\r'))
            .unwrap_or(body);
        Ok(html::unescape(body))
    }

    /// Style settings for this element on top of configured defaults
    pub fn style_config(&self, defaults: &StyleConfig) -> StyleConfig {
        let mut style = defaults.clone();
        if let Some(color) = &self.highlight_lines_color {
            style.highlight_color = color.clone();
        }
        style
    }

    /// Validate, resolve, highlight, and wrap the code block
    pub fn render(
        &self,
        registry: &LanguageRegistry,
        base_path: Option<&Path>,
        defaults: &StyleConfig,
    ) -> Result<String> {
        self.prepare(registry)?;
        let source = self.resolve_source(base_path)?;
        self.render_source(registry, &source, defaults)
    }

    /// Highlight and wrap source text that was obtained elsewhere
    pub fn render_source(
        &self,
        registry: &LanguageRegistry,
        source: &str,
        defaults: &StyleConfig,
    ) -> Result<String> {
        let tokenizer = registry.tokenizer_for(self.language.as_deref(), self.no_highlight)?;
        let lines = LineSet::parse_optional(self.highlight_lines.as_deref())?;
        let code = highlight(source, &*tokenizer, &lines, &self.style_config(defaults));

        Ok(self.assemble(&code))
    }

    /// Wrap rendered code in the element's container
    fn assemble(&self, code: &str) -> String {
        let mut out = String::from(r#"<div class="codelight""#);
        if self.prevent_select {
            out.push_str(r#" data-prevent-select="true" style="user-select: none""#);
        }
        out.push('>');
        out.push_str(code);
        if self.prevent_select {
            out.push_str(r#"<small class="codelight-no-copy">This code may not be copied.</small>"#);
        }
        out.push_str("</div>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn registry() -> &'static LanguageRegistry {
        LanguageRegistry::builtin()
    }

    #[test]
    fn test_prepare_accepts_valid_options() {
        let element = CodeElement::inline("x = 1")
            .with_language("python")
            .with_highlight_lines("1");
        assert!(element.prepare(registry()).is_ok());
    }

    #[test]
    fn test_prepare_rejects_unknown_language() {
        let element = CodeElement::inline("x").with_language("cobol");
        assert!(matches!(
            element.prepare(registry()),
            Err(HighlightError::UnknownLanguage { .. })
        ));
    }

    #[test]
    fn test_prepare_rejects_inline_with_file() {
        let mut element = CodeElement::from_file("code.py");
        element.inline = Some("\n   \n".to_string());
        assert!(element.prepare(registry()).is_ok());

        element.inline = Some("print(1)".to_string());
        assert!(matches!(
            element.prepare(registry()),
            Err(HighlightError::InlineWithSourceFile)
        ));
    }

    #[test]
    fn test_prepare_rejects_bad_lines() {
        let element = CodeElement::inline("x").with_highlight_lines("1-2-3");
        assert!(matches!(
            element.prepare(registry()),
            Err(HighlightError::InvalidLineSpec(_))
        ));
    }

    #[test]
    fn test_inline_source_strips_one_leading_newline() {
        assert_eq!(CodeElement::inline("\n\na &lt; b").resolve_source(None).unwrap(), "\na < b");
        assert_eq!(CodeElement::inline("\r\nx").resolve_source(None).unwrap(), "x");
        assert_eq!(CodeElement::inline("\rx").resolve_source(None).unwrap(), "x");
        assert_eq!(CodeElement::inline("x\n").resolve_source(None).unwrap(), "x\n");
    }

    #[test]
    fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("main.rs")).unwrap();
        write!(file, "fn main() {{}}\r\n").unwrap();

        let element = CodeElement::from_file("main.rs");
        assert_eq!(element.resolve_source(Some(dir.path())).unwrap(), "fn main() {}");

        let missing = CodeElement::from_file("nope.rs");
        assert!(matches!(
            missing.resolve_source(Some(dir.path())),
            Err(HighlightError::FileNotFound(_))
        ));
        assert!(matches!(element.resolve_source(None), Err(HighlightError::MissingBasePath)));
    }

    #[test]
    fn test_file_contents_are_not_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), "<p>&amp;</p>\n").unwrap();

        let html = CodeElement::from_file("page.html")
            .render(registry(), Some(dir.path()), &StyleConfig::default())
            .unwrap();
        assert!(html.contains("&lt;p&gt;&amp;amp;&lt;/p&gt;"));
    }

    #[test]
    fn test_render_end_to_end() {
        let element = CodeElement::inline("\na\nb\nc")
            .with_highlight_lines("2")
            .with_highlight_color("#ff0000");
        let html = element.render(registry(), None, &StyleConfig::default()).unwrap();

        assert!(html.starts_with("<div class=\"codelight\"><pre "));
        assert!(html.ends_with("</pre></div>"));
        assert!(html.contains(
            ">a\n<span class=\"code-highlighted-line\" style=\"background-color: #ff0000\">b</span>\nc</pre>"
        ));
    }

    #[test]
    fn test_render_crlf_inline_body() {
        let element = CodeElement::inline("\r\nx = 1\r\ny = 2\r\n")
            .with_language("python")
            .with_highlight_lines("2");
        let html = element.render(registry(), None, &StyleConfig::default()).unwrap();

        assert!(!html.contains('\r'));
        assert_eq!(html.matches("code-highlighted-line").count(), 1);
        assert!(html.contains("1</span>\n<span class=\"code-highlighted-line\""));
        assert!(html.ends_with("</span>\n</pre></div>"));
    }

    #[test]
    fn test_render_prevent_select() {
        let mut element = CodeElement::inline("x");
        element.prevent_select = true;
        let html = element.render(registry(), None, &StyleConfig::default()).unwrap();

        assert!(html.starts_with(r#"<div class="codelight" data-prevent-select="true" style="user-select: none">"#));
        assert!(html.contains("codelight-no-copy"));
    }

    #[test]
    fn test_no_highlight_renders_plain() {
        let mut element = CodeElement::inline("let x = 1;").with_language("rust");
        element.no_highlight = true;
        let html = element.render(registry(), None, &StyleConfig::default()).unwrap();

        assert!(!html.contains("<span"));
        assert!(html.contains(">let x = 1;</pre>"));
    }

    #[test]
    fn test_render_source_takes_raw_text() {
        let element = CodeElement::default().with_language("c");
        let html = element
            .render_source(registry(), "#include <stdio.h>", &StyleConfig::default().with_color(false))
            .unwrap();
        assert!(html.contains(">#include &lt;stdio.h&gt;</pre>"));
    }

    #[test]
    fn test_style_config_uses_defaults() {
        let defaults = StyleConfig::default().with_highlight_color("#eeeeee");
        assert_eq!(CodeElement::inline("x").style_config(&defaults).highlight_color, "#eeeeee");
        assert_eq!(
            CodeElement::inline("x")
                .with_highlight_color("#123456")
                .style_config(&defaults)
                .highlight_color,
            "#123456"
        );
    }
}
