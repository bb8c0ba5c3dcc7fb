//! Line-oriented writer for template output
//!
//! Knows the tag delimiters and the indentation depth; the formatter only decides what goes inside each tag.

use nsl_core::lang::keywords::{self, KeywordId};
use nsl_core::lang::punctuation::{self, PunctuationId};

use super::config::FormatConfig;

/// Accumulates formatted template text one line at a time.
pub struct FormatWriter {
    output: String,
    depth: usize,
    indent_width: usize,
    /// No text has been written on the current line yet.
    at_line_start: bool,
}

impl FormatWriter {
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            output: String::new(),
            depth: 0,
            indent_width: config.indent_width,
            at_line_start: true,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Append text, prefixing the indentation if this is the first text on the line.
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if self.at_line_start {
            self.output.extend(std::iter::repeat_n(' ', self.depth * self.indent_width));
            self.at_line_start = false;
        }
        self.output.push_str(s);
    }

    pub fn end_line(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// `{% keyword` (the caller writes any arguments, then calls [`close_tag`](Self::close_tag)).
    pub fn open_tag(&mut self, keyword: KeywordId) {
        self.write(punctuation::as_str(PunctuationId::TagOpen));
        self.write(" ");
        self.write(keywords::as_str(keyword));
    }

    /// ` %}` and end of line.
    pub fn close_tag(&mut self) {
        self.write(" ");
        self.write(punctuation::as_str(PunctuationId::TagClose));
        self.end_line();
    }

    /// A tag without arguments, such as `{% else %}`, on its own line.
    pub fn bare_tag(&mut self, keyword: KeywordId) {
        self.open_tag(keyword);
        self.close_tag();
    }

    /// `{{ ` (the caller writes the expression, then calls [`close_output`](Self::close_output)).
    pub fn open_output(&mut self) {
        self.write(punctuation::as_str(PunctuationId::OutputOpen));
        self.write(" ");
    }

    /// ` }}` and end of line.
    pub fn close_output(&mut self) {
        self.write(" ");
        self.write(punctuation::as_str(PunctuationId::OutputClose));
        self.end_line();
    }
}
