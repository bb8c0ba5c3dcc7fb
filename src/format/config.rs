//! Formatting configuration for NSL templates

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Spaces per nesting level inside `if`/`elif`/`else`/`for` bodies
    pub indent_width: usize,
    /// Indent `{% block %}` bodies as well (off by default)
    pub indent_blocks: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            indent_blocks: false,
        }
    }
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn with_indent_blocks(mut self, indent: bool) -> Self {
        self.indent_blocks = indent;
        self
    }
}
