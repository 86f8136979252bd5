//! Indentation-aware source buffer.

/// Line-oriented output buffer that tracks the current indent level.
#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent_unit: String,
    level: usize,
}

impl SourceWriter {
    /// Creates an empty writer using `indent_unit` for each level.
    #[must_use]
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            indent_unit: indent_unit.into(),
            level: 0,
        }
    }

    /// Writes one line at the current indent level.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.output.push_str(&self.indent_unit);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Writes an empty line (no trailing whitespace).
    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Writes `header {`, runs `body` one level deeper, then writes `}`.
    pub fn block(&mut self, header: &str, body: impl FnOnce(&mut Self)) {
        self.line(&format!("{header} {{"));
        self.level += 1;
        body(self);
        self.level -= 1;
        self.line("}");
    }

    /// Returns the written text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}
