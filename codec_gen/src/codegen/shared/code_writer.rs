//! Indentation-tracking writer for brace-delimited target languages.
//!
//! ```
//! use codec_gen::codegen::shared::code_writer::CodeWriter;
//!
//! let mut w = CodeWriter::with_indent_spaces(2);
//! w.block("public class Example", |w| {
//!   w.writeln("private int value;");
//! });
//! assert_eq!(w.into_inner(), "public class Example {\n  private int value;\n}\n");
//! ```

pub struct CodeWriter {
  output: String,
  indent_level: usize,
  indent_string: String,
  at_line_start: bool,
}

impl CodeWriter {
  pub fn new(indent_string: String) -> Self {
    Self {
      output: String::new(),
      indent_level: 0,
      indent_string,
      at_line_start: true,
    }
  }

  pub fn with_indent_spaces(spaces: usize) -> Self {
    Self::new(" ".repeat(spaces))
  }

  /// Write text without a newline. Indents first if at the start of a line.
  pub fn write(&mut self, text: &str) {
    if text.is_empty() {
      return;
    }
    if self.at_line_start && !text.trim().is_empty() {
      for _ in 0..self.indent_level {
        self.output.push_str(&self.indent_string);
      }
      self.at_line_start = false;
    }
    self.output.push_str(text);
  }

  pub fn writeln(&mut self, text: &str) {
    self.write(text);
    self.output.push('\n');
    self.at_line_start = true;
  }

  /// Empty lines never carry indentation.
  pub fn blank_line(&mut self) {
    self.output.push('\n');
    self.at_line_start = true;
  }

  /// Run `body` with the indentation raised by `levels`.
  pub fn indented<F>(&mut self, levels: usize, body: F)
  where
    F: FnOnce(&mut Self),
  {
    self.indent_level += levels;
    body(self);
    self.indent_level -= levels;
  }

  /// `header {`, indented body, `}`.
  pub fn block<F>(&mut self, header: &str, body: F)
  where
    F: FnOnce(&mut Self),
  {
    self.writeln(&format!("{} {{", header));
    self.indented(1, body);
    self.writeln("}");
  }

  pub fn indent_level(&self) -> usize {
    self.indent_level
  }

  pub fn into_inner(self) -> String {
    self.output
  }
}
