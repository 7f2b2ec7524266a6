//! Source emitter - builds generated source text line by line
//!
//! This module provides utilities for building consistently indented output for brace-delimited languages.

use std::fmt::Write;

/// A buffer for building source code with proper indentation
#[derive(Debug)]
pub struct SourceEmitter {
    buffer: String,
    indent_level: usize,
    indent_str: &'static str,
}

impl Default for SourceEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceEmitter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: "    ", // 4 spaces, as in the generated Objective-C++
        }
    }

    /// Get the generated code without its final newline
    ///
    /// Sections are later joined with blank lines, so a section must not end in one.
    pub fn finish(mut self) -> String {
        if self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        self.buffer
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write a formatted line with current indentation
    pub fn linef(&mut self, args: std::fmt::Arguments<'_>) {
        self.write_indent();
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
    }

    /// Write a blank line (never indented)
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write indentation only
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent_str);
        }
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write `f`'s lines one level deeper
    pub fn indented<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.indent();
        f(self);
        self.dedent();
    }

    /// Write a block whose braces sit on their own lines
    ///
    /// ```text
    /// header
    /// {
    ///     body
    /// }
    /// ```
    pub fn braced<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.line(header);
        self.line("{");
        self.indented(f);
        self.line("}");
    }
}
