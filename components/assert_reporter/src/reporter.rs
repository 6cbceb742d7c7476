//! Sectioned assertion reporter.

use crate::console::{CaptureWriter, ConsoleWriter, StdoutWriter};
use crate::equality::deep_equal;
use core_types::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Prints assertion outcomes grouped under named sections.
///
/// Output format:
///
/// ```text
/// == section name ==
///   PASS: description
///   FAIL: description | expected: [ 1 ] | actual: [ 2 ]
///
/// ```
///
/// A section header opens a group, assertion lines are indented while a
/// section is open, and closing a section writes an empty line. Each
/// assertion is reported on its own; nothing is tallied.
pub struct Reporter {
    writer: Box<dyn ConsoleWriter>,
    current_section: Option<String>,
}

impl Reporter {
    /// Create a reporter printing to stdout
    pub fn new() -> Self {
        Self::with_writer(StdoutWriter)
    }

    /// Create a reporter with a custom writer
    pub fn with_writer(writer: impl ConsoleWriter + 'static) -> Self {
        Reporter {
            writer: Box::new(writer),
            current_section: None,
        }
    }

    /// Create a reporter that appends its lines to `output`
    pub fn with_capture(output: Rc<RefCell<Vec<String>>>) -> Self {
        Self::with_writer(CaptureWriter::new(output))
    }

    /// Name of the open section, if any
    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    /// Close the open section, if any, and open `name`.
    pub fn section(&mut self, name: &str) {
        self.close_section();
        log::debug!("opening section '{}'", name);
        self.writer.write(&format!("== {} ==", name));
        self.current_section = Some(name.to_string());
    }

    /// Compare `actual` with `expected` and print one pass or fail line.
    ///
    /// A failure line carries both values.
    pub fn run_assertion(&self, description: &str, actual: &Value, expected: &Value) {
        let indent = if self.current_section.is_some() { "  " } else { "" };
        if deep_equal(actual, expected) {
            log::trace!("assertion passed: {}", description);
            self.writer.write(&format!("{}PASS: {}", indent, description));
        } else {
            log::debug!("assertion failed: {}", description);
            self.writer.write(&format!(
                "{}FAIL: {} | expected: {} | actual: {}",
                indent,
                description,
                expected.inspect(),
                actual.inspect()
            ));
        }
    }

    /// Close the last open section.
    pub fn finish(&mut self) {
        self.close_section();
    }

    fn close_section(&mut self) {
        if let Some(name) = self.current_section.take() {
            log::debug!("closing section '{}'", name);
            self.writer.write("");
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
