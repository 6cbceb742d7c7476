//! Console output writers

use std::cell::RefCell;
use std::rc::Rc;

/// Console output writer trait
pub trait ConsoleWriter {
    /// Write one line to the console output
    fn write(&self, message: &str);
}

/// Default console writer that prints to stdout
#[derive(Debug, Default)]
pub struct StdoutWriter;

impl ConsoleWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{}", message);
    }
}

/// Writer that captures output to a shared vector
#[derive(Debug, Clone)]
pub struct CaptureWriter {
    output: Rc<RefCell<Vec<String>>>,
}

impl CaptureWriter {
    /// Create a writer appending to `output`
    pub fn new(output: Rc<RefCell<Vec<String>>>) -> Self {
        CaptureWriter { output }
    }
}

impl ConsoleWriter for CaptureWriter {
    fn write(&self, message: &str) {
        self.output.borrow_mut().push(message.to_string());
    }
}
