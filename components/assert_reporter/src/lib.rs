//! Console assertion reporting.
//!
//! [`Reporter`] prints one line per assertion, grouped under named
//! sections. Values are compared with [`deep_equal`], which flattens nested
//! arrays by one level before a positional comparison.
//!
//! # Examples
//!
//! ```
//! use assert_reporter::Reporter;
//! use core_types::Value;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let output = Rc::new(RefCell::new(Vec::new()));
//! let mut reporter = Reporter::with_capture(output.clone());
//!
//! reporter.section("numbers");
//! reporter.run_assertion("one is one", &Value::Smi(1), &Value::Double(1.0));
//! reporter.finish();
//!
//! assert_eq!(output.borrow()[1], "  PASS: one is one");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod console;
mod equality;
mod reporter;

pub use console::{CaptureWriter, ConsoleWriter, StdoutWriter};
pub use equality::{deep_equal, flatten_one_level};
pub use reporter::Reporter;
