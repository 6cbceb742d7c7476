//! Core JavaScript value types and type labels.
//!
//! This crate provides the foundational types for runtime type
//! introspection: a closed value model and the tag set classifiers
//! report.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`TypeLabel`] - Basic (`typeof`) and refined type tags
//! - [`UnknownTypeLabel`] - Error for text that names no label
//!
//! # Examples
//!
//! ```
//! use core_types::{TypeLabel, Value};
//!
//! let num = Value::Smi(42);
//! assert_eq!(num.type_of(), TypeLabel::Number);
//!
//! let label: TypeLabel = "map".parse().unwrap();
//! assert_eq!(label.basic_parent(), TypeLabel::Object);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod label;
mod value;

pub use error::UnknownTypeLabel;
pub use label::TypeLabel;
pub use value::{
    ArrayData, DateData, FunctionData, MapData, ObjectData, RegExpData, SetData, SymbolData, Value,
};
