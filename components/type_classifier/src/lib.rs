//! Runtime type classification for JavaScript values.
//!
//! Two levels of classification are provided:
//!
//! - **basic**: the `typeof` tag ([`basic_type_of`])
//! - **real**: a refinement that separates NaN and Infinity from ordinary
//!   numbers, and array, null, date, regexp, set and map from plain
//!   objects ([`real_type_of`])
//!
//! Every function is total: any [`Value`](core_types::Value) is accepted.
//!
//! # Examples
//!
//! ```
//! use core_types::{TypeLabel, Value};
//! use type_classifier::{basic_type_of, count_real_types, real_type_of};
//!
//! let nan = Value::Double(f64::NAN);
//! assert_eq!(basic_type_of(&nan), TypeLabel::Number);
//! assert_eq!(real_type_of(&nan), TypeLabel::NaN);
//!
//! let counts = count_real_types(&[Value::Null, Value::Null, Value::Smi(1)]);
//! assert_eq!(counts.pairs(), &[(TypeLabel::Null, 2), (TypeLabel::Number, 1)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod basic;
mod count;
mod real;

pub use basic::{all_same_basic_type, basic_type_of, basic_types_of};
pub use count::{count_real_types, TypeCount};
pub use real::{all_unique_real_types, real_type_of, real_types_of};
