//! Error types for scanning and parsing.
//!
//! Every failure is fatal to the current parse. This module defines:
//!
//! - `ErrorImpl`, the individual failure kinds
//! - `Error`, the wrapper returned from every fallible operation
//! - `ErrorTip`, a human readable hint shown by the driver

pub mod errors;
