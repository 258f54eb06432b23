//! Frameworks Layer: Fraction Demonstration
//!
//! Command-line front end for the `entities_fraction` value type. The
//! `fraction` binary parses each argument as a fraction or mixed number and
//! either prints a report of its derived properties or folds all arguments
//! with a single operation.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: clap argument definitions
//! - **[`report`](report/index.html)**: report building and operation folding
//! - **[`error`](error/index.html)**: errors surfaced to the user
//!
//! ## Logging
//!
//! The binary initializes `env_logger`; set `RUST_LOG=debug` to trace each
//! folded operation and every rejected input.

pub mod args;
pub mod error;
pub mod report;

pub use args::{FractionArgs, Operation};
pub use error::DemoError;
pub use report::{apply, fold, parse_inputs, run, FractionReport};
