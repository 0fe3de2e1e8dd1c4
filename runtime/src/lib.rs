//! Runtime support library for compiled programs.
//!
//! Compiled output links against the static library produced by this crate
//! and calls the C-ABI symbols in [`exports`]: decimal integer printing,
//! single-character printing and single-character input on the process's
//! standard streams. The safe core behind that surface lives in [`console`]
//! and can be used as a normal Rust library.

pub mod console;
pub mod exports;

pub use console::{Console, ConsoleError};
