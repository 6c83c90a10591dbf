//! Shared library for `campus-analytics`
//! Contains the university registry model and the book-catalog pipeline
//! stages used by the CLI.

pub mod core;

pub use self::core::*;
