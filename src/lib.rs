//! `detab` is a small tool that replaces hard tabs with runs of spaces, in a
//! single file or across every `.go` file in a directory tree.
//!
//! It provides the core logic for the `detab` command-line tool but can also
//! be used as a standalone library. The main components are:
//!
//! - `resolver`: For turning the target path into the list of files to
//!   rewrite, walking directories recursively.
//! - `Rewriter`: For reading a file as raw bytes and writing it back in
//!   place with every tab expanded to a fixed run of spaces.
//! - `config`: For the per-run settings (target path, indentation width).
//!
//! Files are processed strictly one at a time, and the first error aborts
//! the whole run.

pub mod cli;
pub mod config;
pub mod errors;
pub mod resolver;
pub mod rewriter;

// Re-export main types for easier access by library users.
pub use config::Config;
pub use errors::{Error, Result};
pub use rewriter::{Outcome, Rewriter};
