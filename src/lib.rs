//! # texclean
//!
//! Remove LaTeX build byproducts from a directory tree.
//!
//! texclean walks a directory recursively and permanently deletes every
//! regular file whose name ends with one of the known temporary suffixes
//! (`.aux`, `.log`, `.synctex.gz`, `.fdb_latexmk`, `.fls`, `.pre`).
//!
//! - **Name-only matching**: plain, case-sensitive suffix test on the file name
//! - **Files only**: directories and symlinks are never removed
//! - **Best effort**: a file that cannot be removed is reported and skipped

pub mod cleaner;
pub mod cli;
pub mod common;
pub mod scanner;

pub use cleaner::{clean, Reporter};
pub use common::CleanError;
