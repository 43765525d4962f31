//! Debian Contents index parsing and per-package file counting.
//!
//! A Contents index is a gzip-compressed text file where each line names an
//! installed path followed by the packages that ship it:
//!
//! ```text
//! usr/bin/busybox                                         utils/busybox
//! usr/share/doc/Some Project/README                       doc/foo,doc/foo-data
//! ```
//!
//! The path may itself contain spaces, so only the last whitespace-separated
//! token is taken as the owners field. Lines that do not split into a path and
//! an owners field (blank lines, free-form headers) are skipped.
//!
//! ## Architecture
//!
//! - `structures`: the tokenized line, the count map and scan statistics
//! - `parser`: splitting a single line into path and owners
//! - `aggregator`: streaming a compressed index through the parser

mod aggregator;
mod parser;
mod structures;

pub use aggregator::{ContentsError, Scan, aggregate, scan};
pub use parser::parse_line;
pub use structures::*;
