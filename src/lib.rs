//! # debcontents
//!
//! Rank Debian packages by the number of files they ship.
//!
//! A Debian mirror publishes one `Contents-<arch>.gz` index per architecture,
//! mapping every installed path to the packages that provide it. This crate
//! fetches that index, streams it through a gzip decoder one line at a time,
//! and keeps a running count of files per package.
//!
//! ## Features
//!
//! - Fetch indexes from HTTP/HTTPS mirrors or a local mirror directory
//! - Constant memory per line: the decompressed index is never held whole
//! - Deterministic ranking, ties ordered by package name
//!
//! ## Example
//!
//! ```no_run
//! use debcontents::{contents, mirror, report};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let source = mirror::open("http://ftp.uk.debian.org/debian/dists/stable/main/")?;
//!     let compressed = source.fetch("arm64").await?;
//!
//!     let counts = contents::aggregate(compressed.as_slice())?;
//!     for (name, count) in report::top_packages(&counts, 5) {
//!         println!("{}", report::format_row(name, count));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod contents;
pub mod logging;
pub mod mirror;
pub mod report;

pub use cli::Cli;
pub use contents::{ContentsError, OwnerCounts, aggregate, scan};
pub use mirror::{ContentsSource, DownloadError, HttpMirror, LocalMirror};
