//! Ranking and rendering of per-package file counts.

use std::cmp::Reverse;
use std::io::{self, Write};

use crate::contents::OwnerCounts;

/// Minimum width of the package name column.
pub const NAME_WIDTH: usize = 30;

/// The `n` packages owning the most files.
///
/// Sorted by count, highest first; equal counts are ordered by package name
/// so the result is the same on every run. Asking for more packages than
/// exist returns all of them.
pub fn top_packages(counts: &OwnerCounts, n: usize) -> Vec<(&str, u64)> {
    let mut ranked: Vec<_> = counts.iter().collect();
    ranked.sort_unstable_by_key(|&(name, count)| (Reverse(count), name));
    ranked.truncate(n);
    ranked
}

/// Render one report row: the name padded to [`NAME_WIDTH`], a space, the count.
///
/// Longer names are printed in full.
pub fn format_row(name: &str, count: u64) -> String {
    format!("{name:<NAME_WIDTH$} {count}")
}

/// Write `rows` one per line.
pub fn write_report<W: Write>(out: &mut W, rows: &[(&str, u64)]) -> io::Result<()> {
    for &(name, count) in rows {
        writeln!(out, "{}", format_row(name, count))?;
    }
    out.flush()
}
