use std::collections::HashMap;
use std::str::Split;

/// One tokenized line of a Contents index.
///
/// Borrows from the line buffer it was parsed out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentsLine<'a> {
    /// Installed file path, possibly containing whitespace
    pub path: &'a str,
    /// Raw owners field, e.g. `admin/foo,libs/bar`
    pub owners: &'a str,
}

impl<'a> ContentsLine<'a> {
    /// Package names owning this path, in field order and not deduplicated.
    pub fn owners(&self) -> Split<'a, char> {
        self.owners.split(',')
    }
}

/// Number of files owned by each package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerCounts {
    counts: HashMap<String, u64>,
}

impl OwnerCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one file for every owner listed on `line`.
    pub fn record(&mut self, line: &ContentsLine<'_>) {
        for owner in line.owners() {
            self.increment(owner);
        }
    }

    /// Add one file to `package`, starting it at 1 if unseen.
    pub fn increment(&mut self, package: &str) {
        // Look up by &str first so repeat hits don't allocate a key.
        match self.counts.get_mut(package) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(package.to_owned(), 1);
            }
        }
    }

    pub fn get(&self, package: &str) -> Option<u64> {
        self.counts.get(package).copied()
    }

    /// Number of distinct packages.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(package, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl FromIterator<(String, u64)> for OwnerCounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Line statistics gathered while scanning an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines read from the decompressed stream
    pub lines: u64,
    /// Lines that did not split into path and owners
    pub skipped: u64,
}

impl ScanStats {
    pub fn counted(&self) -> u64 {
        self.lines - self.skipped
    }
}
