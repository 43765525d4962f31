//! Tokenizer for individual Contents lines.

use super::structures::ContentsLine;

/// Split a Contents line into its path and owners field.
///
/// The line is trimmed, then cut at its last run of whitespace. Returns
/// `None` when that does not leave two non-empty parts, which is how blank
/// lines, single tokens and headers are dropped.
///
/// # Examples
///
/// ```
/// use debcontents::contents::parse_line;
///
/// let line = parse_line("usr/share/doc/My Notes.txt   doc/notes,doc/extra\n").unwrap();
/// assert_eq!(line.path, "usr/share/doc/My Notes.txt");
/// assert_eq!(line.owners, "doc/notes,doc/extra");
///
/// assert!(parse_line("lonely").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<ContentsLine<'_>> {
    let line = line.trim_matches(is_separator);
    let split = line.rfind(is_separator)?;

    let (head, tail) = line.split_at(split);
    let path = head.trim_end_matches(is_separator);
    let owners = tail.trim_start_matches(is_separator);

    if path.is_empty() || owners.is_empty() {
        return None;
    }

    Some(ContentsLine { path, owners })
}

/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
