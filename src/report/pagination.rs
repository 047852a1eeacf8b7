//! Page splitting for exported documents.

/// Lines per page for letter-size output: 15pt spacing from y=750.
pub const DEFAULT_LINES_PER_PAGE: usize = 50;

/// Splits a text block into pages of at most `lines_per_page` lines.
///
/// A `lines_per_page` of zero is treated as one. An empty text yields no pages.
/// Lines are split as by [`str::lines`]: a trailing newline does not start an
/// extra blank line, and a `\r` before each newline is dropped. Blank lines
/// inside the text are kept.
///
/// # Examples
///
/// ```
/// use payroll_core::report::paginate;
///
/// let pages = paginate("a\nb\nc", 2);
/// assert_eq!(pages, vec![vec!["a", "b"], vec!["c"]]);
/// ```
pub fn paginate(text: &str, lines_per_page: usize) -> Vec<Vec<&str>> {
    let lines: Vec<&str> = text.lines().collect();
    lines
        .chunks(lines_per_page.max(1))
        .map(|page| page.to_vec())
        .collect()
}
