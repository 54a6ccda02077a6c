//! Live filter core: case-insensitive substring visibility.
//!
//! The filter is a pure function from (query, row texts) to per-row
//! visibility flags. It has no knowledge of the TUI; the event loop in
//! [`crate::tui`] calls [`compute_visibility`] on every keystroke and applies
//! the resulting flags to the rendered list. Keeping the query and the row
//! collection as explicit parameters (rather than ambient state) is what
//! makes the matching rule testable in isolation.
//!
//! Matching rule: a row is visible iff its lowercased text contains the
//! lowercased query as a substring. The empty query matches every row.

/// Case-fold a raw query into its effective form.
///
/// The effective query is what actually gets matched against row text;
/// folding happens once per evaluation, not once per row.
pub fn effective_query(raw: &str) -> String {
    raw.to_lowercase()
}

/// Check whether a single row matches an already-folded query.
///
/// `effective` must come from [`effective_query`]. An empty query matches
/// any text, including the empty string.
pub fn query_matches(effective: &str, text: &str) -> bool {
    text.to_lowercase().contains(effective)
}

/// Compute a visibility flag for every row text against a raw query.
///
/// Returns one flag per input row, in input order. Each flag depends only
/// on that row's text and the query, so the outcome for a row is unaffected
/// by the presence or order of other rows.
///
/// # Examples
///
/// ```
/// use staffscope::filter::compute_visibility;
///
/// let rows = ["Engineering Lead", "Sales Manager", "Senior Engineer"];
/// assert_eq!(compute_visibility("eng", rows), vec![true, false, true]);
/// assert_eq!(compute_visibility("", rows), vec![true, true, true]);
/// ```
pub fn compute_visibility<I, S>(raw_query: &str, texts: I) -> Vec<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let effective = effective_query(raw_query);
    texts.into_iter().map(|text| query_matches(&effective, text.as_ref())).collect()
}
