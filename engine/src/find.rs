//! Find-in-page counter.
//!
//! Counts case-insensitive occurrences of the query in the page text. There
//! is no highlighting; "current match" is only a cyclic counter.

use regex::RegexBuilder;

use folio_types::DraftInput;

/// Case-insensitive literal occurrences of `query` in `haystack`.
///
/// Blank queries and patterns that fail to build count as zero.
#[must_use]
pub fn count_matches(haystack: &str, query: &str) -> usize {
    if query.trim().is_empty() {
        return 0;
    }
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(haystack).count(),
        Err(err) => {
            tracing::debug!("Find pattern rejected: {err}");
            0
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FindState {
    pub query: DraftInput,
    /// Shown but never applied.
    pub replace: DraftInput,
    pub show_replace: bool,
    total: usize,
    current: usize,
}

impl FindState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recount against `haystack` and reset the cursor to the first match.
    pub fn recompute(&mut self, haystack: &str) {
        self.total = count_matches(haystack, self.query.text());
        self.current = usize::from(self.total > 0);
    }

    /// `n -> n+1`, `total -> 1`.
    pub fn next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = if self.current < self.total {
            self.current + 1
        } else {
            1
        };
    }

    /// `n -> n-1`, `1 -> total`.
    pub fn prev(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = if self.current > 1 {
            self.current - 1
        } else {
            self.total
        };
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// "2 of 5", or "No results" for a query with no hits.
    #[must_use]
    pub fn label(&self) -> String {
        if self.total == 0 && !self.query.text().trim().is_empty() {
            return "No results".to_string();
        }
        format!("{} of {}", self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "Engineer at Acme. Senior ENGINEER. Loves engineering.";

    fn find(query: &str) -> FindState {
        let mut state = FindState::new();
        state.query.set_text(query.to_string());
        state.recompute(PAGE);
        state
    }

    #[test]
    fn counts_case_insensitively() {
        let state = find("engineer");
        assert_eq!(state.total(), 3);
        assert_eq!(state.current(), 1);
        assert_eq!(state.label(), "1 of 3");
    }

    #[test]
    fn enter_cycles_and_wraps() {
        let mut state = find("engineer");
        state.next();
        assert_eq!(state.current(), 2);
        state.next();
        assert_eq!(state.current(), 3);
        state.next();
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn prev_wraps_to_total() {
        let mut state = find("engineer");
        state.prev();
        assert_eq!(state.current(), 3);
        state.prev();
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert_eq!(count_matches("a(b a(b", "a(b"), 2);
        assert_eq!(count_matches(PAGE, "a(b"), 0);
        assert_eq!(count_matches("1+1=2", "1+1"), 1);
        assert_eq!(count_matches("anything", ".*"), 0);
    }

    #[test]
    fn blank_query_is_zero_of_zero() {
        let mut state = find("   ");
        assert_eq!(state.label(), "0 of 0");
        state.next();
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn no_hits_label() {
        let state = find("zebra");
        assert_eq!(state.total(), 0);
        assert_eq!(state.label(), "No results");
    }
}
