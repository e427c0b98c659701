//! Unit and substring search over [`WideString`].

use crate::wide::WideString;

impl WideString {
    /// Finds the first occurrence of `unit` at or after `from`.
    ///
    /// Returns the matching index, or [`WideString::NPOS`] when `unit` does
    /// not occur in `[from, len())`.
    #[must_use]
    pub fn find_unit(&self, unit: u16, from: usize) -> usize {
        self.as_units()
            .iter()
            .enumerate()
            .skip(from)
            .find_map(|(j, &u)| (u == unit).then_some(j))
            .unwrap_or(Self::NPOS)
    }

    /// Finds the first occurrence of `pattern` at or after `from`.
    ///
    /// Returns the starting index of the first full match, or
    /// [`WideString::NPOS`].
    ///
    /// The scan keeps a running count of matched pattern units. A mismatch
    /// after a partial match clears the count and re-examines the same
    /// position against the start of the pattern. There is no
    /// failure-function resume, so overlapping candidates inside a partial
    /// match are skipped and repeated-prefix patterns can miss matches a
    /// full matcher would find. Downstream callers depend on these exact
    /// match positions.
    ///
    /// An empty pattern matches immediately, returning `from`.
    #[must_use]
    pub fn find(&self, pattern: &WideString, from: usize) -> usize {
        let total = pattern.len();
        if total == 0 {
            return from;
        }

        let haystack = self.as_units();
        let needle = pattern.as_units();
        let mut matched = 0;
        let mut j = from;
        while j < haystack.len() {
            if haystack[j] == needle[matched] {
                matched += 1;
                j += 1;
                if matched == total {
                    return j - total;
                }
            } else if matched > 0 {
                matched = 0;
            } else {
                j += 1;
            }
        }

        Self::NPOS
    }
}
