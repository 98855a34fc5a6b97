//! Fuzzy matching for control-name filtering.

use nucleo_matcher::{
    pattern::{AtomKind, CaseMatching, Normalization, Pattern},
    Config, Matcher, Utf32Str,
};

/// Fuzzy matcher wrapping nucleo-matcher.
///
/// Reuses internal buffers across calls.
pub struct FuzzyMatcher {
    matcher: Matcher,
    buf: Vec<char>,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    /// Create a matcher with default scoring.
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            buf: Vec::with_capacity(64),
        }
    }

    /// Indices of candidates matching `pattern`, best score first.
    ///
    /// Ties keep candidate order. An empty pattern matches nothing.
    pub fn filter_sorted<I, S>(&mut self, pattern: &str, candidates: I) -> Vec<usize>
    where
        I: Iterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        if pattern.is_empty() {
            return Vec::new();
        }

        let pat = Pattern::new(
            pattern,
            CaseMatching::Smart,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut results: Vec<(usize, u32)> = candidates
            .filter_map(|(idx, s)| {
                self.buf.clear();
                let haystack = Utf32Str::new(s.as_ref(), &mut self.buf);
                pat.score(haystack, &mut self.matcher).map(|sc| (idx, sc))
            })
            .collect();

        results.sort_by(|a, b| b.1.cmp(&a.1));

        results.into_iter().map(|(i, _)| i).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pattern: &str, candidates: &[&str]) -> Vec<usize> {
        FuzzyMatcher::new().filter_sorted(pattern, candidates.iter().copied().enumerate())
    }

    #[test]
    fn empty_pattern_matches_nothing() {
        assert!(run("", &["ButtonFace", "WindowText"]).is_empty());
    }

    #[test]
    fn no_match() {
        assert!(run("xyz", &["ButtonFace", "WindowText"]).is_empty());
    }

    #[test]
    fn fuzzy_subsequence() {
        let results = run("btnfc", &["ButtonFace", "WindowText", "MenuBar"]);
        assert_eq!(results, vec![0]);
    }

    #[test]
    fn smart_case_lowercase_matches_any_case() {
        let results = run("text", &["ButtonFace", "WindowText", "GrayText"]);
        assert_eq!(results.len(), 2);
        assert!(results.contains(&1));
        assert!(results.contains(&2));
    }

    #[test]
    fn prefix_scores_higher() {
        let results = run("menu", &["PopupMenuBorder", "Menu", "XMenuish"]);
        assert_eq!(results[0], 1);
    }
}
