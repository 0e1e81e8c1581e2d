//! Fixed ABC permutation patterns and their occurrence counts.

use serde::{Serialize, Serializer, ser::SerializeMap};

pub const PATTERN_LENGTH: usize = 3;

pub const PATTERNS: [&str; 12] = [
    "ABC", "abc", "BCA", "bca", "CAB", "cab", "CBA", "cba", "ACB", "acb", "BAC", "bac",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternCount {
    pattern: &'static str,
    count: usize,
}

impl PatternCount {
    #[inline(always)]
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Per-pattern counts, kept in [`PATTERNS`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternCounts {
    entries: Vec<PatternCount>,
}

impl PatternCounts {
    pub fn get(&self, pattern: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.pattern == pattern)
            .map(|e| e.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternCount> {
        self.entries.iter()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

impl Serialize for PatternCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for e in &self.entries {
            map.serialize_entry(e.pattern, &e.count)?;
        }
        map.end()
    }
}

/// Counts non-overlapping occurrences of every pattern, scanning left to right.
pub fn count_patterns(sequence: &str) -> PatternCounts {
    let entries = PATTERNS
        .iter()
        .map(|&pattern| PatternCount {
            pattern,
            count: sequence.matches(pattern).count(),
        })
        .collect();
    PatternCounts { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tally of 3-windows equal to any pattern.
    fn matching_windows(sequence: &str) -> usize {
        sequence
            .as_bytes()
            .windows(PATTERN_LENGTH)
            .filter(|w| PATTERNS.iter().any(|p| p.as_bytes() == *w))
            .count()
    }

    #[test]
    fn test_patterns_are_permutations_of_abc() {
        for p in PATTERNS {
            let mut letters: Vec<char> = p.to_ascii_uppercase().chars().collect();
            letters.sort();
            assert_eq!(letters, vec!['A', 'B', 'C'], "{p}");
            assert!(p.chars().all(|c| c.is_uppercase()) || p.chars().all(|c| c.is_lowercase()));
        }
    }

    #[test]
    fn test_count_example_sequence() {
        let counts = count_patterns("ABCABCBCABCACBACCCAB");
        assert_eq!(counts.get("ABC"), Some(3));
        assert_eq!(counts.get("BCA"), Some(3));
        assert_eq!(counts.get("CAB"), Some(3));
        assert_eq!(counts.get("CBA"), Some(1));
        assert_eq!(counts.get("ACB"), Some(1));
        assert_eq!(counts.get("BAC"), Some(1));
        for p in ["abc", "bca", "cab", "cba", "acb", "bac"] {
            assert_eq!(counts.get(p), Some(0), "{p}");
        }
        assert_eq!(counts.total(), 12);
    }

    #[test]
    fn test_count_is_case_sensitive() {
        let counts = count_patterns("AbCaBcabc");
        assert_eq!(counts.get("abc"), Some(1));
        assert_eq!(counts.get("bca"), Some(0));
        assert_eq!(counts.get("cab"), Some(1));
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_unknown_pattern_lookup() {
        assert_eq!(count_patterns("ABC").get("AAA"), None);
    }

    #[test]
    fn test_short_sequences_count_nothing() {
        for s in ["", "A", "AB", "cb"] {
            assert_eq!(count_patterns(s).total(), 0, "{s}");
        }
    }

    #[test]
    fn test_iter_keeps_pattern_order() {
        let counts = count_patterns("bac");
        let order: Vec<&str> = counts.iter().map(|e| e.pattern()).collect();
        assert_eq!(order, PATTERNS.to_vec());
        assert_eq!(counts.iter().last().map(|e| e.count()), Some(1));
    }

    #[test]
    fn test_substring_counts_equal_window_tally() {
        for s in [
            "ABCABCBCABCACBACCCAB",
            "ABCBCA",
            "abcabcab",
            "CBACBACBA",
            "AAABBBCCC",
            "ACBACBacbacb",
            "BACABCAB",
        ] {
            let counts = count_patterns(s);
            assert_eq!(counts.total(), matching_windows(s), "{s}");
            assert!(counts.total() <= s.len().saturating_sub(2), "{s}");
        }
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let json = serde_json::to_string(&count_patterns("ABC")).unwrap();
        assert!(json.starts_with(r#"{"ABC":1,"abc":0,"BCA":0"#), "{json}");
        assert!(json.ends_with(r#""bac":0}"#), "{json}");
    }
}
