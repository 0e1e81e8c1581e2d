use crate::patterns::{PATTERN_LENGTH, PatternCounts, count_patterns};
use crate::sequence::Sequence;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Statistics {
    pub total_entries: usize,
    pub total_alterations: usize,
    pub successful_alterations: usize,
    pub percentage_successful: f64,
}

impl Statistics {
    pub fn calculate(sequence: &str, counts: &PatternCounts) -> Self {
        let total_entries = sequence.chars().count();
        let total_alterations = total_entries.saturating_sub(PATTERN_LENGTH - 1);
        let successful_alterations = counts.total();
        Self {
            total_entries,
            total_alterations,
            successful_alterations,
            percentage_successful: Self::percentage(successful_alterations, total_alterations),
        }
    }

    #[inline(always)]
    fn percentage(successful: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            successful as f64 / total as f64 * 100.0
        }
    }
}

/// Counts and statistics for one sequence.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    pub sequence: Sequence,
    pub counts: PatternCounts,
    pub statistics: Statistics,
}

pub fn analyze(sequence: Sequence) -> Analysis {
    let counts = count_patterns(sequence.as_str());
    let statistics = Statistics::calculate(sequence.as_str(), &counts);
    log::debug!(
        "analyzed {} entries: {} of {} windows matched",
        statistics.total_entries,
        statistics.successful_alterations,
        statistics.total_alterations
    );
    Analysis {
        sequence,
        counts,
        statistics,
    }
}
