pub mod about;
pub mod config;
pub mod error;
pub mod patterns;
pub mod report;
pub mod sequence;
pub mod session;
pub mod statistics;

pub use error::CensusError;
pub use patterns::{PATTERNS, PatternCounts, count_patterns};
pub use sequence::{Sequence, is_valid, sanitize};
pub use statistics::{Analysis, Statistics, analyze};
