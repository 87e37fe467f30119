//! Recommendation types and ranking, the final stage of the scoring pipeline
//!
//! Rule groups emit unranked recommendation candidates as side artifacts
//! of their delta computation; the ranker sorts them by impact and
//! truncates to the top N. Candidates are never deduplicated by text:
//! textually identical suggestions from genuinely independent triggers
//! both survive.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default number of recommendations returned to callers
pub const MAX_RECOMMENDATIONS: usize = 8;

/// Recommendation priority, ordered low to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "низкий")]
    Low,
    #[serde(rename = "средний")]
    Medium,
    #[serde(rename = "высокий")]
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "низкий",
            Priority::Medium => "средний",
            Priority::High => "высокий",
        }
    }
}

/// One actionable recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    /// Short grouping label, e.g. "Сон", "Метаболизм"
    pub category: String,
    /// Imperative instruction
    pub action: String,
    /// Human-readable expected duration
    pub timeframe: String,
    /// Absolute score impact of the triggering rule; used only for sorting
    pub impact: f64,
}

impl Recommendation {
    pub fn new(
        priority: Priority,
        category: &str,
        action: &str,
        timeframe: &str,
        impact: f64,
    ) -> Self {
        Self {
            priority,
            category: category.to_string(),
            action: action.to_string(),
            timeframe: timeframe.to_string(),
            impact,
        }
    }
}

/// Sort candidates by descending impact and truncate to `limit`
///
/// Ties break by priority (высокий > средний > низкий), then by emission
/// order; the sort is stable, so re-ranking an already ranked list is a
/// no-op.
pub fn rank_recommendations(mut candidates: Vec<Recommendation>, limit: usize) -> Vec<Recommendation> {
    candidates.sort_by(|a, b| {
        b.impact
            .partial_cmp(&a.impact)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.priority.cmp(&a.priority))
    });
    candidates.truncate(limit);
    candidates
}
