use std::fmt;

use crate::data::AnalysisSnapshot;

/// One count and its share of the total, displayed as `25 (50%)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Share {
    pub count: u64,
    pub percent: u64,
}

impl Share {
    fn of(count: u64, total: u128) -> Self {
        if total == 0 {
            return Self::default();
        }
        // round(count / total * 100), halves rounded up. Widened so any
        // u64 counts fit.
        let percent = (count as u128 * 200 + total) / (total * 2);
        Self {
            count,
            percent: percent as u64,
        }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.count, self.percent)
    }
}

/// Sentiment totals derived from a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryStats {
    pub total: u64,
    pub positive: Share,
    pub negative: Share,
    pub neutral: Share,
}

impl SummaryStats {
    pub fn compute(snapshot: &AnalysisSnapshot) -> Self {
        let exact =
            snapshot.positive as u128 + snapshot.negative as u128 + snapshot.neutral as u128;
        Self {
            total: snapshot.total(),
            positive: Share::of(snapshot.positive, exact),
            negative: Share::of(snapshot.negative, exact),
            neutral: Share::of(snapshot.neutral, exact),
        }
    }

    /// Display strings in positive, negative, neutral order
    pub fn labels(&self) -> [String; 3] {
        [
            self.positive.to_string(),
            self.negative.to_string(),
            self.neutral.to_string(),
        ]
    }
}
