//! Static sample data shared by every dashboard component

/// Log lines cycled through by the feed, in display order
pub const SAMPLE_LOG_LINES: [&str; 20] = [
    "Scanned Post: 'New Job Openings' → Classified as Safe",
    "Suspicious Link detected in Post: 'Free Crypto Giveaway'",
    "Post: 'Product Review' → Neutral sentiment",
    "Verified News Article classified as Safe",
    "Phishing attempt flagged in Post: 'Login to claim reward'",
    "Post: 'Weather Update' → Neutral",
    "Positive engagement on Post: 'Community Event'",
    "Post: 'Breaking News' → Safe",
    "Spam keywords detected in Post: 'Win iPhone Free'",
    "Community Post reviewed → Neutral",
    "Facebook\tभारत के वैज्ञानिकों पर गर्व है। Safe",
    "Misleading claims about Indian policies, Suspicious",
    "Twitter/X\tMisleading claims about Indian policie Neutral",
    "Facebook\tIndia’s startups are growing fast. Safe",
    "LinkedIn\tUnverified allegations used to criticise India., Suspicious",
    "Koo\tभारत के वैज्ञानिकों पर गर्व है। Neutral",
    "Jay hind, Safe",
    "kashmir pandit, Suspicious",
    "mera desh maahan, Neutral",
    "GoIndia, Safe",
];

/// Share of flagged posts attributed to one platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformShare {
    pub name: String,
    pub percent: u64,
}

impl PlatformShare {
    pub fn new(name: impl Into<String>, percent: u64) -> Self {
        Self {
            name: name.into(),
            percent,
        }
    }
}

/// Fixed moderation counts. Platforms keep insertion order, which is the
/// order every panel lists them in. Percentages are not required to sum to 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSnapshot {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub platforms: Vec<PlatformShare>,
}

impl AnalysisSnapshot {
    /// The synthetic snapshot rendered by the dashboard
    pub fn sample() -> Self {
        Self {
            positive: 25,
            negative: 15,
            neutral: 10,
            platforms: vec![
                PlatformShare::new("Twitter", 20),
                PlatformShare::new("Facebook", 15),
                PlatformShare::new("Instagram", 10),
                PlatformShare::new("Reddit", 5),
                PlatformShare::new("LinkedIn", 12),
                PlatformShare::new("YouTube", 18),
            ],
        }
    }

    /// Sum of the three counts, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        self.positive
            .saturating_add(self.negative)
            .saturating_add(self.neutral)
    }
}
