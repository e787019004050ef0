use serde::Serialize;
use std::fmt;

/// Ordinal rating of a trip's earnings efficiency, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum QualityTier {
    Trash,
    Bad,
    Fair,
    Good,
    Great,
}

/// Inclusive lower bounds in $/hour, best tier first.
const THRESHOLDS: [(f64, QualityTier); 4] = [
    (30.0, QualityTier::Great),
    (25.0, QualityTier::Good),
    (20.0, QualityTier::Fair),
    (15.0, QualityTier::Bad),
];

impl QualityTier {
    pub const ALL: [QualityTier; 5] = [
        QualityTier::Trash,
        QualityTier::Bad,
        QualityTier::Fair,
        QualityTier::Good,
        QualityTier::Great,
    ];

    /// Tier suggested for the given earnings per hour.
    pub fn suggest(earnings_per_hour: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(floor, _)| earnings_per_hour >= *floor)
            .map(|(_, tier)| *tier)
            .unwrap_or(QualityTier::Trash)
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            QualityTier::Trash => "Trash",
            QualityTier::Bad => "Bad",
            QualityTier::Fair => "Fair",
            QualityTier::Good => "Good",
            QualityTier::Great => "Great",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.to_db_str() == s)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|q| q.to_db_str().eq_ignore_ascii_case(code))
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QualityTier::Trash => "🗑️",
            QualityTier::Bad => "⚠️",
            QualityTier::Fair => "😐",
            QualityTier::Good => "👍",
            QualityTier::Great => "🏆",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
