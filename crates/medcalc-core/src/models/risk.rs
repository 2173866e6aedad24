use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse severity category derived by thresholding a calculator score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Minimal,
    Low,
    Mild,
    Medium,
    Moderate,
    High,
    Severe,
    VeryHigh,
    /// No classification possible (e.g. SCORE2 input outside the chart).
    Unknown,
}

impl RiskLevel {
    /// Wire key, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Mild => "mild",
            Self::Medium => "medium",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
            Self::VeryHigh => "very_high",
            Self::Unknown => "unknown",
        }
    }

    /// Danish label shown to clinicians.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Low => "Lav",
            Self::Mild => "Let",
            Self::Medium => "Middel",
            Self::Moderate => "Moderat",
            Self::High => "Høj",
            Self::Severe => "Svær",
            Self::VeryHigh => "Meget høj",
            Self::Unknown => "Ukendt",
        }
    }

    /// Ordinal severity used to compare bands across calculators.
    ///
    /// `Medium`/`Moderate` and `Severe`/`VeryHigh` share a rank: no
    /// calculator uses both members of a pair. `Unknown` has no rank.
    pub fn severity(&self) -> Option<u8> {
        match self {
            Self::Minimal => Some(0),
            Self::Low => Some(1),
            Self::Mild => Some(2),
            Self::Medium | Self::Moderate => Some(3),
            Self::High => Some(4),
            Self::Severe | Self::VeryHigh => Some(5),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
