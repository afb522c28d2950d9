use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sensitivity tier: the single policy bundle controlling pattern scope,
/// confidence threshold, and ORG suppression. The three knobs are not
/// independently configurable.
///
/// `Ord` follows declaration order (Conservative < Standard < Aggressive)
/// and is what gates tier-dependent detectors in the pattern library.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    /// Redact less, fewer false positives. Legal entities (ORG) are exempt.
    Conservative,
    /// Balanced default.
    #[default]
    Standard,
    /// Redact more, may include false positives.
    Aggressive,
}

impl Sensitivity {
    /// Minimum statistical detection score accepted at this tier.
    pub fn threshold(self) -> f64 {
        match self {
            Sensitivity::Conservative => 0.90,
            Sensitivity::Standard => 0.80,
            Sensitivity::Aggressive => 0.60,
        }
    }

    /// Whether ORG detections are globally suppressed. Only the
    /// conservative tier models the policy that legal entities have no
    /// personal-privacy claim.
    pub fn suppress_org(self) -> bool {
        matches!(self, Sensitivity::Conservative)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sensitivity::Conservative => "conservative",
            Sensitivity::Standard => "standard",
            Sensitivity::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sensitivity {
    type Err = UnknownSensitivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conservative" => Ok(Sensitivity::Conservative),
            "standard" => Ok(Sensitivity::Standard),
            "aggressive" => Ok(Sensitivity::Aggressive),
            other => Err(UnknownSensitivity {
                tier: other.to_string(),
            }),
        }
    }
}

/// Error for tier names outside conservative/standard/aggressive.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown sensitivity tier: {tier}")]
pub struct UnknownSensitivity {
    pub tier: String,
}
