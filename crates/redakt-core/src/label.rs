use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three entity categories the engine redacts.
///
/// Declaration order is load-bearing: `Ord` drives the serialization order
/// of per-label maps (PER before ORG before LOC) and the iteration order of
/// the learned always-redact pass.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    /// Natural person.
    Per,
    /// Organization or company.
    Org,
    /// Location.
    Loc,
}

impl EntityLabel {
    /// All labels in canonical order.
    pub const ALL: [EntityLabel; 3] = [EntityLabel::Per, EntityLabel::Org, EntityLabel::Loc];

    /// The wire name used in span labels and the learned-corrections file.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityLabel::Per => "PER",
            EntityLabel::Org => "ORG",
            EntityLabel::Loc => "LOC",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PER" => Ok(EntityLabel::Per),
            "ORG" => Ok(EntityLabel::Org),
            "LOC" => Ok(EntityLabel::Loc),
            other => Err(UnknownLabel {
                label: other.to_string(),
            }),
        }
    }
}

/// Error for label strings outside the PER/ORG/LOC vocabulary.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown entity label: {label}")]
pub struct UnknownLabel {
    pub label: String,
}
