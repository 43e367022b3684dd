//! Stat model: the five tracked stats, their point totals, and sparse
//! updates.
//!
//! Data flows into this layer from the host (JSON deserialization of
//! snapshots and updates supplied by the persistence layer). The geometry
//! pipeline reads a [`StatValues`] record and never mutates it.
//!
//! The stat set is closed and ordered: the declaration order of [`StatId`] is
//! the clockwise placement order of the arms, starting at the top. Totals are
//! a fixed-size record rather than an open-ended map, so a "missing key" is
//! simply a zero field and an unknown key cannot exist past the decode
//! boundary.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use serde::{Deserialize, Serialize};

/// One of the five tracked stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatId {
    /// Physical activity.
    Physical,
    /// Mental exercise.
    Mental,
    /// Social connection.
    Social,
    /// Creative work.
    Creative,
    /// Productive output.
    Productive,
}

impl StatId {
    /// All stats in arm order (clockwise from the top).
    pub const ALL: [Self; 5] = [
        Self::Physical,
        Self::Mental,
        Self::Social,
        Self::Creative,
        Self::Productive,
    ];

    /// Zero-based arm index of this stat.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Physical => 0,
            Self::Mental => 1,
            Self::Social => 2,
            Self::Creative => 3,
            Self::Productive => 4,
        }
    }

    /// Human-readable name shown on the tooltip label.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Physical => "Physical",
            Self::Mental => "Mental",
            Self::Social => "Social",
            Self::Creative => "Creative",
            Self::Productive => "Productive",
        }
    }

    /// Accent color for this stat as a CSS color string.
    ///
    /// The star itself keeps its fixed gold palette; the accent appears only
    /// on the tooltip label.
    #[must_use]
    pub fn accent_color(self) -> &'static str {
        match self {
            Self::Physical => "#E74C3C",
            Self::Mental => "#9B59B6",
            Self::Social => "#3498DB",
            Self::Creative => "#E67E22",
            Self::Productive => "#2ECC71",
        }
    }
}

/// Error returned when a snapshot or update payload cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The payload is not valid JSON, or a value is negative or non-integer.
    #[error("failed to decode stat payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Current point totals for all five stats.
///
/// Values are non-negative by construction; a payload carrying a negative
/// total fails to decode rather than distorting the radius scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatValues {
    /// Physical points. Missing in a payload means 0.
    pub physical: u32,
    /// Mental points. Missing in a payload means 0.
    pub mental: u32,
    /// Social points. Missing in a payload means 0.
    pub social: u32,
    /// Creative points. Missing in a payload means 0.
    pub creative: u32,
    /// Productive points. Missing in a payload means 0.
    pub productive: u32,
}

impl StatValues {
    /// An all-zero record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a full snapshot payload, e.g. `{"physical": 12, "mental": 3}`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the payload is not a valid stat mapping.
    pub fn from_json(payload: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Point total for one stat.
    #[must_use]
    pub fn get(&self, stat: StatId) -> u32 {
        match stat {
            StatId::Physical => self.physical,
            StatId::Mental => self.mental,
            StatId::Social => self.social,
            StatId::Creative => self.creative,
            StatId::Productive => self.productive,
        }
    }

    /// Set the point total for one stat.
    pub fn set(&mut self, stat: StatId, value: u32) {
        match stat {
            StatId::Physical => self.physical = value,
            StatId::Mental => self.mental = value,
            StatId::Social => self.social = value,
            StatId::Creative => self.creative = value,
            StatId::Productive => self.productive = value,
        }
    }

    /// Largest of the five totals.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        StatId::ALL.iter().map(|&s| self.get(s)).max().unwrap_or(0)
    }

    /// Apply a sparse update. Only present fields are applied.
    pub fn apply_partial(&mut self, partial: &PartialStatValues) {
        if let Some(v) = partial.physical {
            self.physical = v;
        }
        if let Some(v) = partial.mental {
            self.mental = v;
        }
        if let Some(v) = partial.social {
            self.social = v;
        }
        if let Some(v) = partial.creative {
            self.creative = v;
        }
        if let Some(v) = partial.productive {
            self.productive = v;
        }
    }
}

/// Sparse update for stat totals. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialStatValues {
    /// New physical total, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical: Option<u32>,
    /// New mental total, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mental: Option<u32>,
    /// New social total, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<u32>,
    /// New creative total, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative: Option<u32>,
    /// New productive total, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub productive: Option<u32>,
}

impl PartialStatValues {
    /// Decode an update payload, e.g. `{"social": 8}`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the payload is not a valid sparse stat mapping.
    pub fn from_json(payload: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(payload)?)
    }
}
