use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Offset distance per polygon edge, in mm.
///
/// Edges without an explicit entry use the default. Lookups clamp to
/// `max(0, d)` and treat non-finite values as 0; no upper bound is enforced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeDistances {
    default: f64,
    per_edge: BTreeMap<usize, f64>,
}

impl EdgeDistances {
    /// The same distance on every edge.
    #[must_use]
    pub fn uniform(distance: f64) -> Self {
        Self {
            default: distance,
            per_edge: BTreeMap::new(),
        }
    }

    /// One distance per edge in order; edges past the end of the slice get 0.
    #[must_use]
    pub fn from_slice(distances: &[f64]) -> Self {
        Self {
            default: 0.0,
            per_edge: distances.iter().copied().enumerate().collect(),
        }
    }

    /// Replaces the fallback distance for unlisted edges.
    #[must_use]
    pub fn with_default(mut self, distance: f64) -> Self {
        self.default = distance;
        self
    }

    /// Sets the distance of a single edge.
    #[must_use]
    pub fn with_edge(mut self, edge: usize, distance: f64) -> Self {
        self.per_edge.insert(edge, distance);
        self
    }

    /// Effective distance of `edge`.
    #[must_use]
    pub fn get(&self, edge: usize) -> f64 {
        let raw = self.per_edge.get(&edge).copied().unwrap_or(self.default);
        if raw.is_finite() {
            raw.max(0.0)
        } else {
            0.0
        }
    }

    /// Returns `true` if `edge` projects outward at all.
    #[must_use]
    pub fn projects(&self, edge: usize) -> bool {
        self.get(edge) > 0.0
    }
}

/// Eaves settings as stored on a floor record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EavesSettings {
    pub enabled: bool,
    pub amount_mm: f64,
    /// Overrides of `amount_mm` keyed by edge index.
    pub per_edge: BTreeMap<usize, f64>,
}

impl EavesSettings {
    /// Resolves the settings into offset distances. Disabled eaves project nowhere.
    #[must_use]
    pub fn edge_distances(&self) -> EdgeDistances {
        if !self.enabled {
            return EdgeDistances::uniform(0.0);
        }
        EdgeDistances {
            default: self.amount_mm,
            per_edge: self.per_edge.clone(),
        }
    }
}
