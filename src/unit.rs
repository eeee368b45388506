//! Track size units for grid layout.
//!
//! Every row height and column width in a [`GridTable`](crate::table::GridTable)
//! is a [`Unit`]: either an absolute size in points or a proportional "null"
//! share of whatever space remains once the absolute tracks are taken out.
//! Strip and axis bands use points; panel tracks use null units so the
//! consuming layout driver decides the final pixel sizes.

use serde::{Deserialize, Serialize};

/// A single row-height or column-width unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Absolute size in points.
    Pt(f64),
    /// Proportional share of the remaining space. `Null(1.0)` on every track
    /// of a dimension yields equal shares.
    Null(f64),
}

impl Unit {
    /// Whether this unit contributes a fixed number of points.
    pub fn is_absolute(&self) -> bool {
        matches!(self, Unit::Pt(_))
    }

    /// Absolute contribution in points. Proportional units contribute none.
    pub fn points(&self) -> f64 {
        match self {
            Unit::Pt(points) => *points,
            Unit::Null(_) => 0.0,
        }
    }

    /// Proportional weight. Absolute units carry none.
    pub fn fraction(&self) -> f64 {
        match self {
            Unit::Pt(_) => 0.0,
            Unit::Null(weight) => *weight,
        }
    }
}

/// Ordered track sizes for one grid dimension.
pub type SizeVec = Vec<Unit>;

/// Interleave a fixed gap between consecutive tracks.
///
/// The outer border gets no gap, so `n` tracks become `2n - 1` (and zero
/// tracks stay zero).
pub fn with_spacing(tracks: &[Unit], gap: f64) -> SizeVec {
    let mut spaced = Vec::with_capacity(tracks.len().saturating_mul(2));
    for (i, track) in tracks.iter().enumerate() {
        if i > 0 {
            spaced.push(Unit::Pt(gap));
        }
        spaced.push(*track);
    }
    spaced
}
