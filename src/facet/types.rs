//! Facet option types.
//!
//! Scale sharing and space allocation options for grid facets. The
//! user-facing string forms are validated here, once, at construction —
//! never at use sites.

use serde::{Deserialize, Serialize};

use crate::{GgridError, Result};

/// Scale sharing options for facets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetScales {
    Fixed,
    Free,
    FreeX,
    FreeY,
}

impl FacetScales {
    /// Accepted string forms.
    pub const ALLOWED: &'static [&'static str] = &["fixed", "free", "free_x", "free_y"];

    /// Parse the user-facing string form.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "fixed" => Ok(FacetScales::Fixed),
            "free" => Ok(FacetScales::Free),
            "free_x" => Ok(FacetScales::FreeX),
            "free_y" => Ok(FacetScales::FreeY),
            other => Err(GgridError::ConfigurationError(format!(
                "invalid scales value '{}', expected one of: {}",
                other,
                Self::ALLOWED.join(", ")
            ))),
        }
    }

    /// Whether the x scale varies per panel column.
    pub fn free_x(&self) -> bool {
        matches!(self, FacetScales::Free | FacetScales::FreeX)
    }

    /// Whether the y scale varies per panel row.
    pub fn free_y(&self) -> bool {
        matches!(self, FacetScales::Free | FacetScales::FreeY)
    }
}

impl std::fmt::Display for FacetScales {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FacetScales::Fixed => "fixed",
            FacetScales::Free => "free",
            FacetScales::FreeX => "free_x",
            FacetScales::FreeY => "free_y",
        };
        write!(f, "{}", s)
    }
}

/// Space allocation options for facets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetSpace {
    Fixed,
    Free,
}

impl FacetSpace {
    /// Accepted string forms.
    pub const ALLOWED: &'static [&'static str] = &["fixed", "free"];

    /// Parse the user-facing string form.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "fixed" => Ok(FacetSpace::Fixed),
            "free" => Ok(FacetSpace::Free),
            other => Err(GgridError::ConfigurationError(format!(
                "invalid space value '{}', expected one of: {}",
                other,
                Self::ALLOWED.join(", ")
            ))),
        }
    }

    /// Whether tracks size proportionally to their scale's span.
    pub fn is_free(&self) -> bool {
        matches!(self, FacetSpace::Free)
    }
}

impl std::fmt::Display for FacetSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FacetSpace::Fixed => "fixed",
            FacetSpace::Free => "free",
        };
        write!(f, "{}", s)
    }
}
