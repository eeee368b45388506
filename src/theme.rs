//! Resolved layout configuration.
//!
//! Theme resolution (styling, inheritance, defaults) happens upstream; the
//! engine receives the handful of values it needs as one explicit struct
//! threaded through every builder call. No ambient global state.

use serde::{Deserialize, Serialize};

/// Layout settings the facet renderer reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Gap between adjacent panels, in points.
    pub panel_spacing: f64,
    /// Explicit aspect ratio (height over width). Takes precedence over the
    /// coordinate system's preference and locks panel proportions when both
    /// scales are fixed.
    pub aspect_ratio: Option<f64>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel_spacing: 5.5,
            aspect_ratio: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.panel_spacing, 5.5);
        assert!(theme.aspect_ratio.is_none());
    }
}
