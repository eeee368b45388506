//! Coordinate-system collaborator interface.
//!
//! The scale/coordinate abstraction lives outside this crate. The engine
//! talks to it through the [`CoordTrait`] render callbacks and consumes the
//! per-scale-group value ranges it computed; it never derives ranges from
//! data itself, so an upstream limit override simply arrives as the range
//! for that scale group.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::grob::Drawable;
use crate::theme::Theme;

/// Which edge an axis is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    /// Bottom edge, reading the x range.
    Horizontal,
    /// Left edge, reading the y range.
    Vertical,
}

/// Closed value range of one scale group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Smallest span used for proportional sizing. Keeps a degenerate
    /// single-value group from collapsing its grid track.
    pub const MIN_SPAN: f64 = 1e-9;

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Extent of the range, clamped to [`Self::MIN_SPAN`].
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(Self::MIN_SPAN)
    }
}

/// The x/y ranges one panel renders against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRange {
    pub x: ValueRange,
    pub y: ValueRange,
}

/// Externally computed value ranges, keyed by scale-group id per axis.
///
/// Fixed scales use the single group `1`; free scales use one group per
/// grid column (x) or grid row (y).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleRanges {
    x: HashMap<usize, ValueRange>,
    y: HashMap<usize, ValueRange>,
}

impl ScaleRanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared-scale constructor: one range per axis, group 1.
    pub fn shared(x: ValueRange, y: ValueRange) -> Self {
        let mut ranges = Self::new();
        ranges.insert_x(1, x);
        ranges.insert_y(1, y);
        ranges
    }

    pub fn insert_x(&mut self, group: usize, range: ValueRange) {
        self.x.insert(group, range);
    }

    pub fn insert_y(&mut self, group: usize, range: ValueRange) {
        self.y.insert(group, range);
    }

    /// Range of an x scale group. A group the layout references but the
    /// caller never supplied is a programming error.
    pub fn x_range(&self, group: usize) -> ValueRange {
        *self
            .x
            .get(&group)
            .unwrap_or_else(|| panic!("no range supplied for x scale group {}", group))
    }

    /// Range of a y scale group. See [`Self::x_range`].
    pub fn y_range(&self, group: usize) -> ValueRange {
        *self
            .y
            .get(&group)
            .unwrap_or_else(|| panic!("no range supplied for y scale group {}", group))
    }
}

/// Rendering callbacks the coordinate system provides per panel.
///
/// Implementations are assumed synchronous and side-effect-free; the engine
/// calls them once per panel, axis or band while assembling the composite.
pub trait CoordTrait: std::fmt::Debug {
    /// Render the axis for one edge of a panel.
    fn render_axis(
        &self,
        orientation: AxisOrientation,
        range: &PanelRange,
        theme: &Theme,
    ) -> Drawable;

    /// Panel backdrop (fills, grid lines), drawn below the content layers.
    fn render_background(&self, range: &PanelRange, theme: &Theme) -> Drawable;

    /// Panel overlay, drawn above the content layers.
    fn render_foreground(&self, range: &PanelRange, theme: &Theme) -> Drawable;

    /// Aspect ratio the coordinate system wants locked, if any.
    fn preferred_aspect_ratio(&self, range: &PanelRange) -> Option<f64> {
        let _ = range;
        None
    }
}
