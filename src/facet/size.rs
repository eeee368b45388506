//! Relative panel sizing.
//!
//! Panel tracks are proportional [`Unit::Null`] units: equal shares when
//! space is fixed, the span of each track's scale group when space is free.
//! With fixed space and fixed scales, a declared aspect ratio scales the row
//! units instead and flips the `respect` flag so the driver locks the
//! proportions.

use crate::coord::{CoordTrait, PanelRange, ScaleRanges};
use crate::facet::grid::FacetGrid;
use crate::facet::layout::Layout;
use crate::theme::Theme;
use crate::unit::{SizeVec, Unit};

/// Width unit per grid column.
pub(crate) fn panel_widths(spec: &FacetGrid, layout: &Layout, ranges: &ScaleRanges) -> SizeVec {
    (1..=layout.ncol())
        .map(|col| {
            if spec.space().is_free() {
                let group = if spec.scales().free_x() { col } else { 1 };
                Unit::Null(ranges.x_range(group).span())
            } else {
                Unit::Null(1.0)
            }
        })
        .collect()
}

/// Height unit per grid row, plus whether proportions must be respected.
pub(crate) fn panel_heights(
    spec: &FacetGrid,
    layout: &Layout,
    ranges: &ScaleRanges,
    coord: &dyn CoordTrait,
    theme: &Theme,
) -> (SizeVec, bool) {
    let aspect = aspect_ratio(spec, ranges, coord, theme);
    let heights = (1..=layout.nrow())
        .map(|row| {
            if spec.space().is_free() {
                let group = if spec.scales().free_y() { row } else { 1 };
                Unit::Null(ranges.y_range(group).span())
            } else {
                Unit::Null(aspect.unwrap_or(1.0))
            }
        })
        .collect();
    (heights, aspect.is_some())
}

/// Aspect ratio to lock, if any. Only meaningful when both scales are fixed
/// and space is fixed; the theme's explicit setting wins over the
/// coordinate system's preference.
fn aspect_ratio(
    spec: &FacetGrid,
    ranges: &ScaleRanges,
    coord: &dyn CoordTrait,
    theme: &Theme,
) -> Option<f64> {
    let scales = spec.scales();
    if scales.free_x() || scales.free_y() || spec.space().is_free() {
        return None;
    }
    theme.aspect_ratio.or_else(|| {
        let range = PanelRange {
            x: ranges.x_range(1),
            y: ranges.y_range(1),
        };
        coord.preferred_aspect_ratio(&range)
    })
}
