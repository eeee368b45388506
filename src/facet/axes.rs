//! Axis bands.
//!
//! One bottom axis per grid column and one left axis per grid row, rendered
//! by the coordinate system against the scale-group ranges of the panel the
//! axis sits against. Axis cells are placed on tracks matching the panel
//! grid, spacing gaps included, so each axis lines up exactly with its
//! panel column or row.

use crate::coord::{AxisOrientation, CoordTrait, ScaleRanges};
use crate::facet::layout::Layout;
use crate::grob::Drawable;
use crate::table::GridTable;
use crate::theme::Theme;
use crate::unit::{with_spacing, Unit};

/// Bottom axis band: one axis per grid column.
pub(crate) fn build_bottom_axes(
    layout: &Layout,
    ranges: &ScaleRanges,
    coord: &dyn CoordTrait,
    theme: &Theme,
    panel_widths: &[Unit],
) -> GridTable {
    let tracks = with_spacing(panel_widths, theme.panel_spacing);
    let bottom = layout.nrow();
    let axes: Vec<(usize, Drawable)> = (1..=layout.ncol())
        .map(|col| {
            let entry = layout
                .at(bottom, col)
                .unwrap_or_else(|| panic!("no layout entry at grid ({}, {})", bottom, col));
            let grob = coord.render_axis(AxisOrientation::Horizontal, &entry.range(ranges), theme);
            (col, grob)
        })
        .collect();

    let height = axes
        .iter()
        .map(|(_, grob)| grob.natural_size().height)
        .fold(0.0, f64::max);
    let mut table = GridTable::new(vec![Unit::Pt(height)], tracks);
    for (col, grob) in axes {
        table.place(0, (col - 1) * 2, format!("axis-b-{}", col), grob);
    }
    table
}

/// Left axis band: one axis per grid row.
pub(crate) fn build_left_axes(
    layout: &Layout,
    ranges: &ScaleRanges,
    coord: &dyn CoordTrait,
    theme: &Theme,
    panel_heights: &[Unit],
) -> GridTable {
    let tracks = with_spacing(panel_heights, theme.panel_spacing);
    let axes: Vec<(usize, Drawable)> = (1..=layout.nrow())
        .map(|row| {
            let entry = layout
                .at(row, 1)
                .unwrap_or_else(|| panic!("no layout entry at grid ({}, 1)", row));
            let grob = coord.render_axis(AxisOrientation::Vertical, &entry.range(ranges), theme);
            (row, grob)
        })
        .collect();

    let width = axes
        .iter()
        .map(|(_, grob)| grob.natural_size().width)
        .fold(0.0, f64::max);
    let mut table = GridTable::new(tracks, vec![Unit::Pt(width)]);
    for (row, grob) in axes {
        table.place((row - 1) * 2, 0, format!("axis-l-{}", row), grob);
    }
    table
}
