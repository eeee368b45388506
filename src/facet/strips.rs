//! Strip label bands.
//!
//! One stacked band per faceting variable on a side: column strips label
//! grid columns from above, row strips label grid rows from the right. Band
//! thickness is content-driven (the largest rendered label in the band);
//! the parallel dimension reuses the panel grid's tracks, spacing gaps
//! included, so strip cells align with panel grid lines.

use crate::facet::labeller::Labeller;
use crate::facet::layout::{FacetValue, Layout};
use crate::grob::{Drawable, Size, TextRenderer};
use crate::table::GridTable;
use crate::theme::Theme;
use crate::unit::{with_spacing, SizeVec, Unit};

/// Which edge a strip band sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripPosition {
    /// Column labels above the panel grid.
    Top,
    /// Row labels beside the panel grid.
    Right,
}

/// One rendered strip cell.
#[derive(Debug, Clone)]
pub struct StripCell {
    /// 1-based grid row or column the cell labels.
    pub index: usize,
    /// Faceting variable the cell belongs to.
    pub variable: String,
    /// Value being labelled.
    pub value: FacetValue,
    /// Resolved label text.
    pub label: String,
    /// Rendered label drawable.
    pub grob: Drawable,
}

/// Strip cells for one side: one inner vector per variable band, one cell
/// per grid index.
pub(crate) fn strip_cells(
    position: StripPosition,
    layout: &Layout,
    labeller: &Labeller,
    text: &dyn TextRenderer,
    theme: &Theme,
) -> Vec<Vec<StripCell>> {
    let (vars, count) = match position {
        StripPosition::Top => (layout.col_vars(), layout.ncol()),
        StripPosition::Right => (layout.row_vars(), layout.nrow()),
    };
    vars.iter()
        .enumerate()
        .map(|(band, variable)| {
            (1..=count)
                .map(|index| {
                    let values = match position {
                        StripPosition::Top => layout.col_values(index),
                        StripPosition::Right => layout.row_values(index),
                    };
                    let value = values[band].clone();
                    let label = labeller.label(variable, &value);
                    let grob = text.render(&label, theme);
                    StripCell {
                        index,
                        variable: variable.clone(),
                        value,
                        label,
                        grob,
                    }
                })
                .collect()
        })
        .collect()
}

/// Assemble one side's strip block over the given panel tracks.
///
/// Zero faceting variables on the side yield a zero-sized placeholder block
/// whose parallel tracks still match the panel grid, so composition stays
/// dimensionally consistent.
pub(crate) fn build_strips(
    position: StripPosition,
    layout: &Layout,
    labeller: &Labeller,
    text: &dyn TextRenderer,
    theme: &Theme,
    panel_tracks: &[Unit],
) -> GridTable {
    let cells = strip_cells(position, layout, labeller, text, theme);
    let tracks = with_spacing(panel_tracks, theme.panel_spacing);
    match position {
        StripPosition::Top => {
            let heights: SizeVec = cells
                .iter()
                .map(|band| Unit::Pt(band_thickness(band, |size| size.height)))
                .collect();
            let mut table = GridTable::new(heights, tracks);
            for (band, band_cells) in cells.iter().enumerate() {
                for cell in band_cells {
                    table.place(
                        band,
                        (cell.index - 1) * 2,
                        format!("strip-t-{}-{}", band + 1, cell.index),
                        cell.grob.clone(),
                    );
                }
            }
            table
        }
        StripPosition::Right => {
            let widths: SizeVec = cells
                .iter()
                .map(|band| Unit::Pt(band_thickness(band, |size| size.width)))
                .collect();
            let mut table = GridTable::new(tracks, widths);
            for (band, band_cells) in cells.iter().enumerate() {
                for cell in band_cells {
                    table.place(
                        (cell.index - 1) * 2,
                        band,
                        format!("strip-r-{}-{}", band + 1, cell.index),
                        cell.grob.clone(),
                    );
                }
            }
            table
        }
    }
}

fn band_thickness(cells: &[StripCell], extent: impl Fn(&Size) -> f64) -> f64 {
    cells
        .iter()
        .map(|cell| extent(&cell.grob.natural_size()))
        .fold(0.0, f64::max)
}
