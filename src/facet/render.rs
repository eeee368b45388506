//! Panel assembly and composite rendering.
//!
//! The assembler stacks background, content layers and foreground per panel
//! into one spaced grid; the composite renderer nests that grid with the
//! strip and axis bands into the final table handed back to the plot
//! driver. No geometry decisions are made here, only structural nesting
//! over matching track vectors.

use tracing::debug;

use crate::coord::{CoordTrait, ScaleRanges};
use crate::facet::axes::{build_bottom_axes, build_left_axes};
use crate::facet::grid::FacetGrid;
use crate::facet::layout::Layout;
use crate::facet::size::{panel_heights, panel_widths};
use crate::facet::strips::{build_strips, StripPosition};
use crate::grob::{Drawable, Stack, TextRenderer};
use crate::table::GridTable;
use crate::theme::Theme;
use crate::unit::{with_spacing, Unit};
use crate::Result;

/// Everything the renderer consumes from the surrounding stack.
pub struct RenderInputs<'a> {
    /// Trained layout.
    pub layout: &'a Layout,
    /// Per-panel content, one vector per geometric layer, each indexed by
    /// `panel - 1`.
    pub layers: &'a [Vec<Drawable>],
    /// Externally computed per-scale-group ranges.
    pub ranges: &'a ScaleRanges,
    /// Coordinate-system render callbacks.
    pub coord: &'a dyn CoordTrait,
    /// Backend text rendering for strip labels.
    pub text: &'a dyn TextRenderer,
    /// Resolved layout configuration.
    pub theme: &'a Theme,
}

pub(crate) fn render_grid(spec: &FacetGrid, inputs: &RenderInputs<'_>) -> Result<GridTable> {
    let layout = inputs.layout;
    for (i, layer) in inputs.layers.iter().enumerate() {
        assert_eq!(
            layer.len(),
            layout.panel_count(),
            "content layer {} holds {} panels, layout has {}",
            i,
            layer.len(),
            layout.panel_count()
        );
    }

    let widths = panel_widths(spec, layout, inputs.ranges);
    let (heights, respect) = panel_heights(spec, layout, inputs.ranges, inputs.coord, inputs.theme);

    let panels = assemble_panels(layout, inputs, &widths, &heights, respect);
    let strip_top = build_strips(
        StripPosition::Top,
        layout,
        spec.labeller(),
        inputs.text,
        inputs.theme,
        &widths,
    );
    let strip_right = build_strips(
        StripPosition::Right,
        layout,
        spec.labeller(),
        inputs.text,
        inputs.theme,
        &heights,
    );
    let axis_bottom = build_bottom_axes(layout, inputs.ranges, inputs.coord, inputs.theme, &widths);
    let axis_left = build_left_axes(layout, inputs.ranges, inputs.coord, inputs.theme, &heights);

    debug!(
        panels = layout.panel_count(),
        layers = inputs.layers.len(),
        respect,
        "assembled facet grid composite"
    );

    Ok(compose(panels, strip_top, strip_right, axis_bottom, axis_left))
}

/// Stack each panel's drawables onto the spaced panel grid.
fn assemble_panels(
    layout: &Layout,
    inputs: &RenderInputs<'_>,
    widths: &[Unit],
    heights: &[Unit],
    respect: bool,
) -> GridTable {
    let spacing = inputs.theme.panel_spacing;
    let mut table = GridTable::new(
        with_spacing(heights, spacing),
        with_spacing(widths, spacing),
    );

    // Every grid cell gets a placeholder first; a cross-product layout then
    // overwrites all of them.
    for row in 1..=layout.nrow() {
        for col in 1..=layout.ncol() {
            table.place(
                (row - 1) * 2,
                (col - 1) * 2,
                format!("panel-{}-{}", row, col),
                Drawable::null(),
            );
        }
    }

    for entry in layout.entries() {
        let range = entry.range(inputs.ranges);
        let mut children = Vec::with_capacity(inputs.layers.len() + 2);
        children.push(inputs.coord.render_background(&range, inputs.theme));
        for layer in inputs.layers {
            children.push(layer[entry.panel - 1].clone());
        }
        children.push(inputs.coord.render_foreground(&range, inputs.theme));
        table.place(
            (entry.row - 1) * 2,
            (entry.col - 1) * 2,
            format!("panel-{}-{}", entry.row, entry.col),
            Drawable::new(Stack::new(children)),
        );
    }

    table.set_respect(respect);
    table
}

/// Nest the panel grid with its strip and axis bands.
///
/// Outer structure, top to bottom and left to right:
///
/// ```text
///              .  strip-top   .
///   axis-l     |  panels      |  strip-right
///              .  axis-b      .
/// ```
fn compose(
    panels: GridTable,
    strip_top: GridTable,
    strip_right: GridTable,
    axis_bottom: GridTable,
    axis_left: GridTable,
) -> GridTable {
    let top_height: f64 = strip_top.heights().iter().map(Unit::points).sum();
    let right_width: f64 = strip_right.widths().iter().map(Unit::points).sum();
    let bottom_height: f64 = axis_bottom.heights().iter().map(Unit::points).sum();
    let left_width: f64 = axis_left.widths().iter().map(Unit::points).sum();
    let respect = panels.respect();

    let mut outer = GridTable::new(
        vec![
            Unit::Pt(top_height),
            Unit::Null(1.0),
            Unit::Pt(bottom_height),
        ],
        vec![Unit::Pt(left_width), Unit::Null(1.0), Unit::Pt(right_width)],
    );
    outer.place(0, 1, "strip-top", Drawable::new(strip_top));
    outer.place(1, 0, "axis-l", Drawable::new(axis_left));
    outer.place(1, 1, "panels", Drawable::new(panels));
    outer.place(1, 2, "strip-right", Drawable::new(strip_right));
    outer.place(2, 1, "axis-b", Drawable::new(axis_bottom));
    outer.set_respect(respect);
    outer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::ValueRange;
    use crate::facet::types::{FacetScales, FacetSpace};
    use crate::facet::FacetTrait;
    use crate::testing::{cyl_am_frame, layer_for, one_col_frame, StubCoord, StubText};
    use crate::{DataFrame, FacetGrid};

    fn render(
        facet: &FacetGrid,
        data: &DataFrame,
        ranges: &ScaleRanges,
        coord: &StubCoord,
        layer_count: usize,
    ) -> (Layout, GridTable) {
        let layout = facet.train(data).unwrap();
        let layers: Vec<Vec<Drawable>> = (0..layer_count)
            .map(|_| layer_for(&layout))
            .collect();
        let theme = Theme::default();
        let inputs = RenderInputs {
            layout: &layout,
            layers: &layers,
            ranges,
            coord,
            text: &StubText,
            theme: &theme,
        };
        let table = facet.render(&inputs).unwrap();
        (layout, table)
    }

    fn shared_ranges() -> ScaleRanges {
        ScaleRanges::shared(ValueRange::new(0.0, 1.0), ValueRange::new(0.0, 1.0))
    }

    #[test]
    fn test_composite_has_named_sub_blocks() {
        let facet = FacetGrid::from_formula("cyl ~ am").unwrap();
        let (_, table) = render(
            &facet,
            &cyl_am_frame(),
            &shared_ranges(),
            &StubCoord::default(),
            1,
        );
        for name in ["strip-top", "strip-right", "panels", "axis-b", "axis-l"] {
            assert!(table.find(name).is_some(), "missing sub-block {}", name);
        }
        assert_eq!(table.nrow(), 3);
        assert_eq!(table.ncol(), 3);
    }

    #[test]
    fn test_band_tracks_align_with_panel_tracks() {
        // Alignment invariant: every band shares the panel grid's track
        // count on the dimension it runs along.
        let facet = FacetGrid::from_formula("cyl ~ am").unwrap();
        let (layout, table) = render(
            &facet,
            &cyl_am_frame(),
            &shared_ranges(),
            &StubCoord::default(),
            1,
        );
        let panels = table.find("panels").unwrap().grob.as_table().unwrap();
        let spaced_cols = layout.ncol() * 2 - 1;
        let spaced_rows = layout.nrow() * 2 - 1;
        assert_eq!(panels.ncol(), spaced_cols);
        assert_eq!(panels.nrow(), spaced_rows);

        let strip_top = table.find("strip-top").unwrap().grob.as_table().unwrap();
        assert_eq!(strip_top.ncol(), spaced_cols);
        assert_eq!(strip_top.nrow(), layout.col_vars().len());

        let strip_right = table.find("strip-right").unwrap().grob.as_table().unwrap();
        assert_eq!(strip_right.nrow(), spaced_rows);
        assert_eq!(strip_right.ncol(), layout.row_vars().len());

        let axis_b = table.find("axis-b").unwrap().grob.as_table().unwrap();
        assert_eq!(axis_b.ncol(), spaced_cols);
        let axis_l = table.find("axis-l").unwrap().grob.as_table().unwrap();
        assert_eq!(axis_l.nrow(), spaced_rows);
    }

    #[test]
    fn test_every_panel_is_a_stack_of_layers() {
        let facet = FacetGrid::from_formula("cyl ~ am").unwrap();
        let (layout, table) = render(
            &facet,
            &cyl_am_frame(),
            &shared_ranges(),
            &StubCoord::default(),
            2,
        );
        let panels = table.find("panels").unwrap().grob.as_table().unwrap();
        for entry in layout.entries() {
            let cell = panels
                .cell((entry.row - 1) * 2, (entry.col - 1) * 2)
                .unwrap();
            assert_eq!(cell.name, format!("panel-{}-{}", entry.row, entry.col));
        }
        // background + 2 content layers + foreground per panel, checked via
        // the panel count of placed cells.
        assert_eq!(panels.cell_count(), layout.panel_count());
    }

    #[test]
    fn test_outer_bands_take_measured_sizes() {
        let facet = FacetGrid::from_formula("cyl ~ am").unwrap();
        let (_, table) = render(
            &facet,
            &cyl_am_frame(),
            &shared_ranges(),
            &StubCoord::default(),
            1,
        );
        // StubText: 10pt tall labels; StubCoord: 12pt bottom axes, 16pt
        // left axes; one-character row labels are 6pt wide.
        assert_eq!(table.heights()[0], Unit::Pt(10.0));
        assert_eq!(table.heights()[1], Unit::Null(1.0));
        assert_eq!(table.heights()[2], Unit::Pt(12.0));
        assert_eq!(table.widths()[0], Unit::Pt(16.0));
        assert_eq!(table.widths()[2], Unit::Pt(6.0));
    }

    #[test]
    fn test_single_row_grid_composites() {
        // Scenario: one column variable, three panels in one row, fixed
        // scales; all panel width tracks equal.
        let facet = FacetGrid::from_formula(". ~ gear").unwrap();
        let (layout, table) = render(
            &facet,
            &one_col_frame(),
            &shared_ranges(),
            &StubCoord::default(),
            1,
        );
        assert_eq!(layout.dims(), (1, 3));
        let panels = table.find("panels").unwrap().grob.as_table().unwrap();
        let panel_widths: Vec<Unit> = panels
            .widths()
            .iter()
            .copied()
            .filter(|unit| !unit.is_absolute())
            .collect();
        assert_eq!(panel_widths, vec![Unit::Null(1.0); 3]);
        // No row variables: the right strip is a zero-sized placeholder but
        // keeps the panel grid's row tracks.
        let strip_right = table.find("strip-right").unwrap().grob.as_table().unwrap();
        assert_eq!(strip_right.ncol(), 0);
        assert_eq!(strip_right.nrow(), 1);
        assert_eq!(table.widths()[2], Unit::Pt(0.0));
    }

    #[test]
    fn test_respect_propagates_to_composite() {
        let facet = FacetGrid::from_formula("cyl ~ am").unwrap();
        let coord = StubCoord { aspect: Some(1.5) };
        let (_, table) = render(&facet, &cyl_am_frame(), &shared_ranges(), &coord, 1);
        assert!(table.respect());
        let panels = table.find("panels").unwrap().grob.as_table().unwrap();
        assert!(panels.respect());
    }

    #[test]
    fn test_free_space_tracks_reach_the_panel_grid() {
        let facet = FacetGrid::from_formula("cyl ~ am")
            .unwrap()
            .with_scales(FacetScales::Free)
            .with_space(FacetSpace::Free);
        let mut ranges = ScaleRanges::new();
        ranges.insert_x(1, ValueRange::new(0.0, 2.0));
        ranges.insert_x(2, ValueRange::new(0.0, 6.0));
        for row in 1..=3 {
            ranges.insert_y(row, ValueRange::new(0.0, row as f64));
        }
        let (_, table) = render(
            &facet,
            &cyl_am_frame(),
            &ranges,
            &StubCoord::default(),
            1,
        );
        let panels = table.find("panels").unwrap().grob.as_table().unwrap();
        assert_eq!(panels.widths()[0], Unit::Null(2.0));
        assert_eq!(panels.widths()[2], Unit::Null(6.0));
        assert_eq!(panels.heights()[0], Unit::Null(1.0));
        assert_eq!(panels.heights()[2], Unit::Null(2.0));
        assert_eq!(panels.heights()[4], Unit::Null(3.0));
    }

    #[test]
    #[should_panic(expected = "content layer")]
    fn test_mismatched_layer_length_is_a_programming_error() {
        let facet = FacetGrid::from_formula("cyl ~ am").unwrap();
        let data = cyl_am_frame();
        let layout = facet.train(&data).unwrap();
        let layers = vec![vec![Drawable::null(); layout.panel_count() - 1]];
        let ranges = shared_ranges();
        let theme = Theme::default();
        let inputs = RenderInputs {
            layout: &layout,
            layers: &layers,
            ranges: &ranges,
            coord: &StubCoord::default(),
            text: &StubText,
            theme: &theme,
        };
        let _ = facet.render(&inputs);
    }
}
