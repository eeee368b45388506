//! Shared test fixtures: fixed-size drawables and collaborator stubs.

use crate::coord::{AxisOrientation, CoordTrait, PanelRange};
use crate::facet::Layout;
use crate::grob::{Drawable, DrawableTrait, Size, TextRenderer};
use crate::theme::Theme;
use crate::DataFrame;

/// Drawable with a fixed measured size.
#[derive(Debug, Clone, Copy)]
pub struct FixedGrob {
    pub size: Size,
}

impl FixedGrob {
    pub fn drawable(width: f64, height: f64) -> Drawable {
        Drawable::new(Self {
            size: Size::new(width, height),
        })
    }
}

impl DrawableTrait for FixedGrob {
    fn natural_size(&self) -> Size {
        self.size
    }
}

/// Coord stub rendering fixed-size axes and zero-size panel decorations.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubCoord {
    pub aspect: Option<f64>,
}

impl CoordTrait for StubCoord {
    fn render_axis(
        &self,
        orientation: AxisOrientation,
        _range: &PanelRange,
        _theme: &Theme,
    ) -> Drawable {
        match orientation {
            AxisOrientation::Horizontal => FixedGrob::drawable(0.0, 12.0),
            AxisOrientation::Vertical => FixedGrob::drawable(16.0, 0.0),
        }
    }

    fn render_background(&self, _range: &PanelRange, _theme: &Theme) -> Drawable {
        FixedGrob::drawable(0.0, 0.0)
    }

    fn render_foreground(&self, _range: &PanelRange, _theme: &Theme) -> Drawable {
        FixedGrob::drawable(0.0, 0.0)
    }

    fn preferred_aspect_ratio(&self, _range: &PanelRange) -> Option<f64> {
        self.aspect
    }
}

/// Text stub: 6pt per character, 10pt tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubText;

impl TextRenderer for StubText {
    fn render(&self, text: &str, _theme: &Theme) -> Drawable {
        FixedGrob::drawable(6.0 * text.chars().count() as f64, 10.0)
    }
}

/// Frame with two faceting variables: cyl in {4, 6, 8}, am in
/// {auto, manual}.
pub fn cyl_am_frame() -> DataFrame {
    polars::df![
        "cyl" => ["4", "6", "4", "8", "6", "4"],
        "am" => ["auto", "auto", "manual", "manual", "manual", "auto"],
        "mpg" => [21.0, 19.0, 23.0, 15.0, 18.0, 22.0],
    ]
    .unwrap()
}

/// Frame with a single faceting variable: gear in {3, 4, 5}.
pub fn one_col_frame() -> DataFrame {
    polars::df![
        "gear" => ["3", "4", "5", "3"],
        "mpg" => [21.0, 22.0, 23.0, 20.0],
    ]
    .unwrap()
}

/// One content layer: a unit-size drawable per panel.
pub fn layer_for(layout: &Layout) -> Vec<Drawable> {
    (0..layout.panel_count())
        .map(|_| FixedGrob::drawable(1.0, 1.0))
        .collect()
}
