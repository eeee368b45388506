//! Faceting strategies for small multiples.
//!
//! A faceting strategy is a closed three-step contract: `train` a panel
//! layout from the data, `map` data records into panels, `render` the
//! composite drawable table. Grid faceting — a row/column cross-product of
//! one or two grouping-variable lists — is the strategy implemented here.
//!
//! # Architecture
//!
//! - `types` - scale sharing and space allocation options
//! - `grid` - the `FacetGrid` specification and its builders
//! - `labeller` - strip label strategies
//! - `layout` - layout training: panels, grid positions, scale groups
//! - `locate` - record-to-panel assignment
//! - `size` - relative track sizing
//! - `strips` / `axes` - label and axis bands
//! - `render` - panel assembly and composite rendering

mod axes;
mod grid;
mod labeller;
mod layout;
mod locate;
mod render;
mod size;
mod strips;
mod types;

pub use grid::FacetGrid;
pub use labeller::Labeller;
pub use layout::{FacetValue, Layout, LayoutEntry, MARGIN_LABEL};
pub use locate::PanelAssignments;
pub use render::RenderInputs;
pub use strips::{StripCell, StripPosition};
pub use types::{FacetScales, FacetSpace};

use crate::table::GridTable;
use crate::{DataFrame, Result};

/// Contract shared by faceting strategies.
pub trait FacetTrait: std::fmt::Debug {
    /// Canonical name for display and diagnostics.
    fn name(&self) -> &'static str;

    /// Build the panel layout from the data.
    fn train(&self, data: &DataFrame) -> Result<Layout>;

    /// Assign each data record to its panel(s).
    fn map(&self, data: &DataFrame, layout: &Layout) -> Result<PanelAssignments>;

    /// Assemble the composite table.
    fn render(&self, inputs: &RenderInputs<'_>) -> Result<GridTable>;
}
