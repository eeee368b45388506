//! Grid faceting and panel layout engine for grammar-of-graphics
//! visualizations.
//!
//! ggrid splits a dataset into a row/column grid of panels according to one
//! or two lists of discrete grouping variables, decides which panels share
//! scale ranges, allocates relative panel sizes, and assembles strip
//! labels, axes and panel contents into one composite drawable table for
//! the plot-composition driver.
//!
//! Drawing primitives, statistical transforms and scale training live in
//! the surrounding stack; this crate consumes them through narrow
//! collaborator interfaces ([`CoordTrait`], [`TextRenderer`],
//! [`Drawable`]) and hands back a [`GridTable`].
//!
//! # Example
//!
//! ```rust,ignore
//! use ggrid::{FacetGrid, FacetTrait, RenderInputs};
//!
//! let facet = FacetGrid::from_formula("cyl ~ am")?;
//! let layout = facet.train(&data)?;
//! let assignments = facet.map(&data, &layout)?;
//! // ... render each panel's layers through the geometry pipeline ...
//! let composite = facet.render(&RenderInputs {
//!     layout: &layout,
//!     layers: &layers,
//!     ranges: &ranges,
//!     coord: &coord,
//!     text: &text,
//!     theme: &theme,
//! })?;
//! ```

pub mod coord;
pub mod facet;
pub mod grob;
pub mod table;
pub mod theme;
pub mod unit;

#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;

/// Polars DataFrame, the dataset type faceting operates on.
pub use polars::prelude::DataFrame;

/// Errors reported to the caller.
///
/// Internal invariant violations are not errors: they are programming
/// mistakes and surface as assertion failures.
#[derive(Error, Debug)]
pub enum GgridError {
    /// Invalid faceting configuration, rejected before any layout work.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A collaborator failure that indicates a bug in the surrounding
    /// stack.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type for all fallible ggrid operations.
pub type Result<T> = std::result::Result<T, GgridError>;

// Re-export the public surface for convenience
pub use coord::{AxisOrientation, CoordTrait, PanelRange, ScaleRanges, ValueRange};
pub use facet::{
    FacetGrid, FacetScales, FacetSpace, FacetTrait, FacetValue, Labeller, Layout, LayoutEntry,
    PanelAssignments, RenderInputs, StripCell, StripPosition, MARGIN_LABEL,
};
pub use grob::{Drawable, DrawableTrait, Size, Stack, TextRenderer};
pub use table::{Cell, GridTable};
pub use theme::Theme;
pub use unit::{with_spacing, SizeVec, Unit};
