//! Composite drawable table.
//!
//! A [`GridTable`] is an explicit 2-D arena: a row-major flat cell vector
//! plus per-track [`Unit`] sizes. Cells are named so the layout driver can
//! find the sub-blocks of a composite (`"panels"`, `"axis-b"`, ...) without
//! walking the arena. A table implements
//! [`DrawableTrait`](crate::grob::DrawableTrait), so composites nest.
//!
//! Tables are built by the facet renderer and read-only once returned; the
//! `respect` flag tells the driver to lock panel proportions.

use crate::grob::{Drawable, DrawableTrait, Size};
use crate::unit::{SizeVec, Unit};

/// One placed cell.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Name the driver looks the cell up by.
    pub name: String,
    /// Placed content.
    pub grob: Drawable,
}

/// Grid of drawables with explicit track sizes.
#[derive(Debug, Clone)]
pub struct GridTable {
    nrow: usize,
    ncol: usize,
    heights: SizeVec,
    widths: SizeVec,
    cells: Vec<Option<Cell>>,
    respect: bool,
}

impl GridTable {
    /// Empty table over the given tracks. Dimensions follow the track
    /// vector lengths.
    pub fn new(heights: SizeVec, widths: SizeVec) -> Self {
        let nrow = heights.len();
        let ncol = widths.len();
        Self {
            nrow,
            ncol,
            heights,
            widths,
            cells: vec![None; nrow * ncol],
            respect: false,
        }
    }

    pub fn nrow(&self) -> usize {
        self.nrow
    }

    pub fn ncol(&self) -> usize {
        self.ncol
    }

    /// Row height tracks, top to bottom.
    pub fn heights(&self) -> &[Unit] {
        &self.heights
    }

    /// Column width tracks, left to right.
    pub fn widths(&self) -> &[Unit] {
        &self.widths
    }

    /// Whether the driver must keep the row/column proportions as given.
    pub fn respect(&self) -> bool {
        self.respect
    }

    pub fn set_respect(&mut self, respect: bool) {
        self.respect = respect;
    }

    /// Place a named drawable at a 0-based cell. Placing outside the grid is
    /// a programming error.
    pub fn place(&mut self, row: usize, col: usize, name: impl Into<String>, grob: Drawable) {
        assert!(
            row < self.nrow && col < self.ncol,
            "cell ({}, {}) outside a {}x{} table",
            row,
            col,
            self.nrow,
            self.ncol
        );
        self.cells[row * self.ncol + col] = Some(Cell {
            name: name.into(),
            grob,
        });
    }

    /// Content of a cell, if anything was placed there.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        assert!(
            row < self.nrow && col < self.ncol,
            "cell ({}, {}) outside a {}x{} table",
            row,
            col,
            self.nrow,
            self.ncol
        );
        self.cells[row * self.ncol + col].as_ref()
    }

    /// First cell with the given name.
    pub fn find(&self, name: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .flatten()
            .find(|cell| cell.name == name)
    }

    /// Number of placed cells.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}

impl DrawableTrait for GridTable {
    /// Absolute extent: the sum of the fixed tracks. Proportional tracks
    /// take whatever the parent allots and measure zero here.
    fn natural_size(&self) -> Size {
        Size::new(
            self.widths.iter().map(Unit::points).sum(),
            self.heights.iter().map(Unit::points).sum(),
        )
    }

    fn as_table(&self) -> Option<&GridTable> {
        Some(self)
    }
}
