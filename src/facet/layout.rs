//! Panel layout training.
//!
//! The layout table is the full cross-product of the distinct row-variable
//! value tuples and distinct column-variable value tuples observed in the
//! data: one entry per panel, with dense 1-based panel ids, 1-based grid
//! positions and per-axis scale groups. When margins are requested, an
//! `(all)` aggregate tuple is appended to each faceted side before the
//! cross-product, adding one grid row and/or column plus the shared corner.
//!
//! Levels order by their display text, so the grid is deterministic for any
//! input row order. The layout is built once per render and read-only
//! afterward.

use std::collections::BTreeSet;
use std::fmt;

use polars::prelude::{AnyValue, Series};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coord::{PanelRange, ScaleRanges};
use crate::facet::grid::FacetGrid;
use crate::{DataFrame, GgridError, Result};

/// Sentinel label shown for margin panels.
pub const MARGIN_LABEL: &str = "(all)";

/// One observed level of a faceting variable, or the margin sentinel.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FacetValue {
    /// An observed level, keyed by its display text.
    Level(String),
    /// Aggregate over every level of the variable.
    All,
}

impl FacetValue {
    pub fn level(text: impl Into<String>) -> Self {
        FacetValue::Level(text.into())
    }

    pub fn is_margin(&self) -> bool {
        matches!(self, FacetValue::All)
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetValue::Level(text) => write!(f, "{}", text),
            FacetValue::All => write!(f, "{}", MARGIN_LABEL),
        }
    }
}

/// One panel of the trained layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    /// Dense 1-based panel id.
    pub panel: usize,
    /// 1-based grid row.
    pub row: usize,
    /// 1-based grid column.
    pub col: usize,
    /// One value per row faceting variable.
    pub row_values: Vec<FacetValue>,
    /// One value per column faceting variable.
    pub col_values: Vec<FacetValue>,
    /// X scale group: the grid column when x is free, otherwise 1.
    pub scale_x: usize,
    /// Y scale group: the grid row when y is free, otherwise 1.
    pub scale_y: usize,
}

impl LayoutEntry {
    /// The ranges this panel renders against.
    pub fn range(&self, ranges: &ScaleRanges) -> PanelRange {
        PanelRange {
            x: ranges.x_range(self.scale_x),
            y: ranges.y_range(self.scale_y),
        }
    }
}

/// Trained panel layout. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    entries: Vec<LayoutEntry>,
    nrow: usize,
    ncol: usize,
    row_vars: Vec<String>,
    col_vars: Vec<String>,
    margins: bool,
}

impl Layout {
    /// Layout entries in panel-id order.
    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn panel_count(&self) -> usize {
        self.entries.len()
    }

    /// Grid dimensions as `(rows, cols)`, margins included.
    pub fn dims(&self) -> (usize, usize) {
        (self.nrow, self.ncol)
    }

    pub fn nrow(&self) -> usize {
        self.nrow
    }

    pub fn ncol(&self) -> usize {
        self.ncol
    }

    pub fn row_vars(&self) -> &[String] {
        &self.row_vars
    }

    pub fn col_vars(&self) -> &[String] {
        &self.col_vars
    }

    pub fn has_margins(&self) -> bool {
        self.margins
    }

    /// Entry at a 1-based grid position.
    pub fn at(&self, row: usize, col: usize) -> Option<&LayoutEntry> {
        self.entries
            .iter()
            .find(|entry| entry.row == row && entry.col == col)
    }

    /// Row-variable values of a 1-based grid row. A row outside the grid is
    /// a programming error.
    pub fn row_values(&self, row: usize) -> &[FacetValue] {
        self.entries
            .iter()
            .find(|entry| entry.row == row)
            .map(|entry| entry.row_values.as_slice())
            .unwrap_or_else(|| panic!("no layout entry for grid row {}", row))
    }

    /// Column-variable values of a 1-based grid column. See
    /// [`Self::row_values`].
    pub fn col_values(&self, col: usize) -> &[FacetValue] {
        self.entries
            .iter()
            .find(|entry| entry.col == col)
            .map(|entry| entry.col_values.as_slice())
            .unwrap_or_else(|| panic!("no layout entry for grid column {}", col))
    }
}

pub(crate) fn train_grid(spec: &FacetGrid, data: &DataFrame) -> Result<Layout> {
    let row_tuples = side_tuples(data, spec.row_vars(), spec.margins())?;
    let col_tuples = side_tuples(data, spec.col_vars(), spec.margins())?;
    let nrow = row_tuples.len();
    let ncol = col_tuples.len();
    let free_x = spec.scales().free_x();
    let free_y = spec.scales().free_y();
    let real_rows = nrow
        - row_tuples
            .iter()
            .filter(|tuple| is_margin_tuple(tuple.as_slice()))
            .count();

    let mut entries = Vec::with_capacity(nrow * ncol);
    let mut panel = 0;
    for (ri, row_values) in row_tuples.iter().enumerate() {
        // as_table = true puts panel 1 at the top-left; false flips the real
        // rows so it starts at the bottom-left. Margin rows keep the outer
        // edge either way.
        let row = if spec.as_table() || is_margin_tuple(row_values) {
            ri + 1
        } else {
            real_rows - ri
        };
        for (ci, col_values) in col_tuples.iter().enumerate() {
            panel += 1;
            let col = ci + 1;
            entries.push(LayoutEntry {
                panel,
                row,
                col,
                row_values: row_values.clone(),
                col_values: col_values.clone(),
                scale_x: if free_x { col } else { 1 },
                scale_y: if free_y { row } else { 1 },
            });
        }
    }

    debug!(
        panels = entries.len(),
        nrow, ncol, "trained facet grid layout"
    );

    Ok(Layout {
        entries,
        nrow,
        ncol,
        row_vars: spec.row_vars().to_vec(),
        col_vars: spec.col_vars().to_vec(),
        margins: spec.margins(),
    })
}

/// Distinct observed value tuples for one side, in display-text order, with
/// the margin tuple appended when requested. A side with no variables
/// contributes the single empty tuple.
fn side_tuples(
    data: &DataFrame,
    vars: &[String],
    margins: bool,
) -> Result<Vec<Vec<FacetValue>>> {
    if vars.is_empty() {
        return Ok(vec![Vec::new()]);
    }

    let columns = side_columns(data, vars)?;
    let mut distinct: BTreeSet<Vec<FacetValue>> = BTreeSet::new();
    for i in 0..data.height() {
        distinct.insert(columns.iter().map(|series| value_at(series, i)).collect());
    }

    let mut tuples: Vec<Vec<FacetValue>> = distinct.into_iter().collect();
    if margins {
        tuples.push(vec![FacetValue::All; vars.len()]);
    }
    Ok(tuples)
}

/// The faceting columns of one side, or a configuration error naming the
/// first variable the data does not have.
pub(crate) fn side_columns<'a>(data: &'a DataFrame, vars: &[String]) -> Result<Vec<&'a Series>> {
    vars.iter()
        .map(|name| {
            data.column(name)
                .map(|column| column.as_materialized_series())
                .map_err(|_| {
                    GgridError::ConfigurationError(format!(
                        "faceting variable '{}' not found in data",
                        name
                    ))
                })
        })
        .collect()
}

/// Level of one cell. Null cells become the ordinary `NA` level so sparse
/// frames still facet deterministically.
pub(crate) fn value_at(series: &Series, index: usize) -> FacetValue {
    let value = series.get(index).unwrap_or(AnyValue::Null);
    FacetValue::Level(level_text(&value))
}

fn level_text(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::from("NA"),
        AnyValue::String(text) => (*text).to_string(),
        AnyValue::StringOwned(text) => text.to_string(),
        AnyValue::Boolean(flag) => flag.to_string(),
        other => other.to_string(),
    }
}

fn is_margin_tuple(tuple: &[FacetValue]) -> bool {
    !tuple.is_empty() && tuple.iter().all(FacetValue::is_margin)
}
