//! Record-to-panel assignment.
//!
//! Matches each data record's faceting values against the trained layout by
//! equality. A record whose combination is absent from the layout produces
//! no assignment: absent combinations mean empty panels, not errors. With
//! margins on, a record additionally lands in the row-margin, column-margin
//! and grand-margin panels it aggregates into.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::facet::grid::FacetGrid;
use crate::facet::layout::{side_columns, value_at, FacetValue, Layout};
use crate::{DataFrame, Result};

/// Panel ids assigned to each data record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelAssignments {
    assignments: Vec<Vec<usize>>,
}

impl PanelAssignments {
    /// Number of records located.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Panels the record at `index` lands in, in panel-id order. Empty when
    /// the record matched nothing.
    pub fn panels(&self, index: usize) -> &[usize] {
        &self.assignments[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.assignments.iter().map(Vec::as_slice)
    }
}

pub(crate) fn locate_grid(
    spec: &FacetGrid,
    data: &DataFrame,
    layout: &Layout,
) -> Result<PanelAssignments> {
    let index: HashMap<(&[FacetValue], &[FacetValue]), usize> = layout
        .entries()
        .iter()
        .map(|entry| {
            (
                (entry.row_values.as_slice(), entry.col_values.as_slice()),
                entry.panel,
            )
        })
        .collect();

    let row_columns = side_columns(data, spec.row_vars())?;
    let col_columns = side_columns(data, spec.col_vars())?;

    let margin_rows = vec![FacetValue::All; spec.row_vars().len()];
    let margin_cols = vec![FacetValue::All; spec.col_vars().len()];
    let fan_rows = spec.margins() && !spec.row_vars().is_empty();
    let fan_cols = spec.margins() && !spec.col_vars().is_empty();

    let mut assignments = Vec::with_capacity(data.height());
    for i in 0..data.height() {
        let row_key: Vec<FacetValue> = row_columns.iter().map(|s| value_at(s, i)).collect();
        let col_key: Vec<FacetValue> = col_columns.iter().map(|s| value_at(s, i)).collect();

        let mut candidates: Vec<(&[FacetValue], &[FacetValue])> =
            vec![(row_key.as_slice(), col_key.as_slice())];
        if fan_rows {
            candidates.push((margin_rows.as_slice(), col_key.as_slice()));
        }
        if fan_cols {
            candidates.push((row_key.as_slice(), margin_cols.as_slice()));
        }
        if fan_rows && fan_cols {
            candidates.push((margin_rows.as_slice(), margin_cols.as_slice()));
        }

        let mut panels = Vec::with_capacity(candidates.len());
        for key in candidates {
            if let Some(&panel) = index.get(&key) {
                if !panels.contains(&panel) {
                    panels.push(panel);
                }
            }
        }
        panels.sort_unstable();
        assignments.push(panels);
    }

    debug!(records = assignments.len(), "located records into panels");

    Ok(PanelAssignments { assignments })
}
