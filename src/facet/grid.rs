//! Grid facet specification.
//!
//! [`FacetGrid`] splits a dataset into a row/column grid of panels: one grid
//! row per distinct row-variable value tuple, one grid column per distinct
//! column-variable value tuple. The spec is immutable once constructed; all
//! validation happens in the constructors.

use crate::facet::labeller::Labeller;
use crate::facet::layout::{self, Layout};
use crate::facet::locate::{self, PanelAssignments};
use crate::facet::render::{self, RenderInputs};
use crate::facet::types::{FacetScales, FacetSpace};
use crate::facet::FacetTrait;
use crate::table::GridTable;
use crate::{DataFrame, GgridError, Result};

/// Grid faceting specification.
#[derive(Debug, Clone)]
pub struct FacetGrid {
    rows: Vec<String>,
    cols: Vec<String>,
    margins: bool,
    scales: FacetScales,
    space: FacetSpace,
    labeller: Labeller,
    as_table: bool,
}

impl FacetGrid {
    /// Facet on explicit row and column variable lists.
    ///
    /// At least one side must name a variable.
    pub fn new(rows: Vec<String>, cols: Vec<String>) -> Result<Self> {
        if rows.is_empty() && cols.is_empty() {
            return Err(GgridError::ConfigurationError(
                "facet grid needs at least one row or column variable".to_string(),
            ));
        }
        Ok(Self {
            rows,
            cols,
            margins: false,
            scales: FacetScales::Fixed,
            space: FacetSpace::Fixed,
            labeller: Labeller::default(),
            as_table: true,
        })
    }

    /// Parse a `"rows ~ cols"` formula.
    ///
    /// `.` (or nothing) on a side means no variable there; multiple
    /// variables on one side are joined with `+`:
    /// `"cyl + am ~ gear"`, `". ~ gear"`, `"cyl ~ ."`.
    pub fn from_formula(formula: &str) -> Result<Self> {
        let (lhs, rhs) = formula.split_once('~').ok_or_else(|| {
            GgridError::ConfigurationError(format!(
                "invalid facet formula '{}': expected 'rows ~ cols'",
                formula
            ))
        })?;
        if rhs.contains('~') {
            return Err(GgridError::ConfigurationError(format!(
                "invalid facet formula '{}': more than one '~'",
                formula
            )));
        }
        Self::new(parse_side(lhs)?, parse_side(rhs)?)
    }

    /// Add margin panels aggregating over each faceted dimension.
    pub fn with_margins(mut self, margins: bool) -> Self {
        self.margins = margins;
        self
    }

    /// Set scale sharing across panels.
    pub fn with_scales(mut self, scales: FacetScales) -> Self {
        self.scales = scales;
        self
    }

    /// Set space allocation across panel rows/columns.
    pub fn with_space(mut self, space: FacetSpace) -> Self {
        self.space = space;
        self
    }

    /// Set the strip label strategy.
    pub fn with_labeller(mut self, labeller: Labeller) -> Self {
        self.labeller = labeller;
        self
    }

    /// Table ordering: `true` puts panel 1 at the top-left, `false` at the
    /// bottom-left.
    pub fn with_as_table(mut self, as_table: bool) -> Self {
        self.as_table = as_table;
        self
    }

    /// Row faceting variables, outermost first.
    pub fn row_vars(&self) -> &[String] {
        &self.rows
    }

    /// Column faceting variables, outermost first.
    pub fn col_vars(&self) -> &[String] {
        &self.cols
    }

    pub fn margins(&self) -> bool {
        self.margins
    }

    pub fn scales(&self) -> FacetScales {
        self.scales
    }

    pub fn space(&self) -> FacetSpace {
        self.space
    }

    pub fn labeller(&self) -> &Labeller {
        &self.labeller
    }

    pub fn as_table(&self) -> bool {
        self.as_table
    }
}

impl FacetTrait for FacetGrid {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn train(&self, data: &DataFrame) -> Result<Layout> {
        layout::train_grid(self, data)
    }

    fn map(&self, data: &DataFrame, layout: &Layout) -> Result<PanelAssignments> {
        locate::locate_grid(self, data, layout)
    }

    fn render(&self, inputs: &RenderInputs<'_>) -> Result<GridTable> {
        render::render_grid(self, inputs)
    }
}

fn parse_side(side: &str) -> Result<Vec<String>> {
    let side = side.trim();
    if side.is_empty() || side == "." {
        return Ok(Vec::new());
    }
    side.split('+')
        .map(|term| {
            let term = term.trim();
            if term.is_empty() {
                Err(GgridError::ConfigurationError(format!(
                    "invalid facet formula side '{}': empty variable name",
                    side
                )))
            } else {
                Ok(term.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_spec() {
        let err = FacetGrid::new(Vec::new(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("at least one"));
    }

    #[test]
    fn test_new_defaults() {
        let facet = FacetGrid::new(vec!["cyl".to_string()], Vec::new()).unwrap();
        assert!(!facet.margins());
        assert_eq!(facet.scales(), FacetScales::Fixed);
        assert_eq!(facet.space(), FacetSpace::Fixed);
        assert!(facet.as_table());
    }

    #[test]
    fn test_formula_both_sides() {
        let facet = FacetGrid::from_formula("cyl ~ am").unwrap();
        assert_eq!(facet.row_vars(), ["cyl".to_string()]);
        assert_eq!(facet.col_vars(), ["am".to_string()]);
    }

    #[test]
    fn test_formula_multiple_variables() {
        let facet = FacetGrid::from_formula("cyl + am ~ gear").unwrap();
        assert_eq!(facet.row_vars(), ["cyl".to_string(), "am".to_string()]);
        assert_eq!(facet.col_vars(), ["gear".to_string()]);
    }

    #[test]
    fn test_formula_dot_means_no_variable() {
        let facet = FacetGrid::from_formula(". ~ gear").unwrap();
        assert!(facet.row_vars().is_empty());
        assert_eq!(facet.col_vars(), ["gear".to_string()]);

        let facet = FacetGrid::from_formula("gear ~ .").unwrap();
        assert_eq!(facet.row_vars(), ["gear".to_string()]);
        assert!(facet.col_vars().is_empty());
    }

    #[test]
    fn test_formula_rejects_missing_tilde() {
        let err = FacetGrid::from_formula("cyl").unwrap_err();
        assert!(err.to_string().contains("rows ~ cols"));
    }

    #[test]
    fn test_formula_rejects_double_tilde() {
        let err = FacetGrid::from_formula("cyl ~ am ~ gear").unwrap_err();
        assert!(err.to_string().contains("more than one"));
    }

    #[test]
    fn test_formula_rejects_empty_both_sides() {
        let err = FacetGrid::from_formula(". ~ .").unwrap_err();
        assert!(err.to_string().contains("at least one"));
    }

    #[test]
    fn test_formula_rejects_dangling_plus() {
        let err = FacetGrid::from_formula("cyl + ~ am").unwrap_err();
        assert!(err.to_string().contains("empty variable name"));
    }

    #[test]
    fn test_builder_options() {
        let facet = FacetGrid::from_formula("cyl ~ am")
            .unwrap()
            .with_margins(true)
            .with_scales(FacetScales::FreeX)
            .with_space(FacetSpace::Free)
            .with_as_table(false);
        assert!(facet.margins());
        assert_eq!(facet.scales(), FacetScales::FreeX);
        assert_eq!(facet.space(), FacetSpace::Free);
        assert!(!facet.as_table());
    }
}
