//! Strip label strategies.
//!
//! A labeller turns a (variable, value) pair into the text shown in a strip
//! cell. Named strategies cover the common cases; callers with their own
//! formatting pass a closure.

use std::fmt;
use std::sync::Arc;

use crate::facet::layout::FacetValue;
use crate::{GgridError, Result};

/// Strip label strategy.
#[derive(Clone)]
pub enum Labeller {
    /// The value alone: `4`.
    Value,
    /// Variable and value: `cyl: 4`.
    Both,
    /// Caller-supplied strategy.
    Custom(Arc<dyn Fn(&str, &FacetValue) -> String + Send + Sync>),
}

impl Labeller {
    /// Accepted named strategies.
    pub const ALLOWED: &'static [&'static str] = &["value", "both"];

    /// Parse a named strategy.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "value" => Ok(Labeller::Value),
            "both" => Ok(Labeller::Both),
            other => Err(GgridError::ConfigurationError(format!(
                "invalid labeller '{}', expected one of: {}",
                other,
                Self::ALLOWED.join(", ")
            ))),
        }
    }

    /// Label text for one strip cell.
    pub fn label(&self, variable: &str, value: &FacetValue) -> String {
        match self {
            Labeller::Value => value.to_string(),
            Labeller::Both => format!("{}: {}", variable, value),
            Labeller::Custom(label) => label(variable, value),
        }
    }
}

impl Default for Labeller {
    fn default() -> Self {
        Labeller::Value
    }
}

impl fmt::Debug for Labeller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Labeller::Value => "value",
            Labeller::Both => "both",
            Labeller::Custom(_) => "custom",
        };
        write!(f, "Labeller({})", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_labeller() {
        let value = FacetValue::level("4");
        assert_eq!(Labeller::Value.label("cyl", &value), "4");
    }

    #[test]
    fn test_both_labeller() {
        let value = FacetValue::level("4");
        assert_eq!(Labeller::Both.label("cyl", &value), "cyl: 4");
    }

    #[test]
    fn test_margin_value_labels_as_all() {
        assert_eq!(Labeller::Value.label("cyl", &FacetValue::All), "(all)");
    }

    #[test]
    fn test_custom_labeller() {
        let shouty = Labeller::Custom(Arc::new(|variable, value| {
            format!("{}={}", variable.to_uppercase(), value)
        }));
        assert_eq!(shouty.label("cyl", &FacetValue::level("6")), "CYL=6");
    }

    #[test]
    fn test_parse_named_strategies() {
        assert!(matches!(Labeller::parse("value").unwrap(), Labeller::Value));
        assert!(matches!(Labeller::parse("both").unwrap(), Labeller::Both));
        let err = Labeller::parse("fancy").unwrap_err();
        assert!(err.to_string().contains("value, both"));
    }
}
