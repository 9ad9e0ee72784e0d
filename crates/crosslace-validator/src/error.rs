use crosslace_core::GridError;

/// An unexpected failure inside a validator.
///
/// Validators never return this to callers; it is folded into a report with a single
/// [`FindingKind::Internal`](crate::FindingKind::Internal) error and score 0.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ValidationError {
    /// Grid access failed where the grid's own dimensions promised success.
    #[display("grid access failed: {_0}")]
    Grid(#[from] GridError),
    /// A computed metric was NaN or infinite.
    #[display("metric {name} is not finite")]
    NonFiniteMetric {
        /// Name of the metric.
        name: &'static str,
    },
}

impl ValidationError {
    /// Returns `value` if it is finite.
    pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFiniteMetric { name })
        }
    }
}
