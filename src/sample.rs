/// A single swept value: either a computed number or an explicit marker
/// for a grid point whose lookup failed.
///
/// Result tables carry one `Sample` per output column so that downstream
/// consumers (tables, regression columns, plots) must handle the missing
/// case explicitly instead of relying on NaN propagation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Value(f64),
    Missing,
}

impl Sample {
    /// Normalize a raw float: non-finite values become `Missing`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Sample::Value(value)
        } else {
            Sample::Missing
        }
    }

    /// The value, if present.
    pub fn value(self) -> Option<f64> {
        match self {
            Sample::Value(v) => Some(v),
            Sample::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Sample::Missing)
    }

    /// Lossy conversion for collaborators that expect a plain float column
    /// (regression input, plot serialization). `Missing` maps to NaN, which
    /// the regression layer drops and the interactive plots render as gaps.
    pub fn to_f64(self) -> f64 {
        match self {
            Sample::Value(v) => v,
            Sample::Missing => f64::NAN,
        }
    }
}
