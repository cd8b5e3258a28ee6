//! Error types for power estimation.

/// Error returned when a study cannot be run or a statistic is undefined.
///
/// Both variants indicate caller-side problems, not transient faults:
/// neither is ever retried internally, and a `DegenerateSample` aborts the
/// enclosing study rather than being replaced with a fresh draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied parameter is outside its valid domain.
    ///
    /// Raised at the call boundary, before any random sampling happens.
    /// Examples: a zero population size, an effect size outside [-1, 1],
    /// a significance level outside (0, 1), or a target power that is
    /// not reachable above the significance level.
    InvalidParameter {
        /// Name of the offending parameter.
        param: &'static str,
        /// Human-readable description of the violated constraint.
        message: String,
    },

    /// A drawn sample has zero variance in one variable.
    ///
    /// The Pearson correlation is undefined when either variable is
    /// constant. In a study over continuous data this signals a
    /// misconfigured input (degenerate population column, tiny sample),
    /// so the whole study aborts with no partial summary.
    DegenerateSample {
        /// Which variable was constant: `"x"` or `"y"`.
        variable: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid(param: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter { param, message } => {
                write!(f, "invalid parameter `{param}`: {message}")
            }
            Self::DegenerateSample { variable } => {
                write!(
                    f,
                    "degenerate sample: variable `{variable}` has zero variance, \
                     correlation is undefined"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for power estimation operations.
pub type Result<T> = std::result::Result<T, Error>;
