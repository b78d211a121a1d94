use thiserror::Error;

use crate::models::Status;

/// Result type for planning operations
pub type Result<T> = std::result::Result<T, PlanningError>;

/// Failure reported by a solver backend itself (not a non-optimal status)
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{solver} backend failed: {details}")]
pub struct SolveError {
    pub solver: String,
    pub details: String,
}

impl SolveError {
    pub fn new(solver: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            solver: solver.into(),
            details: details.into(),
        }
    }
}

/// Errors raised by the lot-sizing operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanningError {
    /// Input rejected before the solver was called
    #[error("invalid input: {0}")]
    Validation(String),

    /// Solver finished without a provably optimal solution
    #[error("{solver} status {status}: optimisation failed")]
    Optimization { solver: String, status: Status },

    /// Solver backend could not run the model
    #[error("optimisation failed: {0}")]
    Backend(#[from] SolveError),
}

impl PlanningError {
    /// `true` for both flavours of optimisation failure.
    pub fn is_optimization_failure(&self) -> bool {
        matches!(self, PlanningError::Optimization { .. } | PlanningError::Backend(_))
    }
}
