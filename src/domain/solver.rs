use crate::domain::error::SolveError;
use crate::domain::model::MilpModel;
use crate::models::Status;

/// What a backend reports back for one model
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome {
    pub status: Status,
    /// Objective value at the reported point
    pub objective: f64,
    /// Primal values indexed by variable position; empty unless optimal
    pub values: Vec<f64>,
}

impl SolverOutcome {
    pub fn optimal(objective: f64, values: Vec<f64>) -> Self {
        Self {
            status: Status::Optimal,
            objective,
            values,
        }
    }

    pub fn without_solution(status: Status) -> Self {
        Self {
            status,
            objective: f64::NAN,
            values: Vec::new(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }
}

/// Common interface for MILP solvers
pub trait Solver: Send + Sync {
    /// Optimize `model`.
    ///
    /// Infeasible or unbounded models are reported through
    /// [`SolverOutcome::status`]; `Err` means the backend itself failed.
    fn solve(&self, model: &MilpModel) -> Result<SolverOutcome, SolveError>;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}
