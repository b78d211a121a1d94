use crate::domain::error::SolveError;
use crate::domain::model::{Comparison, MilpModel, Sense, VarDomain};
use crate::domain::solver::{Solver, SolverOutcome};
use crate::models::Status;

use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};

/// Pure-Rust branch-and-bound backend; needs no native library.
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        MicrolpSolver
    }

    fn convert_op(cmp: Comparison) -> ComparisonOp {
        match cmp {
            Comparison::Le => ComparisonOp::Le,
            Comparison::Ge => ComparisonOp::Ge,
            Comparison::Eq => ComparisonOp::Eq,
        }
    }
}

impl Default for MicrolpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for MicrolpSolver {
    fn solve(&self, model: &MilpModel) -> Result<SolverOutcome, SolveError> {
        let direction = match model.sense() {
            Sense::Minimize => OptimizationDirection::Minimize,
            Sense::Maximize => OptimizationDirection::Maximize,
        };
        let mut problem = Problem::new(direction);

        let vars: Vec<Variable> = model
            .variables()
            .iter()
            .map(|var| match var.domain {
                VarDomain::Continuous { lower, upper } => problem.add_var(var.cost, (lower, upper)),
                VarDomain::Binary => problem.add_binary_var(var.cost),
            })
            .collect();

        for constraint in model.constraints() {
            // microlp stores rows sparsely; explicit zeros only get in the way
            let expr: Vec<(Variable, f64)> = constraint
                .terms
                .iter()
                .filter(|(_, coeff)| *coeff != 0.0)
                .map(|&(id, coeff)| (vars[id.index()], coeff))
                .collect();
            problem.add_constraint(expr, Self::convert_op(constraint.cmp), constraint.rhs);
        }

        match problem.solve() {
            Ok(solution) => {
                let values = vars.iter().map(|&v| solution[v]).collect();
                Ok(SolverOutcome::optimal(solution.objective(), values))
            }
            Err(microlp::Error::Infeasible) => Ok(SolverOutcome::without_solution(Status::Infeasible)),
            Err(microlp::Error::Unbounded) => Ok(SolverOutcome::without_solution(Status::Unbounded)),
            Err(microlp::Error::InternalError(details)) => Err(SolveError::new(self.name(), details)),
        }
    }

    fn name(&self) -> &str {
        "microlp"
    }
}
