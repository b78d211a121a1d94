use crate::domain::error::SolveError;
use crate::domain::model::{Comparison, MilpModel, Sense, VarDomain};
use crate::domain::solver::{Solver, SolverOutcome};
use crate::models::Status;

use ::highs::{ColProblem, HighsModelStatus, Row};

/// HiGHS solver implementation
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        HighsSolver
    }

    /// Convert HiGHS status to our API status
    fn convert_status(model_status: HighsModelStatus) -> Status {
        match model_status {
            HighsModelStatus::Optimal => Status::Optimal,
            HighsModelStatus::Infeasible => Status::Infeasible,
            HighsModelStatus::UnboundedOrInfeasible => Status::InfeasibleOrUnbounded,
            HighsModelStatus::Unbounded => Status::Unbounded,
            HighsModelStatus::ReachedTimeLimit => Status::TimeLimit,
            _ => Status::Undefined,
        }
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for HighsSolver {
    fn solve(&self, model: &MilpModel) -> Result<SolverOutcome, SolveError> {
        let sense = match model.sense() {
            Sense::Minimize => ::highs::Sense::Minimise,
            Sense::Maximize => ::highs::Sense::Maximise,
        };

        let mut problem = ColProblem::new();

        // First, add all constraint rows
        let rows: Vec<Row> = model
            .constraints()
            .iter()
            .map(|c| match c.cmp {
                Comparison::Le => problem.add_row(..=c.rhs),
                Comparison::Ge => problem.add_row(c.rhs..),
                Comparison::Eq => problem.add_row(c.rhs..=c.rhs),
            })
            .collect();

        // Column-major view of the constraint matrix
        let mut col_data: Vec<Vec<(Row, f64)>> = vec![Vec::new(); model.num_vars()];
        for (row_idx, constraint) in model.constraints().iter().enumerate() {
            for &(id, coeff) in &constraint.terms {
                if coeff != 0.0 {
                    col_data[id.index()].push((rows[row_idx], coeff));
                }
            }
        }

        for (var, factors) in model.variables().iter().zip(&col_data) {
            match var.domain {
                VarDomain::Continuous { lower, upper } => {
                    problem.add_column(var.cost, lower..=upper, factors)
                }
                VarDomain::Binary => problem.add_integer_column(var.cost, 0.0..=1.0, factors),
            }
        }

        let mut highs_model = problem.optimise(sense);
        highs_model.set_option("output_flag", false);
        let solved = highs_model.solve();

        let status = Self::convert_status(solved.status());
        if status != Status::Optimal {
            return Ok(SolverOutcome::without_solution(status));
        }

        let values = solved.get_solution().columns().to_vec();
        if values.len() != model.num_vars() {
            return Err(SolveError::new(
                self.name(),
                format!("expected {} column values, got {}", model.num_vars(), values.len()),
            ));
        }

        Ok(SolverOutcome::optimal(solved.objective_value(), values))
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
