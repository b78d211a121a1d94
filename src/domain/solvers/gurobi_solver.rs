use crate::domain::error::SolveError;
use crate::domain::model::{Comparison, MilpModel, Sense, VarDomain};
use crate::domain::solver::{Solver, SolverOutcome};
use crate::models::Status;

use grb::prelude::*;

/// Gurobi solver implementation
pub struct GurobiSolver;

impl GurobiSolver {
    pub fn new() -> Self {
        GurobiSolver
    }

    /// Convert Gurobi status to our API status
    fn convert_status(status: grb::Status) -> Status {
        match status {
            grb::Status::Optimal => Status::Optimal,
            grb::Status::Infeasible => Status::Infeasible,
            grb::Status::InfOrUnbd => Status::InfeasibleOrUnbounded,
            grb::Status::Unbounded => Status::Unbounded,
            grb::Status::TimeLimit => Status::TimeLimit,
            _ => Status::Undefined,
        }
    }

    fn err(&self, what: &str, e: grb::Error) -> SolveError {
        SolveError::new(self.name(), format!("{}: {}", what, e))
    }
}

impl Default for GurobiSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for GurobiSolver {
    fn solve(&self, model: &MilpModel) -> Result<SolverOutcome, SolveError> {
        let sense = match model.sense() {
            Sense::Minimize => ModelSense::Minimize,
            Sense::Maximize => ModelSense::Maximize,
        };

        let mut env = Env::new("").map_err(|e| self.err("Failed to create Gurobi environment", e))?;

        // Silent: stdout belongs to the caller
        env.set(param::OutputFlag, 0)
            .map_err(|e| self.err("Failed to set Gurobi output flag", e))?;

        let mut grb_model = Model::with_env(model.name(), &env)
            .map_err(|e| self.err("Failed to create Gurobi model", e))?;

        let mut vars: Vec<Var> = Vec::with_capacity(model.num_vars());
        for var in model.variables() {
            let gurobi_var = match var.domain {
                VarDomain::Continuous { lower, upper } => add_ctsvar!(
                    grb_model,
                    name: &var.name,
                    bounds: lower..upper
                ),
                VarDomain::Binary => add_binvar!(grb_model, name: &var.name),
            }
            .map_err(|e| self.err("Failed to add variable", e))?;
            vars.push(gurobi_var);
        }

        grb_model
            .update()
            .map_err(|e| self.err("Failed to update model after adding variables", e))?;

        for constraint in model.constraints() {
            let expr = constraint.terms.iter().fold(Expr::Constant(0.0), |acc, &(id, coeff)| {
                acc + coeff * vars[id.index()]
            });
            let rhs = constraint.rhs;
            let added = match constraint.cmp {
                Comparison::Le => grb_model.add_constr(&constraint.name, c!(expr <= rhs)),
                Comparison::Ge => grb_model.add_constr(&constraint.name, c!(expr >= rhs)),
                Comparison::Eq => grb_model.add_constr(&constraint.name, c!(expr == rhs)),
            };
            added.map_err(|e| self.err("Failed to add constraint", e))?;
        }

        let objective = model
            .variables()
            .iter()
            .zip(&vars)
            .fold(Expr::Constant(0.0), |acc, (var, &gurobi_var)| {
                if var.cost != 0.0 {
                    acc + var.cost * gurobi_var
                } else {
                    acc
                }
            });

        grb_model
            .set_objective(objective, sense)
            .map_err(|e| self.err("Failed to set objective", e))?;

        grb_model
            .optimize()
            .map_err(|e| self.err("Failed to optimize", e))?;

        let status = grb_model
            .status()
            .map_err(|e| self.err("Failed to get model status", e))
            .map(Self::convert_status)?;
        if status != Status::Optimal {
            return Ok(SolverOutcome::without_solution(status));
        }

        let objective_value = grb_model
            .get_attr(attr::ObjVal)
            .map_err(|e| self.err("Failed to read objective value", e))?;

        let mut values = Vec::with_capacity(vars.len());
        for gurobi_var in &vars {
            let value = grb_model
                .get_obj_attr(attr::X, gurobi_var)
                .map_err(|e| self.err("Failed to read variable value", e))?;
            values.push(value);
        }

        Ok(SolverOutcome::optimal(objective_value, values))
    }

    fn name(&self) -> &str {
        "Gurobi"
    }
}
