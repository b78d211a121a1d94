use std::time::Instant;

use log::{debug, info, warn};

use crate::convert::to_plan;
use crate::domain::error::{PlanningError, Result};
use crate::domain::lot_sizing::LotSizingVars;
use crate::domain::model::MilpModel;
use crate::domain::solver::Solver;
use crate::models::LotSizingPlan;

/// Hand `model` to `solver` and shape the optimum into a plan.
///
/// Anything short of a provably optimal solution is an error; no partial
/// result is returned.
pub fn solve_plan(model: &MilpModel, vars: &LotSizingVars, solver: &dyn Solver) -> Result<LotSizingPlan> {
    debug!(
        "{}: submitting {} variables ({} binary), {} constraints to {}",
        model.name(),
        model.num_vars(),
        model.num_binaries(),
        model.constraints().len(),
        solver.name(),
    );

    let started = Instant::now();
    let outcome = solver.solve(model).map_err(|e| {
        warn!("{}: {}", model.name(), e);
        PlanningError::from(e)
    })?;

    if !outcome.is_optimal() {
        warn!("{}: {} finished with status {}", model.name(), solver.name(), outcome.status);
        return Err(PlanningError::Optimization {
            solver: solver.name().to_string(),
            status: outcome.status,
        });
    }

    debug!(
        "{}: max constraint violation {:e}",
        model.name(),
        model.max_violation(&outcome.values)
    );
    info!(
        "{}: optimal cost {} over {} periods in {:?}",
        model.name(),
        outcome.objective,
        vars.periods(),
        started.elapsed(),
    );

    Ok(to_plan(&outcome, vars))
}
