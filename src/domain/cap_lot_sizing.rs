//! Capacitated lot sizing: the uncapacitated model plus
//! `prod[t] <= capacity[t]`, with `M = max(capacity)`.

use log::debug;

use crate::domain::error::Result;
use crate::domain::lot_sizing::{build_base_model, LotSizingVars};
use crate::domain::model::{Comparison, MilpModel};
use crate::domain::solve::solve_plan;
use crate::domain::solver::Solver;
use crate::domain::validate::validate_cap_lot_sizing;
use crate::models::{BasicPlan, CapLotSizingParams, LotSizingPlan};

/// Capacity already bounds production, so the largest capacity is a valid big-M.
pub fn big_m(params: &CapLotSizingParams) -> f64 {
    params.capacity.iter().copied().fold(0.0, f64::max)
}

/// Build the capacitated lot-sizing MILP without solving it.
pub fn build_cap_lot_sizing_model(params: &CapLotSizingParams) -> (MilpModel, LotSizingVars) {
    let m = big_m(params);
    debug!("cap_lot_sizing: T={}, big-M={}", params.demand.len(), m);

    let (mut model, vars) = build_base_model("cap_lot_sizing", &params.uncapacitated(), m);
    for (t, &capacity) in params.capacity.iter().enumerate() {
        model.add_constraint(
            format!("cap_{}", t),
            vec![(vars.production[t], 1.0)],
            Comparison::Le,
            capacity,
        );
    }
    (model, vars)
}

/// Solve capacitated lot sizing and return the detailed plan.
///
/// Fails with a validation error, before any solver call, when `demand` and
/// `capacity` differ in length.
pub fn solve_cap_lot_sizing(params: &CapLotSizingParams, solver: &dyn Solver) -> Result<LotSizingPlan> {
    validate_cap_lot_sizing(params)?;
    let (model, vars) = build_cap_lot_sizing_model(params);
    solve_plan(&model, &vars, solver)
}

/// Solve capacitated lot sizing and return `(production_plan, total_cost)`.
pub fn solve_cap_lot_sizing_basic(params: &CapLotSizingParams, solver: &dyn Solver) -> Result<BasicPlan> {
    solve_cap_lot_sizing(params, solver).map(BasicPlan::from)
}
