use crate::domain::lot_sizing::LotSizingVars;
use crate::domain::model::VarId;
use crate::domain::solver::SolverOutcome;
use crate::models::LotSizingPlan;

/// Solvers hand binaries back as near-0/1 floats.
fn to_flag(value: f64) -> u8 {
    if value.round() >= 1.0 {
        1
    } else {
        0
    }
}

/// Shape an optimal outcome into the detailed plan.
///
/// Only the setup flags are rounded; production, inventory and the objective
/// value are passed through as the solver reported them.
pub fn to_plan(outcome: &SolverOutcome, vars: &LotSizingVars) -> LotSizingPlan {
    let value = |id: &VarId| outcome.values[id.index()];
    LotSizingPlan {
        production_plan: vars.production.iter().map(value).collect(),
        inventory: vars.inventory.iter().map(value).collect(),
        setup: vars.setup.iter().map(|id| to_flag(value(id))).collect(),
        total_cost: outcome.objective,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lot_sizing::build_lot_sizing_model;
    use crate::models::LotSizingParams;

    #[test]
    fn test_to_flag_rounds_near_binary_values() {
        assert_eq!(to_flag(0.9999999), 1);
        assert_eq!(to_flag(1.0000001), 1);
        assert_eq!(to_flag(3.0e-9), 0);
        assert_eq!(to_flag(-1.0e-12), 0);
    }

    #[test]
    fn test_to_plan_passes_quantities_through_unrounded() {
        let (_, vars) = build_lot_sizing_model(&LotSizingParams {
            demand: vec![1.5, 2.25],
            setup_cost: 10.0,
            unit_cost: 1.0,
            holding_cost: 0.5,
            initial_inventory: 0.0,
        });
        let outcome = SolverOutcome::optimal(
            23.0000001,
            vec![3.7500001, 0.0, 2.25, 0.0, 0.9999998, 2.0e-8],
        );
        let plan = to_plan(&outcome, &vars);
        assert_eq!(plan.production_plan, vec![3.7500001, 0.0]);
        assert_eq!(plan.inventory, vec![2.25, 0.0]);
        assert_eq!(plan.setup, vec![1, 0]);
        assert_eq!(plan.total_cost, 23.0000001);
        assert_eq!(plan.periods(), 2);
    }
}
