//! Uncapacitated single-item lot sizing.
//!
//! ```text
//! min  sum_t setup_cost*setup[t] + unit_cost*prod[t] + holding_cost*inv[t]
//! s.t. inv[t-1] + prod[t] - demand[t] = inv[t]     (inv[-1] = initial_inventory)
//!      prod[t] <= M * setup[t]                      M = sum(demand) + initial_inventory
//!      prod, inv >= 0, setup binary
//! ```

use log::debug;

use crate::domain::error::Result;
use crate::domain::model::{Comparison, MilpModel, Sense, VarId};
use crate::domain::solve::solve_plan;
use crate::domain::solver::Solver;
use crate::domain::validate::validate_lot_sizing;
use crate::models::{BasicPlan, LotSizingParams, LotSizingPlan};

/// Per-period variable handles of a lot-sizing model.
#[derive(Debug, Clone)]
pub struct LotSizingVars {
    pub production: Vec<VarId>,
    pub inventory: Vec<VarId>,
    pub setup: Vec<VarId>,
}

impl LotSizingVars {
    pub fn periods(&self) -> usize {
        self.production.len()
    }
}

/// Big-M of the uncapacitated model: no period can usefully produce more
/// than everything that is still to be consumed.
pub fn big_m(params: &LotSizingParams) -> f64 {
    params.demand.iter().sum::<f64>() + params.initial_inventory
}

/// Variables, balance rows and setup-linking rows shared by both variants.
pub(crate) fn build_base_model(name: &str, params: &LotSizingParams, big_m: f64) -> (MilpModel, LotSizingVars) {
    let periods = params.demand.len();
    let mut model = MilpModel::new(name, Sense::Minimize);

    let production: Vec<VarId> = (0..periods)
        .map(|t| model.add_continuous(format!("prod_{}", t), 0.0, f64::INFINITY, params.unit_cost))
        .collect();
    let inventory: Vec<VarId> = (0..periods)
        .map(|t| model.add_continuous(format!("inv_{}", t), 0.0, f64::INFINITY, params.holding_cost))
        .collect();
    let setup: Vec<VarId> = (0..periods)
        .map(|t| model.add_binary(format!("setup_{}", t), params.setup_cost))
        .collect();

    for (t, &demand) in params.demand.iter().enumerate() {
        let mut terms = vec![(production[t], 1.0), (inventory[t], -1.0)];
        let rhs = if t == 0 {
            demand - params.initial_inventory
        } else {
            terms.push((inventory[t - 1], 1.0));
            demand
        };
        model.add_constraint(format!("bal_{}", t), terms, Comparison::Eq, rhs);
        model.add_constraint(
            format!("link_{}", t),
            vec![(production[t], 1.0), (setup[t], -big_m)],
            Comparison::Le,
            0.0,
        );
    }

    (
        model,
        LotSizingVars {
            production,
            inventory,
            setup,
        },
    )
}

/// Build the uncapacitated lot-sizing MILP without solving it.
pub fn build_lot_sizing_model(params: &LotSizingParams) -> (MilpModel, LotSizingVars) {
    let m = big_m(params);
    debug!("lot_sizing: T={}, big-M={}", params.demand.len(), m);
    build_base_model("lot_sizing", params, m)
}

/// Solve uncapacitated lot sizing and return the detailed plan.
pub fn solve_lot_sizing(params: &LotSizingParams, solver: &dyn Solver) -> Result<LotSizingPlan> {
    validate_lot_sizing(params)?;
    let (model, vars) = build_lot_sizing_model(params);
    solve_plan(&model, &vars, solver)
}

/// Solve uncapacitated lot sizing and return `(production_plan, total_cost)`.
pub fn solve_lot_sizing_basic(params: &LotSizingParams, solver: &dyn Solver) -> Result<BasicPlan> {
    solve_lot_sizing(params, solver).map(BasicPlan::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::solvers::MicrolpSolver;

    fn params() -> LotSizingParams {
        LotSizingParams {
            demand: vec![100.0, 150.0, 80.0, 130.0],
            setup_cost: 1000.0,
            unit_cost: 50.0,
            holding_cost: 2.0,
            initial_inventory: 0.0,
        }
    }

    #[test]
    fn test_big_m_is_cumulative_demand_plus_initial_inventory() {
        let mut p = params();
        assert_eq!(big_m(&p), 460.0);
        p.initial_inventory = 40.0;
        assert_eq!(big_m(&p), 500.0);
    }

    #[test]
    fn test_model_shape() {
        let (model, vars) = build_lot_sizing_model(&params());
        assert_eq!(model.num_vars(), 12);
        assert_eq!(model.num_binaries(), 4);
        // one balance and one linking row per period
        assert_eq!(model.constraints().len(), 8);
        assert_eq!(vars.periods(), 4);
        assert_eq!(model.variables()[vars.setup[3].index()].name, "setup_3");
    }

    #[test]
    fn test_first_balance_row_absorbs_initial_inventory() {
        let mut p = params();
        p.initial_inventory = 30.0;
        let (model, vars) = build_lot_sizing_model(&p);
        let bal_0 = &model.constraints()[0];
        assert_eq!(bal_0.name, "bal_0");
        assert_eq!(bal_0.rhs, 70.0);
        assert_eq!(bal_0.terms, vec![(vars.production[0], 1.0), (vars.inventory[0], -1.0)]);

        let bal_1 = &model.constraints()[2];
        assert_eq!(bal_1.name, "bal_1");
        assert_eq!(bal_1.rhs, 150.0);
        assert!(bal_1.terms.contains(&(vars.inventory[0], 1.0)));
    }

    #[test]
    fn test_linking_rows_use_big_m() {
        let (model, vars) = build_lot_sizing_model(&params());
        let link_2 = &model.constraints()[5];
        assert_eq!(link_2.name, "link_2");
        assert_eq!(link_2.cmp, Comparison::Le);
        assert_eq!(link_2.terms, vec![(vars.production[2], 1.0), (vars.setup[2], -460.0)]);
    }

    #[test]
    fn test_solve_lot_sizing_single_setup_is_optimal() {
        let plan = solve_lot_sizing(&params(), &MicrolpSolver::new()).unwrap();
        assert!((plan.total_cost - 25400.0).abs() < 1e-4);
        assert_eq!(plan.setup, vec![1, 0, 0, 0]);
        assert!((plan.production_plan[0] - 460.0).abs() < 1e-4);
    }

    #[test]
    fn test_solve_lot_sizing_basic_matches_detailed() {
        let solver = MicrolpSolver::new();
        let plan = solve_lot_sizing(&params(), &solver).unwrap();
        let BasicPlan(production, cost) = solve_lot_sizing_basic(&params(), &solver).unwrap();
        assert_eq!(production, plan.production_plan);
        assert_eq!(cost, plan.total_cost);
    }
}
