use rust_lotsizing::domain::solvers::MicrolpSolver;
use rust_lotsizing::domain::{cap_lot_sizing, lot_sizing};
use rust_lotsizing::{
    solve_cap_lot_sizing, solve_cap_lot_sizing_basic, solve_lot_sizing, solve_lot_sizing_basic,
    BasicPlan, CapLotSizingParams, LotSizingParams, LotSizingPlan, PlanningError,
};

const TOL: f64 = 1e-4;

fn params(demand: Vec<f64>, initial_inventory: f64) -> LotSizingParams {
    LotSizingParams {
        demand,
        setup_cost: 1000.0,
        unit_cost: 50.0,
        holding_cost: 2.0,
        initial_inventory,
    }
}

fn cap_params(demand: Vec<f64>, capacity: Vec<f64>) -> CapLotSizingParams {
    CapLotSizingParams {
        demand,
        capacity,
        setup_cost: 1000.0,
        unit_cost: 50.0,
        holding_cost: 2.0,
        initial_inventory: 0.0,
    }
}

fn assert_balance(plan: &LotSizingPlan, demand: &[f64], initial_inventory: f64) {
    let mut previous = initial_inventory;
    for t in 0..demand.len() {
        let expected = previous + plan.production_plan[t] - demand[t];
        assert!(
            (plan.inventory[t] - expected).abs() < TOL,
            "period {}: inventory {} != {}",
            t,
            plan.inventory[t],
            expected
        );
        assert!(plan.inventory[t] >= -TOL);
        previous = plan.inventory[t];
    }
}

fn assert_setup_linking(plan: &LotSizingPlan, big_m: f64) {
    for (t, (&q, &flag)) in plan.production_plan.iter().zip(&plan.setup).enumerate() {
        assert!(flag <= 1);
        assert!(q <= big_m + TOL, "period {}: production {} exceeds big-M {}", t, q, big_m);
        if q > TOL {
            assert_eq!(flag, 1, "period {} produces without setup", t);
        }
    }
}

fn recomputed_cost(plan: &LotSizingPlan, p: &LotSizingParams) -> f64 {
    (0..plan.periods())
        .map(|t| {
            p.setup_cost * f64::from(plan.setup[t])
                + p.unit_cost * plan.production_plan[t]
                + p.holding_cost * plan.inventory[t]
        })
        .sum()
}

#[test]
fn test_single_setup_covers_whole_horizon() {
    let p = params(vec![100.0, 150.0, 80.0, 130.0], 0.0);
    let plan = solve_lot_sizing(&p, &MicrolpSolver::new()).unwrap();

    assert_eq!(plan.periods(), 4);
    assert_eq!(plan.setup, vec![1, 0, 0, 0]);
    assert!((plan.production_plan[0] - 460.0).abs() < TOL);
    let expected_inventory = [360.0, 210.0, 130.0, 0.0];
    for (got, want) in plan.inventory.iter().zip(expected_inventory) {
        assert!((got - want).abs() < TOL);
    }
    assert!((plan.total_cost - 25400.0).abs() < TOL);

    assert_balance(&plan, &p.demand, p.initial_inventory);
    assert_setup_linking(&plan, lot_sizing::big_m(&p));
    assert!((recomputed_cost(&plan, &p) - plan.total_cost).abs() < 1e-3);
}

#[test]
fn test_initial_inventory_covers_first_periods() {
    let p = params(vec![20.0, 30.0, 40.0], 50.0);
    let plan = solve_lot_sizing(&p, &MicrolpSolver::new()).unwrap();

    assert!(plan.production_plan[0].abs() < TOL);
    assert!(plan.production_plan[1].abs() < TOL);
    assert_eq!(plan.setup, vec![0, 0, 1]);
    assert!((plan.production_plan[2] - 40.0).abs() < TOL);
    assert!((plan.total_cost - (1000.0 + 50.0 * 40.0 + 2.0 * 30.0)).abs() < TOL);
    assert_balance(&plan, &p.demand, p.initial_inventory);
    assert_setup_linking(&plan, lot_sizing::big_m(&p));
}

#[test]
fn test_zero_demand_needs_no_production() {
    let p = params(vec![0.0, 0.0, 0.0], 0.0);
    let plan = solve_lot_sizing(&p, &MicrolpSolver::new()).unwrap();

    assert_eq!(plan.setup, vec![0, 0, 0]);
    assert!(plan.total_cost.abs() < TOL);
}

#[test]
fn test_high_holding_cost_produces_every_period() {
    let mut p = params(vec![10.0, 10.0, 10.0], 0.0);
    p.setup_cost = 1.0;
    p.holding_cost = 100.0;
    let plan = solve_lot_sizing(&p, &MicrolpSolver::new()).unwrap();

    assert_eq!(plan.setup, vec![1, 1, 1]);
    for &q in &plan.production_plan {
        assert!((q - 10.0).abs() < TOL);
    }
    assert_setup_linking(&plan, lot_sizing::big_m(&p));
}

#[test]
fn test_basic_result_matches_detailed_result() {
    let p = params(vec![100.0, 150.0, 80.0, 130.0], 0.0);
    let solver = MicrolpSolver::new();
    let plan = solve_lot_sizing(&p, &solver).unwrap();
    let BasicPlan(production, cost) = solve_lot_sizing_basic(&p, &solver).unwrap();

    assert_eq!(production, plan.production_plan);
    assert_eq!(cost, plan.total_cost);
}

#[test]
fn test_repeated_solves_return_identical_plans() {
    let p = params(vec![100.0, 150.0, 80.0, 130.0], 0.0);
    let solver = MicrolpSolver::new();
    let first = solve_lot_sizing(&p, &solver).unwrap();
    let second = solve_lot_sizing(&p, &solver).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_repeated_capacitated_solves_return_identical_plans() {
    let p = cap_params(vec![100.0, 150.0, 80.0, 130.0], vec![200.0; 4]);
    let solver = MicrolpSolver::new();
    let first = solve_cap_lot_sizing(&p, &solver).unwrap();
    let second = solve_cap_lot_sizing(&p, &solver).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_loose_capacity_stays_within_big_m() {
    let p = cap_params(vec![100.0, 150.0, 80.0, 130.0], vec![500.0; 4]);
    let plan = solve_cap_lot_sizing(&p, &MicrolpSolver::new()).unwrap();

    assert_eq!(cap_lot_sizing::big_m(&p), 500.0);
    assert_setup_linking(&plan, cap_lot_sizing::big_m(&p));
    assert_balance(&plan, &p.demand, 0.0);
}

#[test]
fn test_capacity_forces_extra_setups() {
    let p = cap_params(vec![100.0, 150.0, 80.0, 130.0], vec![200.0; 4]);
    let plan = solve_cap_lot_sizing(&p, &MicrolpSolver::new()).unwrap();

    assert_eq!(plan.setup, vec![1, 1, 0, 1]);
    let expected = [130.0, 200.0, 0.0, 130.0];
    for (t, want) in expected.iter().enumerate() {
        assert!((plan.production_plan[t] - want).abs() < TOL);
        assert!(plan.production_plan[t] <= p.capacity[t] + TOL);
    }
    assert!((plan.total_cost - 26220.0).abs() < TOL);
    assert_balance(&plan, &p.demand, 0.0);
    assert_setup_linking(&plan, cap_lot_sizing::big_m(&p));
    assert!((recomputed_cost(&plan, &p.uncapacitated()) - plan.total_cost).abs() < 1e-3);
}

#[test]
fn test_capacity_below_demand_is_an_optimisation_failure() {
    let p = cap_params(vec![100.0, 150.0, 80.0, 130.0], vec![90.0; 4]);
    let err = solve_cap_lot_sizing(&p, &MicrolpSolver::new()).unwrap_err();
    assert!(err.is_optimization_failure());
}

#[test]
fn test_zero_capacity_with_positive_demand_is_an_optimisation_failure() {
    let p = cap_params(vec![10.0, 10.0], vec![0.0, 0.0]);
    let err = solve_cap_lot_sizing_basic(&p, &MicrolpSolver::new()).unwrap_err();
    assert!(err.is_optimization_failure());
}

#[test]
fn test_capacity_length_mismatch_is_a_validation_failure() {
    let p = cap_params(vec![100.0, 150.0, 80.0, 130.0], vec![90.0; 3]);
    let err = solve_cap_lot_sizing(&p, &MicrolpSolver::new()).unwrap_err();
    assert!(matches!(err, PlanningError::Validation(_)));
}

#[test]
fn test_empty_demand_is_a_validation_failure() {
    let err = solve_lot_sizing(&params(vec![], 0.0), &MicrolpSolver::new()).unwrap_err();
    assert!(matches!(err, PlanningError::Validation(_)));

    let err = solve_cap_lot_sizing(&cap_params(vec![], vec![]), &MicrolpSolver::new()).unwrap_err();
    assert!(matches!(err, PlanningError::Validation(_)));
}
