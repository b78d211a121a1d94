use serde::{Deserialize, Serialize};
use std::fmt;

// ---------- Tool (wire) types: owned & serde-friendly ----------

fn zero() -> f64 {
    0.0
}

/// Arguments of the uncapacitated lot-sizing tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LotSizingParams {
    /// Demand per period (length T)
    pub demand: Vec<f64>,
    /// Fixed cost incurred whenever production occurs in a period
    pub setup_cost: f64,
    /// Variable cost per produced unit
    pub unit_cost: f64,
    /// Inventory carrying cost per unit per period
    pub holding_cost: f64,
    /// On-hand stock before period 1
    #[serde(default = "zero")]
    pub initial_inventory: f64,
}

/// Arguments of the capacitated lot-sizing tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapLotSizingParams {
    pub demand: Vec<f64>,
    /// Maximum producible units per period, same length as `demand`
    pub capacity: Vec<f64>,
    pub setup_cost: f64,
    pub unit_cost: f64,
    pub holding_cost: f64,
    #[serde(default = "zero")]
    pub initial_inventory: f64,
}

impl CapLotSizingParams {
    /// The uncapacitated view of the same instance.
    pub fn uncapacitated(&self) -> LotSizingParams {
        LotSizingParams {
            demand: self.demand.clone(),
            setup_cost: self.setup_cost,
            unit_cost: self.unit_cost,
            holding_cost: self.holding_cost,
            initial_inventory: self.initial_inventory,
        }
    }
}

/// Detailed result of a lot-sizing solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotSizingPlan {
    /// Quantity produced in each period
    pub production_plan: Vec<f64>,
    /// Ending inventory of each period
    pub inventory: Vec<f64>,
    /// 0/1 flag, 1 if production is set up in the period
    pub setup: Vec<u8>,
    /// Optimal objective value as reported by the solver
    pub total_cost: f64,
}

impl LotSizingPlan {
    pub fn periods(&self) -> usize {
        self.production_plan.len()
    }
}

/// `(production_plan, total_cost)`, serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicPlan(pub Vec<f64>, pub f64);

impl From<LotSizingPlan> for BasicPlan {
    fn from(plan: LotSizingPlan) -> Self {
        BasicPlan(plan.production_plan, plan.total_cost)
    }
}

// ---------- Solver status (decoupled from the backends) ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Undefined,
    Optimal,
    Infeasible,
    Unbounded,
    InfeasibleOrUnbounded,
    TimeLimit,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Undefined => "undefined",
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
            Status::InfeasibleOrUnbounded => "infeasible or unbounded",
            Status::TimeLimit => "time limit reached",
        };
        f.write_str(s)
    }
}
