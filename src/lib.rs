//! Lot-sizing production planning as MILP, exposed as tools over HTTP and CLI.
//!
//! The planning core lives in [`domain`]; [`tools`] names the operations an
//! orchestrator can call and [`api`] serves them with actix-web.

pub mod api;
pub mod cli;
pub mod config;
pub mod convert;
pub mod domain;
pub mod models;
pub mod tools;

pub use domain::cap_lot_sizing::{solve_cap_lot_sizing, solve_cap_lot_sizing_basic};
pub use domain::error::{PlanningError, SolveError};
pub use domain::lot_sizing::{solve_lot_sizing, solve_lot_sizing_basic};
pub use models::{BasicPlan, CapLotSizingParams, LotSizingParams, LotSizingPlan};
