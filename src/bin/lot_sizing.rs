//! Reads uncapacitated lot-sizing parameters as JSON on stdin and prints the
//! optimal plan. Pass `--basic` for `[production_plan, total_cost]` only.

use std::error::Error;

use rust_lotsizing::cli;
use rust_lotsizing::domain::solver_factory::create_solver;
use rust_lotsizing::models::LotSizingParams;
use rust_lotsizing::{solve_lot_sizing, solve_lot_sizing_basic};

fn main() -> Result<(), Box<dyn Error>> {
    let config = cli::init()?;
    let basic = std::env::args().skip(1).any(|arg| arg == "--basic");

    let params: LotSizingParams = cli::read_stdin()?;
    let solver = create_solver(config.solver);

    if basic {
        cli::write_stdout(&solve_lot_sizing_basic(&params, solver.as_ref())?)
    } else {
        cli::write_stdout(&solve_lot_sizing(&params, solver.as_ref())?)
    }
}
