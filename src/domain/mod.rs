pub mod cap_lot_sizing;
pub mod error;
pub mod lot_sizing;
pub mod model;
pub mod solve;
pub mod solver;
pub mod solver_factory;
pub mod solvers;
pub mod validate;
