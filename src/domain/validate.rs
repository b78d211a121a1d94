use crate::domain::error::{PlanningError, Result};
use crate::models::{CapLotSizingParams, LotSizingParams};

fn invalid(details: String) -> PlanningError {
    PlanningError::Validation(details)
}

fn validate_quantity(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(invalid(format!("'{}' must be a finite number, got {}", name, value)));
    }
    if value < 0.0 {
        return Err(invalid(format!("'{}' must be non-negative, got {}", name, value)));
    }
    Ok(())
}

fn validate_series(name: &str, series: &[f64]) -> Result<()> {
    for (period, &value) in series.iter().enumerate() {
        validate_quantity(&format!("{}[{}]", name, period), value)?;
    }
    Ok(())
}

/// Checks shared by both lot-sizing variants.
pub fn validate_lot_sizing(params: &LotSizingParams) -> Result<()> {
    if params.demand.is_empty() {
        return Err(invalid("'demand' must contain at least one period".to_string()));
    }
    validate_series("demand", &params.demand)?;
    validate_quantity("setup_cost", params.setup_cost)?;
    validate_quantity("unit_cost", params.unit_cost)?;
    validate_quantity("holding_cost", params.holding_cost)?;
    validate_quantity("initial_inventory", params.initial_inventory)?;
    Ok(())
}

pub fn validate_cap_lot_sizing(params: &CapLotSizingParams) -> Result<()> {
    if params.demand.len() != params.capacity.len() {
        return Err(invalid(format!(
            "'demand' and 'capacity' must have the same length ({} != {})",
            params.demand.len(),
            params.capacity.len(),
        )));
    }
    validate_lot_sizing(&params.uncapacitated())?;
    validate_series("capacity", &params.capacity)
}
