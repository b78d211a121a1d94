//! Solver-agnostic description of a mixed-integer linear program.
//!
//! Formulations only talk to this module; every backend translates a
//! [`MilpModel`] into its own API.

/// Handle of a variable inside the model that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(usize);

impl VarId {
    /// Position of the variable in declaration order.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VarDomain {
    Continuous { lower: f64, upper: f64 },
    Binary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDef {
    pub name: String,
    pub domain: VarDomain,
    /// Objective coefficient
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Le,
    Ge,
    Eq,
}

/// `sum(coeff * var) <cmp> rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub name: String,
    pub terms: Vec<(VarId, f64)>,
    pub cmp: Comparison,
    pub rhs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

#[derive(Debug, Clone)]
pub struct MilpModel {
    name: String,
    sense: Sense,
    variables: Vec<VariableDef>,
    constraints: Vec<LinearConstraint>,
}

impl MilpModel {
    pub fn new(name: impl Into<String>, sense: Sense) -> Self {
        Self {
            name: name.into(),
            sense,
            variables: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Add a continuous variable with bounds `[lower, upper]` (`upper` may be infinite).
    pub fn add_continuous(&mut self, name: impl Into<String>, lower: f64, upper: f64, cost: f64) -> VarId {
        self.push_variable(name.into(), VarDomain::Continuous { lower, upper }, cost)
    }

    pub fn add_binary(&mut self, name: impl Into<String>, cost: f64) -> VarId {
        self.push_variable(name.into(), VarDomain::Binary, cost)
    }

    fn push_variable(&mut self, name: String, domain: VarDomain, cost: f64) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(VariableDef { name, domain, cost });
        id
    }

    /// Add a linear constraint. A variable must appear at most once in `terms`.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        terms: Vec<(VarId, f64)>,
        cmp: Comparison,
        rhs: f64,
    ) {
        debug_assert!(terms.iter().all(|(id, _)| id.0 < self.variables.len()));
        self.constraints.push(LinearConstraint {
            name: name.into(),
            terms,
            cmp,
            rhs,
        });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn variables(&self) -> &[VariableDef] {
        &self.variables
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    pub fn num_binaries(&self) -> usize {
        self.variables
            .iter()
            .filter(|v| v.domain == VarDomain::Binary)
            .count()
    }

    /// Evaluate the objective at `values` (indexed by variable position).
    pub fn objective_at(&self, values: &[f64]) -> f64 {
        self.variables
            .iter()
            .zip(values)
            .map(|(var, value)| var.cost * value)
            .sum()
    }

    /// Largest violation of any constraint or bound at `values`; 0 when feasible.
    pub fn max_violation(&self, values: &[f64]) -> f64 {
        let bounds = self.variables.iter().zip(values).map(|(var, &value)| match var.domain {
            VarDomain::Continuous { lower, upper } => (lower - value).max(value - upper).max(0.0),
            VarDomain::Binary => (0.0 - value).max(value - 1.0).max(0.0),
        });
        let rows = self.constraints.iter().map(|c| {
            let lhs: f64 = c.terms.iter().map(|(id, coeff)| coeff * values[id.0]).sum();
            match c.cmp {
                Comparison::Le => (lhs - c.rhs).max(0.0),
                Comparison::Ge => (c.rhs - lhs).max(0.0),
                Comparison::Eq => (lhs - c.rhs).abs(),
            }
        });
        bounds.chain(rows).fold(0.0, f64::max)
    }
}
