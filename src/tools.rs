//! Named operations an external orchestrator (agent, chat front-end, script)
//! can list and invoke.
//!
//! Dispatch is an explicit match on [`ToolKind`]; the descriptions only
//! document the tools for whoever chooses between them.

use std::sync::Arc;

use epias_client::{EpiasClient, EpiasError, McpQuery};
use log::info;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::task::{self, JoinError};

use crate::config::AppConfig;
use crate::domain::cap_lot_sizing::{solve_cap_lot_sizing, solve_cap_lot_sizing_basic};
use crate::domain::error::PlanningError;
use crate::domain::lot_sizing::{solve_lot_sizing, solve_lot_sizing_basic};
use crate::domain::solver::Solver;
use crate::domain::solver_factory::create_solver;
use crate::models::{CapLotSizingParams, LotSizingParams};

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Planning(#[from] PlanningError),

    #[error("market data request failed: {0}")]
    Transport(#[from] EpiasError),

    #[error("{0} is not configured")]
    Unavailable(&'static str),

    #[error("failed to encode result: {0}")]
    Encode(serde_json::Error),

    #[error("planning task did not complete: {0}")]
    Aborted(#[from] JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    SolveLotSizing,
    SolveLotSizingBasic,
    SolveCapLotSizing,
    SolveCapLotSizingBasic,
    FetchMcp,
}

impl ToolKind {
    pub const ALL: [ToolKind; 5] = [
        ToolKind::SolveLotSizing,
        ToolKind::SolveLotSizingBasic,
        ToolKind::SolveCapLotSizing,
        ToolKind::SolveCapLotSizingBasic,
        ToolKind::FetchMcp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::SolveLotSizing => "solve_lot_sizing",
            ToolKind::SolveLotSizingBasic => "solve_lot_sizing_basic",
            ToolKind::SolveCapLotSizing => "solve_cap_lot_sizing",
            ToolKind::SolveCapLotSizingBasic => "solve_cap_lot_sizing_basic",
            ToolKind::FetchMcp => "fetch_mcp",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn spec(self) -> ToolSpec {
        let (description, parameters, returns) = match self {
            ToolKind::SolveLotSizing => (
                "Compute the optimal single-item lot-sizing plan (fixed setup cost, unit cost, \
                 holding cost, unlimited production) and return production, inventory, setup flags \
                 and total cost per period.",
                lot_sizing_params(false),
                "object with production_plan (number[]), inventory (number[]), setup (0/1[]) and total_cost (number)",
            ),
            ToolKind::SolveLotSizingBasic => (
                "Same optimisation as solve_lot_sizing, returning only the production plan and the total cost.",
                lot_sizing_params(false),
                "[production_plan (number[]), total_cost (number)]",
            ),
            ToolKind::SolveCapLotSizing => (
                "Compute the optimal lot-sizing plan when production in each period is limited by \
                 a capacity; returns production, inventory, setup flags and total cost per period.",
                lot_sizing_params(true),
                "object with production_plan (number[]), inventory (number[]), setup (0/1[]) and total_cost (number)",
            ),
            ToolKind::SolveCapLotSizingBasic => (
                "Same optimisation as solve_cap_lot_sizing, returning only the production plan and the total cost.",
                lot_sizing_params(true),
                "[production_plan (number[]), total_cost (number)]",
            ),
            ToolKind::FetchMcp => (
                "Fetch hourly Market Clearing Price (MCP) data of the Turkish day-ahead electricity \
                 market from the EPIAS transparency platform. PTF (Piyasa Takas Fiyatı) is the \
                 Turkish name of MCP, so questions like \"what is ptf today\" or \"dünkü ptf nedir\" \
                 are answered by this tool. For \"today\" use the current date as both start and end.",
                vec![
                    ParamSpec::required("start_date", "string", "Start date in YYYY-MM-DD format."),
                    ParamSpec::required("end_date", "string", "End date in YYYY-MM-DD format (inclusive)."),
                ],
                "object with items: [{date, hour, price (TRY/MWh), priceUsd, priceEur}]",
            ),
        };

        ToolSpec {
            name: self.name(),
            description,
            parameters,
            returns,
        }
    }
}

fn lot_sizing_params(capacitated: bool) -> Vec<ParamSpec> {
    let mut params = vec![ParamSpec::required(
        "demand",
        "number[]",
        "Demand quantity for each period (length T).",
    )];
    if capacitated {
        params.push(ParamSpec::required(
            "capacity",
            "number[]",
            "Maximum producible units per period (same length as demand).",
        ));
    }
    params.extend([
        ParamSpec::required("setup_cost", "number", "Fixed cost incurred whenever production occurs in a period."),
        ParamSpec::required("unit_cost", "number", "Variable production cost per unit produced."),
        ParamSpec::required("holding_cost", "number", "Inventory carrying cost per unit per period."),
        ParamSpec {
            name: "initial_inventory",
            kind: "number",
            description: "On-hand stock before period 1.",
            required: false,
            default: Some(json!(0.0)),
        },
    ]);
    params
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParamSpec {
    fn required(name: &'static str, kind: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: true,
            default: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ParamSpec>,
    pub returns: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct McpArgs {
    start_date: String,
    end_date: String,
}

fn parse_args<T: DeserializeOwned>(kind: ToolKind, args: Value) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|source| ToolError::InvalidArguments {
        tool: kind.name(),
        source,
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(ToolError::Encode)
}

/// Holds the collaborators the tools need; every invocation is independent.
pub struct ToolRegistry {
    solver: Arc<dyn Solver>,
    market: Option<EpiasClient>,
}

impl ToolRegistry {
    pub fn new(solver: Box<dyn Solver>) -> Self {
        Self {
            solver: Arc::from(solver),
            market: None,
        }
    }

    pub fn with_market(mut self, client: EpiasClient) -> Self {
        self.market = Some(client);
        self
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ToolError> {
        let registry = Self::new(create_solver(config.solver));
        match &config.epias {
            Some(epias) => {
                let client = EpiasClient::with_urls(&epias.auth_url, &epias.api_url, epias.credentials.clone())?;
                Ok(registry.with_market(client))
            }
            None => Ok(registry),
        }
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    fn is_available(&self, kind: ToolKind) -> bool {
        kind != ToolKind::FetchMcp || self.market.is_some()
    }

    /// Specs of the tools this registry can currently run.
    pub fn specs(&self) -> Vec<ToolSpec> {
        ToolKind::ALL
            .into_iter()
            .filter(|&kind| self.is_available(kind))
            .map(ToolKind::spec)
            .collect()
    }

    /// Parse `args`, then run `solve` on the blocking pool so the caller's
    /// executor thread stays free while the solver works.
    async fn plan<P, R, F>(&self, kind: ToolKind, args: Value, solve: F) -> Result<Value, ToolError>
    where
        P: DeserializeOwned + Send + 'static,
        R: Serialize + Send + 'static,
        F: FnOnce(&P, &dyn Solver) -> Result<R, PlanningError> + Send + 'static,
    {
        let params: P = parse_args(kind, args)?;
        let solver = Arc::clone(&self.solver);
        let result = task::spawn_blocking(move || solve(&params, solver.as_ref())).await??;
        to_json(&result)
    }

    pub async fn fetch_mcp(&self, args: Value) -> Result<Value, ToolError> {
        let client = self.market.as_ref().ok_or(ToolError::Unavailable("fetch_mcp"))?;
        let args: McpArgs = parse_args(ToolKind::FetchMcp, args)?;
        let query = McpQuery::parse(&args.start_date, &args.end_date)?;
        let response = client.fetch_mcp(&query).await?;
        to_json(&response)
    }

    /// Invoke a tool by name with a JSON argument object.
    pub async fn invoke(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let kind = ToolKind::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        info!("invoking tool {}", kind.name());
        match kind {
            ToolKind::FetchMcp => self.fetch_mcp(args).await,
            ToolKind::SolveLotSizing => self.plan::<LotSizingParams, _, _>(kind, args, solve_lot_sizing).await,
            ToolKind::SolveLotSizingBasic => self.plan::<LotSizingParams, _, _>(kind, args, solve_lot_sizing_basic).await,
            ToolKind::SolveCapLotSizing => self.plan::<CapLotSizingParams, _, _>(kind, args, solve_cap_lot_sizing).await,
            ToolKind::SolveCapLotSizingBasic => self.plan::<CapLotSizingParams, _, _>(kind, args, solve_cap_lot_sizing_basic).await,
        }
    }
}
