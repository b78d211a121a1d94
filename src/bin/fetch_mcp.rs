//! Reads `{"start_date": "YYYY-MM-DD", "end_date": "YYYY-MM-DD"}` on stdin and
//! prints the hourly market clearing prices. Needs EPIAS credentials.

use std::error::Error;

use rust_lotsizing::cli;
use rust_lotsizing::tools::ToolRegistry;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = cli::init()?;
    let registry = ToolRegistry::from_config(&config)?;

    let args: Value = cli::read_stdin()?;
    let prices = registry.fetch_mcp(args).await?;
    cli::write_stdout(&prices)
}
