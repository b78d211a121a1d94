use epias_client::{Credentials, EpiasClient, McpQuery};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = env::var("EPIAS_USERNAME")?;
    let password = env::var("EPIAS_PASSWORD")?;
    let day = env::args().nth(1).unwrap_or_else(|| "2025-07-23".to_string());

    let client = EpiasClient::new(Credentials::new(username, password))?;
    let query = McpQuery::parse(&day, &day)?;

    let response = client.fetch_mcp(&query).await?;

    println!("MCP for {} ({} hours)", day, response.items.len());
    for item in &response.items {
        println!(
            "  {} {:>10.2} TRY/MWh",
            item.hour.as_deref().unwrap_or(&item.date),
            item.price
        );
    }
    if let Some(avg) = response.average_price() {
        println!("  average {:.2} TRY/MWh", avg);
    }

    Ok(())
}
