//! # EPIAS Client
//!
//! A Rust client for the EPIAS transparency platform: logs in against the
//! central ticket service and fetches day-ahead market clearing prices
//! (MCP, also known as PTF).
//!
//! ## Example
//!
//! ```no_run
//! use epias_client::{Credentials, EpiasClient, McpQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EpiasClient::new(Credentials::new("user@example.com", "secret"))?;
//!     let query = McpQuery::parse("2025-07-23", "2025-07-23")?;
//!
//!     let response = client.fetch_mcp(&query).await?;
//!     println!("{} hourly prices", response.items.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{EpiasClient, DEFAULT_API_URL, DEFAULT_AUTH_URL};
pub use error::{EpiasError, Result};
pub use types::{Credentials, McpItem, McpQuery, McpRequest, McpResponse};
