use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EpiasError, Result};

/// Wire format of the dates accepted by [`McpQuery::parse`]
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Login for the EPIAS transparency platform
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Inclusive range of delivery days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McpQuery {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl McpQuery {
    /// Create a query for `start_date..=end_date`
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self> {
        if start_date > end_date {
            return Err(EpiasError::InvalidRequest(format!(
                "start_date {} is after end_date {}",
                start_date, end_date
            )));
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Parse `YYYY-MM-DD` dates
    ///
    /// # Example
    ///
    /// ```
    /// use epias_client::McpQuery;
    ///
    /// let query = McpQuery::parse("2025-07-23", "2025-07-24").unwrap();
    /// assert_eq!(query.days(), 2);
    /// ```
    pub fn parse(start_date: &str, end_date: &str) -> Result<Self> {
        Self::new(parse_date("start_date", start_date)?, parse_date("end_date", end_date)?)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of delivery days covered
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Request body for the MCP endpoint
    pub fn to_request(&self) -> McpRequest {
        McpRequest {
            start_date: to_turkey_midnight(self.start_date),
            end_date: to_turkey_midnight(self.end_date),
        }
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        EpiasError::InvalidRequest(format!("{} '{}' is not a YYYY-MM-DD date: {}", field, value, e))
    })
}

// The platform expects local (UTC+03:00) timestamps.
fn to_turkey_midnight(date: NaiveDate) -> String {
    format!("{}T00:00:00+03:00", date.format(DATE_FORMAT))
}

/// Body of the MCP request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpRequest {
    pub start_date: String,
    pub end_date: String,
}

/// Hourly market clearing price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpItem {
    /// Delivery timestamp, e.g. `2025-07-23T00:00:00+03:00`
    pub date: String,
    /// Delivery hour, e.g. `00:00`
    #[serde(default)]
    pub hour: Option<String>,
    /// Price in TRY/MWh
    pub price: f64,
    #[serde(default)]
    pub price_usd: Option<f64>,
    #[serde(default)]
    pub price_eur: Option<f64>,
}

/// Response of the MCP endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpResponse {
    pub items: Vec<McpItem>,
}

impl McpResponse {
    /// Arithmetic mean of the TRY prices, `None` when there are no items
    pub fn average_price(&self) -> Option<f64> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.iter().map(|item| item.price).sum::<f64>() / self.items.len() as f64)
    }
}
