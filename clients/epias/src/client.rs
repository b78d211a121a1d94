use crate::error::{EpiasError, Result};
use crate::types::{Credentials, McpQuery, McpResponse};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};

/// Central login service issuing ticket-granting tickets (TGT)
pub const DEFAULT_AUTH_URL: &str = "https://giris.epias.com.tr/cas/v1/tickets";

/// Electricity service root of the transparency platform
pub const DEFAULT_API_URL: &str = "https://seffaflik.epias.com.tr/electricity-service/";

const MCP_PATH: &str = "v1/markets/dam/data/mcp";

/// HTTP client for the EPIAS transparency platform
#[derive(Debug, Clone)]
pub struct EpiasClient {
    client: Client,
    auth_url: Url,
    api_url: Url,
    credentials: Credentials,
}

impl EpiasClient {
    /// Create a client against the production endpoints
    ///
    /// # Example
    ///
    /// ```no_run
    /// use epias_client::{Credentials, EpiasClient};
    ///
    /// let client = EpiasClient::new(Credentials::new("user@example.com", "secret")).unwrap();
    /// ```
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_urls(DEFAULT_AUTH_URL, DEFAULT_API_URL, credentials)
    }

    /// Create a client against custom endpoints (staging, proxies, tests)
    pub fn with_urls(
        auth_url: impl AsRef<str>,
        api_url: impl AsRef<str>,
        credentials: Credentials,
    ) -> Result<Self> {
        Self::with_client(auth_url, api_url, credentials, Client::new())
    }

    /// Create a client with a custom reqwest client
    ///
    /// This allows you to configure timeouts, proxies, etc.
    pub fn with_client(
        auth_url: impl AsRef<str>,
        api_url: impl AsRef<str>,
        credentials: Credentials,
        client: Client,
    ) -> Result<Self> {
        let auth_url = Url::parse(auth_url.as_ref())
            .map_err(|e| EpiasError::InvalidUrl(e.to_string()))?;
        let api_url = Url::parse(api_url.as_ref())
            .map_err(|e| EpiasError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            client,
            auth_url,
            api_url,
            credentials,
        })
    }

    /// Full URL of the MCP endpoint
    pub fn mcp_url(&self) -> Result<Url> {
        self.api_url
            .join(MCP_PATH)
            .map_err(|e| EpiasError::InvalidUrl(e.to_string()))
    }

    /// Log in and obtain a ticket-granting ticket
    pub async fn ticket(&self) -> Result<String> {
        let response = self
            .client
            .post(self.auth_url.clone())
            .header(ACCEPT, "text/plain")
            .form(&[
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        let tgt = response.text().await?.trim().to_string();
        if tgt.is_empty() {
            return Err(EpiasError::ParseError("empty ticket in login response".to_string()));
        }
        Ok(tgt)
    }

    /// Fetch hourly market clearing prices for an inclusive day range
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use epias_client::{Credentials, EpiasClient, McpQuery};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = EpiasClient::new(Credentials::new("user@example.com", "secret"))?;
    /// let query = McpQuery::parse("2025-07-23", "2025-07-23")?;
    ///
    /// let response = client.fetch_mcp(&query).await?;
    /// for item in &response.items {
    ///     println!("{} {}", item.date, item.price);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_mcp(&self, query: &McpQuery) -> Result<McpResponse> {
        let url = self.mcp_url()?;
        let tgt = self.ticket().await?;

        let response = self
            .client
            .post(url)
            .header("TGT", tgt)
            .json(&query.to_request())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        response
            .json::<McpResponse>()
            .await
            .map_err(|e| EpiasError::ParseError(e.to_string()))
    }

    async fn status_error(status: StatusCode, response: reqwest::Response) -> EpiasError {
        match status.as_u16() {
            401 | 403 => EpiasError::AuthenticationFailed,
            _ => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                EpiasError::ApiError(format!("{}: {}", status, error_text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("user@example.com", "secret")
    }

    #[test]
    fn test_client_creation() {
        let client = EpiasClient::new(creds());
        assert!(client.is_ok());
    }

    #[test]
    fn test_mcp_url() {
        let client = EpiasClient::new(creds()).unwrap();
        assert_eq!(
            client.mcp_url().unwrap().as_str(),
            "https://seffaflik.epias.com.tr/electricity-service/v1/markets/dam/data/mcp"
        );
    }

    #[test]
    fn test_invalid_url() {
        let client = EpiasClient::with_urls("not a valid url", DEFAULT_API_URL, creds());
        assert!(matches!(client, Err(EpiasError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_unreachable_login_is_a_request_error() {
        // nothing listens on the discard port
        let client = EpiasClient::with_urls(
            "http://127.0.0.1:9/cas/v1/tickets",
            "http://127.0.0.1:9/",
            creds(),
        )
        .unwrap();
        let query = McpQuery::parse("2025-07-23", "2025-07-23").unwrap();
        let err = client.fetch_mcp(&query).await.unwrap_err();
        assert!(matches!(err, EpiasError::Request(_)));
    }
}
