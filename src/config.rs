//! Client configuration.
//!
//! One [`ClientConfig`] is built per run, from command line flags with an
//! environment variable fallback for the token, and handed to
//! [`InstacartClient::new`](crate::InstacartClient::new).

use std::env;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://mcp.dev.instacart.tools/mcp";
pub const TOKEN_ENV_VAR: &str = "INSTACART_MCP_TOKEN";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// MCP endpoint that receives the `tools/call` POST
    pub endpoint: String,
    /// Bearer token; no `Authorization` header is sent when `None`
    pub token: Option<String>,
    /// Upper bound on the whole request, connect through body
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Builds a config from optional overrides. A missing or empty endpoint falls
    /// back to [`DEFAULT_ENDPOINT`], and the token is resolved with [`resolve_token`].
    pub fn from_overrides(endpoint: Option<String>, token: Option<String>) -> Self {
        let endpoint = endpoint
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            endpoint,
            token: resolve_token(token),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.is_empty()).then_some(token);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// First ten characters of the token, for logging.
    pub fn token_preview(&self) -> Option<String> {
        self.token
            .as_deref()
            .map(|t| format!("{}...", t.chars().take(10).collect::<String>()))
    }
}

/// An explicit non-empty token wins; otherwise `INSTACART_MCP_TOKEN` is used if set
/// and non-empty.
pub fn resolve_token(explicit: Option<String>) -> Option<String> {
    if let Some(token) = explicit.filter(|t| !t.is_empty()) {
        tracing::debug!("Using bearer token from command line");
        return Some(token);
    }

    match env::var(TOKEN_ENV_VAR) {
        Ok(token) if !token.is_empty() => {
            tracing::debug!("Using bearer token from {}", TOKEN_ENV_VAR);
            Some(token)
        }
        _ => None,
    }
}
