use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tokio_util::sync::CancellationToken;

use crate::client::{
    envelope::{self, Arguments, RpcRequest, RpcResponse},
    error::{ClientError, TransportError},
    extract::extract_url,
    types::*,
};
use crate::config::ClientConfig;

pub struct InstacartClient {
    config: ClientConfig,
    client: Client,
}

impl InstacartClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TransportError::Network)?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get_auth_header(&self) -> Option<String> {
        match self.config.token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => {
                tracing::debug!(
                    "Using bearer token: {}",
                    self.config.token_preview().unwrap_or_default()
                );
                Some(format!("Bearer {}", token))
            }
            None => {
                tracing::debug!("No bearer token configured, sending request without Authorization");
                None
            }
        }
    }

    /// Creates a recipe page and returns its shareable URL, or an empty string
    /// when the response carried none.
    pub async fn create_recipe(
        &self,
        recipe: Recipe,
        cancel: &CancellationToken,
    ) -> Result<String, ClientError> {
        recipe.validate()?;
        let request = envelope::recipe_request(&recipe);
        let result = self.call_tool(&request, cancel).await?;
        Ok(extract_url(&result))
    }

    /// Creates a shopping list and returns its shareable URL, or an empty string
    /// when the response carried none.
    pub async fn create_shopping_list(
        &self,
        list: ShoppingList,
        cancel: &CancellationToken,
    ) -> Result<String, ClientError> {
        list.validate()?;
        let request = envelope::shopping_list_request(&list);
        let result = self.call_tool(&request, cancel).await?;
        Ok(extract_url(&result))
    }

    /// Sends one `tools/call` request and returns the `result` mapping.
    ///
    /// Exactly one attempt is made. Cancelling `cancel` drops the in-flight request
    /// and returns [`TransportError::Cancelled`].
    pub async fn call_tool(
        &self,
        request: &RpcRequest,
        cancel: &CancellationToken,
    ) -> Result<Arguments, ClientError> {
        let body = serde_json::to_vec(request).map_err(ClientError::Serialization)?;

        tracing::debug!(
            "Calling tool {} at {} (id {})",
            request.params.name,
            self.config.endpoint,
            request.id
        );

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Tool call {} cancelled", request.id);
                Err(TransportError::Cancelled.into())
            }
            result = self.exchange(body) => result,
        }
    }

    async fn exchange(&self, body: Vec<u8>) -> Result<Arguments, ClientError> {
        let mut builder = self
            .client
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(auth_header) = self.get_auth_header() {
            builder = builder.header(AUTHORIZATION, auth_header);
        }

        let response = builder.send().await.map_err(|e| self.network_error(e))?;

        let status = response.status();
        tracing::debug!("Tool call response status: {}", status);

        let text = response.text().await.map_err(|e| self.network_error(e))?;

        if !status.is_success() {
            let body = text.trim().to_string();
            tracing::debug!("Tool call failed with status {}: {}", status, body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let response: RpcResponse = serde_json::from_str(&text).map_err(ClientError::Decode)?;

        if let Some(error) = response.error {
            tracing::debug!("Tool call returned rpc error {}: {}", error.code, error.message);
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(response.result.unwrap_or_default())
    }

    fn network_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            tracing::debug!("Request to {} timed out", self.config.endpoint);
            TransportError::Timeout(self.config.timeout).into()
        } else {
            tracing::debug!("Network error talking to {}: {}", self.config.endpoint, error);
            TransportError::Network(error).into()
        }
    }
}
