#![allow(dead_code)]

use std::time::Duration;

use instacart_cli::{ClientConfig, Ingredient, InstacartClient, LineItem, Recipe, ShoppingList};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MCP_PATH: &str = "/mcp";

/// A client pointed at a local mock MCP endpoint.
pub struct TestEnvironment {
    pub server: MockServer,
    pub client: InstacartClient,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        Self::with_config(|config| config).await
    }

    pub async fn with_token(token: &str) -> Self {
        let token = token.to_string();
        Self::with_config(move |config| config.with_token(token)).await
    }

    pub async fn with_config(customize: impl FnOnce(ClientConfig) -> ClientConfig) -> Self {
        let server = MockServer::start().await;
        let config = customize(
            ClientConfig::default().with_endpoint(format!("{}{}", server.uri(), MCP_PATH)),
        );
        let client = InstacartClient::new(config).expect("Failed to build client");
        Self { server, client }
    }

    /// Answers every POST to the endpoint with `result` wrapped in a JSON-RPC reply.
    pub async fn respond_with_result(&self, result: Value) {
        self.respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": "instacart-cli-test",
            "result": result,
        })))
        .await;
    }

    pub async fn respond_with(&self, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(MCP_PATH))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request the mock endpoint has seen.
    pub async fn received_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.body_json::<Value>().expect("request body is JSON"))
            .collect()
    }
}

pub fn tacos() -> Recipe {
    Recipe::new(
        "Tacos",
        vec![Ingredient::new("Tortilla").with_quantity(8.0, "count")],
    )
}

pub fn weekly_list() -> ShoppingList {
    ShoppingList::new(
        "Weekly",
        vec![
            LineItem::new("Milk").with_quantity(1.0, "gallon"),
            LineItem::new("Eggs"),
        ],
    )
}

pub const SHORT_TIMEOUT: Duration = Duration::from_millis(200);

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .try_init();
}
