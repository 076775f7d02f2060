//! # Instacart CLI Library
//!
//! This library creates recipe pages and shopping lists on Instacart through its
//! MCP "tool call" endpoint. It consists of three main components:
//!
//! ## Client Module
//!
//! The [`client`] module builds the JSON-RPC envelope from a [`Recipe`] or
//! [`ShoppingList`], sends it, and recovers the shareable URL from the response.
//!
//! ## Config Module
//!
//! The [`config`] module holds the endpoint, bearer token and timeout that a
//! client is constructed with.
//!
//! ## CLI Module
//!
//! The [`cli`] module implements the `instacart` command line: argument parsing,
//! JSON document loading and result presentation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use instacart_cli::{ClientConfig, Ingredient, InstacartClient, Recipe};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = InstacartClient::new(ClientConfig::default())?;
//!
//! let recipe = Recipe::new("Tacos", vec![Ingredient::new("Tortilla")]);
//! let url = client.create_recipe(recipe, &CancellationToken::new()).await?;
//! println!("{}", url);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;

pub use client::{
    ClientError, Ingredient, InstacartClient, LineItem, Recipe, ShoppingList, TransportError,
};
pub use config::ClientConfig;
