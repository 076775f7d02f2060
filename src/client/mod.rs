//! # Instacart MCP Client
//!
//! This module talks to the Instacart MCP endpoint, turning domain records into
//! `tools/call` requests and pulling a shareable URL out of the reply.
//!
//! ## Modules
//!
//! - [`types`] - Recipe and shopping list records with validation
//! - [`envelope`] - Argument mapping and JSON-RPC envelope construction
//! - [`client`] - HTTP transport and response classification
//! - [`extract`] - Best-effort URL recovery from the result mapping
//! - [`error`] - Error taxonomy shared by all of the above
//!
//! ## Quick Start
//!
//! ```no_run
//! use instacart_cli::client::{InstacartClient, LineItem, ShoppingList};
//! use instacart_cli::ClientConfig;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = InstacartClient::new(ClientConfig::default())?;
//!
//! let mut list = ShoppingList::new("Weekly", vec![LineItem::new("Milk")]);
//! list.enable_pantry_detection = true;
//!
//! let url = client.create_shopping_list(list, &CancellationToken::new()).await?;
//! println!("Shop at {}", url);
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod types;

pub use client::InstacartClient;
pub use error::{ClientError, TransportError};
pub use types::*;
