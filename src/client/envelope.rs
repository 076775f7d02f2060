//! JSON-RPC envelope construction for Instacart tool calls.
//!
//! Domain records are flattened into an untyped argument mapping and wrapped in a
//! `tools/call` request. Optional fields only appear in the mapping when they
//! carry a value: numbers when positive, strings when non-empty, lists when
//! non-empty.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::types::{Ingredient, LineItem, Recipe, ShoppingList};

pub const JSONRPC_VERSION: &str = "2.0";
pub const TOOLS_CALL_METHOD: &str = "tools/call";
pub const CREATE_RECIPE_TOOL: &str = "create-recipe";
pub const CREATE_SHOPPING_LIST_TOOL: &str = "create-shopping-list";

/// Tool arguments and tool results are both free-form JSON objects.
pub type Arguments = Map<String, Value>;

static REQUEST_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// A `tools/call` request as sent on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: ToolCallParams,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Arguments,
}

/// Response body. `result` is left untyped because its shape belongs to the server.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Arguments>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Wraps `arguments` in a request for the named tool with a fresh id.
pub fn tool_call(tool: &str, arguments: Arguments) -> RpcRequest {
    RpcRequest {
        jsonrpc: JSONRPC_VERSION,
        method: TOOLS_CALL_METHOD,
        params: ToolCallParams {
            name: tool.to_string(),
            arguments,
        },
        id: next_request_id(),
    }
}

pub fn recipe_request(recipe: &Recipe) -> RpcRequest {
    tool_call(CREATE_RECIPE_TOOL, recipe_arguments(recipe))
}

pub fn shopping_list_request(list: &ShoppingList) -> RpcRequest {
    tool_call(CREATE_SHOPPING_LIST_TOOL, shopping_list_arguments(list))
}

pub fn recipe_arguments(recipe: &Recipe) -> Arguments {
    let ingredients: Vec<Value> = recipe.ingredients.iter().map(ingredient_arguments).collect();

    let mut args = Arguments::new();
    args.insert("title".to_string(), Value::from(recipe.title.as_str()));
    args.insert("ingredients".to_string(), Value::Array(ingredients));
    insert_text(&mut args, "author", recipe.author.as_deref());
    insert_count(&mut args, "servings", recipe.servings);
    insert_count(&mut args, "cooking_time", recipe.cooking_time_minutes);
    insert_text(&mut args, "image_url", recipe.image_url.as_deref());
    if !recipe.instructions.is_empty() {
        args.insert("instructions".to_string(), Value::from(recipe.instructions.clone()));
    }
    args
}

pub fn shopping_list_arguments(list: &ShoppingList) -> Arguments {
    let line_items: Vec<Value> = list.line_items.iter().map(line_item_arguments).collect();

    let mut args = Arguments::new();
    args.insert("title".to_string(), Value::from(list.title.as_str()));
    args.insert("lineItems".to_string(), Value::Array(line_items));
    insert_text(&mut args, "image_url", list.image_url.as_deref());
    insert_count(&mut args, "expires_in", list.expires_in_days);
    if list.enable_pantry_detection {
        let mut landing_page = Arguments::new();
        landing_page.insert("enablePantryItems".to_string(), Value::Bool(true));
        args.insert("landingPageConfiguration".to_string(), Value::Object(landing_page));
    }
    args
}

fn ingredient_arguments(ingredient: &Ingredient) -> Value {
    item_arguments(
        &ingredient.name,
        ingredient.quantity,
        ingredient.unit.as_deref(),
        ingredient.display_text.as_deref(),
    )
}

fn line_item_arguments(item: &LineItem) -> Value {
    item_arguments(
        &item.name,
        item.quantity,
        item.unit.as_deref(),
        item.display_text.as_deref(),
    )
}

fn item_arguments(
    name: &str,
    quantity: Option<f64>,
    unit: Option<&str>,
    display_text: Option<&str>,
) -> Value {
    let mut item = Arguments::new();
    item.insert("name".to_string(), Value::from(name));
    if let Some(quantity) = quantity.filter(|q| q.is_finite() && *q > 0.0) {
        item.insert("quantity".to_string(), quantity_value(quantity));
    }
    insert_text(&mut item, "unit", unit);
    insert_text(&mut item, "displayText", display_text);
    Value::Object(item)
}

// Whole quantities go out as integers so `8` is not sent as `8.0`.
fn quantity_value(quantity: f64) -> Value {
    if quantity.fract() == 0.0 && quantity < i64::MAX as f64 {
        Value::from(quantity as i64)
    } else {
        Value::from(quantity)
    }
}

fn insert_text(args: &mut Arguments, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        args.insert(key.to_string(), Value::from(value));
    }
}

fn insert_count(args: &mut Arguments, key: &str, value: Option<u32>) {
    if let Some(value) = value.filter(|v| *v > 0) {
        args.insert(key.to_string(), Value::from(value));
    }
}

fn next_request_id() -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let sequence = REQUEST_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("instacart-cli-{}-{}", nanos, sequence)
}
