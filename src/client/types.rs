//! Type definitions for Instacart recipes and shopping lists.
//!
//! These records are what a caller hands to [`InstacartClient`](super::InstacartClient).
//! They deserialize from the same JSON documents the `--file` flag accepts, so the
//! serde field names follow that document format rather than the Rust field names.
//!
//! ## Key Types
//!
//! - [`Recipe`] - Title, metadata, instructions and a non-empty ingredient list
//! - [`ShoppingList`] - Title, expiry, pantry detection and a non-empty item list
//! - [`Ingredient`] / [`LineItem`] - A named item with optional quantity and unit
//!
//! ## Validation
//!
//! Every record must pass `validate()` before it is sent. The client calls it
//! itself, so a record that reaches the transport always has a title and at
//! least one named item.

use serde::{Deserialize, Serialize};

use crate::client::error::ClientError;

/// A recipe ingredient.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    /// Product name used for matching in the Instacart catalog
    pub name: String,
    /// Amount needed; ignored unless positive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Unit of measure such as `cup` or `count`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Text shown to the shopper instead of the generated label
    #[serde(rename = "displayText", default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_quantity(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.quantity = Some(quantity);
        self.unit = Some(unit.into());
        self
    }
}

/// A shopping list entry. Same shape as an [`Ingredient`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "displayText", default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

impl LineItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_quantity(mut self, quantity: f64, unit: impl Into<String>) -> Self {
        self.quantity = Some(quantity);
        self.unit = Some(unit.into());
        self
    }
}

/// A recipe page to create on Instacart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe title shown on the landing page
    pub title: String,
    /// Hero image, ideally 500x500
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Total cooking time in minutes
    #[serde(rename = "cooking_time", default, skip_serializing_if = "Option::is_none")]
    pub cooking_time_minutes: Option<u32>,
    /// Ordered preparation steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
    /// Must contain at least one entry
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(title: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            title: title.into(),
            ingredients,
            ..Self::default()
        }
    }

    /// Checks the title and ingredient list before anything is sent.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.title.trim().is_empty() {
            return Err(ClientError::Validation("recipe title is required".to_string()));
        }
        if self.ingredients.is_empty() {
            return Err(ClientError::Validation(
                "at least one ingredient is required".to_string(),
            ));
        }
        for (index, ingredient) in self.ingredients.iter().enumerate() {
            if ingredient.name.trim().is_empty() {
                return Err(ClientError::Validation(format!(
                    "ingredient {} has an empty name",
                    index + 1
                )));
            }
        }
        Ok(())
    }
}

/// A shopping list to create on Instacart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Days until the shared list link expires
    #[serde(rename = "expires_in", default, skip_serializing_if = "Option::is_none")]
    pub expires_in_days: Option<u32>,
    /// Let shoppers mark items they already have at home
    #[serde(rename = "enable_pantry", default)]
    pub enable_pantry_detection: bool,
    /// Must contain at least one entry
    #[serde(rename = "lineItems", default)]
    pub line_items: Vec<LineItem>,
}

impl ShoppingList {
    pub fn new(title: impl Into<String>, line_items: Vec<LineItem>) -> Self {
        Self {
            title: title.into(),
            line_items,
            ..Self::default()
        }
    }

    /// Checks the title and line items before anything is sent.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.title.trim().is_empty() {
            return Err(ClientError::Validation("list title is required".to_string()));
        }
        if self.line_items.is_empty() {
            return Err(ClientError::Validation("at least one item is required".to_string()));
        }
        for (index, item) in self.line_items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(ClientError::Validation(format!(
                    "item {} has an empty name",
                    index + 1
                )));
            }
        }
        Ok(())
    }
}
