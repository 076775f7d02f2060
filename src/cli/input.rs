//! Assembles recipes and shopping lists from flags or a JSON document.

use std::io::Read;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;

use crate::cli::{ListArgs, RecipeArgs};
use crate::client::{Ingredient, LineItem, Recipe, ShoppingList};

pub fn recipe_from_args(args: &RecipeArgs) -> Result<Recipe> {
    if let Some(path) = &args.file {
        return load_document(path);
    }

    let Some(title) = args.title.clone() else {
        bail!("recipe title is required (or use --file)");
    };

    let ingredients = args
        .ingredients
        .iter()
        .map(|raw| -> Result<Ingredient> {
            let (name, quantity, unit) = parse_item(raw)
                .with_context(|| format!("invalid ingredient: {:?}", raw))?;
            Ok(Ingredient {
                name,
                quantity,
                unit,
                display_text: None,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Recipe {
        title,
        image_url: args.image_url.clone(),
        author: args.author.clone(),
        servings: args.servings,
        cooking_time_minutes: args.cooking_time,
        instructions: args.instructions.clone(),
        ingredients,
    })
}

pub fn shopping_list_from_args(args: &ListArgs) -> Result<ShoppingList> {
    if let Some(path) = &args.file {
        return load_document(path);
    }

    let Some(title) = args.title.clone() else {
        bail!("list title is required (or use --file)");
    };

    let line_items = args
        .items
        .iter()
        .map(|raw| -> Result<LineItem> {
            let (name, quantity, unit) =
                parse_item(raw).with_context(|| format!("invalid item: {:?}", raw))?;
            Ok(LineItem {
                name,
                quantity,
                unit,
                display_text: None,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ShoppingList {
        title,
        image_url: args.image_url.clone(),
        expires_in_days: args.expires,
        enable_pantry_detection: args.pantry,
        line_items,
    })
}

/// Splits `"name,qty,unit"` on its first two commas.
///
/// The name must be non-blank. A quantity that does not parse is ignored, and a
/// blank unit is dropped.
pub fn parse_item(raw: &str) -> Result<(String, Option<f64>, Option<String>)> {
    let mut parts = raw.splitn(3, ',');

    let name = parts.next().unwrap_or_default().trim();
    if name.is_empty() {
        bail!("item name is empty");
    }

    let quantity = parts.next().and_then(|q| q.trim().parse::<f64>().ok());
    let unit = parts
        .next()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string);

    Ok((name.to_string(), quantity, unit))
}

/// Reads a JSON document from `path`, or from stdin when `path` is `-`.
pub fn load_document<T: DeserializeOwned>(path: &str) -> Result<T> {
    let data = if path == "-" {
        let mut data = String::new();
        std::io::stdin()
            .read_to_string(&mut data)
            .context("read file: stdin")?;
        data
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read file: {}", path))?
    };

    tracing::debug!("Loaded {} bytes of JSON input", data.len());
    serde_json::from_str(&data).context("parse JSON")
}
