//! Shareable URL recovery from a tool call result.
//!
//! The result schema is not fixed, so this is a heuristic: well-known keys are
//! checked first, then the whole result is scanned as text. It never fails; an
//! empty string means no URL was found.

use std::sync::OnceLock;

use regex::Regex;

use crate::client::envelope::Arguments;

/// Checked in order; the first string value starting with `http` wins.
pub const URL_KEYS: [&str; 5] = ["url", "share_url", "shareUrl", "shopping_list_url", "shoppingListUrl"];

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

pub fn extract_url(result: &Arguments) -> String {
    if result.is_empty() {
        return String::new();
    }

    for key in URL_KEYS {
        if let Some(url) = result.get(key).and_then(|v| v.as_str()) {
            if url.starts_with("http") {
                return url.to_string();
            }
        }
    }

    let text = match serde_json::to_string(result) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Could not serialize result for URL scan: {}", e);
            return String::new();
        }
    };

    url_pattern()
        .find(&text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

// Backslash is excluded so JSON escapes like `\n` after a URL are not captured.
fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| Regex::new(r#"https?://[^\s"'\\]+"#).expect("URL pattern is valid"))
}
