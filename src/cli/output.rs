//! Result presentation for created recipes and lists.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::OutputArgs;

/// How a created resource is reported on stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Plain,
    Json,
    /// URL only, for piping into other tools.
    Quiet,
}

#[derive(Debug, Serialize)]
struct Created<'a> {
    kind: &'a str,
    title: &'a str,
    url: &'a str,
}

pub fn render(format: OutputFormat, kind: &str, title: &str, url: &str) -> Result<String> {
    match format {
        OutputFormat::Quiet => Ok(url.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&Created { kind, title, url })
            .context("encode JSON output"),
        OutputFormat::Plain => Ok(format!("✅ {} {:?} created!\n🔗 {}", kind, title, url)),
    }
}

pub fn print_result(kind: &str, title: &str, url: &str, output: OutputArgs) -> Result<()> {
    if url.is_empty() {
        tracing::warn!("Instacart did not return a URL for {} {:?}", kind, title);
    }

    println!("{}", render(output.format(), kind, title, url)?);

    if output.open && !url.is_empty() {
        open_in_browser(url);
    }
    Ok(())
}

pub fn open_in_browser(url: &str) {
    tracing::debug!("Opening browser to: {}", url);
    if let Err(error) = open::that(url) {
        tracing::warn!("Failed to open browser: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quiet_prints_only_url() {
        let out = render(OutputFormat::Quiet, "Recipe", "Tacos", "https://x/1").unwrap();
        assert_eq!(out, "https://x/1");
    }

    #[test]
    fn plain_quotes_title() {
        let out = render(OutputFormat::Plain, "Shopping list", "Weekly", "https://x/2").unwrap();
        assert_eq!(out, "✅ Shopping list \"Weekly\" created!\n🔗 https://x/2");
    }

    #[test]
    fn json_has_kind_title_url() {
        let out = render(OutputFormat::Json, "Recipe", "Tacos", "https://x/1").unwrap();
        assert_eq!(
            out,
            "{\n  \"kind\": \"Recipe\",\n  \"title\": \"Tacos\",\n  \"url\": \"https://x/1\"\n}"
        );
    }
}
