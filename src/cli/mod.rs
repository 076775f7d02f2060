//! The `instacart` command line.
//!
//! Parsing lives here, record assembly in [`input`], and result rendering in
//! [`output`]. [`run`] ties them to an [`InstacartClient`].

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::client::InstacartClient;
use crate::config::ClientConfig;

pub mod input;
pub mod output;

pub use output::OutputFormat;

/// Top-level CLI parser for the `instacart` binary.
#[derive(Debug, Parser)]
#[command(
    name = "instacart",
    version,
    about = "Create recipes and shopping lists on Instacart",
    long_about = "A CLI for creating recipes and shopping lists on Instacart Marketplace via their MCP endpoint."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override MCP endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Bearer token for authentication (or set INSTACART_MCP_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a recipe page on Instacart.
    Recipe(RecipeArgs),
    /// Create a shopping list on Instacart.
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct RecipeArgs {
    /// Recipe title (required unless --file is given)
    pub title: Option<String>,

    /// Number of servings
    #[arg(short = 'n', long)]
    pub servings: Option<u32>,

    /// Recipe author
    #[arg(short, long)]
    pub author: Option<String>,

    /// Cooking time in minutes
    #[arg(short = 't', long = "time")]
    pub cooking_time: Option<u32>,

    /// Image URL (500x500)
    #[arg(long = "image")]
    pub image_url: Option<String>,

    /// Ingredient as "name,qty,unit" (repeatable)
    #[arg(short = 'i', long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Instruction step (repeatable, ordered)
    #[arg(short = 's', long = "instruction")]
    pub instructions: Vec<String>,

    /// Load recipe from JSON file (- for stdin)
    #[arg(short, long)]
    pub file: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// List title (required unless --file is given)
    pub title: Option<String>,

    /// Line item as "name,qty,unit" (repeatable)
    #[arg(short = 'i', long = "item")]
    pub items: Vec<String>,

    /// Expiration in days
    #[arg(short, long)]
    pub expires: Option<u32>,

    /// Image URL (500x500)
    #[arg(long = "image")]
    pub image_url: Option<String>,

    /// Enable pantry item detection
    #[arg(long)]
    pub pantry: bool,

    /// Load list from JSON file (- for stdin)
    #[arg(short, long)]
    pub file: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Only output the URL
    #[arg(short, long)]
    pub quiet: bool,

    /// Open URL in browser
    #[arg(short, long)]
    pub open: bool,
}

impl OutputArgs {
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        if self.quiet {
            OutputFormat::Quiet
        } else if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }
}

impl Cli {
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::from_overrides(self.endpoint.clone(), self.token.clone())
    }
}

/// Runs one command to completion and prints its result to stdout.
pub async fn run(cli: Cli, cancel: CancellationToken) -> Result<()> {
    let client = InstacartClient::new(cli.client_config()).context("build HTTP client")?;

    match cli.command {
        Commands::Recipe(args) => {
            let recipe = input::recipe_from_args(&args)?;
            let title = recipe.title.clone();
            let url = client
                .create_recipe(recipe, &cancel)
                .await
                .context("create recipe")?;
            output::print_result("Recipe", &title, &url, args.output)
        }
        Commands::List(args) => {
            let list = input::shopping_list_from_args(&args)?;
            let title = list.title.clone();
            let url = client
                .create_shopping_list(list, &cancel)
                .await
                .context("create shopping list")?;
            output::print_result("Shopping list", &title, &url, args.output)
        }
    }
}
