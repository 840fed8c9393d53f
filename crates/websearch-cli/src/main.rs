//! websearch CLI - Bing search tools from the terminal
//!
//! Drives the plain and structured search tools without a tool host.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use websearch::{
    InvocationContext, PlainResultAdapter, ResponseFormat, ResultRecord, SearchApi, SearchTool,
    StructuredResultAdapter, ToolOutput,
};
use websearch_bing::{BingSearchApi, ENV_SEARCH_URL};

use config::Config;

#[derive(Parser)]
#[command(name = "websearch")]
#[command(about = "websearch CLI - Bing search tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the Bing subscription key
    Login {
        /// Subscription key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Plain search: print a single text answer
    Run {
        /// Search query
        query: String,
    },

    /// Structured search: print a summary or the records
    Results {
        /// Search query
        query: String,
        /// Max records (defaults to num_results from config)
        #[arg(short = 'n', long)]
        limit: Option<NonZeroUsize>,
        /// Print the records as pretty JSON
        #[arg(long)]
        json: bool,
    },

    /// Invoke a tool by name the way a tool host would
    Invoke {
        /// Tool name (see `websearch tools`)
        tool: String,
        /// Search query
        query: String,
        /// Run ID to attach to the invocation
        #[arg(long)]
        run_id: Option<Uuid>,
    },

    /// List available tools
    Tools,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key } => cmd_login(key).await,
        Commands::Run { query } => cmd_run(query).await,
        Commands::Results { query, limit, json } => cmd_results(query, limit, json).await,
        Commands::Invoke { tool, query, run_id } => cmd_invoke(tool, query, run_id).await,
        Commands::Tools => cmd_tools(),
        Commands::Config => cmd_config(),
    }
}

/// Logs go to stderr so stdout stays clean for piping
fn init_tracing() {
    let filter = EnvFilter::try_from_env("WEBSEARCH_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_api(config: &Config) -> Result<Arc<dyn SearchApi>> {
    let api = BingSearchApi::new(config.bing_config()?)?;
    Ok(Arc::new(api))
}

fn build_tools(config: &Config) -> Result<Vec<Box<dyn SearchTool>>> {
    let api = build_api(config)?;
    let plain: Box<dyn SearchTool> = Box::new(PlainResultAdapter::new(api.clone()));
    let structured: Box<dyn SearchTool> =
        Box::new(StructuredResultAdapter::new(api).with_num_results(config.num_results()?));
    Ok(vec![plain, structured])
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>) -> Result<()> {
    // Only file values are written back; env overrides stay in the environment
    let mut stored = Config::load_file()?;

    let subscription_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("Bing subscription key")
            .interact()
            .context("Failed to read subscription key")?,
    };

    stored.set_subscription_key(subscription_key);

    // Test the key with a one-record search against the effective endpoint
    let effective = stored
        .clone()
        .with_overrides(None, std::env::var(ENV_SEARCH_URL).ok());
    let api = build_api(&effective)?;
    print!("Testing subscription key... ");

    match api.search_structured("bing", 1).await {
        Ok(_) => println!("{}", "OK".green()),
        Err(e) => {
            println!("{}", "Failed".red());
            bail!("Could not query Bing: {}", e);
        }
    }

    stored.save()?;
    println!(
        "{} Subscription key saved to {:?}",
        "✓".green(),
        Config::config_path()?
    );

    Ok(())
}

async fn cmd_run(query: String) -> Result<()> {
    let config = Config::load()?;
    let tool = PlainResultAdapter::new(build_api(&config)?);

    let answer = tool
        .run(&query)
        .await
        .with_context(|| format!("Search failed for '{}'", query))?;

    println!("{}", answer);
    Ok(())
}

async fn cmd_results(query: String, limit: Option<NonZeroUsize>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let tool = StructuredResultAdapter::new(build_api(&config)?);
    let limit = match limit {
        Some(n) => n,
        None => config.num_results()?,
    };

    let (summary, records) = tool.run_with_limit(&query, limit).await;
    tracing::info!(query = %query, records = records.len(), "Structured search finished");

    if let Some(reason) = empty_results_reason(&summary, &records) {
        eprintln!("{} {}", "No results:".yellow(), reason);
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&records).context("Failed to serialize records")?
        );
        return Ok(());
    }

    if records.is_empty() {
        return Ok(());
    }

    println!(
        "{} results for '{}':",
        records.len().to_string().green(),
        query
    );
    for record in &records {
        let title = record.get("title").or_else(|| record.get("Result")).unwrap_or("-");
        println!("  {}", title.cyan().bold());
        if let Some(link) = record.get("link") {
            println!("    {}", link.dimmed());
        }
        if let Some(snippet) = record.get("snippet") {
            println!("    {}", truncate_string(snippet, 100));
        }
    }

    Ok(())
}

async fn cmd_invoke(tool_name: String, query: String, run_id: Option<Uuid>) -> Result<()> {
    let config = Config::load()?;
    let tools = build_tools(&config)?;

    let tool = tools
        .iter()
        .find(|t| t.name() == tool_name)
        .with_context(|| format!("Unknown tool '{}'. Run 'websearch tools' to list them.", tool_name))?;

    let mut context = InvocationContext::new().with_tag("cli");
    if let Some(id) = run_id {
        context = context.with_run_id(id);
    }

    let output: ToolOutput = tool.invoke(&query, Some(&context)).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to serialize tool output")?
    );

    Ok(())
}

fn cmd_tools() -> Result<()> {
    println!("{}", "Tools:".bold());
    for (name, format, description) in tool_catalog() {
        println!("  {} [{}]", name.cyan(), format.to_string().dimmed());
        println!("    {}", description);
    }

    Ok(())
}

/// Static tool metadata; listing needs no backend or subscription key
fn tool_catalog() -> [(&'static str, ResponseFormat, &'static str); 2] {
    [
        (
            PlainResultAdapter::NAME,
            PlainResultAdapter::RESPONSE_FORMAT,
            PlainResultAdapter::DESCRIPTION,
        ),
        (
            StructuredResultAdapter::NAME,
            StructuredResultAdapter::RESPONSE_FORMAT,
            StructuredResultAdapter::DESCRIPTION,
        ),
    ]
}

/// A contained failure (or an empty hit list) is reported through the summary
fn empty_results_reason<'a>(summary: &'a str, records: &[ResultRecord]) -> Option<&'a str> {
    records.is_empty().then_some(summary)
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Search URL: {}", config.search_url);
    println!(
        "  Subscription Key: {}",
        if config.subscription_key.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    println!("  Results per search: {}", config.num_results);
    println!("  Plain answer hits: {}", config.plain_count);

    Ok(())
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}
