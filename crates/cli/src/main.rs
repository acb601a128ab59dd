//! Handoff CLI - Command-line interface for the Handoff queue daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9527";

#[derive(Parser)]
#[command(name = "handoff")]
#[command(about = "Handoff named queue CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "HANDOFF_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Push an item onto a queue
    Push {
        /// Queue name
        queue: String,

        /// Item value
        item: String,
    },

    /// Pop the front item from a queue
    Pop {
        /// Queue name
        queue: String,

        /// Wait up to this many milliseconds for an item (<= 0 = don't wait)
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        timeout_ms: i64,
    },

    /// Show the front item without removing it
    Peek {
        /// Queue name
        queue: String,
    },

    /// Show the number of items in a queue
    Size {
        /// Queue name
        queue: String,
    },

    /// Remove every item from a queue
    Clear {
        /// Queue name
        queue: String,
    },

    /// List known queues
    List,

    /// Show per-queue statistics
    Status,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize, Tabled)]
struct QueueRow {
    name: String,
    length: usize,
    waiters: usize,
    pushed_total: u64,
    popped_total: u64,
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

/// Print an item result, keeping "no item" apart from an empty-string item
fn print_item(queue: &str, result: &serde_json::Value) {
    match result.get("item").and_then(|v| v.as_str()) {
        Some(item) => println!("{}", item),
        None => println!("{}", format!("Queue {} is empty", queue).yellow()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Push { queue, item } => {
            let params = json!({
                "queue": queue,
                "item": item,
            });

            let result = call_rpc(&cli.rpc_url, "queue.push.v1", params).await?;

            println!(
                "{} {}",
                format!("✓ Pushed to {}", queue).green().bold(),
                format!("(length {})", result["length"]).dimmed()
            );
        }

        Commands::Pop { queue, timeout_ms } => {
            let params = json!({
                "queue": queue,
                "timeout_ms": timeout_ms,
            });

            let result = call_rpc(&cli.rpc_url, "queue.pop.v1", params).await?;
            print_item(&queue, &result);
        }

        Commands::Peek { queue } => {
            let result = call_rpc(&cli.rpc_url, "queue.peek.v1", json!({ "queue": queue })).await?;
            print_item(&queue, &result);
        }

        Commands::Size { queue } => {
            let result = call_rpc(&cli.rpc_url, "queue.size.v1", json!({ "queue": queue })).await?;
            println!("{}", result["length"]);
        }

        Commands::Clear { queue } => {
            let result =
                call_rpc(&cli.rpc_url, "queue.clear.v1", json!({ "queue": queue })).await?;

            println!(
                "{}",
                format!("✓ Cleared {} items from {}", result["cleared"], queue)
                    .green()
                    .bold()
            );
        }

        Commands::List => {
            let result = call_rpc(&cli.rpc_url, "queue.list.v1", json!({})).await?;
            let mut names: Vec<String> = serde_json::from_value(result["queues"].clone())?;
            names.sort();

            if names.is_empty() {
                println!("{}", "No queues yet".yellow());
            }
            for name in names {
                println!("{}", name);
            }
        }

        Commands::Status => {
            println!("{}", "Handoff Status".cyan().bold());
            println!();

            match call_rpc(&cli.rpc_url, "admin.stats.v1", json!({})).await {
                Ok(stats) => {
                    println!("  {} {}", "RPC URL:".bold(), cli.rpc_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!("  {} {} seconds", "Uptime:".bold(), stats["uptime_seconds"]);
                    println!();

                    let rows: Vec<QueueRow> = serde_json::from_value(stats["queues"].clone())?;
                    if rows.is_empty() {
                        println!("  {}", "No queues yet".yellow());
                    } else {
                        println!("{}", Table::new(rows));
                    }
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
