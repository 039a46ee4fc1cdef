//! Shop server - runs the shop API or the calculator API.
//!
//! Commands:
//! - `shop-server shop` - Serve items and carts
//! - `shop-server calculator` - Serve factorial, fibonacci and mean
//! - `shop-server config` - Print the effective configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::ServeArgs;

/// Shop server - in-memory shop and calculator HTTP services
#[derive(Parser)]
#[command(name = "shop-server")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file path (TOML, or JSON when it ends in `.json`)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the item and cart API
    Shop(ServeArgs),

    /// Serve the calculator API
    Calculator(ServeArgs),

    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new();
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Shop(args) => commands::serve::shop(args, &ctx).await,
        Commands::Calculator(args) => commands::serve::calculator(args, &ctx).await,
        Commands::Config => commands::config::show(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
