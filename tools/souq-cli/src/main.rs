//! Souq CLI - terminal storefront with WhatsApp ordering.
//!
//! Commands:
//! - `souq products` - List and search products
//! - `souq show` - Show product details
//! - `souq options` - Show the options a category offers
//! - `souq inquire` - Ask about one product over WhatsApp
//! - `souq order` - Build a cart and send it over WhatsApp
//! - `souq contact` - Send a contact-form inquiry
//! - `souq shop` - Interactive shopping session
//! - `souq config` - Manage configuration

mod collaborators;
mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use souq_commerce::Lang;

use commands::{
    ConfigArgs, ContactArgs, InquireArgs, OptionsArgs, OrderArgs, ProductsArgs, ShopArgs, ShowArgs,
};

/// Souq CLI - browse the catalog and order over WhatsApp
#[derive(Parser)]
#[command(name = "souq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Interface language (en or ar)
    #[arg(short, long, global = true)]
    lang: Option<Lang>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and search products
    Products(ProductsArgs),

    /// Show product details, options and related products
    Show(ShowArgs),

    /// Show the options a category offers
    Options(OptionsArgs),

    /// Ask about one product over WhatsApp
    Inquire(InquireArgs),

    /// Build a cart and send the order over WhatsApp
    Order(OrderArgs),

    /// Send a contact-form inquiry over WhatsApp
    Contact(ContactArgs),

    /// Interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, cli.lang, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.log, cli.verbose, cli.log_json);
    tracing::debug!(lang = %ctx.lang, "context loaded");

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Options(args) => commands::options::run(args, &ctx),
        Commands::Inquire(args) => commands::inquire::run(args, &ctx),
        Commands::Order(args) => commands::order::run(args, &ctx),
        Commands::Contact(args) => commands::contact::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
