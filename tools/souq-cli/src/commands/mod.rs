//! CLI command implementations.

pub mod config;
pub mod contact;
pub mod inquire;
pub mod options;
pub mod order;
pub mod products;
pub mod shop;
pub mod show;
mod summary;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Category key (phones, laptops, ...) or "all".
    #[arg(long)]
    pub category: Option<String>,

    /// Text to look for in English or Arabic names.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only featured products.
    #[arg(long)]
    pub featured: bool,

    /// Only new products.
    #[arg(long)]
    pub new: bool,

    /// Minimum price.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum price.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Sort order: position, price-asc, price-desc, name, newest.
    #[arg(long, default_value = "position")]
    pub sort: String,

    /// Page number (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: i64,

    /// Products per page.
    #[arg(long, default_value = "24")]
    pub per_page: i64,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product slug.
    pub slug: String,
}

/// Arguments for the options command.
#[derive(Args)]
pub struct OptionsArgs {
    /// Category key.
    pub category: String,
}

/// Variant choices shared by commands that select one product.
#[derive(Args, Default)]
pub struct VariantArgs {
    /// Color (value or label).
    #[arg(long)]
    pub color: Option<String>,

    /// Storage (value or label).
    #[arg(long)]
    pub storage: Option<String>,

    /// Size (value or label).
    #[arg(long)]
    pub size: Option<String>,
}

/// Arguments for the inquire command.
#[derive(Args)]
pub struct InquireArgs {
    /// Product slug.
    pub slug: String,

    #[command(flatten)]
    pub variant: VariantArgs,

    /// Launch the link with the system opener.
    #[arg(long)]
    pub open: bool,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Item to add, as `slug` or `slug:color=black,storage=256GB`. Repeat to
    /// add more; repeats of the same item merge.
    #[arg(short = 'a', long = "add", value_name = "ITEM", required = true)]
    pub items: Vec<String>,

    /// Launch the link with the system opener.
    #[arg(long)]
    pub open: bool,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Your name.
    #[arg(long)]
    pub name: String,

    /// Company name.
    #[arg(long)]
    pub company: Option<String>,

    /// Email address.
    #[arg(long)]
    pub email: String,

    /// Phone number.
    #[arg(long)]
    pub phone: String,

    /// Inquiry type: bulk, corporate, general.
    #[arg(long, default_value = "general")]
    pub inquiry_type: String,

    /// Message body.
    #[arg(short, long)]
    pub message: String,

    /// Launch the link with the system opener.
    #[arg(long)]
    pub open: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Launch the checkout link with the system opener.
    #[arg(long)]
    pub open: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
