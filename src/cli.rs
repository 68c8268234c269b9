use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Render catalog listing and quote pages
#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Render product listing and quote pages from a JSON catalog", long_about = None)]
pub struct Cli {
    /// Config file (defaults to storefront.toml in the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Site root holding the catalog: http(s) URL or directory
    #[arg(long, global = true, value_name = "BASE")]
    pub base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a page template; its markers decide listing or quote
    Render {
        /// HTML template with page markers and {{slot}} placeholders
        #[arg(short, long, value_name = "FILE")]
        template: PathBuf,
        /// Page URL whose query string drives rendering
        #[arg(short, long, default_value = "")]
        url: String,
        /// Write here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Render the built-in listing page
    Listing {
        /// e.g. `products.html?songs`
        #[arg(short, long, default_value = "products.html")]
        url: String,
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Render the built-in quote page
    Quote {
        /// e.g. `quote.html?M1=2&S1=1`
        #[arg(short, long)]
        url: String,
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print the loaded catalog
    Products {
        /// Only `movies` or `songs`; anything else lists everything
        #[arg(short, long)]
        category: Option<String>,
    },
}
