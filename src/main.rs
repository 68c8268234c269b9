mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use storefront::category::Category;
use storefront::config::Config;
use storefront::page::{Template, LISTING_TEMPLATE, QUOTE_TEMPLATE};
use storefront::render::{format_amount, render_listing};
use storefront::Storefront;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(base) = cli.base {
        config.catalog_base = base;
    }
    let shop = Storefront::new(config)?;

    // One fetch, no parallel work
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    runtime.block_on(run(cli.command, &shop))
}

async fn run(command: Commands, shop: &Storefront) -> Result<()> {
    match command {
        Commands::Render { template, url, out } => {
            let markup = std::fs::read_to_string(&template)
                .with_context(|| format!("reading template: {}", template.display()))?;
            render(shop, Template::parse(markup)?, &url, out.as_deref()).await
        }
        Commands::Listing { url, out } => render(shop, Template::parse(LISTING_TEMPLATE)?, &url, out.as_deref()).await,
        Commands::Quote { url, out } => render(shop, Template::parse(QUOTE_TEMPLATE)?, &url, out.as_deref()).await,
        Commands::Products { category } => {
            let catalog = shop.load().await?;
            let listing = render_listing(&catalog, category.as_deref().and_then(Category::from_name));
            println!("{}", listing.title);
            for item in listing.items {
                let marker = if item.new_release { " (new)" } else { "" };
                println!(
                    "{:<12} {:<8} {}{:>8}  {}{}",
                    item.id,
                    item.category,
                    shop.config().currency,
                    format_amount(item.price),
                    item.name,
                    marker
                );
            }
            Ok(())
        }
    }
}

async fn render(shop: &Storefront, template: Template, url: &str, out: Option<&Path>) -> Result<()> {
    let page = shop.render_page(&template, url).await;
    match out {
        Some(path) => std::fs::write(path, &page.html).with_context(|| format!("writing page: {}", path.display()))?,
        None => println!("{}", page.html),
    }
    if let Some(id) = &page.quote_stopped_at {
        eprintln!("quote truncated at unknown product id: {id}");
    }
    match page.error {
        Some(err) => Err(err).context("catalog could not be loaded"),
        None => Ok(()),
    }
}
