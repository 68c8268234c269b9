pub mod category;
pub mod config;
pub mod error;
pub mod html;
pub mod listeners;
pub mod mapping;
pub mod page;
pub mod query;
pub mod render;
pub mod source;
pub mod types;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::category::{resolve_category, Category};
    pub use crate::config::Config;
    pub use crate::error::CatalogError;
    pub use crate::page::{PageRole, Template};
    pub use crate::query::{parse_query, QueryVars};
    pub use crate::render::{render_listing, render_quote, Listing, Quote};
    pub use crate::source::{load_catalog, CatalogSource, FileSource, HttpSource};
    pub use crate::types::{Catalog, Product, ProductType};
    pub use crate::{PageContext, RenderedPage, Storefront};
}

use anyhow::Result;

use crate::category::resolve_category;
use crate::config::Config;
use crate::error::CatalogError;
use crate::html::{listing_html, notice_html, quote_html};
use crate::listeners::Listeners;
use crate::page::{PageRole, Slots, Template};
use crate::query::{parse_query, QueryVars};
use crate::render::{render_listing, render_quote};
use crate::source::{load_catalog, source_for, CatalogSource};
use crate::types::Catalog;

/// Notice rendered in place of the catalog when it cannot be loaded.
pub const LOAD_FAILURE_NOTICE: &str = "The product catalog could not be loaded. Please try again later.";

/// Everything a renderer needs for one page view.
pub struct PageContext<'a> {
    pub catalog: &'a Catalog,
    pub query: QueryVars,
    pub currency: &'a str,
}

#[derive(Debug)]
pub struct RenderedPage {
    pub role: PageRole,
    pub html: String,
    /// Set when the quote stopped at an id missing from the catalog.
    pub quote_stopped_at: Option<String>,
    /// Set when the catalog failed to load; `html` then has an empty products container.
    pub error: Option<CatalogError>,
}

/// Library entry point. Owns the configuration and the catalog source.
pub struct Storefront {
    config: Config,
    source: Box<dyn CatalogSource>,
}

impl Storefront {
    /// Pick the catalog source from `config.catalog_base`.
    pub fn new(config: Config) -> Result<Self> {
        let source = source_for(&config.catalog_base)?;
        Ok(Self { config, source })
    }

    pub fn with_source(config: Config, source: Box<dyn CatalogSource>) -> Self { Self { config, source } }

    pub fn config(&self) -> &Config { &self.config }

    pub async fn load(&self) -> std::result::Result<Catalog, CatalogError> {
        load_catalog(self.source.as_ref(), &self.config.catalog_path).await
    }

    /// Load the catalog once, then render `template` for the page at `url`.
    ///
    /// A failed load leaves the products container empty and shows a notice.
    pub async fn render_page(&self, template: &Template, url: &str) -> RenderedPage {
        match self.load().await {
            Ok(catalog) => {
                let ctx = PageContext { catalog: &catalog, query: parse_query(url), currency: &self.config.currency };
                render_page(template, &ctx)
            }
            Err(err) => {
                tracing::error!(error = %err, "{}", err.diagnostic());
                RenderedPage { role: template.role(), html: render_failure(template), quote_stopped_at: None, error: Some(err) }
            }
        }
    }
}

/// Render a page whose catalog is already loaded.
pub fn render_page(template: &Template, ctx: &PageContext<'_>) -> RenderedPage {
    let role = template.role();
    let listeners = Listeners::for_page(role, template.has_print_trigger());
    let mut slots = Slots { scripts: listeners.script(), ..Slots::default() };
    let mut quote_stopped_at = None;

    match role {
        PageRole::Listing => {
            let listing = render_listing(ctx.catalog, resolve_category(&ctx.query));
            tracing::info!(items = listing.items.len(), class = %listing.body_class, "rendered listing");
            slots.products = listing_html(&listing, ctx.currency);
            slots.category_title = listing.title.to_string();
            slots.body_class = listing.body_class;
        }
        PageRole::Quote => {
            let quote = render_quote(ctx.catalog, &ctx.query);
            tracing::info!(lines = quote.lines.len(), total = quote.total, "rendered quote");
            slots.products = quote_html(&quote, ctx.currency);
            quote_stopped_at = quote.stopped_at;
        }
        PageRole::Neither => {}
    }

    RenderedPage { role, html: template.fill(&slots), quote_stopped_at, error: None }
}

/// Page with empty catalog slots and a visible notice.
pub fn render_failure(template: &Template) -> String {
    template.fill(&Slots { notice: notice_html(LOAD_FAILURE_NOTICE), ..Slots::default() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{LISTING_TEMPLATE, QUOTE_TEMPLATE};
    use crate::source::{FileSource, HttpSource, DEFAULT_CATALOG_PATH};

    const CATALOG: &str = r#"{"products":[
        {"productId":"S1","productName":"First Song","productPrice":0.99,"productType":"Song","newRelease":true},
        {"productId":"M1","productName":"A Movie","productPrice":9.5,"productType":"Movie"},
        {"productId":"S2","productName":"Second Song","productPrice":1.25,"productType":"Song"}
    ]}"#;

    fn site() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("source")).unwrap();
        std::fs::write(tmp.path().join(DEFAULT_CATALOG_PATH), CATALOG).unwrap();
        tmp
    }

    fn storefront(root: &std::path::Path) -> Storefront {
        Storefront::with_source(Config::default(), Box::new(FileSource::new(root)))
    }

    #[tokio::test]
    async fn listing_page_renders_songs() {
        let tmp = site();
        let template = Template::parse(LISTING_TEMPLATE).unwrap();
        let page = storefront(tmp.path()).render_page(&template, "products.html?songs").await;
        assert_eq!(page.role, PageRole::Listing);
        assert!(page.error.is_none());
        assert!(page.html.contains(r#"<body class="products-songs">"#));
        assert!(page.html.contains(r#"<h2 class="category-title">Songs</h2>"#));
        assert!(page.html.contains("First Song"));
        assert!(page.html.contains("Second Song"));
        assert!(!page.html.contains("A Movie"));
        assert!(page.html.find("First Song").unwrap() < page.html.find("Second Song").unwrap());
        assert!(page.html.contains("input[type=number]"));
    }

    #[tokio::test]
    async fn quote_page_prices_and_truncates() {
        let tmp = site();
        let template = Template::parse(QUOTE_TEMPLATE).unwrap();
        let page = storefront(tmp.path()).render_page(&template, "quote.html?M1=2&NOPE=1&S1=3").await;
        assert_eq!(page.role, PageRole::Quote);
        assert_eq!(page.quote_stopped_at.as_deref(), Some("NOPE"));
        assert!(page.html.contains("A Movie"));
        assert!(!page.html.contains("First Song"));
        assert!(page.html.contains("<strong>$19.00</strong>"));
        assert!(page.html.contains("window.print()"));
    }

    #[tokio::test]
    async fn load_failure_leaves_container_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let template = Template::parse(LISTING_TEMPLATE).unwrap();
        let page = storefront(tmp.path()).render_page(&template, "products.html?movies").await;
        assert!(matches!(page.error, Some(CatalogError::Network { .. })));
        assert!(page.html.contains(r#"<div class="row products"></div>"#));
        assert!(page.html.contains(LOAD_FAILURE_NOTICE));
        assert!(!page.html.contains("<script>"));
        assert!(page.html.contains(r#"<body class="">"#));
    }

    #[tokio::test]
    async fn http_404_renders_no_catalog() {
        let base = crate::source::tests::serve_once("HTTP/1.1 404 Not Found", "gone").await;
        let shop = Storefront::with_source(Config::default(), Box::new(HttpSource::new(base).unwrap()));
        let template = Template::parse(QUOTE_TEMPLATE).unwrap();
        let page = shop.render_page(&template, "quote.html?S1=2").await;
        assert_eq!(page.role, PageRole::Quote);
        assert!(matches!(page.error, Some(CatalogError::Network { .. })));
        assert!(page.quote_stopped_at.is_none());
        assert!(page.html.contains(r#"<div class="row products"></div>"#));
        assert!(!page.html.contains("Total"));
        assert!(!page.html.contains("<script>"));
        assert!(page.html.contains(LOAD_FAILURE_NOTICE));
    }

    #[test]
    fn neither_page_only_clears_slots() {
        let template = Template::parse("<main>{{products}}{{scripts}}</main>").unwrap();
        let catalog = Catalog::default();
        let ctx = PageContext { catalog: &catalog, query: QueryVars::new(), currency: "$" };
        let page = render_page(&template, &ctx);
        assert_eq!(page.role, PageRole::Neither);
        assert_eq!(page.html, "<main></main>");
    }

    #[test]
    fn currency_comes_from_context() {
        let template = Template::parse(QUOTE_TEMPLATE).unwrap();
        let catalog = crate::mapping::catalog_from_json(CATALOG).unwrap();
        let ctx = PageContext { catalog: &catalog, query: parse_query("?S2=4"), currency: "€" };
        let page = render_page(&template, &ctx);
        assert!(page.html.contains("<strong>€5.00</strong>"));
    }
}
