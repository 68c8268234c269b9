use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

/// Which renderer a page gets, decided once from its markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRole {
    /// Has a `.product-page` element.
    Listing,
    /// Has a `.quote` element.
    Quote,
    Neither,
}

const LISTING_MARKER: &str = ".product-page";
const QUOTE_MARKER: &str = ".quote";
const PRINT_TRIGGER: &str = "#print_quote";

pub const LISTING_TEMPLATE: &str = include_str!("../templates/listing.html");
pub const QUOTE_TEMPLATE: &str = include_str!("../templates/quote.html");

/// Values substituted for the `{{name}}` slots of a template.
#[derive(Debug, Clone, Default)]
pub struct Slots {
    pub body_class: String,
    pub category_title: String,
    pub products: String,
    pub notice: String,
    pub scripts: String,
}

/// Page markup plus what was detected in it.
#[derive(Debug, Clone)]
pub struct Template {
    markup: String,
    role: PageRole,
    has_print_trigger: bool,
}

impl Template {
    pub fn parse(markup: impl Into<String>) -> Result<Self> {
        let markup = markup.into();
        let doc = Html::parse_document(&markup);
        let has = |sel: &str| -> Result<bool> {
            let selector = Selector::parse(sel).map_err(|e| anyhow!("invalid selector {sel}: {e}"))?;
            Ok(doc.select(&selector).next().is_some())
        };
        let role = if has(LISTING_MARKER)? {
            PageRole::Listing
        } else if has(QUOTE_MARKER)? {
            PageRole::Quote
        } else {
            PageRole::Neither
        };
        let has_print_trigger = has(PRINT_TRIGGER)?;
        tracing::debug!(?role, has_print_trigger, "page markers detected");
        Ok(Self { markup, role, has_print_trigger })
    }

    pub fn role(&self) -> PageRole { self.role }

    pub fn has_print_trigger(&self) -> bool { self.has_print_trigger }

    /// Substitute every known slot in one pass; unknown `{{...}}` text is kept as is.
    pub fn fill(&self, slots: &Slots) -> String {
        let mut out = String::with_capacity(self.markup.len() + slots.products.len());
        let mut rest = self.markup.as_str();
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                rest = &rest[start..];
                break;
            };
            match slots.get(after[..end].trim()) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        out
    }
}

impl Slots {
    fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "body_class" => &self.body_class,
            "category_title" => &self.category_title,
            "products" => &self.products,
            "notice" => &self.notice,
            "scripts" => &self.scripts,
            _ => return None,
        };
        Some(value.as_str())
    }
}
