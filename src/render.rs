//! Pure renderers: catalog in, fragment descriptors out.
//!
//! Nothing here touches markup; see [`crate::html`] for the adapter that
//! turns descriptors into HTML.

use crate::category::{body_class, category_title, Category};
use crate::query::QueryVars;
use crate::types::{Catalog, Product};

/// What a listing row or quote line shows about a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub new_release: bool,
    /// Lower-cased product type.
    pub category: String,
    pub price: f64,
}

impl From<&Product> for ProductSummary {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            new_release: p.new_release,
            category: p.kind.data_label(),
            price: p.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub title: &'static str,
    pub body_class: String,
    pub items: Vec<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLine {
    pub product: ProductSummary,
    /// Quantity as written in the query string.
    pub quantity: String,
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    pub total: f64,
    /// First id not found in the catalog; nothing after it was rendered.
    pub stopped_at: Option<String>,
}

/// Products of `category` (or all of them) in catalog order.
pub fn render_listing(catalog: &Catalog, category: Option<Category>) -> Listing {
    let items = catalog
        .iter()
        .filter(|p| category.map_or(true, |c| c.matches(p)))
        .map(ProductSummary::from)
        .collect();
    Listing { title: category_title(category), body_class: body_class(category), items }
}

/// Price every `id=quantity` pair in query order.
///
/// Processing stops at the first id missing from the catalog; later pairs are
/// never priced even when valid. Quotes built from tampered or stale links are
/// therefore silently shortened.
pub fn render_quote(catalog: &Catalog, vars: &QueryVars) -> Quote {
    let index = catalog.index();
    let mut lines = Vec::with_capacity(vars.len());
    let mut total = 0.0;
    let mut stopped_at = None;

    for (id, raw_qty) in vars.iter() {
        let Some(product) = index.get(id) else {
            tracing::warn!(id, "unknown product id in quote; remaining entries skipped");
            stopped_at = Some(id.to_string());
            break;
        };
        let line_total = product.price * parse_quantity(raw_qty);
        total += line_total;
        lines.push(QuoteLine { product: product.into(), quantity: raw_qty.to_string(), line_total });
    }

    Quote { lines, total, stopped_at }
}

/// Numeric value of a quantity string, coerced the way a browser converts
/// text to a number: blank is zero, `0x`/`0o`/`0b` prefixes are integers,
/// `Infinity` is the only spelling of infinity, anything else unparseable is NaN.
pub fn parse_quantity(raw: &str) -> f64 {
    let t = raw.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match t.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&t[2..], radix);
    }
    // str::parse also takes inf/infinity/nan spellings that are not numbers here
    if t.bytes().any(|b| matches!(b.to_ascii_lowercase(), b'i' | b'n')) {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)))
        .unwrap_or(f64::NAN)
}

/// Two decimal places, no currency symbol. Negative zero prints as zero and
/// infinities as `Infinity`.
pub fn format_amount(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;
    use crate::types::ProductType;

    fn product(id: &str, price: f64, kind: ProductType) -> Product {
        Product { id: id.into(), name: format!("{id} name"), price, kind, new_release: false }
    }

    fn sample() -> Catalog {
        Catalog::new(vec![
            product("S1", 0.99, ProductType::Song),
            product("M1", 14.5, ProductType::Movie),
            product("S2", 1.29, ProductType::Song),
        ])
    }

    #[test]
    fn listing_filters_songs_in_order() {
        let listing = render_listing(&sample(), Some(Category::Songs));
        let ids: Vec<_> = listing.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["S1", "S2"]);
        assert_eq!(listing.title, "Songs");
        assert_eq!(listing.body_class, "products-songs");
    }

    #[test]
    fn listing_without_category_keeps_everything() {
        let listing = render_listing(&sample(), None);
        assert_eq!(listing.items.len(), 3);
        assert_eq!(listing.title, "All Products");
        assert_eq!(listing.items[1].category, "movie");
    }

    #[test]
    fn listing_skips_other_types_when_filtered() {
        let mut products = sample().products().to_vec();
        products.push(product("B1", 3.0, ProductType::Other("Book".into())));
        let catalog = Catalog::new(products);
        assert_eq!(render_listing(&catalog, Some(Category::Movies)).items.len(), 1);
        assert_eq!(render_listing(&catalog, None).items.len(), 4);
    }

    #[test]
    fn quote_total_is_sum_of_lines() {
        let quote = render_quote(&sample(), &parse_query("?S1=3&M1=2&S2=1"));
        assert_eq!(quote.lines.len(), 3);
        assert!(quote.stopped_at.is_none());
        let expected = 0.99 * 3.0 + 14.5 * 2.0 + 1.29;
        assert!((quote.total - expected).abs() < 1e-9);
        assert_eq!(format_amount(quote.total), "33.26");
        assert_eq!(format_amount(quote.lines[1].line_total), "29.00");
    }

    #[test]
    fn quote_stops_at_first_unknown_id() {
        let catalog = Catalog::new(vec![product("A", 2.0, ProductType::Song), product("B", 5.0, ProductType::Movie)]);
        let quote = render_quote(&catalog, &parse_query("?A=2&UNKNOWN=1&B=3"));
        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.lines[0].product.id, "A");
        assert_eq!(quote.total, 4.0);
        assert_eq!(quote.stopped_at.as_deref(), Some("UNKNOWN"));
    }

    #[test]
    fn quote_with_no_vars_is_empty() {
        let quote = render_quote(&sample(), &QueryVars::new());
        assert!(quote.lines.is_empty());
        assert_eq!(format_amount(quote.total), "0.00");
    }

    #[test]
    fn quantities_follow_numeric_coercion() {
        assert_eq!(parse_quantity("3"), 3.0);
        assert_eq!(parse_quantity(" 2.5 "), 2.5);
        assert_eq!(parse_quantity(""), 0.0);
        assert!(parse_quantity("lots").is_nan());
    }

    #[test]
    fn quantities_accept_prefixed_integers_and_infinity_spelling() {
        assert_eq!(parse_quantity("0x10"), 16.0);
        assert_eq!(parse_quantity("0o17"), 15.0);
        assert_eq!(parse_quantity("0b101"), 5.0);
        assert!(parse_quantity("0x").is_nan());
        assert!(parse_quantity("0xfg").is_nan());
        assert!(parse_quantity("-0x10").is_nan());
        assert_eq!(parse_quantity("Infinity"), f64::INFINITY);
        assert_eq!(parse_quantity("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_quantity("inf").is_nan());
        assert!(parse_quantity("infinity").is_nan());
        assert!(parse_quantity("NaN").is_nan());
        assert_eq!(parse_quantity("1e2"), 100.0);
        assert_eq!(parse_quantity(".5"), 0.5);
    }

    #[test]
    fn zero_price_with_negative_quantity_prints_plain_zero() {
        let catalog = Catalog::new(vec![product("F", 0.0, ProductType::Song)]);
        let quote = render_quote(&catalog, &parse_query("?F=-1"));
        assert_eq!(format_amount(quote.lines[0].line_total), "0.00");
        assert_eq!(format_amount(quote.total), "0.00");
        assert_eq!(format_amount(-0.0), "0.00");
        assert_eq!(format_amount(-1.5), "-1.50");
    }

    #[test]
    fn infinite_amounts_print_like_numbers_in_the_page() {
        assert_eq!(format_amount(f64::INFINITY), "Infinity");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(9.5), "9.50");
        assert_eq!(format_amount(10.0), "10.00");
        assert_eq!(format_amount(0.0), "0.00");
    }
}
