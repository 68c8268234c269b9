//! Markup for listing and quote fragments.

use crate::listeners::QuantityInput;
use crate::render::{format_amount, Listing, ProductSummary, Quote, QuoteLine};

/// Rows for the `.products` container on a listing page.
pub fn listing_html(listing: &Listing, currency: &str) -> String {
    listing.items.iter().map(|item| listing_item(item, currency)).collect()
}

fn listing_item(item: &ProductSummary, currency: &str) -> String {
    format!(
        r#"
<div class="col-xs-12 product">
  <div class="row">
    <div class="col-xs-1">
      <input type="checkbox" />
    </div>
    <div class="col-xs-8">
      {heading}
    </div>
    <div class="col-xs-3">
      <input type="number" min="{min}" max="{max}" name="{id}" placeholder="Enter quantity" required disabled>
    </div>
  </div>
</div>
"#,
        heading = product_heading(item, currency),
        id = html_escape(&item.id),
        min = QuantityInput::MIN,
        max = QuantityInput::MAX,
    )
}

/// Quote lines followed by the totals row.
pub fn quote_html(quote: &Quote, currency: &str) -> String {
    let mut out: String = quote.lines.iter().map(|line| quote_line(line, currency)).collect();
    out.push_str(&format!(
        r#"
<div class="col-xs-12">
  <div class="row">
    <div class="col-xs-8"></div>
    <div class="col-xs-2">Total</div>
    <div class="col-xs-2"><strong>{currency}{total}</strong></div>
  </div>
</div>
"#,
        currency = html_escape(currency),
        total = format_amount(quote.total),
    ));
    out
}

fn quote_line(line: &QuoteLine, currency: &str) -> String {
    format!(
        r#"
<div class="col-xs-12 product">
  <div class="row">
    <div class="col-xs-8">
      {heading}
    </div>
    <div class="col-xs-2">{quantity}</div>
    <div class="col-xs-2">{currency}{line_total}</div>
  </div>
</div>
"#,
        heading = product_heading(&line.product, currency),
        quantity = html_escape(&line.quantity),
        currency = html_escape(currency),
        line_total = format_amount(line.line_total),
    )
}

fn product_heading(item: &ProductSummary, currency: &str) -> String {
    format!(
        r#"<h3 data-new-release="{new_release}" data-category="{category}">{name}</h3>
      <div>
        Price: <strong>{currency}{price}</strong>
      </div>"#,
        new_release = item.new_release,
        category = html_escape(&item.category),
        name = html_escape(&item.name),
        currency = html_escape(currency),
        price = format_amount(item.price),
    )
}

/// Visible notice shown instead of the catalog when loading fails.
pub fn notice_html(message: &str) -> String {
    format!(r#"<div class="alert alert-danger" role="alert">{}</div>"#, html_escape(message))
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
