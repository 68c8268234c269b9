use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Product, ProductType};

/// Top-level shape of the catalog file.
#[derive(Serialize, Deserialize)]
pub(crate) struct CatalogDocument {
    pub products: Vec<ProductRecord>,
}

/// One entry of `products` exactly as stored in the file.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductRecord {
    pub product_id: String,
    pub product_name: String,
    pub product_price: f64,
    pub product_type: String,
    #[serde(default)]
    pub new_release: Option<bool>,
}

pub(crate) fn product_from_record(position: usize, r: ProductRecord) -> Result<Product> {
    if r.product_id.trim().is_empty() {
        return Err(CatalogError::parse(format!("product #{position} has an empty productId")));
    }
    if !r.product_price.is_finite() || r.product_price < 0.0 {
        return Err(CatalogError::parse(format!(
            "product {} has an invalid price: {}",
            r.product_id, r.product_price
        )));
    }
    Ok(Product {
        kind: ProductType::from_label(&r.product_type),
        new_release: r.new_release.unwrap_or(false),
        id: r.product_id,
        name: r.product_name,
        price: r.product_price,
    })
}

/// Parse and validate a catalog body.
pub fn catalog_from_json(body: &str) -> Result<Catalog> {
    let doc: CatalogDocument = serde_json::from_str(body)?;
    let products = doc
        .products
        .into_iter()
        .enumerate()
        .map(|(i, r)| product_from_record(i, r))
        .collect::<Result<Vec<_>>>()?;
    Ok(Catalog::new(products))
}
