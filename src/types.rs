use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Kind of product as labelled in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    Song,
    Movie,
    Other(String),
}

impl ProductType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Song" => Self::Song,
            "Movie" => Self::Movie,
            other => Self::Other(other.to_string()),
        }
    }

    /// Label exactly as it appears in the catalog file.
    pub fn label(&self) -> &str {
        match self {
            Self::Song => "Song",
            Self::Movie => "Movie",
            Self::Other(s) => s,
        }
    }

    /// Lower-cased label used for `data-category`.
    pub fn data_label(&self) -> String { self.label().to_lowercase() }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub kind: ProductType,
    pub new_release: bool,
}

/// Products in file order, loaded once per page view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self { Self { products } }

    pub fn products(&self) -> &[Product] { &self.products }

    pub fn len(&self) -> usize { self.products.len() }

    pub fn is_empty(&self) -> bool { self.products.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &Product> { self.products.iter() }

    /// Build the id lookup used by the quote page. Later duplicates replace earlier ones.
    pub fn index(&self) -> ProductIndex<'_> {
        let mut by_id = HashMap::with_capacity(self.products.len());
        for p in &self.products {
            if by_id.insert(p.id.as_str(), p).is_some() {
                tracing::warn!(id = %p.id, "duplicate product id; keeping the later entry");
            }
        }
        ProductIndex { by_id }
    }
}

#[derive(Debug)]
pub struct ProductIndex<'a> {
    by_id: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    pub fn get(&self, id: &str) -> Option<&'a Product> { self.by_id.get(id).copied() }

    pub fn len(&self) -> usize { self.by_id.len() }

    pub fn is_empty(&self) -> bool { self.by_id.is_empty() }
}
