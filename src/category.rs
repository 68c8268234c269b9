use crate::query::QueryVars;
use crate::types::{Product, ProductType};

/// Listing filter. `None` in an `Option<Category>` means every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Movies,
    Songs,
}

impl Category {
    /// Accepts `movies` / `songs`; anything else falls back to all categories.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "movies" => Some(Self::Movies),
            "songs" => Some(Self::Songs),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Movies => "movies",
            Self::Songs => "songs",
        }
    }

    pub fn product_type(self) -> ProductType {
        match self {
            Self::Movies => ProductType::Movie,
            Self::Songs => ProductType::Song,
        }
    }

    pub fn matches(self, product: &Product) -> bool { product.kind == self.product_type() }
}

/// `movies` wins over `songs` when both keys are present. Values are ignored.
pub fn resolve_category(vars: &QueryVars) -> Option<Category> {
    if vars.contains_key("movies") {
        Some(Category::Movies)
    } else if vars.contains_key("songs") {
        Some(Category::Songs)
    } else {
        None
    }
}

/// Heading text for the listing page.
pub fn category_title(category: Option<Category>) -> &'static str {
    match category {
        None => "All Products",
        Some(Category::Movies) => "Movies",
        Some(Category::Songs) => "Songs",
    }
}

/// Class added to `<body>` on the listing page.
pub fn body_class(category: Option<Category>) -> String {
    format!("products-{}", category.map_or("all", Category::name))
}
