//! Catalog: the ordered product list read for one request

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::product::Product;

/// On-disk layout of the catalog file: `{ "products": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The fail-open sentinel served when the data file cannot be read.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product with the given id.
    pub fn find_by_id(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category()))
            .map(|p| p.category().to_string())
            .collect()
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        serde_json::from_value(json!({
            "products": [
                { "id": 1, "category": "A", "price": 10, "dimensions": { "length": 1, "width": 1 } },
                { "id": 2, "category": "B", "price": 20, "dimensions": { "length": 2, "width": 2 } },
                { "id": 3, "category": "A", "price": 30, "dimensions": { "length": 3, "width": 3 } },
                { "id": 2, "category": "C", "price": 40, "dimensions": { "length": 4, "width": 4 } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn categories_are_distinct_in_first_occurrence_order() {
        assert_eq!(catalog().categories(), vec!["A", "B", "C"]);
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let catalog = catalog();
        let product = catalog.find_by_id(2).unwrap();
        assert_eq!(product.category(), "B");
        assert!(catalog.find_by_id(99).is_none());
    }

    #[test]
    fn catalog_file_is_echoed_byte_for_byte() {
        let raw = concat!(
            r#"{"products":[{"id":7,"name":"Desk","category":"tables","price":199,"#,
            r#""dimensions":{"length":120,"width":60.5,"height":75},"tags":["oak","office"]}]}"#
        );
        let catalog: Catalog = serde_json::from_str(raw).unwrap();

        assert_eq!(catalog.products[0].price(), 199.0);
        assert_eq!(serde_json::to_string(&catalog).unwrap(), raw);
    }

    #[test]
    fn empty_catalog_has_no_categories() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }
}
