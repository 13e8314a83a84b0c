//! Stored entity shapes and relation edits

/// Catalog product row. `id` is `None` until the store assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub cost: f64,
}

impl Product {
    /// Unsaved product; the store assigns the id on insert
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            cost,
        }
    }
}

/// Order row together with its ordered product list
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Option<i64>,
    /// Free-form label, never parsed
    pub date: String,
    pub cost: f64,
    pub products: Vec<Product>,
}

impl Order {
    pub fn new(date: impl Into<String>, cost: f64) -> Self {
        Self {
            id: None,
            date: date.into(),
            cost,
            products: Vec::new(),
        }
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }
}

/// In-memory edit of an order's product list.
///
/// The store never inserts a single junction edge: every edit reads the whole
/// list, applies one of these, and writes the whole list back.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductEdit {
    /// Append a product at the end
    Append(Product),
    /// Drop every member with this id, keeping the others in order
    Remove(i64),
    /// Empty the list
    Clear,
}

impl ProductEdit {
    pub fn apply(self, products: &mut Vec<Product>) {
        match self {
            ProductEdit::Append(product) => products.push(product),
            ProductEdit::Remove(product_id) => products.retain(|p| p.id != Some(product_id)),
            ProductEdit::Clear => products.clear(),
        }
    }

    /// Operation name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ProductEdit::Append(_) => "append",
            ProductEdit::Remove(_) => "remove",
            ProductEdit::Clear => "clear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(id: i64, name: &str) -> Product {
        Product {
            id: Some(id),
            name: name.to_string(),
            cost: 10.0,
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut products = vec![saved(1, "a")];
        ProductEdit::Append(Product::new("p", 5.0)).apply(&mut products);

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "a");
        assert_eq!(products[1].name, "p");
        assert_eq!(products[1].id, None);
    }

    #[test]
    fn test_remove_drops_every_match() {
        let mut products = vec![saved(1, "a"), saved(2, "b"), saved(1, "a"), saved(3, "c")];
        ProductEdit::Remove(1).apply(&mut products);

        let ids: Vec<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(2), Some(3)]);
    }

    #[test]
    fn test_remove_non_member_is_noop() {
        let mut products = vec![saved(1, "a"), saved(2, "b")];
        let before = products.clone();
        ProductEdit::Remove(99).apply(&mut products);
        assert_eq!(products, before);
    }

    #[test]
    fn test_remove_ignores_unsaved_members() {
        let mut products = vec![Product::new("draft", 1.0), saved(4, "d")];
        ProductEdit::Remove(4).apply(&mut products);
        assert_eq!(products, vec![Product::new("draft", 1.0)]);
    }

    #[test]
    fn test_clear_empties_list() {
        let mut products = vec![saved(1, "a"), saved(2, "b")];
        ProductEdit::Clear.apply(&mut products);
        assert!(products.is_empty());

        ProductEdit::Clear.apply(&mut products);
        assert!(products.is_empty());
    }
}
