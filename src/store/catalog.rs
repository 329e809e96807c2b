//! Product catalog
//!
//! Fixed seed set; products are never created or removed at runtime. The
//! only mutation is the stock decrement performed at order commit.

use rust_decimal::Decimal;

use crate::domain::Product;

pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn with_seed_data() -> Self {
        Self::new(vec![
            Product::new("p1", "Laptop", "High quality laptop", Decimal::new(99999, 2), 50),
            Product::new("p2", "Mouse", "Wireless mouse", Decimal::new(2999, 2), 50),
            Product::new("p3", "Keyboard", "Mechanical keyboard", Decimal::new(7999, 2), 30),
            Product::new("p4", "Monitor", "32-inch 4K monitor", Decimal::new(39999, 2), 15),
        ])
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// True iff the product exists and has at least `quantity` in stock.
    pub fn has_stock(&self, id: &str, quantity: u32) -> bool {
        self.get(id).is_some_and(|p| p.stock >= quantity)
    }

    /// Returns false (without mutating) if the product is unknown or the
    /// decrement would go negative.
    pub fn decrement_stock(&mut self, id: &str, quantity: u32) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(p) if p.stock >= quantity => {
                p.stock -= quantity;
                true
            }
            _ => false,
        }
    }
}
