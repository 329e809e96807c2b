//! Cart model
//!
//! A cart is keyed by user id and holds at most one line per product.
//! Each line carries the unit price snapshotted when the item was first
//! added; checkout totals are computed from these snapshots, not from a
//! fresh catalog lookup.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub user_id: String,
    pub items: Vec<CartLine>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            items: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.items.iter().find(|l| l.product_id == product_id)
    }

    /// Merges into an existing line (additive quantity) or appends a new one.
    pub fn add_line(&mut self, product_id: &str, quantity: u32, price: Decimal) {
        match self.items.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => line.quantity += quantity,
            None => self.items.push(CartLine {
                product_id: product_id.to_string(),
                quantity,
                price,
            }),
        }
        self.touch();
    }

    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if let Some(line) = self.items.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
            self.touch();
        }
    }

    pub fn remove_line(&mut self, product_id: &str) {
        self.items.retain(|l| l.product_id != product_id);
        self.touch();
    }

    pub fn total(&self) -> Decimal {
        self.items.iter().map(|l| l.subtotal()).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_line_merges_same_product() {
        let mut cart = Cart::new("u1");
        cart.add_line("p1", 2, Decimal::new(1000, 2));
        cart.add_line("p1", 1, Decimal::new(1000, 2));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
    }

    #[test]
    fn test_total_sums_line_subtotals() {
        let mut cart = Cart::new("u1");
        cart.add_line("p1", 2, Decimal::new(99999, 2));
        assert_eq!(cart.total(), Decimal::new(199998, 2));
        cart.add_line("p2", 1, Decimal::new(2999, 2));
        assert_eq!(cart.total(), Decimal::new(202997, 2));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new("u1");
        cart.add_line("p1", 1, Decimal::ONE);
        cart.add_line("p2", 1, Decimal::ONE);
        cart.remove_line("p1");
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product_id, "p2");
    }
}
