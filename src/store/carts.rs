//! Cart store
//!
//! One cart per user key, created on first access. Stock is checked
//! against the catalog on every mutation but never reserved; the only
//! thing that consumes stock is order commit.

use std::collections::HashMap;

use crate::domain::Cart;
use crate::error::{Result, ShopError};
use crate::store::ProductCatalog;

#[derive(Default)]
pub struct CartStore {
    carts: HashMap<String, Cart>,
}

impl CartStore {
    pub fn get_or_create(&mut self, user_id: &str) -> &Cart {
        self.carts
            .entry(user_id.to_string())
            .or_insert_with(|| Cart::new(user_id))
    }

    /// Merges `quantity` of the product into the user's cart, snapshotting
    /// the current catalog price on first add.
    pub fn add_item(
        &mut self,
        catalog: &ProductCatalog,
        user_id: &str,
        product_id: &str,
        quantity: u32,
    ) -> Result<Cart> {
        let product = catalog.get(product_id).ok_or(ShopError::ProductNotFound)?;
        if !catalog.has_stock(product_id, quantity) {
            return Err(ShopError::InsufficientStock);
        }
        let price = product.price;

        let cart = self
            .carts
            .entry(user_id.to_string())
            .or_insert_with(|| Cart::new(user_id));
        cart.add_line(product_id, quantity, price);
        Ok(cart.clone())
    }

    /// Sets the absolute quantity of a line. Zero or negative removes the
    /// line; a positive quantity must be covered by current stock.
    pub fn update_quantity(
        &mut self,
        catalog: &ProductCatalog,
        user_id: &str,
        product_id: &str,
        quantity: i64,
    ) -> Result<Cart> {
        let cart = self
            .carts
            .entry(user_id.to_string())
            .or_insert_with(|| Cart::new(user_id));
        if cart.line(product_id).is_none() {
            return Err(ShopError::ProductNotFound);
        }

        if quantity <= 0 {
            cart.remove_line(product_id);
        } else {
            let quantity = u32::try_from(quantity)
                .map_err(|_| ShopError::InvalidInput("Quantity out of range".into()))?;
            if !catalog.has_stock(product_id, quantity) {
                return Err(ShopError::InsufficientStock);
            }
            cart.set_quantity(product_id, quantity);
        }
        Ok(cart.clone())
    }

    pub fn remove_item(&mut self, user_id: &str, product_id: &str) -> Cart {
        let cart = self
            .carts
            .entry(user_id.to_string())
            .or_insert_with(|| Cart::new(user_id));
        cart.remove_line(product_id);
        cart.clone()
    }

    /// Drops the cart entirely; the next access starts fresh.
    pub fn clear(&mut self, user_id: &str) {
        self.carts.remove(user_id);
    }
}
