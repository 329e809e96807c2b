//! Order ledger
//!
//! Append-only record of completed orders plus the checkout orchestration.
//! Checkout runs under the shop-wide write lock, so the stock check and
//! the later decrement cannot interleave with another checkout.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{Order, OrderItem, OrderStatus};
use crate::error::{Result, ShopError};
use crate::store::{CartStore, DiscountLedger, ProductCatalog};

#[derive(Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
    counter: u64,
}

impl OrderLedger {
    /// Converts the user's cart into a completed order.
    ///
    /// All validation happens before any state changes: an empty cart, an
    /// under-stocked line, or a bad discount code aborts the whole checkout
    /// with the cart, stock, and code ledger untouched. The stock decrement
    /// is the commit point; the discount code is redeemed only after the
    /// order has been recorded, so a failed checkout never consumes a code.
    pub fn checkout(
        &mut self,
        catalog: &mut ProductCatalog,
        carts: &mut CartStore,
        discounts: &mut DiscountLedger,
        discount_interval: u64,
        user_id: &str,
        discount_code: Option<&str>,
    ) -> Result<Order> {
        let cart = carts.get_or_create(user_id).clone();
        if cart.is_empty() {
            return Err(ShopError::EmptyCart);
        }

        for line in &cart.items {
            if !catalog.has_stock(&line.product_id, line.quantity) {
                return Err(ShopError::InsufficientStock);
            }
        }

        // Per-line price snapshots from add time, not a fresh lookup.
        let subtotal = cart.total().round_dp(2);

        let mut discount = Decimal::ZERO;
        let mut applied_code = None;
        if let Some(code) = discount_code {
            let valid = discounts.validate(code).ok_or(ShopError::InvalidDiscount)?;
            discount = valid.amount_off(subtotal);
            applied_code = Some(code.to_string());
        }
        let total = subtotal - discount;

        let items: Vec<OrderItem> = cart
            .items
            .iter()
            .map(|line| {
                let product = catalog
                    .get(&line.product_id)
                    .ok_or(ShopError::ProductNotFound)?;
                Ok(OrderItem {
                    product_id: line.product_id.clone(),
                    product_name: product.name.clone(),
                    quantity: line.quantity,
                    price: line.price,
                    subtotal: line.subtotal().round_dp(2),
                })
            })
            .collect::<Result<_>>()?;

        // Commit point. Cannot fail under the write lock since every line
        // was just validated.
        for line in &cart.items {
            if !catalog.decrement_stock(&line.product_id, line.quantity) {
                tracing::warn!(product_id = %line.product_id, "stock decrement failed after validation");
            }
        }

        self.counter += 1;
        let order = Order {
            id: format!("order-{}", Uuid::new_v4()),
            user_id: user_id.to_string(),
            items,
            subtotal,
            discount,
            total,
            discount_code: applied_code.clone(),
            order_number: self.counter,
            status: OrderStatus::Completed,
            created_at: chrono::Utc::now(),
        };
        self.orders.push(order.clone());

        // Redeem only after the order is recorded.
        if let Some(code) = applied_code {
            discounts.redeem(&code, user_id);
        }

        if self.counter % discount_interval == 0 {
            let minted = discounts.generate(self.counter);
            tracing::info!(code = %minted.code, order_number = self.counter, "discount code minted");
        }

        carts.clear(user_id);

        tracing::info!(
            order_number = order.order_number,
            user_id = %order.user_id,
            total = %order.total,
            "order completed"
        );
        Ok(order)
    }

    pub fn by_id(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Orders placed by the user, in insertion order.
    pub fn by_user(&self, user_id: &str) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.user_id == user_id).collect()
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_count(&self) -> u64 {
        self.counter
    }

    pub fn total_items_purchased(&self) -> u64 {
        self.orders
            .iter()
            .map(|o| u64::from(o.total_quantity()))
            .sum()
    }

    pub fn total_purchase_amount(&self) -> Decimal {
        self.orders.iter().map(|o| o.total).sum::<Decimal>().round_dp(2)
    }

    pub fn total_discount_amount(&self) -> Decimal {
        self.orders.iter().map(|o| o.discount).sum::<Decimal>().round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        catalog: ProductCatalog,
        carts: CartStore,
        discounts: DiscountLedger,
        orders: OrderLedger,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                catalog: ProductCatalog::with_seed_data(),
                carts: CartStore::default(),
                discounts: DiscountLedger::new(Decimal::from(10)),
                orders: OrderLedger::default(),
            }
        }

        fn checkout(&mut self, user_id: &str, code: Option<&str>) -> Result<Order> {
            self.orders.checkout(
                &mut self.catalog,
                &mut self.carts,
                &mut self.discounts,
                2,
                user_id,
                code,
            )
        }
    }

    #[test]
    fn test_empty_cart_rejected_without_side_effects() {
        let mut h = Harness::new();
        assert!(matches!(h.checkout("u1", None), Err(ShopError::EmptyCart)));
        assert!(h.orders.all().is_empty());
        assert_eq!(h.catalog.get("p1").unwrap().stock, 50);
    }

    #[test]
    fn test_plain_checkout() {
        let mut h = Harness::new();
        h.carts.add_item(&h.catalog, "u1", "p1", 2).unwrap();

        let order = h.checkout("u1", None).unwrap();
        assert_eq!(order.subtotal, Decimal::new(199998, 2));
        assert_eq!(order.discount, Decimal::ZERO);
        assert_eq!(order.total, Decimal::new(199998, 2));
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.order_number, 1);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product_name, "Laptop");

        assert_eq!(h.catalog.get("p1").unwrap().stock, 48);
        assert!(h.carts.get_or_create("u1").is_empty());
    }

    #[test]
    fn test_insufficient_stock_aborts_whole_checkout() {
        let mut h = Harness::new();
        h.carts.add_item(&h.catalog, "u1", "p2", 1).unwrap();
        h.carts.add_item(&h.catalog, "u1", "p4", 10).unwrap();
        // Another shopper drains p4 below the requested quantity.
        assert!(h.catalog.decrement_stock("p4", 10));

        assert!(matches!(
            h.checkout("u1", None),
            Err(ShopError::InsufficientStock)
        ));
        assert!(h.orders.all().is_empty());
        assert_eq!(h.catalog.get("p2").unwrap().stock, 50);
        assert_eq!(h.carts.get_or_create("u1").items.len(), 2);
    }

    #[test]
    fn test_invalid_discount_aborts_and_keeps_cart() {
        let mut h = Harness::new();
        h.carts.add_item(&h.catalog, "u1", "p3", 1).unwrap();

        assert!(matches!(
            h.checkout("u1", Some("NOPE")),
            Err(ShopError::InvalidDiscount)
        ));
        assert!(h.orders.all().is_empty());
        assert_eq!(h.catalog.get("p3").unwrap().stock, 30);
        assert_eq!(h.carts.get_or_create("u1").items.len(), 1);

        // The caller may retry without the code.
        let order = h.checkout("u1", None).unwrap();
        assert_eq!(order.order_number, 1);
    }

    #[test]
    fn test_used_code_cannot_be_applied_again() {
        let mut h = Harness::new();
        let code = h.discounts.generate(0).code;
        h.discounts.redeem(&code, "someone");

        h.carts.add_item(&h.catalog, "u1", "p2", 1).unwrap();
        assert!(matches!(
            h.checkout("u1", Some(&code)),
            Err(ShopError::InvalidDiscount)
        ));
    }

    #[test]
    fn test_nth_order_mints_code_and_discount_applies() {
        let mut h = Harness::new();

        h.carts.add_item(&h.catalog, "u1", "p2", 1).unwrap();
        h.checkout("u1", None).unwrap();
        assert!(h.discounts.all().is_empty());

        h.carts.add_item(&h.catalog, "u2", "p3", 1).unwrap();
        h.checkout("u2", None).unwrap();
        assert_eq!(h.discounts.all().len(), 1);
        let code = h.discounts.all()[0].clone();
        assert_eq!(code.generated_for_order, 2);
        assert!(!code.is_used);

        // Third user redeems the minted code: 2 x 29.99 = 59.98 subtotal.
        h.carts.add_item(&h.catalog, "u3", "p2", 2).unwrap();
        let order = h.checkout("u3", Some(&code.code)).unwrap();
        assert_eq!(order.subtotal, Decimal::new(5998, 2));
        assert_eq!(order.discount, Decimal::new(600, 2));
        assert_eq!(order.total, Decimal::new(5398, 2));
        assert_eq!(order.total, order.subtotal - order.discount);
        assert_eq!(order.discount_code.as_deref(), Some(code.code.as_str()));

        let redeemed = &h.discounts.all()[0];
        assert!(redeemed.is_used);
        assert_eq!(redeemed.used_by.as_deref(), Some("u3"));
        assert!(redeemed.used_at.is_some());
    }

    #[test]
    fn test_order_numbers_are_monotonic_and_queries_work() {
        let mut h = Harness::new();
        for i in 0..3 {
            let user = format!("u{i}");
            h.carts.add_item(&h.catalog, &user, "p2", 1).unwrap();
            let order = h.checkout(&user, None).unwrap();
            assert_eq!(order.order_number, i + 1);
        }
        assert_eq!(h.orders.order_count(), 3);
        assert_eq!(h.orders.all().len(), 3);
        assert_eq!(h.orders.by_user("u1").len(), 1);
        assert!(h.orders.by_user("stranger").is_empty());

        let id = h.orders.all()[0].id.clone();
        assert!(h.orders.by_id(&id).is_some());
        assert!(h.orders.by_id("order-unknown").is_none());
    }

    #[test]
    fn test_aggregates_fold_over_all_orders() {
        let mut h = Harness::new();
        h.carts.add_item(&h.catalog, "u1", "p2", 2).unwrap();
        h.checkout("u1", None).unwrap();
        h.carts.add_item(&h.catalog, "u2", "p3", 1).unwrap();
        h.checkout("u2", None).unwrap();

        assert_eq!(h.orders.total_items_purchased(), 3);
        // 59.98 + 79.99
        assert_eq!(h.orders.total_purchase_amount(), Decimal::new(13997, 2));
        assert_eq!(h.orders.total_discount_amount(), Decimal::ZERO);
    }
}
