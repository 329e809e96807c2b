//! In-memory stores and the `Shop` context that owns them.
//!
//! There is no ambient global state: one `Shop` is constructed at startup
//! and threaded through the HTTP layer behind a single `RwLock`, which
//! serializes every checkout (see `OrderLedger::checkout`).

pub mod carts;
pub mod catalog;
pub mod discounts;
pub mod orders;
pub mod users;

pub use carts::CartStore;
pub use catalog::ProductCatalog;
pub use discounts::DiscountLedger;
pub use orders::OrderLedger;
pub use users::UserDirectory;

use crate::config::Config;
use crate::domain::Order;
use crate::error::Result;

pub struct Shop {
    pub config: Config,
    pub catalog: ProductCatalog,
    pub carts: CartStore,
    pub discounts: DiscountLedger,
    pub orders: OrderLedger,
    pub users: UserDirectory,
}

impl Shop {
    pub fn new(config: Config) -> Self {
        let discounts = DiscountLedger::new(config.discount_percentage);
        Self {
            config,
            catalog: ProductCatalog::with_seed_data(),
            carts: CartStore::default(),
            discounts,
            orders: OrderLedger::default(),
            users: UserDirectory::with_seed_data(),
        }
    }

    /// Converts the caller's cart into a completed order.
    pub fn checkout(&mut self, user_id: &str, discount_code: Option<&str>) -> Result<Order> {
        self.orders.checkout(
            &mut self.catalog,
            &mut self.carts,
            &mut self.discounts,
            self.config.discount_interval,
            user_id,
            discount_code,
        )
    }

    /// Orders remaining until the next automatic discount mint.
    pub fn next_discount_in(&self) -> u64 {
        let interval = self.config.discount_interval;
        interval - (self.orders.order_count() % interval)
    }
}
