//! Domain model: products, carts, orders, discount codes, users.

pub mod cart;
pub mod discount;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{Cart, CartLine};
pub use discount::DiscountCode;
pub use order::{Order, OrderItem, OrderStatus};
pub use product::Product;
pub use user::User;
