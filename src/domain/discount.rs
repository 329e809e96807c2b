//! Discount code model
//!
//! Lifecycle: created unused, redeemed at most once, immutable thereafter.
//! Codes never expire and are never deleted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCode {
    pub code: String,
    pub discount_percentage: Decimal,
    pub is_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_at: Option<DateTime<Utc>>,
    /// Order number that triggered the mint.
    pub generated_for_order: u64,
    pub created_at: DateTime<Utc>,
}

impl DiscountCode {
    pub fn new(code: impl Into<String>, percentage: Decimal, order_number: u64) -> Self {
        Self {
            code: code.into(),
            discount_percentage: percentage,
            is_used: false,
            used_by: None,
            used_at: None,
            generated_for_order: order_number,
            created_at: Utc::now(),
        }
    }

    /// Discount amount this code grants on the given subtotal.
    pub fn amount_off(&self, subtotal: Decimal) -> Decimal {
        (subtotal * self.discount_percentage / Decimal::ONE_HUNDRED).round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_off() {
        let code = DiscountCode::new("DISCOUNT2-1", Decimal::from(10), 2);
        assert_eq!(code.amount_off(Decimal::new(10000, 2)), Decimal::new(1000, 2));
        assert_eq!(code.amount_off(Decimal::new(5998, 2)), Decimal::new(600, 2));
    }
}
