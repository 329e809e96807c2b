//! Discount ledger
//!
//! Mints and redeems single-use percentage codes. Code strings embed a
//! monotonic mint counter, so they are unique for the life of the process;
//! the random suffix only keeps them unguessable.

use rust_decimal::Decimal;

use crate::domain::DiscountCode;

pub struct DiscountLedger {
    codes: Vec<DiscountCode>,
    percentage: Decimal,
    minted: u64,
}

impl DiscountLedger {
    pub fn new(percentage: Decimal) -> Self {
        Self {
            codes: vec![],
            percentage,
            minted: 0,
        }
    }

    pub fn generate(&mut self, order_number: u64) -> DiscountCode {
        self.minted += 1;
        let code = format!(
            "DISCOUNT{}-{}{:04X}",
            order_number,
            self.minted,
            rand::random::<u16>()
        );
        let discount = DiscountCode::new(code, self.percentage, order_number);
        self.codes.push(discount.clone());
        discount
    }

    /// Returns the code only if it exists and is unused; used and unknown
    /// codes are indistinguishable to the caller.
    pub fn validate(&self, code: &str) -> Option<&DiscountCode> {
        self.codes.iter().find(|dc| dc.code == code && !dc.is_used)
    }

    /// Flips the used flag and records the redeemer. Returns false if the
    /// code is unknown or already used, leaving the first redemption intact.
    pub fn redeem(&mut self, code: &str, user_id: &str) -> bool {
        match self.codes.iter_mut().find(|dc| dc.code == code) {
            Some(dc) if !dc.is_used => {
                dc.is_used = true;
                dc.used_by = Some(user_id.to_string());
                dc.used_at = Some(chrono::Utc::now());
                true
            }
            _ => false,
        }
    }

    pub fn all(&self) -> &[DiscountCode] {
        &self.codes
    }

    pub fn used_count(&self) -> usize {
        self.codes.iter().filter(|dc| dc.is_used).count()
    }

    pub fn available_count(&self) -> usize {
        self.codes.iter().filter(|dc| !dc.is_used).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> DiscountLedger {
        DiscountLedger::new(Decimal::from(10))
    }

    #[test]
    fn test_generate_unique_codes() {
        let mut ledger = ledger();
        let a = ledger.generate(2);
        let b = ledger.generate(2);
        assert_ne!(a.code, b.code);
        assert_eq!(a.generated_for_order, 2);
        assert!(!a.is_used);
    }

    #[test]
    fn test_validate_rejects_used_and_unknown_uniformly() {
        let mut ledger = ledger();
        let code = ledger.generate(2).code;
        assert!(ledger.validate(&code).is_some());
        assert!(ledger.validate("DISCOUNT9-XXXX").is_none());

        assert!(ledger.redeem(&code, "u1"));
        assert!(ledger.validate(&code).is_none());
    }

    #[test]
    fn test_redeem_at_most_once() {
        let mut ledger = ledger();
        let code = ledger.generate(2).code;
        assert!(ledger.redeem(&code, "u1"));
        let first_used_at = ledger.all()[0].used_at;

        assert!(!ledger.redeem(&code, "u2"));
        let dc = &ledger.all()[0];
        assert_eq!(dc.used_by.as_deref(), Some("u1"));
        assert_eq!(dc.used_at, first_used_at);
    }

    #[test]
    fn test_counts() {
        let mut ledger = ledger();
        let code = ledger.generate(2).code;
        ledger.generate(4);
        ledger.redeem(&code, "u1");
        assert_eq!(ledger.all().len(), 2);
        assert_eq!(ledger.used_count(), 1);
        assert_eq!(ledger.available_count(), 1);
    }
}
