//! Service configuration.
//!
//! All tunables come from the environment (loaded via dotenvy in `main`).
//! Unset or unparsable values fall back to the defaults below.

use rust_decimal::Decimal;

pub const DEFAULT_PORT: u16 = 8080;

/// Every Nth completed order mints a new discount code.
pub const DEFAULT_DISCOUNT_INTERVAL: u64 = 2;

/// Percentage taken off the subtotal when a code is applied.
pub const DEFAULT_DISCOUNT_PERCENTAGE: u32 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub discount_interval: u64,
    pub discount_percentage: Decimal,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            discount_interval: env_parse("DISCOUNT_INTERVAL", DEFAULT_DISCOUNT_INTERVAL).max(1),
            discount_percentage: Decimal::from(env_parse(
                "DISCOUNT_PERCENTAGE",
                DEFAULT_DISCOUNT_PERCENTAGE,
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            discount_interval: DEFAULT_DISCOUNT_INTERVAL,
            discount_percentage: Decimal::from(DEFAULT_DISCOUNT_PERCENTAGE),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.discount_interval, 2);
        assert_eq!(cfg.discount_percentage, Decimal::from(10));
    }
}
