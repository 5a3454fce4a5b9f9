//! # Configuration State
//!
//! Display settings, loaded at startup as the `[display]` section of the
//! config file.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use shopfront_core::Money;

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Shown in the header of every screen
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Shopfront".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ConfigState {
    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        // Amounts are held in cents; more than two display decimals pads
        // with zeros, fewer truncates.
        let decimals = u32::from(self.currency_decimals);
        let (whole, frac) = if decimals >= 2 {
            let whole = cents / 100;
            let frac = (cents % 100).abs() * 10_i64.pow(decimals - 2);
            (whole, frac)
        } else {
            let divisor = 10_i64.pow(2 - decimals);
            (cents / 100, ((cents % 100) / divisor).abs())
        };

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole.abs(), frac, width = decimals as usize)
            } else {
                whole.abs().to_string()
            }
        )
    }
}
