//! # Display Configuration
//!
//! Display-currency settings for the session.
//!
//! All amounts are stored and computed in base-currency cents (USD). The
//! shopper-facing currency is derived at render time by a fixed
//! multiplicative rate; nothing that is stored or compared ever leaves
//! the base unit.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Currency Boundaries                              │
//! │                                                                     │
//! │  Catalog / Cart / Checkout math        Display layer                │
//! │  ──────────────────────────────        ─────────────                │
//! │  Money (USD cents)            ──────►  to_display() / format()      │
//! │  $999.00 stays 99900                   MK999000 (rate 1000, 0 dp)   │
//! │                                                                     │
//! │  Conversion is one-way and render-only.                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use hearth_core::Money;

/// Display-currency configuration.
///
/// Read-only after session initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Display currency code (ISO 4217).
    pub currency_code: String,

    /// Display currency symbol.
    pub currency_symbol: String,

    /// Number of decimal places shown in the display currency.
    pub currency_decimals: u8,

    /// Display units per one base major unit (1 USD = `rate` MWK).
    pub conversion_rate: i64,
}

impl Default for DisplayConfig {
    /// Returns the default display configuration: Malawian kwacha at a
    /// fixed 1000:1 rate, shown without decimals.
    fn default() -> Self {
        DisplayConfig {
            currency_code: "MWK".to_string(),
            currency_symbol: "MK".to_string(),
            currency_decimals: 0,
            conversion_rate: 1000,
        }
    }
}

impl DisplayConfig {
    /// Converts a base amount to display-currency minor units.
    ///
    /// ## Example
    /// ```rust
    /// use hearth_core::Money;
    /// use hearth_storefront::DisplayConfig;
    ///
    /// let config = DisplayConfig::default();
    /// assert_eq!(config.to_display(Money::from_dollars(999)), 999_000);
    /// ```
    pub fn to_display(&self, amount: Money) -> i64 {
        // base cents -> display minor units:
        //   cents / 100 (major units) * rate * 10^decimals
        // computed in one i128 expression, rounding half away from zero
        let scale = 10_i64.pow(self.currency_decimals as u32);
        let numerator = amount.cents() as i128 * self.conversion_rate as i128 * scale as i128;
        let rounded = if numerator >= 0 {
            (numerator + 50) / 100
        } else {
            (numerator - 50) / 100
        };
        rounded as i64
    }

    /// Formats a base amount in the display currency.
    ///
    /// ## Example
    /// ```rust
    /// use hearth_core::Money;
    /// use hearth_storefront::DisplayConfig;
    ///
    /// let config = DisplayConfig::default();
    /// assert_eq!(config.format(Money::from_dollars(1299)), "MK1299000");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let minor = self.to_display(amount);
        let sign = if minor < 0 { "-" } else { "" };
        let minor = minor.abs();

        if self.currency_decimals == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, minor);
        }

        let scale = 10_i64.pow(self.currency_decimals as u32);
        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency_symbol,
            minor / scale,
            minor % scale,
            width = self.currency_decimals as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_is_one_thousand() {
        let config = DisplayConfig::default();
        assert_eq!(config.currency_code, "MWK");
        assert_eq!(config.conversion_rate, 1000);
        assert_eq!(config.currency_decimals, 0);
    }

    #[test]
    fn test_to_display_multiplies_by_rate() {
        let config = DisplayConfig::default();
        assert_eq!(config.to_display(Money::from_dollars(999)), 999_000);
        assert_eq!(config.to_display(Money::from_cents(50)), 500);
        assert_eq!(config.to_display(Money::zero()), 0);
    }

    #[test]
    fn test_format_no_decimals() {
        let config = DisplayConfig::default();
        assert_eq!(config.format(Money::from_dollars(1299)), "MK1299000");
        assert_eq!(config.format(Money::from_dollars(15)), "MK15000");
        assert_eq!(config.format(Money::zero()), "MK0");
    }

    #[test]
    fn test_format_with_decimals() {
        let config = DisplayConfig {
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            conversion_rate: 1,
        };
        assert_eq!(config.format(Money::from_cents(1099)), "$10.99");
        assert_eq!(config.format(Money::from_cents(-550)), "-$5.50");
    }

    #[test]
    fn test_conversion_does_not_touch_base_values() {
        let config = DisplayConfig::default();
        let amount = Money::from_dollars(210);

        let _ = config.to_display(amount);
        let _ = config.format(amount);

        assert_eq!(amount, Money::from_dollars(210));
    }
}
