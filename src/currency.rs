use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// How prices are written: whole units, grouped thousands, symbol in front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub group_separator: char,
}

/// US dollars as written in the `es-CO` locale: `US$ 450.000`.
pub const ES_CO_USD: CurrencyFormat = CurrencyFormat {
    symbol: "US$",
    group_separator: '.',
};

impl Default for CurrencyFormat {
    fn default() -> Self {
        ES_CO_USD
    }
}
impl CurrencyFormat {
    /// Rounds half away from zero to a whole amount. Past `Decimal::MAX`
    /// (~7.9e28) every `f64` is already whole and is written out as is.
    /// Returns `None` for NaN and infinities.
    pub fn format(&self, price: f64) -> Option<String> {
        if !price.is_finite() {
            return None;
        }
        let digits = match Decimal::from_f64(price) {
            Some(price) => price
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .abs()
                .trunc()
                .to_string(),
            None => price.abs().to_string(),
        };
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }
        // a negative amount that rounds to zero keeps its sign
        let sign = if price.is_sign_negative() { "-" } else { "" };
        Some(format!("{}{}\u{a0}{}", sign, self.symbol, grouped))
    }
}

pub fn format_price(price: f64) -> Option<String> {
    ES_CO_USD.format(price)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn whole_price_has_no_fraction() {
        let formatted = format_price(450000.0).unwrap();
        assert_eq!(formatted, "US$\u{a0}450.000");
        assert!(!formatted.contains(','));
    }
    #[test]
    fn fractions_round_half_away_from_zero() {
        assert_eq!(format_price(1234.5).unwrap(), "US$\u{a0}1.235");
        assert_eq!(format_price(1234.49).unwrap(), "US$\u{a0}1.234");
        assert_eq!(format_price(999.5).unwrap(), "US$\u{a0}1.000");
    }
    #[test]
    fn grouping() {
        assert_eq!(format_price(0.0).unwrap(), "US$\u{a0}0");
        assert_eq!(format_price(999.0).unwrap(), "US$\u{a0}999");
        assert_eq!(format_price(1000.0).unwrap(), "US$\u{a0}1.000");
        assert_eq!(format_price(1234567.0).unwrap(), "US$\u{a0}1.234.567");
    }
    #[test]
    fn negative_and_non_finite() {
        assert_eq!(format_price(-2500.0).unwrap(), "-US$\u{a0}2.500");
        assert_eq!(format_price(-0.4).unwrap(), "-US$\u{a0}0");
        assert_eq!(format_price(f64::NAN), None);
        assert_eq!(format_price(f64::INFINITY), None);
    }
    #[test]
    fn prices_beyond_decimal_range_are_still_written() {
        assert_eq!(
            format_price(1e29).unwrap(),
            "US$\u{a0}100.000.000.000.000.000.000.000.000.000"
        );
        assert_eq!(
            format_price(-1e29).unwrap(),
            "-US$\u{a0}100.000.000.000.000.000.000.000.000.000"
        );
    }
    #[test]
    fn other_separators() {
        let format = CurrencyFormat {
            symbol: "$",
            group_separator: ',',
        };
        assert_eq!(format.format(1500000.0).unwrap(), "$\u{a0}1,500,000");
    }
}
