//! Symbol-keyed index over the latest quote batch, with FX conversion.

use std::collections::{HashMap, HashSet};

use super::quotes_model::Quote;
use crate::constants::FX_PAIR_SUFFIX;

/// Immutable index of the latest quotes known to a snapshot.
///
/// Lookup is by exact symbol string. Currency conversion tries the direct
/// pair, then the inverse pair, and otherwise yields NaN - "value unknown",
/// never an error.
pub struct QuoteIndex {
    by_symbol: HashMap<String, Quote>,
    stock_symbols: HashSet<String>,
}

impl QuoteIndex {
    pub fn new(quotes: Vec<Quote>, stock_symbols: HashSet<String>) -> Self {
        let by_symbol = quotes
            .into_iter()
            .map(|quote| (quote.symbol.clone(), quote))
            .collect();
        QuoteIndex {
            by_symbol,
            stock_symbols,
        }
    }

    /// Yahoo-style currency pair symbol: `pair_symbol("USD", "JPY")` is
    /// "USDJPY=X".
    pub fn pair_symbol(from: &str, to: &str) -> String {
        format!("{}{}{}", from, to, FX_PAIR_SUFFIX)
    }

    /// Latest quote for an exact symbol.
    pub fn latest(&self, symbol: &str) -> Option<&Quote> {
        self.by_symbol.get(symbol)
    }

    /// Latest price for a symbol; NaN when unquoted.
    pub fn price(&self, symbol: &str) -> f64 {
        self.latest(symbol).map_or(f64::NAN, |quote| quote.price)
    }

    /// Converts `value` from `ccy` into `main_ccy`.
    ///
    /// Multiplies by the direct pair rate when quoted, else divides by the
    /// inverse pair rate, else returns NaN. A NaN `value` stays NaN either
    /// way and flows on through downstream sums.
    pub fn to_main_ccy(&self, value: f64, ccy: &str, main_ccy: &str) -> f64 {
        if ccy == main_ccy {
            return value;
        }
        if let Some(quote) = self.latest(&Self::pair_symbol(ccy, main_ccy)) {
            return value * quote.price;
        }
        if let Some(quote) = self.latest(&Self::pair_symbol(main_ccy, ccy)) {
            return value / quote.price;
        }
        f64::NAN
    }

    /// Quotes of every symbol classified as a currency pair, sorted by
    /// symbol.
    ///
    /// Classification is by exclusion: a quoted symbol that is not a known
    /// stock symbol is taken to be a currency pair. This holds as long as
    /// the backends only quote stocks and currency pairs; quoting any other
    /// kind of instrument would need an explicit instrument kind instead.
    pub fn currency_pair_quotes(&self) -> Vec<&Quote> {
        let mut pairs: Vec<&Quote> = self
            .by_symbol
            .values()
            .filter(|quote| !self.stock_symbols.contains(&quote.symbol))
            .collect();
        pairs.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn quote(symbol: &str, price: f64) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 7, 1, 15, 0, 0).unwrap(),
            price,
        }
    }

    fn index(quotes: Vec<Quote>, stocks: &[&str]) -> QuoteIndex {
        QuoteIndex::new(quotes, stocks.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn same_currency_is_identity() {
        let idx = index(vec![], &[]);
        assert_eq!(idx.to_main_ccy(123.45, "JPY", "JPY"), 123.45);
    }

    #[test]
    fn direct_pair_multiplies() {
        let idx = index(vec![quote("USDJPY=X", 100.0)], &[]);
        assert_eq!(idx.to_main_ccy(25.0, "USD", "JPY"), 2500.0);
    }

    #[test]
    fn inverse_pair_divides() {
        let idx = index(vec![quote("JPYUSD=X", 0.008)], &[]);
        assert_eq!(idx.to_main_ccy(25.0, "USD", "JPY"), 25.0 / 0.008);
    }

    #[test]
    fn unknown_pair_is_nan() {
        let idx = index(vec![quote("EURJPY=X", 170.0)], &[]);
        assert!(idx.to_main_ccy(25.0, "USD", "JPY").is_nan());
    }

    #[test]
    fn round_trip_with_a_single_pair() {
        let idx = index(vec![quote("USDJPY=X", 100.0)], &[]);
        let there = idx.to_main_ccy(42.0, "USD", "JPY");
        let back = idx.to_main_ccy(there, "JPY", "USD");
        assert!((back - 42.0).abs() < 1e-9);
    }

    #[test]
    fn unquoted_symbol_price_is_nan() {
        let idx = index(vec![], &[]);
        assert!(idx.price("VTI").is_nan());
    }

    #[test]
    fn non_stock_symbols_classify_as_currency_pairs() {
        let idx = index(
            vec![
                quote("VTI", 250.0),
                quote("USDJPY=X", 100.0),
                quote("EURJPY=X", 170.0),
            ],
            &["VTI"],
        );
        let pairs: Vec<&str> = idx
            .currency_pair_quotes()
            .iter()
            .map(|q| q.symbol.as_str())
            .collect();
        assert_eq!(pairs, vec!["EURJPY=X", "USDJPY=X"]);
    }
}
