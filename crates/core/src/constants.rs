/// Suffix of Yahoo-style currency pair symbols, e.g. "USDJPY=X".
pub const FX_PAIR_SUFFIX: &str = "=X";

/// Currency fund valuations are reported in when no override is configured.
pub const DEFAULT_FUND_CURRENCY: &str = "JPY";
