//! Currency-aware numeric normalization.
//!
//! Ledger amounts arrive as display strings ("$1,234.56", "€ 12"). Parsing
//! is symbol-agnostic; the detected symbol is carried per batch for display
//! and export only.

/// Currency symbols the normalizer knows how to strip and detect.
pub const SUPPORTED_SYMBOLS: [&str; 5] = ["$", "€", "£", "¥", "₹"];

/// Symbol used when a batch contains none of the supported symbols.
pub const DEFAULT_SYMBOL: &str = "$";

/// Parse a display amount into a number.
///
/// Strips currency symbols, thousands separators, and whitespace, then
/// parses the remainder as a decimal. Returns `0.0` on anything that still
/// fails to parse; never panics.
pub fn parse_amount(raw: &str) -> f64 {
    let mut s = raw.to_string();
    for sym in SUPPORTED_SYMBOLS {
        s = s.replace(sym, "");
    }
    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Detect the active currency symbol for a whole input batch.
///
/// First occurrence wins; falls back to [`DEFAULT_SYMBOL`].
pub fn detect_symbol(text: &str) -> &'static str {
    let mut found: Option<(usize, &'static str)> = None;
    for sym in SUPPORTED_SYMBOLS {
        if let Some(pos) = text.find(sym) {
            if found.is_none_or(|(best, _)| pos < best) {
                found = Some((pos, sym));
            }
        }
    }
    found.map(|(_, sym)| sym).unwrap_or(DEFAULT_SYMBOL)
}

/// Amount in integer cents, rounded to the nearest cent.
pub fn cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Whole-dollar test, cent-exact.
///
/// Used as a structural pricing signal throughout categorization and
/// aggregation: flat-priced sales are whole-dollar, per-item PPV pricing
/// carries cents.
pub fn is_whole_dollar(amount: f64) -> bool {
    cents(amount) % 100 == 0
}
