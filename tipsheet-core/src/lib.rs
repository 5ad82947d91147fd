//! tipsheet-core: shared types and leaf utilities for the ledger engine —
//! transaction record, categorization rules, currency normalization, and
//! business-timezone hour resolution.

pub mod category;
pub mod clock;
pub mod currency;
pub mod transaction;

pub use category::{
    Category, CategoryRule, MANUAL_CATEGORIES, RULES, WELCOME_PRICE_POINTS, categorize,
};
pub use clock::{BUSINESS_TZ, hour_from_time_text, resolve_hour};
pub use currency::{DEFAULT_SYMBOL, SUPPORTED_SYMBOLS, detect_symbol, is_whole_dollar, parse_amount};
pub use transaction::Transaction;
