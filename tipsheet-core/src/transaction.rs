//! The normalized transaction record produced by ledger ingestion.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::currency::is_whole_dollar;

/// One payment-platform transaction, normalized from a pasted ledger line.
///
/// `date` and `time` are kept verbatim as captured (never reformatted);
/// `hour` is the resolved business-timezone hour-of-day used for
/// time-of-day aggregation. Amounts are non-negative; a line where gross
/// and net are both zero is never turned into a `Transaction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub time: String,
    /// Amount before platform fees.
    pub gross: f64,
    /// Read from the fee column when present, otherwise derived as
    /// `max(0, gross - net)`. Never negative.
    pub fee: f64,
    /// Amount after fees.
    pub net: f64,
    /// Free text; may include merged continuation lines.
    pub description: String,
    pub category: Category,
    /// Local hour-of-day in the business timezone, 0..=23.
    pub hour: u32,
}

impl Transaction {
    /// Whole-dollar gross is the structural signal for flat-priced sales.
    pub fn is_whole_dollar(&self) -> bool {
        is_whole_dollar(self.gross)
    }

    /// Manual category correction from the downstream editor. A plain field
    /// replacement: gross/net/hour are never recomputed.
    pub fn override_category(&mut self, category: Category) {
        self.category = category;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            date: "Oct 8, 2025".to_string(),
            time: "11:54 am".to_string(),
            gross: 14.99,
            fee: 3.0,
            net: 11.99,
            description: "Recurring subscription from BootyLover".to_string(),
            category: Category::Subscription,
            hour: 11,
        }
    }

    #[test]
    fn test_whole_dollar_signal() {
        let mut txn = sample();
        assert!(!txn.is_whole_dollar());
        txn.gross = 25.0;
        assert!(txn.is_whole_dollar());
    }

    #[test]
    fn test_override_category_replaces_only_the_label() {
        let mut txn = sample();
        txn.override_category(Category::Custom("Custom Video".to_string()));
        assert_eq!(txn.category.label(), "Custom Video");
        assert_eq!(txn.gross, 14.99);
        assert_eq!(txn.hour, 11);
    }

    #[test]
    fn test_serde_round_trip() {
        let txn = sample();
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"category\":\"Subscription\""));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }
}
