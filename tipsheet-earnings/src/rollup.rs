//! Per-day rollup emitted to the persistence collaborator.
//!
//! The surrounding dashboard stores one row per model per day; the engine
//! only produces the aggregate fields. Sums are net amounts (what actually
//! pays out); gross is tracked in the day totals.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tipsheet_core::{Category, Transaction};

/// Category sums for one calendar day, keyed by the verbatim date string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyRollup {
    pub date: String,
    pub ppv_amount: f64,
    pub subscription_amount: f64,
    pub tips_amount: f64,
    pub bundle_amount: f64,
    /// Welcome, Other, and manual-override categories.
    pub other_amount: f64,
    pub gross_total: f64,
    pub net_total: f64,
    pub transaction_count: usize,
}

/// Group transactions by day, in first-seen date order.
pub fn rollup_by_day(transactions: &[Transaction]) -> Vec<DailyRollup> {
    let mut order: Vec<String> = Vec::new();
    let mut days: HashMap<String, DailyRollup> = HashMap::new();

    for txn in transactions {
        if !days.contains_key(&txn.date) {
            order.push(txn.date.clone());
        }
        let day = days.entry(txn.date.clone()).or_insert_with(|| DailyRollup {
            date: txn.date.clone(),
            ..Default::default()
        });

        match &txn.category {
            Category::PpvMessage => day.ppv_amount += txn.net,
            Category::Subscription => day.subscription_amount += txn.net,
            Category::Tip => day.tips_amount += txn.net,
            Category::Bundle => day.bundle_amount += txn.net,
            Category::Welcome | Category::Other | Category::Custom(_) => {
                day.other_amount += txn.net
            }
        }
        day.gross_total += txn.gross;
        day.net_total += txn.net;
        day.transaction_count += 1;
    }

    order.into_iter().filter_map(|d| days.remove(&d)).collect()
}
