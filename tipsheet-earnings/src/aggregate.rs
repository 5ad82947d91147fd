//! Earnings aggregation across a parsed batch.
//!
//! Pure full recompute: the dashboard re-aggregates on every edit, so
//! there is no incremental state to go stale.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tipsheet_core::{Category, Transaction};

/// Gross/net/count sums for one partition of the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub gross: f64,
    pub net: f64,
    pub count: usize,
}

impl CategoryTotals {
    fn add(&mut self, txn: &Transaction) {
        self.gross += txn.gross;
        self.net += txn.net;
        self.count += 1;
    }
}

/// What a chatter personally sold: whole-dollar sales plus all tips.
///
/// Subscriptions and welcome messages are revenue but by business
/// convention never count toward chatter sales. The two counters are
/// reported separately in the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatterSales {
    #[serde(flatten)]
    pub totals: CategoryTotals,
    pub whole_sale_count: usize,
    pub tip_count: usize,
}

/// Net revenue for one hour of the business day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyTotal {
    pub hour: u32,
    pub total: f64,
}

/// Full aggregation result over one batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsStats {
    pub chatter_sales: ChatterSales,
    pub tips: CategoryTotals,
    /// PPV messages only; bundles are excluded.
    pub ppv_sales: CategoryTotals,
    pub bundle_sales: CategoryTotals,
    pub subscriptions: CategoryTotals,
    pub welcome_messages: CategoryTotals,
    /// Every transaction regardless of category.
    pub overall: CategoryTotals,
    /// Net by hour-of-day, zero-sum hours dropped, ascending.
    pub hourly: Vec<HourlyTotal>,
}

/// Aggregate a batch of transactions into `EarningsStats`.
pub fn aggregate(transactions: &[Transaction]) -> EarningsStats {
    let mut stats = EarningsStats::default();
    let mut net_by_hour: HashMap<u32, f64> = HashMap::new();

    for txn in transactions {
        stats.overall.add(txn);
        *net_by_hour.entry(txn.hour).or_insert(0.0) += txn.net;

        match &txn.category {
            Category::Tip => {
                stats.tips.add(txn);
                stats.chatter_sales.totals.add(txn);
                stats.chatter_sales.tip_count += 1;
            }
            Category::Subscription => stats.subscriptions.add(txn),
            Category::Welcome => stats.welcome_messages.add(txn),
            Category::Bundle => stats.bundle_sales.add(txn),
            Category::PpvMessage => stats.ppv_sales.add(txn),
            Category::Other | Category::Custom(_) => {}
        }

        let excluded = matches!(
            txn.category,
            Category::Tip | Category::Subscription | Category::Welcome
        );
        if !excluded && txn.is_whole_dollar() {
            stats.chatter_sales.totals.add(txn);
            stats.chatter_sales.whole_sale_count += 1;
        }
    }

    let mut hourly: Vec<HourlyTotal> = net_by_hour
        .into_iter()
        .filter(|(_, total)| *total != 0.0)
        .map(|(hour, total)| HourlyTotal { hour, total })
        .collect();
    hourly.sort_by_key(|h| h.hour);
    stats.hourly = hourly;

    stats
}
