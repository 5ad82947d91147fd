//! tipsheet-earnings: aggregation over parsed transactions — category
//! totals, the chatter-sales composite, hourly breakdown, CSV export, and
//! the per-day persistence rollup.

pub mod aggregate;
pub mod export;
pub mod rollup;

pub use aggregate::{CategoryTotals, ChatterSales, EarningsStats, HourlyTotal, aggregate};
pub use export::{CSV_HEADER, read_csv, write_csv};
pub use rollup::{DailyRollup, rollup_by_day};
