//! Pasted-ledger parser.
//!
//! Input is a copy-pasted block of payment-platform transaction lines:
//!
//!   Oct 8, 2025 11:54 am  $14.99  $3.00  $11.99  Recurring subscription from BootyLover
//!   Oct 8, 2025 11:27 am  $50.01  $10.00 $40.01  Payment for message from Fuunyan
//!
//! Two historical layouts are supported: the primary one with a fee column
//! and an older one without it (fee derived from gross - net). Fields are
//! separated by whitespace runs, not fixed-width columns. Long descriptions
//! sometimes wrap onto a second physical line; those continuation lines
//! carry no numbers and are merged back into the previous description.

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

use tipsheet_core::{Transaction, categorize, detect_symbol, parse_amount, resolve_hour};

/// Result of parsing one pasted batch.
///
/// The two lists are the whole error report: lines that looked like data
/// but matched neither layout land in `skipped_lines` verbatim so the user
/// can fix and re-paste them; everything else that failed was prose or
/// separators and is dropped silently. `currency` is the display symbol
/// detected once across the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerParse {
    pub transactions: Vec<Transaction>,
    pub skipped_lines: Vec<String>,
    pub currency: String,
}

/// Compiled line patterns, built once per batch.
pub struct LinePatterns {
    primary: Regex,
    fallback: Regex,
    data_like: Regex,
}

impl LinePatterns {
    pub fn new() -> Result<Self> {
        // <date> <time> <gross> <fee> <net> <description>
        let primary = Regex::new(concat!(
            r"^(?P<date>[A-Za-z]{3}\s+\d{1,2},\s+\d{4})\s+",
            r"(?P<time>\d{1,2}:\d{2}\s*(?i:[ap]m))\s+",
            r"(?P<gross>[$€£¥₹]?\s*\d[\d,]*(?:\.\d+)?)\s+",
            r"(?P<fee>[$€£¥₹]?\s*\d[\d,]*(?:\.\d+)?)\s+",
            r"(?P<net>[$€£¥₹]?\s*\d[\d,]*(?:\.\d+)?)\s+",
            r"(?P<desc>\S.*)$",
        ))?;

        // older layout without the fee column
        let fallback = Regex::new(concat!(
            r"^(?P<date>[A-Za-z]{3}\s+\d{1,2},\s+\d{4})\s+",
            r"(?P<time>\d{1,2}:\d{2}\s*(?i:[ap]m))\s+",
            r"(?P<gross>[$€£¥₹]?\s*\d[\d,]*(?:\.\d+)?)\s+",
            r"(?P<net>[$€£¥₹]?\s*\d[\d,]*(?:\.\d+)?)\s+",
            r"(?P<desc>\S.*)$",
        ))?;

        let data_like = Regex::new(r"[0-9$€£¥₹]")?;

        Ok(Self {
            primary,
            fallback,
            data_like,
        })
    }

    /// True when a line carries a digit or currency symbol. Such lines are
    /// worth reporting when they fail to parse; anything else is prose.
    pub fn looks_data_like(&self, line: &str) -> bool {
        self.data_like.is_match(line)
    }

    /// Parse one line into a transaction candidate.
    ///
    /// Returns `None` for non-data lines, structural mismatches, and
    /// degenerate rows where gross and net are both zero. The fee-bearing
    /// layout is always tried first; an ambiguous line resolves in its
    /// favor.
    pub fn parse_line(&self, line: &str) -> Option<Transaction> {
        let line = line.trim();
        if !line.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        let (caps, has_fee_column) = if let Some(caps) = self.primary.captures(line) {
            (caps, true)
        } else if let Some(caps) = self.fallback.captures(line) {
            (caps, false)
        } else {
            return None;
        };

        let gross = parse_amount(&caps["gross"]);
        let net = parse_amount(&caps["net"]);
        let fee = if has_fee_column {
            parse_amount(&caps["fee"])
        } else {
            (gross - net).max(0.0)
        };

        if gross == 0.0 && net == 0.0 {
            return None;
        }

        let date = caps["date"].to_string();
        let time = caps["time"].to_string();
        let description = caps["desc"].trim().to_string();
        let category = categorize(&description, gross);
        let hour = resolve_hour(&date, &time);

        Some(Transaction {
            date,
            time,
            gross,
            fee,
            net,
            description,
            category,
            hour,
        })
    }
}

/// Parse a whole pasted batch into transactions + skipped lines.
///
/// Walks lines in input order; after each parsed transaction, following
/// lines without any numeric content are treated as wrapped continuation
/// text and merged (space-joined) into its description, then the category
/// is recomputed against the full text. Output order matches input order.
pub fn parse_ledger(text: &str) -> Result<LedgerParse> {
    let patterns = LinePatterns::new()?;
    let currency = detect_symbol(text).to_string();

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut transactions = Vec::new();
    let mut skipped_lines = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        i += 1;

        match patterns.parse_line(line) {
            Some(mut txn) => {
                let mut merged = false;
                while i < lines.len() && !patterns.looks_data_like(lines[i]) {
                    txn.description.push(' ');
                    txn.description.push_str(lines[i]);
                    merged = true;
                    i += 1;
                }
                if merged {
                    txn.category = categorize(&txn.description, txn.gross);
                }
                transactions.push(txn);
            }
            None => {
                if patterns.looks_data_like(line) {
                    skipped_lines.push(line.to_string());
                }
            }
        }
    }

    Ok(LedgerParse {
        transactions,
        skipped_lines,
        currency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipsheet_core::Category;

    fn patterns() -> LinePatterns {
        LinePatterns::new().unwrap()
    }

    #[test]
    fn test_primary_layout_reads_fee_column() {
        let txn = patterns()
            .parse_line("Oct 8, 2025 11:54 am $14.99 $3.00 $11.99 Recurring subscription from BootyLover")
            .unwrap();
        assert_eq!(txn.date, "Oct 8, 2025");
        assert_eq!(txn.time, "11:54 am");
        assert_eq!(txn.gross, 14.99);
        assert_eq!(txn.fee, 3.00);
        assert_eq!(txn.net, 11.99);
        assert_eq!(txn.category, Category::Subscription);
        assert_eq!(txn.hour, 11);
    }

    #[test]
    fn test_fallback_layout_derives_fee() {
        let txn = patterns()
            .parse_line("Oct 8, 2025 11:27 am $50.01 $40.01 Payment for message from Fuunyan")
            .unwrap();
        assert_eq!(txn.gross, 50.01);
        assert_eq!(txn.net, 40.01);
        assert!((txn.fee - 10.0).abs() < 1e-9);
        assert_eq!(txn.category, Category::PpvMessage);
        assert_eq!(txn.hour, 11);
    }

    #[test]
    fn test_derived_fee_floors_at_zero() {
        // malformed export where net exceeds gross
        let txn = patterns()
            .parse_line("Oct 8, 2025 9:00 am $5.00 $8.00 Tip from Jane")
            .unwrap();
        assert_eq!(txn.fee, 0.0);
    }

    #[test]
    fn test_variable_spacing_and_thousands_separators() {
        let txn = patterns()
            .parse_line("Oct 8, 2025   11:54 am    $1,250.00   $250.00   $1,000.00   Mass DM unlock")
            .unwrap();
        assert_eq!(txn.gross, 1250.0);
        assert_eq!(txn.net, 1000.0);
        assert_eq!(txn.category, Category::Bundle);
    }

    #[test]
    fn test_non_data_line_is_none() {
        assert!(patterns().parse_line("").is_none());
        assert!(patterns().parse_line("--- end of page ---").is_none());
    }

    #[test]
    fn test_zero_zero_line_is_dropped() {
        assert!(
            patterns()
                .parse_line("Oct 8, 2025 11:54 am $0.00 $0.00 $0.00 Voided entry")
                .is_none()
        );
    }

    #[test]
    fn test_batch_collects_skips_and_preserves_order() {
        let text = "\
Oct 8, 2025 11:54 am $14.99 $3.00 $11.99 Recurring subscription from BootyLover

08/10/2025 garbled row $14.99
some prose between entries
Oct 8, 2025 11:27 am $50.01 $10.00 $40.01 Payment for message from Fuunyan
";
        let out = parse_ledger(text).unwrap();
        assert_eq!(out.transactions.len(), 2);
        assert_eq!(out.transactions[0].category, Category::Subscription);
        assert_eq!(out.transactions[1].category, Category::PpvMessage);
        // data-like failure is reported, prose and blanks are not
        assert_eq!(out.skipped_lines, vec!["08/10/2025 garbled row $14.99"]);
        assert_eq!(out.currency, "$");
    }

    #[test]
    fn test_continuation_lines_merge_into_description() {
        let text = "\
Oct 9, 2025 8:15 pm $25.00 $5.00 $20.00 Payment for message
from a very enthusiastic fan
who writes long notes
Oct 9, 2025 8:20 pm $10.00 $2.00 $8.00 Tip from Jane
";
        let out = parse_ledger(text).unwrap();
        assert_eq!(out.transactions.len(), 2);
        assert_eq!(
            out.transactions[0].description,
            "Payment for message from a very enthusiastic fan who writes long notes"
        );
        assert!(out.skipped_lines.is_empty());
    }

    #[test]
    fn test_merged_description_recategorizes() {
        // category keyword only completes once the wrapped line is merged
        let text = "\
Oct 9, 2025 8:15 pm $30.00 $6.00 $24.00 Unlock for the locked
post from yesterday
";
        let out = parse_ledger(text).unwrap();
        assert_eq!(out.transactions[0].category, Category::Bundle);
    }

    #[test]
    fn test_currency_detection_is_batch_wide() {
        let out = parse_ledger("Oct 8, 2025 11:54 am €14.99 €3.00 €11.99 Tip from Ana").unwrap();
        assert_eq!(out.currency, "€");
        assert_eq!(out.transactions[0].gross, 14.99);
    }

    #[test]
    fn test_empty_input() {
        let out = parse_ledger("\n\n   \n").unwrap();
        assert!(out.transactions.is_empty());
        assert!(out.skipped_lines.is_empty());
        assert_eq!(out.currency, "$");
    }
}
