//! End-to-end regression over a realistic pasted ledger: parse, aggregate,
//! export, re-import.

use tipsheet_core::Category;
use tipsheet_earnings::{aggregate, read_csv, write_csv};
use tipsheet_ingest::parse_ledger;

const PASTE: &str = "\
Oct 8, 2025 11:54 am $14.99 $3.00 $11.99 Recurring subscription from BootyLover
Oct 8, 2025 11:27 am $50.01 $10.00 $40.01 Payment for message from Fuunyan
Oct 8, 2025 1:02 pm $25.00 $5.00 $20.00 Payment for message from Marco
Oct 8, 2025 2:40 pm $5.00 $1.00 $4.00 Tip from Jane
Oct 8, 2025 2:41 pm $15.00 $3.00 $12.00 New fan offer
Oct 9, 2025 9:10 pm $30.00 $24.00 Mass DM unlock
for the weekend drop
08/10/2025 broken legacy row $9.99
--- page break ---
";

#[test]
fn test_parse_categorizes_and_resolves_hours() {
    let out = parse_ledger(PASTE).unwrap();
    assert_eq!(out.currency, "$");
    assert_eq!(out.transactions.len(), 6);
    assert_eq!(out.skipped_lines, vec!["08/10/2025 broken legacy row $9.99"]);

    let cats: Vec<&Category> = out.transactions.iter().map(|t| &t.category).collect();
    assert_eq!(
        cats,
        vec![
            &Category::Subscription,
            &Category::PpvMessage,
            &Category::Bundle,  // whole-dollar message payment
            &Category::Tip,
            &Category::Welcome, // fixed 15.00 price point
            &Category::Bundle,  // mass DM, fee derived from gross - net
        ]
    );

    assert_eq!(out.transactions[0].hour, 11);
    assert_eq!(out.transactions[2].hour, 13);
    assert_eq!(out.transactions[5].hour, 21);
    // old layout: fee derived
    assert_eq!(out.transactions[5].fee, 6.0);
    // wrapped description merged back in
    assert_eq!(
        out.transactions[5].description,
        "Mass DM unlock for the weekend drop"
    );
}

#[test]
fn test_aggregate_matches_the_batch() {
    let out = parse_ledger(PASTE).unwrap();
    let stats = aggregate(&out.transactions);

    assert_eq!(stats.overall.count, 6);
    assert!((stats.overall.gross - 140.0).abs() < 1e-9);

    // chatter sales: the two whole-dollar bundles plus the tip
    assert_eq!(stats.chatter_sales.whole_sale_count, 2);
    assert_eq!(stats.chatter_sales.tip_count, 1);
    assert_eq!(stats.chatter_sales.totals.count, 3);
    assert!((stats.chatter_sales.totals.net - (20.0 + 24.0 + 4.0)).abs() < 1e-9);

    assert_eq!(stats.ppv_sales.count, 1);
    assert_eq!(stats.subscriptions.count, 1);
    assert_eq!(stats.welcome_messages.count, 1);

    let hours: Vec<u32> = stats.hourly.iter().map(|h| h.hour).collect();
    assert_eq!(hours, vec![11, 13, 14, 21]);
    let at_11 = stats.hourly.iter().find(|h| h.hour == 11).unwrap();
    assert!((at_11.total - (11.99 + 40.01)).abs() < 1e-9);
}

#[test]
fn test_csv_round_trip() {
    let out = parse_ledger(PASTE).unwrap();
    let csv = write_csv(&out.transactions, &out.currency).unwrap();
    let back = read_csv(&csv).unwrap();

    assert_eq!(back.len(), out.transactions.len());
    for (orig, re) in out.transactions.iter().zip(&back) {
        assert_eq!(re.gross, orig.gross);
        assert_eq!(re.net, orig.net);
        assert_eq!(re.category, orig.category);
        assert_eq!(re.hour, orig.hour);
    }
}

#[test]
fn test_reparse_is_deterministic() {
    let a = parse_ledger(PASTE).unwrap();
    let b = parse_ledger(PASTE).unwrap();
    assert_eq!(a, b);
}
