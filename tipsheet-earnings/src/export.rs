//! CSV export and re-import of parsed transactions.
//!
//! Columns: Date, Time, Gross, Fee, Net, Category, Description. Amounts
//! carry the batch's detected currency symbol and two decimals; the
//! description goes out as-is (the csv crate quotes where needed).

use anyhow::{Result, anyhow};

use tipsheet_core::{Category, Transaction, parse_amount, resolve_hour};

pub const CSV_HEADER: [&str; 7] = [
    "Date",
    "Time",
    "Gross",
    "Fee",
    "Net",
    "Category",
    "Description",
];

/// Serialize transactions for the export collaborator.
pub fn write_csv(transactions: &[Transaction], symbol: &str) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;

    for txn in transactions {
        let gross = format!("{symbol}{:.2}", txn.gross);
        let fee = format!("{symbol}{:.2}", txn.fee);
        let net = format!("{symbol}{:.2}", txn.net);
        wtr.write_record([
            txn.date.as_str(),
            txn.time.as_str(),
            gross.as_str(),
            fee.as_str(),
            net.as_str(),
            txn.category.label(),
            txn.description.as_str(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow!("flushing csv writer: {e}"))?;
    Ok(String::from_utf8(bytes)?)
}

/// Re-import a previously exported CSV.
///
/// Amounts run back through the numeric normalizer (symbol-agnostic),
/// categories through their labels, and the hour is re-resolved from the
/// date/time columns. Degenerate zero rows are dropped, same as ingestion.
pub fn read_csv(data: &str) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let date = record.get(0).unwrap_or("").trim().to_string();
        let time = record.get(1).unwrap_or("").trim().to_string();
        let gross = parse_amount(record.get(2).unwrap_or(""));
        let fee = parse_amount(record.get(3).unwrap_or(""));
        let net = parse_amount(record.get(4).unwrap_or(""));

        if gross == 0.0 && net == 0.0 {
            continue;
        }

        let category = Category::from_label(record.get(5).unwrap_or("Other").trim());
        let description = record.get(6).unwrap_or("").to_string();
        let hour = resolve_hour(&date, &time);

        out.push(Transaction {
            date,
            time,
            gross,
            fee,
            net,
            description,
            category,
            hour,
        });
    }

    Ok(out)
}
