use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use tipsheet_earnings::{CategoryTotals, aggregate, rollup_by_day, write_csv};
use tipsheet_ingest::{LedgerParse, parse_ledger};

#[derive(Parser, Debug)]
#[command(name = "tipsheet", version, about = "Payment-ledger ingestion and earnings breakdown")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a pasted ledger text file into categorized transactions
    Parse {
        /// Text file containing the pasted ledger
        file: PathBuf,

        /// Write the parsed transactions as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Parse and print the earnings breakdown
    Stats {
        /// Text file containing the pasted ledger
        file: PathBuf,
    },

    /// Parse and emit per-day category sums as JSON (for sheet persistence)
    Rollup {
        /// Text file containing the pasted ledger
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { file, csv } => {
            let out = load_ledger(&file)?;
            println!(
                "Parsed {} transactions from {} (currency: {})",
                out.transactions.len(),
                file.display(),
                out.currency
            );

            for txn in &out.transactions {
                println!(
                    "{} {} | {}{:.2} -> {}{:.2} | {:<12} | {}",
                    txn.date,
                    txn.time,
                    out.currency,
                    txn.gross,
                    out.currency,
                    txn.net,
                    txn.category.label(),
                    txn.description
                );
            }

            if !out.skipped_lines.is_empty() {
                println!("\n{} line(s) could not be parsed — fix and re-paste:", out.skipped_lines.len());
                for line in &out.skipped_lines {
                    println!("  {line}");
                }
            }

            if let Some(path) = csv {
                let data = write_csv(&out.transactions, &out.currency)?;
                fs::write(&path, data)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("\nWrote CSV export to {}", path.display());
            }
        }

        Command::Stats { file } => {
            let out = load_ledger(&file)?;
            let stats = aggregate(&out.transactions);
            let sym = &out.currency;

            print_totals("Chatter sales", &stats.chatter_sales.totals, sym);
            println!(
                "    ({} whole-dollar sales, {} tips)",
                stats.chatter_sales.whole_sale_count, stats.chatter_sales.tip_count
            );
            print_totals("Tips", &stats.tips, sym);
            print_totals("PPV sales", &stats.ppv_sales, sym);
            print_totals("Bundle sales", &stats.bundle_sales, sym);
            print_totals("Subscriptions", &stats.subscriptions, sym);
            print_totals("Welcome msgs", &stats.welcome_messages, sym);
            print_totals("Overall", &stats.overall, sym);

            if !stats.hourly.is_empty() {
                println!("\nNet by hour:");
                for h in &stats.hourly {
                    println!("  {:>2}:00  {}{:.2}", h.hour, sym, h.total);
                }
            }

            if !out.skipped_lines.is_empty() {
                println!("\n({} unparsed line(s) excluded)", out.skipped_lines.len());
            }
        }

        Command::Rollup { file } => {
            let out = load_ledger(&file)?;
            let days = rollup_by_day(&out.transactions);
            println!("{}", serde_json::to_string_pretty(&days)?);
        }
    }

    Ok(())
}

fn load_ledger(file: &PathBuf) -> Result<LedgerParse> {
    if !file.exists() {
        bail!("ledger file not found: {}", file.display());
    }
    let text = fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    parse_ledger(&text)
}

fn print_totals(label: &str, totals: &CategoryTotals, sym: &str) {
    println!(
        "{label:<14} gross={sym}{:.2} net={sym}{:.2} count={}",
        totals.gross, totals.net, totals.count
    );
}
