//! tipsheet-ingest: pasted-ledger ingestion — line patterns for the two
//! supported statement layouts, continuation-line merging, and skipped-line
//! collection.

pub mod parser;

pub use parser::{LedgerParse, LinePatterns, parse_ledger};
