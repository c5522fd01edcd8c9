//! Issuer client module.
//!
//! Talks HTTP to the spreadsheet-script backend that serves questions and
//! gifts, issues redemption codes and collects activity logs.

mod sheet;

pub use sheet::SheetClient;
