// Sales Tally - Core Library
// Exposes all modules for use in the CLI and tests

pub mod catalog;
pub mod purchase;
pub mod receipt;
pub mod tax;
pub mod validator;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry, Category};
pub use purchase::{parse_line, Purchase, PurchaseError};
pub use receipt::{
    format_line, line_output, process, LineOutput, Receipt, RejectReason, RejectedLine,
};
pub use tax::{
    apply_rate, calculate_amount, is_imported, round2, tax_line, TaxedLine, IMPORT_ONLY_RATE,
    TAXED_IMPORTED_RATE, TAXED_RATE,
};
pub use validator::is_valid_line;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
