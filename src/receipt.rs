// 🧮 Receipt Engine - Per-Run Orchestration
// validate → parse → tax → format → accumulate, collecting rejected lines

use crate::catalog::Catalog;
use crate::purchase::{parse_line, Purchase, PurchaseError};
use crate::tax::tax_line;
use crate::validator::is_valid_line;
use std::fmt;

// ============================================================================
// LINE OUTPUT
// ============================================================================

/// Result of processing one valid line, with named fields instead of
/// out-parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutput {
    /// Formatted "<quantity> <description>: <amount>" line
    pub text: String,
    pub sales_tax: f64,
    pub taxed_amount: f64,
}

/// Format one result line for output.
pub fn format_line(purchase: &Purchase, taxed_amount: f64) -> String {
    format!(
        "{} {}: {:.2}",
        purchase.quantity, purchase.description, taxed_amount
    )
}

/// Process one grammar-valid line against the catalog.
///
/// Precondition: the line passed `is_valid_line`. Degenerate lines that the
/// permissive grammar let through still fail here with a `PurchaseError`.
pub fn line_output(line: &str, catalog: &Catalog) -> Result<LineOutput, PurchaseError> {
    let purchase = parse_line(line)?;
    let taxed = tax_line(&purchase, catalog);
    Ok(LineOutput {
        text: format_line(&purchase, taxed.taxed_amount),
        sales_tax: taxed.sales_tax,
        taxed_amount: taxed.taxed_amount,
    })
}

// ============================================================================
// REJECTED LINES
// ============================================================================

/// Why a line was excluded from the receipt.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// Did not match the line grammar
    Grammar,
    /// Matched the grammar but could not be parsed into a purchase
    Degenerate(PurchaseError),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Grammar => write!(f, "does not match the purchase grammar"),
            RejectReason::Degenerate(err) => write!(f, "{}", err),
        }
    }
}

/// One rejected input line, kept with its original text for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    /// 1-based position in the input
    pub line_number: usize,
    pub line: String,
    pub reason: RejectReason,
}

impl fmt::Display for RejectedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: invalid line: {} ({})",
            self.line_number, self.line, self.reason
        )
    }
}

// ============================================================================
// RECEIPT
// ============================================================================

/// Output of one full run: formatted lines in input order, running totals
/// over the valid lines, and every rejected line. Totals reset per run and
/// are never persisted.
#[derive(Debug, Clone, Default)]
pub struct Receipt {
    pub lines: Vec<String>,
    pub sales_taxes: f64,
    pub total: f64,
    pub rejected: Vec<RejectedLine>,
}

impl Receipt {
    /// The final totals line, emitted exactly once after all input lines.
    pub fn totals_line(&self) -> String {
        format!(
            "Sales Taxes: {:.2} Total: {:.2}",
            self.sales_taxes, self.total
        )
    }

    /// True when every input line contributed to the totals.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Process a full newline-delimited input against the catalog.
///
/// Rejected lines are recorded and skipped; they never abort the run and
/// never contribute to the totals. Output order follows input order.
pub fn process(input: &str, catalog: &Catalog) -> Receipt {
    let mut receipt = Receipt::default();

    for (idx, raw) in input.lines().enumerate() {
        let line_number = idx + 1;

        if !is_valid_line(raw) {
            receipt.rejected.push(RejectedLine {
                line_number,
                line: raw.to_string(),
                reason: RejectReason::Grammar,
            });
            continue;
        }

        match line_output(raw, catalog) {
            Ok(output) => {
                receipt.lines.push(output.text);
                receipt.sales_taxes += output.sales_tax;
                receipt.total += output.taxed_amount;
            }
            Err(err) => {
                receipt.rejected.push(RejectedLine {
                    line_number,
                    line: raw.to_string(),
                    reason: RejectReason::Degenerate(err),
                });
            }
        }
    }

    receipt
}

// ============================================================================
// TESTS
// ============================================================================
