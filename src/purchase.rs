// 🧾 Purchase Parser - Validated Line → Structured Purchase
// Token-splitting parser; callers must validate the grammar first

use std::fmt;

// ============================================================================
// PURCHASE
// ============================================================================

/// One parsed input line, immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    /// Positive item count (first token)
    pub quantity: u32,

    /// Description words re-joined with single spaces, original order
    pub description: String,

    /// Unit price as parsed from the last token
    pub unit_price: f64,
}

impl Purchase {
    /// Quantity × unit price, before any tax or surcharge
    pub fn base_amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

// ============================================================================
// PARSE ERRORS
// ============================================================================

/// Failure parsing a line that already passed the grammar.
///
/// The grammar is permissive (see `validator`), so a handful of degenerate
/// shapes reach the parser. These fail fast, per line, instead of
/// propagating a malformed purchase into the tax rules.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseError {
    /// Fewer than the 4 tokens (quantity, word, "at", price) the token
    /// arithmetic requires
    TooFewTokens { found: usize },
    /// First token is not a positive integer in range
    BadQuantity(String),
    /// Last token is not a decimal number
    BadPrice(String),
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseError::TooFewTokens { found } => {
                write!(f, "expected at least 4 tokens, found {}", found)
            }
            PurchaseError::BadQuantity(token) => {
                write!(f, "quantity token '{}' is not a valid count", token)
            }
            PurchaseError::BadPrice(token) => {
                write!(f, "price token '{}' is not a valid amount", token)
            }
        }
    }
}

impl std::error::Error for PurchaseError {}

// ============================================================================
// PARSER
// ============================================================================

/// Parse a grammar-valid line into a `Purchase`.
///
/// Splits on whitespace: first token is the quantity, last token is the
/// unit price, tokens between the first and the second-to-last form the
/// description (the "at" token before the price is excluded by
/// construction).
pub fn parse_line(line: &str) -> Result<Purchase, PurchaseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let len = tokens.len();
    if len < 4 {
        return Err(PurchaseError::TooFewTokens { found: len });
    }

    let quantity = tokens[0]
        .parse::<u32>()
        .map_err(|_| PurchaseError::BadQuantity(tokens[0].to_string()))?;

    let price_token = tokens[len - 1];
    let unit_price = price_token
        .parse::<f64>()
        .map_err(|_| PurchaseError::BadPrice(price_token.to_string()))?;

    let description = tokens[1..len - 2].join(" ");

    Ok(Purchase {
        quantity,
        description,
        unit_price,
    })
}

// ============================================================================
// TESTS
// ============================================================================
