use thiserror::Error;

/// Rejections produced while validating `/add` arguments.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("expected 3 arguments <SYMBOL> <AMOUNT> <YYYY-MM-DD>, got {0}")]
    ArgumentCount(usize),

    #[error("unsupported asset: {ticker}")]
    UnsupportedAsset { ticker: String },

    #[error("amount is not a positive number: {0}")]
    InvalidAmount(String),

    #[error("date is not in YYYY-MM-DD form: {0}")]
    InvalidDate(String),
}

/// Terminal resolver failure. Internal causes (timeout, bad status,
/// malformed body) are logged per tier, never surfaced here.
#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error("price unavailable for {ticker}")]
    PriceUnavailable { ticker: String },
}

/// Everything a command handler can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("internal error: {0}")]
    Internal(String),
}
