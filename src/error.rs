use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Invalid dimensions: width {width} x height {height} (both must be positive feet)")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("Invalid finish type '{0}' (expected 'color' or 'silver')")]
    InvalidFinishType(String),

    #[error("Missing required rate '{key}'")]
    MissingRate { key: String },

    #[error("Invalid rate '{key}': {value} (rates must be finite and non-negative)")]
    InvalidRate { key: String, value: f64 },

    #[error("Cost of '{item}' is out of range: {amount}")]
    CostOutOfRange { item: String, amount: f64 },

    #[error("Customer name is required to issue an invoice")]
    MissingCustomerName,

    #[error("Rate Source Error: {0}")]
    RateSource(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuoteError {
    /// True for errors caused by the quote input itself, as opposed to
    /// rate-store misconfiguration or I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. }
                | Self::InvalidFinishType(_)
                | Self::CostOutOfRange { .. }
                | Self::MissingCustomerName
        )
    }
}

pub type QfResult<T> = Result<T, QuoteError>;
