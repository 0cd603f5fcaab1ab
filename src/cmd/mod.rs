pub mod batch;
pub mod quote;
pub mod rates;
