pub mod config;
pub mod error;
pub mod invoice;
pub mod quote;
pub mod rates;
