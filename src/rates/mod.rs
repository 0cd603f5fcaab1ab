pub mod resolver;
pub mod source;
pub mod vocabulary;

pub use self::resolver::{RateResolver, RateTable};
pub use self::source::RawRates;
pub use self::vocabulary::RateKey;
