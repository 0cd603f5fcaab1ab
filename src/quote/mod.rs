pub mod breakdown;
pub mod calculator;
pub mod custom;
pub mod model;
pub mod request;

pub use self::breakdown::{Breakdown, Cost, QuoteResult, Totals};
pub use self::calculator::calculate;
pub use self::custom::{apply_custom_items, CustomItemList, CustomLineItem};
pub use self::model::{Component, CostContributor, Dimensions, FinishType, SelectionMask};
pub use self::request::QuoteRequest;
