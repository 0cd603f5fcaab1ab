#![allow(dead_code)] // each test binary uses a different subset

use alu_quote::config::RateDefaults;
use alu_quote::quote::{calculate, Dimensions, FinishType, QuoteResult, SelectionMask};
use alu_quote::rates::{RateResolver, RateTable, RawRates};

/// The rate set used in the worked 1 x 1 ft examples.
pub fn sample_rates() -> RawRates {
    RawRates::from_pairs([
        ("alu_color", 410.0),
        ("alu_silver", 360.0),
        ("glass", 45.0),
        ("glass_rubber", 10.0),
        ("mosquito_net", 20.0),
        ("u_channel_fixed", 100.0),
        ("screw_fixed", 80.0),
        ("lock", 170.0),
        ("bearing", 60.0),
        ("labour_min", 350.0),
        ("labour_sqft", 24.0),
    ])
}

pub fn resolver() -> RateResolver {
    RateResolver::new(RateDefaults::default())
}

pub fn table(finish: FinishType) -> RateTable {
    resolver()
        .resolve(&sample_rates(), finish)
        .expect("sample rates resolve")
}

pub fn quote(width: f64, height: f64, finish: FinishType, selection: &SelectionMask) -> QuoteResult {
    let dims = Dimensions::new(width, height).expect("valid dimensions");
    calculate(&dims, finish, &table(finish), selection).expect("quote computes")
}

pub fn full_quote(width: f64, height: f64, finish: FinishType) -> QuoteResult {
    quote(width, height, finish, &SelectionMask::all())
}
