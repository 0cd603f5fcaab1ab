use crate::reports;
use alu_quote::error::QfResult;
use alu_quote::quote::FinishType;
use alu_quote::rates::{RateResolver, RawRates};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct RatesArgs {
    /// Finish whose aluminum rate must be present
    #[arg(short, long, default_value = "color")]
    pub finish: String,
}

pub fn run(args: RatesArgs, raw: &RawRates, resolver: &RateResolver) -> QfResult<()> {
    let finish = FinishType::parse(&args.finish)?;
    let table = resolver.resolve(raw, finish)?;
    reports::print_rate_table(&table, resolver.defaults());
    Ok(())
}
