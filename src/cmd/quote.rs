use crate::reports;
use alu_quote::error::QfResult;
use alu_quote::quote::{Component, CustomLineItem, QuoteRequest, SelectionMask};
use alu_quote::rates::{RateResolver, RawRates};
use clap::Args;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Width in feet
    #[arg(short = 'W', long, allow_hyphen_values = true)]
    pub width: f64,

    /// Height in feet
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    pub height: f64,

    /// color | silver
    #[arg(short, long, default_value = "color")]
    pub finish: String,

    /// Components to leave out, e.g. --exclude lock,mosquitoNet
    #[arg(short, long, value_delimiter = ',', value_parser = parse_component)]
    pub exclude: Vec<Component>,

    /// Custom line item as LABEL=COST (negative for discounts). Repeatable.
    #[arg(short, long = "item", value_parser = parse_item)]
    pub items: Vec<CustomLineItem>,

    /// Print the quote as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: QuoteArgs, raw: &RawRates, resolver: &RateResolver) -> QfResult<()> {
    let selection = args
        .exclude
        .iter()
        .fold(SelectionMask::all(), |mask, c| mask.without(*c));

    let request = QuoteRequest {
        width: args.width,
        height: args.height,
        finish_type: args.finish.clone(),
        selected_items: selection.clone(),
        custom_items: args.items.clone(),
    };
    let quote = request.evaluate(raw, resolver)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        reports::print_quote(&quote, &selection, &args.items);
    }
    Ok(())
}

fn parse_component(raw: &str) -> Result<Component, String> {
    Component::from_str(raw.trim()).map_err(|_| {
        let known: Vec<String> = Component::iter().map(|c| c.to_string()).collect();
        format!("unknown component '{}' (expected one of: {})", raw, known.join(", "))
    })
}

fn parse_item(raw: &str) -> Result<CustomLineItem, String> {
    let (label, cost) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("'{}' must look like LABEL=COST", raw))?;
    let cost = cost
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("cost '{}' is not a number", cost))?;
    Ok(CustomLineItem::new(label.trim(), cost))
}
