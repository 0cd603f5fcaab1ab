use crate::reports;
use alu_quote::error::{QfResult, QuoteError};
use alu_quote::quote::{calculate, Dimensions, FinishType, QuoteResult, SelectionMask};
use alu_quote::rates::{RateResolver, RateTable, RawRates};
use clap::Args;
use rayon::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// CSV with a label,width,height[,finish] header
    #[arg(short, long)]
    pub input: String,
}

#[derive(Debug, Deserialize)]
struct WindowRow {
    label: String,
    width: f64,
    height: f64,
    #[serde(default)]
    finish: Option<String>,
}

pub struct BatchOutcome {
    pub label: String,
    pub result: Result<QuoteResult, String>,
}

pub fn run(args: BatchArgs, raw: &RawRates, resolver: &RateResolver) -> QfResult<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&args.input)?;

    let rows: Vec<(usize, Result<WindowRow, String>)> = rdr
        .deserialize::<WindowRow>()
        .enumerate()
        .map(|(i, row)| (i + 2, row.map_err(|e| e.to_string())))
        .collect();
    info!("📂 Quoting {} windows from {}", rows.len(), args.input);

    // Resolve once per finish; rows whose finish cannot resolve report the error themselves.
    let tables: HashMap<FinishType, RateTable> = FinishType::iter()
        .filter_map(|finish| resolver.resolve(raw, finish).ok().map(|t| (finish, t)))
        .collect();
    let selection = SelectionMask::all();

    let outcomes: Vec<BatchOutcome> = rows
        .par_iter()
        .map(|(line, row)| match row {
            Ok(row) => BatchOutcome {
                label: row.label.clone(),
                result: quote_row(row, &tables, raw, resolver, &selection)
                    .map_err(|e| e.to_string()),
            },
            Err(e) => BatchOutcome {
                label: format!("line {}", line),
                result: Err(e.clone()),
            },
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        warn!("⚠️  {} of {} windows could not be quoted", failed, outcomes.len());
    }

    reports::print_batch(&outcomes);
    Ok(())
}

fn quote_row(
    row: &WindowRow,
    tables: &HashMap<FinishType, RateTable>,
    raw: &RawRates,
    resolver: &RateResolver,
    selection: &SelectionMask,
) -> QfResult<QuoteResult> {
    let dims = Dimensions::new(row.width, row.height)?;
    let finish = FinishType::parse(row.finish.as_deref().unwrap_or("color"))?;
    match tables.get(&finish) {
        Some(rates) => calculate(&dims, finish, rates, selection),
        None => Err(resolver
            .resolve(raw, finish)
            .err()
            .unwrap_or_else(|| QuoteError::MissingRate {
                key: format!("alu_{}", finish),
            })),
    }
}
