use crate::cmd::batch::BatchOutcome;
use alu_quote::config::{BearingPricing, RateDefaults};
use alu_quote::quote::{Component, CustomLineItem, QuoteResult, SelectionMask};
use alu_quote::rates::{RateKey, RateTable};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn money(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

pub fn print_quote(quote: &QuoteResult, selection: &SelectionMask, items: &[CustomLineItem]) {
    let d = &quote.dimensions;
    let b = &quote.breakdown;
    println!(
        "\nWindow: {} x {} ft ({} sqft), {} finish, {:.2} kg aluminum",
        d.width,
        d.height,
        d.area,
        quote.finish_type(),
        quote.weight.total
    );

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Item").add_attribute(Attribute::Bold),
        Cell::new("Quantity"),
        Cell::new("Rate"),
        Cell::new("Cost").fg(Color::Cyan),
        Cell::new("Included"),
    ]);

    table.add_row(vec![
        Cell::new("Aluminum"),
        Cell::new(format!("{:.2} kg", b.aluminum.weight)),
        Cell::new(money(b.aluminum.rate)),
        Cell::new(b.aluminum.cost),
        Cell::new("always"),
    ]);

    for component in Component::iter() {
        let (quantity, rate) = match component {
            Component::Glass => (format!("{} sqft", b.glass.area), money(b.glass.rate)),
            Component::GlassRubber => (
                format!("{} ft", b.glass_rubber.length),
                money(b.glass_rubber.rate),
            ),
            Component::MosquitoNet => (
                format!("{} sqft", b.mosquito_net.area),
                money(b.mosquito_net.rate),
            ),
            Component::UChannel => ("1 set".to_string(), b.hardware_linear.rate.clone()),
            Component::Lock => ("1".to_string(), money(b.lock.cost as f64)),
            Component::Bearing => match (b.bearing.quantity, b.bearing.rate) {
                (Some(qty), Some(rate)) => (qty.to_string(), money(rate)),
                _ => ("1 set".to_string(), money(b.bearing.cost as f64)),
            },
            Component::Labour => (
                format!("{} sqft", b.labour.area),
                format!("{} (min {})", money(b.labour.rate), money(b.labour.minimum)),
            ),
        };
        let included = selection.is_selected(component);
        let cost_cell = Cell::new(quote.breakdown.component_cost(component));
        table.add_row(vec![
            Cell::new(component.label()),
            Cell::new(quantity),
            Cell::new(rate),
            if included {
                cost_cell
            } else {
                cost_cell.fg(Color::DarkGrey)
            },
            Cell::new(if included { "yes" } else { "no" }),
        ]);
    }

    for item in items {
        table.add_row(vec![
            Cell::new(&item.label).add_attribute(Attribute::Italic),
            Cell::new(""),
            Cell::new(""),
            Cell::new(money(item.cost)).fg(if item.cost < 0.0 {
                Color::Green
            } else {
                Color::Yellow
            }),
            Cell::new("custom"),
        ]);
    }
    align_right(&mut table, 1..=3);
    println!("{}", table);

    let t = &quote.totals;
    let mut totals = new_table();
    totals.add_row(vec![Cell::new("Aluminum"), Cell::new(t.aluminum)]);
    totals.add_row(vec![Cell::new("Materials"), Cell::new(t.materials)]);
    totals.add_row(vec![Cell::new("Labour"), Cell::new(t.labour)]);
    if t.custom_total != 0.0 {
        totals.add_row(vec![Cell::new("Custom"), Cell::new(money(t.custom_total))]);
    }
    totals.add_row(vec![
        Cell::new("Grand Total").add_attribute(Attribute::Bold),
        Cell::new(money(t.grand_total))
            .add_attribute(Attribute::Bold)
            .fg(Color::Cyan),
    ]);
    align_right(&mut totals, 1..=1);
    println!("{}", totals);
}

pub fn print_rate_table(rates: &RateTable, defaults: &RateDefaults) {
    println!(
        "\nRates (defaults v{}, bearing pricing: {})",
        defaults.version, defaults.bearing_pricing
    );
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Label"),
        Cell::new("Value"),
        Cell::new("Source"),
    ]);

    for key in RateKey::iter() {
        let (value, source) = match rates.value_of(key) {
            Some(v) if rates.is_defaulted(key) => (money(v), Cell::new("default").fg(Color::Yellow)),
            Some(v) => (money(v), Cell::new("store")),
            None => ("-".to_string(), Cell::new("unset").fg(Color::DarkGrey)),
        };
        table.add_row(vec![
            Cell::new(key.as_str()),
            Cell::new(key.label()),
            Cell::new(value),
            source,
        ]);
    }
    align_right(&mut table, 2..=2);
    println!("{}", table);

    if defaults.bearing_pricing == BearingPricing::PerUnit {
        println!(
            "Bearing set = {} units x {} = {}",
            defaults.bearing_units,
            money(rates.value_of(RateKey::Bearing).unwrap_or(0.0)),
            money(rates.bearing)
        );
    }
}

pub fn print_batch(outcomes: &[BatchOutcome]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Window").add_attribute(Attribute::Bold),
        Cell::new("Size (ft)"),
        Cell::new("Finish"),
        Cell::new("Aluminum"),
        Cell::new("Materials"),
        Cell::new("Labour"),
        Cell::new("Total").fg(Color::Cyan),
    ]);

    let mut sum = 0.0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(q) => {
                sum += q.totals.grand_total;
                table.add_row(vec![
                    Cell::new(&outcome.label).add_attribute(Attribute::Bold),
                    Cell::new(format!("{} x {}", q.dimensions.width, q.dimensions.height)),
                    Cell::new(q.finish_type()),
                    Cell::new(q.totals.aluminum),
                    Cell::new(q.totals.materials),
                    Cell::new(q.totals.labour),
                    Cell::new(money(q.totals.grand_total)).fg(Color::Cyan),
                ]);
            }
            Err(e) => {
                table.add_row(vec![
                    Cell::new(&outcome.label).add_attribute(Attribute::Bold),
                    Cell::new(format!("error: {}", e)).fg(Color::Red),
                ]);
            }
        }
    }

    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(money(sum)).add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 3..=6);
    println!("\n{}", table);
}
