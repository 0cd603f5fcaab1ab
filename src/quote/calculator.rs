//! The quotation calculator: dimensions + finish + rates + selection -> itemized quote.
//!
//! Each component is rounded to whole currency units on its own and the totals
//! are sums of those rounded figures, so a printed breakdown always adds up to
//! the printed total.

use super::breakdown::{
    AluminumLine, AreaLine, Breakdown, Cost, DimensionSummary, FixedLine, HardwareKitLine,
    LabourLine, LengthLine, QuoteResult, Totals, WeightSummary, FIXED_RATE_MARKER,
    HARDWARE_KIT_LABEL,
};
use super::model::{Component, Dimensions, FinishType, SelectionMask};
use crate::error::{QfResult, QuoteError};
use crate::rates::RateTable;

/// Profile weight per linear foot of width (kg/ft).
pub const WIDTH_FACTOR: f64 = 1.123;
/// Profile weight per linear foot of height (kg/ft).
pub const HEIGHT_FACTOR: f64 = 1.677;
/// One of the two shutters carries netting.
pub const NET_AREA_FRACTION: f64 = 0.5;

/// Aluminum profile weight in kg.
pub fn aluminum_weight(dims: &Dimensions) -> f64 {
    WIDTH_FACTOR * dims.width() + HEIGHT_FACTOR * dims.height()
}

/// Two glazing shutters, each sealed along both heights and half the width.
pub fn rubber_length(dims: &Dimensions) -> f64 {
    2.0 * dims.width() + 4.0 * dims.height()
}

pub fn net_area(dims: &Dimensions) -> f64 {
    dims.area() * NET_AREA_FRACTION
}

/// Largest amount a single line may reach. Nine such lines still sum well inside `Cost`.
pub const MAX_LINE_COST: f64 = 1e15;

/// Rounds half away from zero to whole currency units.
#[inline]
pub fn round_cost(amount: f64) -> Cost {
    amount.round() as Cost
}

fn bounded(item: &str, amount: f64) -> QfResult<f64> {
    if amount.is_finite() && amount.abs() <= MAX_LINE_COST {
        Ok(amount)
    } else {
        Err(QuoteError::CostOutOfRange {
            item: item.to_string(),
            amount,
        })
    }
}

fn priced(item: &str, amount: f64) -> QfResult<Cost> {
    bounded(item, amount).map(round_cost)
}

/// Floor-clamped linear labour charge.
pub fn labour_cost(area: f64, per_sqft: f64, minimum: f64) -> Cost {
    round_cost(minimum).max(round_cost(area * per_sqft))
}

pub fn calculate(
    dims: &Dimensions,
    finish: FinishType,
    rates: &RateTable,
    selection: &SelectionMask,
) -> QfResult<QuoteResult> {
    let alu_rate = rates.aluminum_rate(finish)?;

    let area = dims.area();
    let perimeter = dims.perimeter();
    let weight = aluminum_weight(dims);
    let length = rubber_length(dims);
    let netting = net_area(dims);

    let u_channel = priced("u_channel", rates.u_channel)?;
    let screw = priced("screw", rates.screw)?;
    bounded("labour", area * rates.labour_sqft)?;
    bounded("labour", rates.labour_min)?;

    let breakdown = Breakdown {
        aluminum: AluminumLine {
            weight,
            rate: alu_rate,
            finish_type: finish,
            cost: priced("aluminum", weight * alu_rate)?,
        },
        glass: AreaLine {
            area,
            rate: rates.glass,
            cost: priced("glass", area * rates.glass)?,
        },
        glass_rubber: LengthLine {
            length,
            rate: rates.glass_rubber,
            cost: priced("glass_rubber", length * rates.glass_rubber)?,
        },
        mosquito_net: AreaLine {
            area: netting,
            rate: rates.mosquito_net,
            cost: priced("mosquito_net", netting * rates.mosquito_net)?,
        },
        hardware_linear: HardwareKitLine {
            perimeter,
            cost: u_channel + screw,
            label: HARDWARE_KIT_LABEL.to_string(),
            rate: FIXED_RATE_MARKER.to_string(),
            u_channel,
            screw,
        },
        lock: FixedLine {
            cost: priced("lock", rates.lock)?,
            quantity: None,
            rate: None,
        },
        bearing: FixedLine {
            cost: priced("bearing", rates.bearing)?,
            quantity: rates.bearing_per_unit.map(|(units, _)| units),
            rate: rates.bearing_per_unit.map(|(_, unit_rate)| unit_rate),
        },
        labour: LabourLine {
            area,
            rate: rates.labour_sqft,
            minimum: rates.labour_min,
            cost: labour_cost(area, rates.labour_sqft, rates.labour_min),
        },
    };

    let totals = summarize(&breakdown, selection);

    Ok(QuoteResult {
        dimensions: DimensionSummary {
            width: dims.width(),
            height: dims.height(),
            area,
            perimeter,
        },
        weight: WeightSummary {
            total: weight,
            unit: "kg".to_string(),
        },
        breakdown,
        totals,
    })
}

/// Aluminum is always charged. Materials and labour follow the selection mask.
pub fn summarize(breakdown: &Breakdown, selection: &SelectionMask) -> Totals {
    let aluminum = breakdown.aluminum.cost;
    let materials: Cost = selection
        .selected()
        .filter(Component::is_material)
        .map(|c| breakdown.component_cost(c))
        .sum();
    let labour = if selection.is_selected(Component::Labour) {
        breakdown.labour.cost
    } else {
        0
    };

    Totals {
        aluminum,
        materials,
        labour,
        grand_total: (aluminum + materials + labour) as f64,
        custom_total: 0.0,
    }
}
