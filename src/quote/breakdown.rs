use super::model::{Component, CostContributor, FinishType};
use serde::{Deserialize, Serialize};

/// Whole currency units. Every line item is rounded before it is summed.
pub type Cost = i64;

pub const HARDWARE_KIT_LABEL: &str = "U-Channel & Screws (Set)";
pub const FIXED_RATE_MARKER: &str = "Fixed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSummary {
    pub width: f64,
    pub height: f64,
    pub area: f64,
    #[serde(default)]
    pub perimeter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSummary {
    #[serde(with = "two_decimals")]
    pub total: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AluminumLine {
    #[serde(with = "two_decimals")]
    pub weight: f64,
    pub rate: f64,
    pub finish_type: FinishType,
    pub cost: Cost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaLine {
    pub area: f64,
    pub rate: f64,
    pub cost: Cost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthLine {
    pub length: f64,
    pub rate: f64,
    pub cost: Cost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareKitLine {
    pub perimeter: f64,
    pub cost: Cost,
    pub label: String,
    pub rate: String,
    #[serde(default)]
    pub u_channel: Cost,
    #[serde(default)]
    pub screw: Cost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedLine {
    pub cost: Cost,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabourLine {
    pub area: f64,
    pub rate: f64,
    pub minimum: f64,
    pub cost: Cost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub aluminum: AluminumLine,
    pub glass: AreaLine,
    pub glass_rubber: LengthLine,
    pub mosquito_net: AreaLine,
    pub hardware_linear: HardwareKitLine,
    pub lock: FixedLine,
    pub bearing: FixedLine,
    pub labour: LabourLine,
}

impl Breakdown {
    pub fn contributor_cost(&self, contributor: CostContributor) -> Cost {
        match contributor {
            CostContributor::Glass => self.glass.cost,
            CostContributor::GlassRubber => self.glass_rubber.cost,
            CostContributor::MosquitoNet => self.mosquito_net.cost,
            CostContributor::UChannel => self.hardware_linear.u_channel,
            CostContributor::Screw => self.hardware_linear.screw,
            CostContributor::Lock => self.lock.cost,
            CostContributor::Bearing => self.bearing.cost,
            CostContributor::Labour => self.labour.cost,
        }
    }

    /// Cost of a toggle, whether or not it is selected.
    pub fn component_cost(&self, component: Component) -> Cost {
        component
            .contributors()
            .iter()
            .map(|c| self.contributor_cost(*c))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub aluminum: Cost,
    pub materials: Cost,
    pub labour: Cost,
    pub grand_total: f64,
    #[serde(default)]
    pub custom_total: f64,
}

impl Totals {
    /// Aluminum + materials + labour, before any custom items.
    pub fn base_total(&self) -> Cost {
        self.aluminum + self.materials + self.labour
    }

    pub fn is_consistent(&self) -> bool {
        self.grand_total == self.base_total() as f64 + self.custom_total
    }
}

/// The engine output. Persisted verbatim inside invoices, so fields only ever get added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub dimensions: DimensionSummary,
    pub weight: WeightSummary,
    pub breakdown: Breakdown,
    pub totals: Totals,
}

impl QuoteResult {
    pub fn finish_type(&self) -> FinishType {
        self.breakdown.aluminum.finish_type
    }
}

/// Weights travel as two-decimal strings (`"2.80"`); numbers are accepted on the way in.
mod two_decimals {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.2}", value))
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => Ok(n),
            NumberOrText::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("'{}' is not a weight", s))),
        }
    }
}
