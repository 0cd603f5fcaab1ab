use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The fixed rate-key vocabulary. Wire names are case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RateKey {
    AluColor,
    AluSilver,
    Glass,
    GlassRubber,
    MosquitoNet,
    UChannelFixed,
    ScrewFixed,
    Lock,
    Bearing,
    LabourMin,
    LabourSqft,
}

impl RateKey {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Human-readable label used by rate editors and printed tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AluColor => "Aluminum Color (Rs/kg)",
            Self::AluSilver => "Aluminum Silver (Rs/kg)",
            Self::Glass => "Glass (Rs/sqft)",
            Self::GlassRubber => "Glass Rubber (Rs/ft)",
            Self::MosquitoNet => "Mosquito Net (Rs/sqft)",
            Self::UChannelFixed => "U-Channel Set Cost (Rs)",
            Self::ScrewFixed => "Screw Set Cost (Rs)",
            Self::Lock => "Lock (Rs/unit)",
            Self::Bearing => "Bearings Set (Rs/window)",
            Self::LabourMin => "Labour Minimum (Rs)",
            Self::LabourSqft => "Labour Rate (Rs/sqft)",
        }
    }

    /// Older rate stores seeded the hardware kit under these names.
    pub fn legacy_alias(&self) -> Option<&'static str> {
        match self {
            Self::UChannelFixed => Some("u_channel"),
            Self::ScrewFixed => Some("screw"),
            _ => None,
        }
    }
}
