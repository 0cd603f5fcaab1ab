use crate::error::QfResult;
use crate::rates::vocabulary::RateKey;
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::info;

/// Bumped whenever a default value or its meaning changes.
pub const DEFAULTS_VERSION: u32 = 2;

/// Seed values for the rates a quote cannot be produced without.
/// The hardware defaults come from [`RateDefaults`].
pub const SEED_REQUIRED_RATES: [(RateKey, f64); 7] = [
    (RateKey::AluColor, 410.0),
    (RateKey::AluSilver, 360.0),
    (RateKey::Glass, 45.0),
    (RateKey::GlassRubber, 10.0),
    (RateKey::MosquitoNet, 20.0),
    (RateKey::LabourMin, 350.0),
    (RateKey::LabourSqft, 24.0),
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BearingPricing {
    /// `bearing` is the price of the whole per-window bearing set.
    #[default]
    PerSet,
    /// `bearing` is the price of one bearing, multiplied by `bearing_units`.
    PerUnit,
}

/// The one place that decides what happens when a rate is unset.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateDefaults {
    #[arg(skip = DEFAULTS_VERSION)]
    pub version: u32,

    // === HARDWARE KIT ===
    #[arg(long, global = true, default_value_t = 100.0)]
    pub default_u_channel: f64,
    #[arg(long, global = true, default_value_t = 80.0)]
    pub default_screw: f64,

    // === FIXED PER WINDOW ===
    #[arg(long, global = true, default_value_t = 170.0)]
    pub default_lock: f64,
    #[arg(long, global = true, default_value_t = 60.0)]
    pub default_bearing: f64,

    // === VOCABULARY ===
    #[arg(long, global = true, value_enum, default_value_t = BearingPricing::PerSet)]
    pub bearing_pricing: BearingPricing,
    #[arg(long, global = true, default_value_t = 6)]
    pub bearing_units: u32,
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    pub accept_legacy_keys: bool,
}

impl Default for RateDefaults {
    fn default() -> Self {
        Self {
            version: DEFAULTS_VERSION,
            default_u_channel: 100.0,
            default_screw: 80.0,
            default_lock: 170.0,
            default_bearing: 60.0,
            bearing_pricing: BearingPricing::PerSet,
            bearing_units: 6,
            accept_legacy_keys: true,
        }
    }
}

impl RateDefaults {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> QfResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let defaults: Self = serde_json::from_str(&content)?;
        if defaults.version != DEFAULTS_VERSION {
            info!(
                "Rate defaults file is version {}, engine expects {}. Missing fields use built-in values.",
                defaults.version, DEFAULTS_VERSION
            );
        }
        Ok(defaults)
    }

    /// Fallback for a key that may be absent from the rate store.
    /// `None` means the key is required.
    pub fn fallback_for(&self, key: RateKey) -> Option<f64> {
        match key {
            RateKey::UChannelFixed => Some(self.default_u_channel),
            RateKey::ScrewFixed => Some(self.default_screw),
            RateKey::Lock => Some(self.default_lock),
            RateKey::Bearing => Some(self.default_bearing),
            _ => None,
        }
    }

    /// Price of the whole bearing set for one window, given the stored rate.
    pub fn bearing_set_cost(&self, stored: f64) -> f64 {
        match self.bearing_pricing {
            BearingPricing::PerSet => stored,
            BearingPricing::PerUnit => stored * f64::from(self.bearing_units),
        }
    }

    /// Full seed rate set: the required seeds plus every hardware default.
    pub fn seed_rates(&self) -> Vec<(String, f64)> {
        let mut rates: Vec<(String, f64)> = SEED_REQUIRED_RATES
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect();
        for key in [
            RateKey::UChannelFixed,
            RateKey::ScrewFixed,
            RateKey::Lock,
            RateKey::Bearing,
        ] {
            if let Some(value) = self.fallback_for(key) {
                rates.push((key.to_string(), value));
            }
        }
        rates
    }

    pub fn merge_from_cli(&mut self, cli_defaults: &RateDefaults, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_defaults.$field.clone();
                }
            };
        }

        update_if_present!(default_u_channel, "default_u_channel");
        update_if_present!(default_screw, "default_screw");
        update_if_present!(default_lock, "default_lock");
        update_if_present!(default_bearing, "default_bearing");

        update_if_present!(bearing_pricing, "bearing_pricing");
        update_if_present!(bearing_units, "bearing_units");
        update_if_present!(accept_legacy_keys, "accept_legacy_keys");
    }
}
