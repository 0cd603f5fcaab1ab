use super::source::RawRates;
use super::vocabulary::RateKey;
use crate::config::{BearingPricing, RateDefaults};
use crate::error::{QfResult, QuoteError};
use crate::quote::model::FinishType;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::debug;

/// A complete, validated rate table. Every value the calculator reads is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    pub alu_color: Option<f64>,
    pub alu_silver: Option<f64>,
    pub glass: f64,
    pub glass_rubber: f64,
    pub mosquito_net: f64,
    pub u_channel: f64,
    pub screw: f64,
    pub lock: f64,
    /// Whole bearing set for one window, after applying the pricing model.
    pub bearing: f64,
    /// `(units, price per unit)` when bearings are priced per unit.
    pub bearing_per_unit: Option<(u32, f64)>,
    pub labour_min: f64,
    pub labour_sqft: f64,
    /// Keys that were filled from [`RateDefaults`] rather than the store.
    pub defaulted: Vec<RateKey>,
}

impl RateTable {
    pub fn aluminum_rate(&self, finish: FinishType) -> QfResult<f64> {
        let (rate, key) = match finish {
            FinishType::Color => (self.alu_color, RateKey::AluColor),
            FinishType::Silver => (self.alu_silver, RateKey::AluSilver),
        };
        rate.ok_or_else(|| QuoteError::MissingRate {
            key: key.to_string(),
        })
    }

    pub fn hardware_kit(&self) -> f64 {
        self.u_channel + self.screw
    }

    pub fn is_defaulted(&self, key: RateKey) -> bool {
        self.defaulted.contains(&key)
    }

    /// Value as stored under `key`, for listing. Bearing reports the stored rate,
    /// which is the unit price under per-unit pricing.
    pub fn value_of(&self, key: RateKey) -> Option<f64> {
        match key {
            RateKey::AluColor => self.alu_color,
            RateKey::AluSilver => self.alu_silver,
            RateKey::Glass => Some(self.glass),
            RateKey::GlassRubber => Some(self.glass_rubber),
            RateKey::MosquitoNet => Some(self.mosquito_net),
            RateKey::UChannelFixed => Some(self.u_channel),
            RateKey::ScrewFixed => Some(self.screw),
            RateKey::Lock => Some(self.lock),
            RateKey::Bearing => Some(
                self.bearing_per_unit
                    .map_or(self.bearing, |(_, unit_rate)| unit_rate),
            ),
            RateKey::LabourMin => Some(self.labour_min),
            RateKey::LabourSqft => Some(self.labour_sqft),
        }
    }
}

/// Turns partial rate-store contents into a [`RateTable`] for one finish.
#[derive(Debug, Clone, Default)]
pub struct RateResolver {
    defaults: RateDefaults,
}

impl RateResolver {
    pub fn new(defaults: RateDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &RateDefaults {
        &self.defaults
    }

    pub fn resolve(&self, raw: &RawRates, finish: FinishType) -> QfResult<RateTable> {
        self.log_unknown_keys(raw);

        let mut defaulted = Vec::new();

        let (quoted_key, other_key) = match finish {
            FinishType::Color => (RateKey::AluColor, RateKey::AluSilver),
            FinishType::Silver => (RateKey::AluSilver, RateKey::AluColor),
        };
        let quoted = Some(self.required(raw, quoted_key)?);
        // The other finish is listed for reference only and never fails this quote.
        let other = self.lookup(raw, other_key).and_then(|(name, value)| {
            if check_rate(name, value).is_ok() {
                Some(value)
            } else {
                debug!("Ignoring invalid '{}' = {} for {} quote", name, value, finish);
                None
            }
        });
        let (alu_color, alu_silver) = match finish {
            FinishType::Color => (quoted, other),
            FinishType::Silver => (other, quoted),
        };

        let glass = self.required(raw, RateKey::Glass)?;
        let glass_rubber = self.required(raw, RateKey::GlassRubber)?;
        let mosquito_net = self.required(raw, RateKey::MosquitoNet)?;
        let labour_min = self.required(raw, RateKey::LabourMin)?;
        let labour_sqft = self.required(raw, RateKey::LabourSqft)?;

        let u_channel = self.with_default(raw, RateKey::UChannelFixed, &mut defaulted)?;
        let screw = self.with_default(raw, RateKey::ScrewFixed, &mut defaulted)?;
        let lock = self.with_default(raw, RateKey::Lock, &mut defaulted)?;
        let stored_bearing = self.with_default(raw, RateKey::Bearing, &mut defaulted)?;

        let bearing_per_unit = match self.defaults.bearing_pricing {
            BearingPricing::PerSet => None,
            BearingPricing::PerUnit => Some((self.defaults.bearing_units, stored_bearing)),
        };

        Ok(RateTable {
            alu_color,
            alu_silver,
            glass,
            glass_rubber,
            mosquito_net,
            u_channel,
            screw,
            lock,
            bearing: self.defaults.bearing_set_cost(stored_bearing),
            bearing_per_unit,
            labour_min,
            labour_sqft,
            defaulted,
        })
    }

    fn log_unknown_keys(&self, raw: &RawRates) {
        for key in raw.keys() {
            let known = RateKey::iter()
                .any(|k| k.as_str() == key || k.legacy_alias() == Some(key));
            if !known {
                debug!("Ignoring unknown rate key '{}'", key);
            }
        }
    }

    /// The store entry `key` resolves to, with the name it was found under.
    /// The canonical name wins; the legacy alias is read only when enabled.
    fn lookup(&self, raw: &RawRates, key: RateKey) -> Option<(&'static str, f64)> {
        if let Some(value) = raw.get(key.as_str()) {
            return Some((key.as_str(), value));
        }
        let alias = key.legacy_alias().filter(|_| self.defaults.accept_legacy_keys)?;
        let value = raw.get(alias)?;
        debug!("Using legacy rate key '{}' for '{}'", alias, key);
        Some((alias, value))
    }

    /// Like [`Self::lookup`], but the value actually read must be a valid rate.
    fn read(&self, raw: &RawRates, key: RateKey) -> QfResult<Option<f64>> {
        match self.lookup(raw, key) {
            Some((name, value)) => {
                check_rate(name, value)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn required(&self, raw: &RawRates, key: RateKey) -> QfResult<f64> {
        self.read(raw, key)?.ok_or_else(|| missing(key))
    }

    fn with_default(
        &self,
        raw: &RawRates,
        key: RateKey,
        defaulted: &mut Vec<RateKey>,
    ) -> QfResult<f64> {
        if let Some(value) = self.read(raw, key)? {
            return Ok(value);
        }
        let value = self.defaults.fallback_for(key).ok_or_else(|| missing(key))?;
        check_rate(key.as_str(), value)?;
        debug!("Rate '{}' not set, using default {}", key, value);
        defaulted.push(key);
        Ok(value)
    }
}

fn missing(key: RateKey) -> QuoteError {
    QuoteError::MissingRate {
        key: key.to_string(),
    }
}

fn check_rate(key: &str, value: f64) -> QfResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(QuoteError::InvalidRate {
            key: key.to_string(),
            value,
        })
    }
}
