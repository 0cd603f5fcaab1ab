use crate::error::{QfResult, QuoteError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Window opening in feet. Both sides are strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    width: f64,
    height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> QfResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(QuoteError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FinishType {
    Color,
    Silver,
}

impl FinishType {
    pub fn parse(raw: &str) -> QfResult<Self> {
        Self::from_str(raw.trim()).map_err(|_| QuoteError::InvalidFinishType(raw.to_string()))
    }
}

/// Selection-mask toggles. One toggle may stand for several priced parts.
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
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Component {
    Glass,
    GlassRubber,
    MosquitoNet,
    UChannel,
    Lock,
    Bearing,
    Labour,
}

/// An individually priced part of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "camelCase")]
pub enum CostContributor {
    Glass,
    GlassRubber,
    MosquitoNet,
    UChannel,
    Screw,
    Lock,
    Bearing,
    Labour,
}

impl Component {
    pub fn contributors(&self) -> &'static [CostContributor] {
        match self {
            Self::Glass => &[CostContributor::Glass],
            Self::GlassRubber => &[CostContributor::GlassRubber],
            Self::MosquitoNet => &[CostContributor::MosquitoNet],
            Self::UChannel => &[CostContributor::UChannel, CostContributor::Screw],
            Self::Lock => &[CostContributor::Lock],
            Self::Bearing => &[CostContributor::Bearing],
            Self::Labour => &[CostContributor::Labour],
        }
    }

    /// Labour is totalled on its own line, everything else is a material.
    pub fn is_material(&self) -> bool {
        !matches!(self, Self::Labour)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Glass => "Glass",
            Self::GlassRubber => "Glass Rubber",
            Self::MosquitoNet => "Mosquito Net",
            Self::UChannel => "U-Channel & Screws",
            Self::Lock => "Lock",
            Self::Bearing => "Bearings",
            Self::Labour => "Labour Charges",
        }
    }
}

/// Which components are charged. Anything not marked `true` is excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct SelectionMask {
    flags: BTreeMap<Component, bool>,
}

impl SelectionMask {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            flags: Component::iter().map(|c| (c, true)).collect(),
        }
    }

    pub fn with(mut self, component: Component, selected: bool) -> Self {
        self.set(component, selected);
        self
    }

    pub fn without(self, component: Component) -> Self {
        self.with(component, false)
    }

    pub fn set(&mut self, component: Component, selected: bool) {
        self.flags.insert(component, selected);
    }

    pub fn is_selected(&self, component: Component) -> bool {
        self.flags.get(&component).copied().unwrap_or(false)
    }

    pub fn selected(&self) -> impl Iterator<Item = Component> + '_ {
        Component::iter().filter(|c| self.is_selected(*c))
    }
}

impl From<BTreeMap<String, bool>> for SelectionMask {
    /// Keys outside the component set (`screw`, `trackRubber` from older clients) are dropped.
    fn from(raw: BTreeMap<String, bool>) -> Self {
        let flags = raw
            .into_iter()
            .filter_map(|(key, selected)| {
                Component::from_str(&key).ok().map(|c| (c, selected))
            })
            .collect();
        Self { flags }
    }
}

impl From<SelectionMask> for BTreeMap<String, bool> {
    fn from(mask: SelectionMask) -> Self {
        mask.flags
            .into_iter()
            .map(|(component, selected)| (component.to_string(), selected))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_dimensions() {
        for (w, h) in [(0.0, 1.0), (1.0, 0.0), (-2.0, 3.0), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            assert!(matches!(
                Dimensions::new(w, h),
                Err(QuoteError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn derives_area_and_perimeter() {
        let dims = Dimensions::new(4.0, 2.5).unwrap();
        assert_eq!(dims.area(), 10.0);
        assert_eq!(dims.perimeter(), 13.0);
    }

    #[test]
    fn finish_parsing_is_strict() {
        assert_eq!(FinishType::parse("color").unwrap(), FinishType::Color);
        assert_eq!(FinishType::parse(" silver ").unwrap(), FinishType::Silver);
        assert!(matches!(
            FinishType::parse("bronze"),
            Err(QuoteError::InvalidFinishType(s)) if s == "bronze"
        ));
    }

    #[test]
    fn component_ids_match_wire_names() {
        let names: Vec<String> = Component::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            ["glass", "glassRubber", "mosquitoNet", "uChannel", "lock", "bearing", "labour"]
        );
    }

    #[test]
    fn u_channel_groups_channel_and_screws() {
        assert_eq!(
            Component::UChannel.contributors(),
            &[CostContributor::UChannel, CostContributor::Screw]
        );
    }

    #[test]
    fn mask_ignores_unknown_keys_and_defaults_to_excluded() {
        let mask: SelectionMask =
            serde_json::from_str(r#"{"glass":true,"screw":true,"trackRubber":true,"lock":false}"#)
                .unwrap();
        assert!(mask.is_selected(Component::Glass));
        assert!(!mask.is_selected(Component::Lock));
        assert!(!mask.is_selected(Component::Labour));
        assert_eq!(mask.selected().count(), 1);
    }
}
