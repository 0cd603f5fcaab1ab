use super::breakdown::QuoteResult;
use serde::{Deserialize, Deserializer, Serialize};

/// An ad-hoc charge (positive) or discount (negative) entered by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomLineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub label: String,
    #[serde(deserialize_with = "lenient_cost")]
    pub cost: f64,
}

impl CustomLineItem {
    pub fn new(label: impl Into<String>, cost: f64) -> Self {
        Self {
            id: None,
            label: label.into(),
            cost,
        }
    }
}

/// Sum of custom costs, kept fractional.
pub fn custom_total(items: &[CustomLineItem]) -> f64 {
    items.iter().map(|item| item.cost).sum()
}

/// Re-derives the grand total from the base totals of `quote` plus `items`.
///
/// Takes the whole quote rather than a bare total so it can always start from the
/// aluminum/materials/labour figures; calling it again on its own output with a
/// different list replaces the previous custom total instead of stacking on it.
pub fn apply_custom_items(quote: &QuoteResult, items: &[CustomLineItem]) -> QuoteResult {
    let mut next = quote.clone();
    let extra = custom_total(items);
    next.totals.custom_total = extra;
    next.totals.grand_total = next.totals.base_total() as f64 + extra;
    next
}

/// Caller-owned, editable list of custom items with stable ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomItemList {
    items: Vec<CustomLineItem>,
    next_id: u64,
}

impl CustomItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item and returns its id.
    pub fn add(&mut self, label: impl Into<String>, cost: f64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(CustomLineItem {
            id: Some(id),
            label: label.into(),
            cost,
        });
        id
    }

    pub fn set_label(&mut self, id: u64, label: impl Into<String>) -> bool {
        match self.find_mut(id) {
            Some(item) => {
                item.label = label.into();
                true
            }
            None => false,
        }
    }

    pub fn set_cost(&mut self, id: u64, cost: f64) -> bool {
        match self.find_mut(id) {
            Some(item) => {
                item.cost = cost;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> Option<CustomLineItem> {
        let pos = self.items.iter().position(|item| item.id == Some(id))?;
        Some(self.items.remove(pos))
    }

    pub fn items(&self) -> &[CustomLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        custom_total(&self.items)
    }

    pub fn apply_to(&self, quote: &QuoteResult) -> QuoteResult {
        apply_custom_items(quote, &self.items)
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut CustomLineItem> {
        self.items.iter_mut().find(|item| item.id == Some(id))
    }
}

/// Form inputs send costs as text. Blank means 0; anything else must parse to a finite number.
fn lenient_cost<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) if n.is_finite() => Ok(n),
        NumberOrText::Number(n) => Err(serde::de::Error::custom(format!(
            "cost {} is not a finite number",
            n
        ))),
        NumberOrText::Text(s) if s.trim().is_empty() => Ok(0.0),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| serde::de::Error::custom(format!("cost '{}' is not a number", s))),
    }
}
