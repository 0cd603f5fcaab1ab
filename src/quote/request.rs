use super::breakdown::QuoteResult;
use super::calculator::calculate;
use super::custom::{apply_custom_items, CustomLineItem};
use super::model::{Dimensions, FinishType, SelectionMask};
use crate::error::QfResult;
use crate::rates::{RateResolver, RawRates};
use serde::{Deserialize, Serialize};

/// The calculator request as it arrives from a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub width: f64,
    pub height: f64,
    pub finish_type: String,
    #[serde(default)]
    pub selected_items: SelectionMask,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_items: Vec<CustomLineItem>,
}

impl QuoteRequest {
    pub fn new(width: f64, height: f64, finish: FinishType, selection: SelectionMask) -> Self {
        Self {
            width,
            height,
            finish_type: finish.to_string(),
            selected_items: selection,
            custom_items: Vec::new(),
        }
    }

    /// Validates the input, resolves rates for the requested finish and prices the window.
    /// Custom items, if any, are folded in last.
    pub fn evaluate(&self, raw: &RawRates, resolver: &RateResolver) -> QfResult<QuoteResult> {
        let dims = Dimensions::new(self.width, self.height)?;
        let finish = FinishType::parse(&self.finish_type)?;
        let rates = resolver.resolve(raw, finish)?;
        let quote = calculate(&dims, finish, &rates, &self.selected_items)?;
        Ok(apply_custom_items(&quote, &self.custom_items))
    }
}
