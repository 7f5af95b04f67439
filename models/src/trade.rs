use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One trade as posted by a client. Missing fields decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Builder, Getters, Serialize, Deserialize)]
#[builder(default, setter(into))]
#[serde(default, rename_all = "camelCase")]
pub struct TradeRecord {
    name: String,
    author: String,
    datetime: String,
    pnl: Option<f64>,
    currency_pair: String,
}
