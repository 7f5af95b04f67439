pub mod create;
pub mod properties;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

pub use create::{CreatePage, CreatePageBuilder};
pub use properties::{DateValue, PropertyValue, RichText, SelectOption, TextContent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parent {
    DatabaseId(String),
}

/// Page object returned by the pages endpoints. Only the fields this crate
/// needs are decoded.
#[derive(Debug, Clone, Getters, Deserialize)]
pub struct Page {
    id: String,
    #[serde(default)]
    url: Option<String>,
}
