pub mod error;
pub mod rest;

pub use error::Error;
pub use rest::client::{Client, RestClient};

/// Value sent in the `Notion-Version` header of every request.
pub const NOTION_VERSION: &str = "2022-06-28";
