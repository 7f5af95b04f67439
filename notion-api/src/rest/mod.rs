pub mod client;
pub mod endpoint;
pub mod pages;
pub mod query;
