use std::{borrow::Cow, collections::BTreeMap};

use derive_builder::Builder;
use derive_getters::Getters;
use http::Method;
use serde::Serialize;

use crate::{error::Error, rest::endpoint::Endpoint};

use super::{Parent, PropertyValue};

/// `POST v1/pages`: creates a page, i.e. a row when the parent is a database.
#[derive(Debug, Clone, Builder, Getters, Serialize)]
#[builder(build_fn(error = "crate::error::Error"))]
pub struct CreatePage {
    parent: Parent,
    #[builder(default)]
    properties: BTreeMap<String, PropertyValue>,
}

impl Endpoint for CreatePage {
    fn method(&self) -> Method {
        return Method::POST;
    }

    fn endpoint(&self) -> Cow<'static, str> {
        return Cow::Borrowed("v1/pages");
    }

    fn body(&self) -> Result<Vec<u8>, Error> {
        return Ok(serde_json::to_vec(self)?);
    }
}
