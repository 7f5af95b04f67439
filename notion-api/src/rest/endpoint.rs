use std::borrow::Cow;

use http::Method;

use crate::error::Error;

pub trait Endpoint {
    fn method(&self) -> Method {
        return Method::GET;
    }

    /// Path relative to the client's base url, e.g. `v1/pages`.
    fn endpoint(&self) -> Cow<'static, str>;

    fn body(&self) -> Result<Vec<u8>, Error> {
        return Ok(Vec::new());
    }
}
