use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),

    #[error(transparent)]
    HttpError(#[from] http::Error),

    #[error(transparent)]
    HeaderError(#[from] http::header::InvalidHeaderValue),

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    UrlError(#[from] url::ParseError),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    BuilderError(#[from] derive_builder::UninitializedFieldError),

    #[error("Notion API responded {status} ({code}): {message}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
    },
}
