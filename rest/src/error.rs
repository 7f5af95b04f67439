use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const TRADE_ERROR_MESSAGE: &str = "Error creating trade record";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database ID is not defined")]
    MissingDatabaseId,

    #[error("Invalid trade body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Notion(#[from] notion_api::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Details stay in the server log only.
        tracing::error!("{TRADE_ERROR_MESSAGE}: {self:#}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": TRADE_ERROR_MESSAGE })),
        )
            .into_response();
    }
}
