use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use models::TradeRecord;
use notion_api::rest::{
    pages::{CreatePageBuilder, Page, Parent, PropertyValue},
    query::Query,
};
use serde::Serialize;

use crate::{error::AppError, AppState};

const NAME_PROPERTY: &str = "Name";
const DATETIME_PROPERTY: &str = "Datetime";
const PNL_PROPERTY: &str = "Profit / Loss";
const SYMBOL_PROPERTY: &str = "Symbol";

pub fn create_router() -> Router<AppState> {
    let router = Router::new().route("/", post(create_trade));

    return router;
}

#[derive(Debug, Serialize)]
struct TradeCreated {
    message: &'static str,
    id: String,
}

/// Maps a trade onto the journal database columns. `author` has no column.
pub fn trade_properties(trade: &TradeRecord) -> BTreeMap<String, PropertyValue> {
    return BTreeMap::from([
        (NAME_PROPERTY.to_owned(), PropertyValue::title(trade.name())),
        (
            DATETIME_PROPERTY.to_owned(),
            PropertyValue::date_start(trade.datetime()),
        ),
        (PNL_PROPERTY.to_owned(), PropertyValue::number(*trade.pnl())),
        (
            SYMBOL_PROPERTY.to_owned(),
            PropertyValue::select(trade.currency_pair()),
        ),
    ]);
}

async fn create_trade(
    State(state): State<AppState>,
    payload: Result<Json<TradeRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<TradeCreated>), AppError> {
    let database_id = state
        .config
        .database_id()
        .ok_or(AppError::MissingDatabaseId)?;
    let Json(trade) = payload?;
    let request = CreatePageBuilder::default()
        .parent(Parent::DatabaseId(database_id.to_owned()))
        .properties(trade_properties(&trade))
        .build()?;
    let page: Page = request.query(state.notion.as_ref()).await?;

    tracing::info!("Trade record created id={}", page.id());
    return Ok((
        StatusCode::CREATED,
        Json(TradeCreated {
            message: "Trade record created successfully",
            id: page.id().to_owned(),
        }),
    ));
}
