mod trades;

use anyhow::Context;
use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

pub fn create_router(state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config.allowed_origins)?;
    let mut router = Router::new()
        .nest("/trades", trades::create_router())
        .with_state(state)
        // AppError already logs failed requests.
        .layer(TraceLayer::new_for_http().on_failure(()));

    if let Some(cors) = cors {
        router = router.layer(cors);
    }
    return Ok(router);
}

/// Requests without an `Origin` header pass through untouched. Origins outside
/// the list get no CORS headers, so browsers reject the response.
fn cors_layer(allowed_origins: &[String]) -> anyhow::Result<Option<CorsLayer>> {
    if allowed_origins.is_empty() {
        return Ok(None);
    }
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).context(format!("Invalid CORS origin {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true);
    return Ok(Some(cors));
}
