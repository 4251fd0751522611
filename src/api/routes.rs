use crate::api::api_error::APIError;
use crate::api::model::UpdateQuery;
use crate::api::server::AppState;
use crate::error::Error;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use serde_json::json;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) fn new(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(health_check))
        .route("/update", get(update))
        .route("/nic/update", get(update))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn health_check() -> impl IntoResponse {
    Json(json!({"ok":"healthy"}))
}

async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    WithRejection(Query(params), _): WithRejection<Query<UpdateQuery>, APIError>,
) -> Result<Response, APIError> {
    // Credentials are checked before parameters are even looked at. A header
    // that isn't valid UTF-8 can't match and is treated as absent.
    let provided = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if provided != state.config.authorization {
        tracing::debug!("rejected update: credentials do not match");
        return Err(Error::AuthForbidden.into());
    }

    let change = params.into_change()?;
    tracing::info!("request authorized for {} {}", change.name, change.value);
    state
        .dns
        .upsert_a(&state.config.hosted_zone_id, &change)
        .await?;

    Ok(plain(StatusCode::OK))
}

fn plain(status: StatusCode) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain")], String::new()).into_response()
}
