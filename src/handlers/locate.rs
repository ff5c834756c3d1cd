use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::{
    error::LocateError,
    models::{LocateParams, LocatePayload},
    services::{IpInfoClient, LookupOutcome},
};

/// Resolve the country of `?ip=` through the upstream API.
///
/// - upstream 200: 200 `{"country": ...}`
/// - upstream 404: 404 `{"error": "could not locate country info for ip"}`
/// - any other upstream status: bare 500
/// - transport, decode or encode failure: 500 with the error text
pub async fn locate(
    State(client): State<IpInfoClient>,
    RawQuery(query): RawQuery,
) -> Result<Response, LocateError> {
    let params = LocateParams::from_query(query.as_deref());
    debug!("Locating ip {:?}", params.ip);

    let (status, payload) = match client.lookup(&params.ip).await? {
        LookupOutcome::Found(country) => {
            info!("Located {} in {:?}", params.ip, country);
            (StatusCode::OK, LocatePayload::country(country))
        }
        LookupOutcome::NotFound => (StatusCode::NOT_FOUND, LocatePayload::not_found()),
        LookupOutcome::UpstreamError(_) => {
            return Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response());
        }
    };

    let body = serde_json::to_string(&payload)?;

    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}
