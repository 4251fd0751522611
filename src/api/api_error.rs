use crate::error::Error;
use axum::extract::rejection::QueryRejection;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

pub(crate) struct APIError(anyhow::Error);

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let any_err = self.0;
        let status = match any_err.downcast_ref::<Error>() {
            Some(Error::AuthForbidden) => StatusCode::FORBIDDEN,
            Some(Error::MissingParam(_)) => StatusCode::BAD_REQUEST,
            Some(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Query-string extraction failures arrive as the raw rejection.
            None if any_err.downcast_ref::<QueryRejection>().is_some() => StatusCode::BAD_REQUEST,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("update failed: {any_err:#}");
        }
        // The dyndns2 surface answers with bare statuses, never a body.
        (status, [(header::CONTENT_TYPE, "text/plain")], String::new()).into_response()
    }
}

impl<E> From<E> for APIError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
