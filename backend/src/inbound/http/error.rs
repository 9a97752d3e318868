//! `ResponseError` for the domain [`Error`].
//!
//! Each [`ErrorCode`] has one status code. Internal failures are logged here
//! and reach the client as a bare "Internal server error" carrying only the
//! trace id; every other error is sent as built, details included.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

pub use crate::domain::ApiResult;

const INTERNAL_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The payload sent to the client for `failure`.
fn client_payload(failure: &Error) -> Error {
    if failure.code() != ErrorCode::InternalError {
        return failure.clone();
    }
    error!(
        message = failure.message(),
        trace_id = ?failure.trace_id(),
        "request failed with an internal error"
    );
    let payload = Error::internal(INTERNAL_MESSAGE);
    match failure.trace_id() {
        Some(id) => payload.with_trace_id(id.to_owned()),
        None => payload,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(client_payload(self))
    }
}

#[cfg(test)]
mod tests;
