use actix_web::error::PayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("cannot read request body: {0}")]
    Io(#[from] PayloadError),

    #[error("cannot decode event: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("cannot encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

// Callers only ever see a bare 500; the cause goes to the log.
impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::new(self.status_code())
    }
}
