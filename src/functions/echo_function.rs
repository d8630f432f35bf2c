use cloudevent::http::{FunctionResponse, HttpEvent};
use cloudevent::{Event, Reader};

use crate::{EventResponse, HandlerError};

const COMPUTE_TYPE_HEADER: &str = "Compute-Type";

/// Like [`echo`](super::echo), but compact and tagged with a `Compute-Type` header.
pub fn echo_function(event: Event) -> Result<EventResponse, HandlerError> {
    tracing::info!(event_id = %event.event_id, "Handling HTTP event {}", event.event_id);

    let http_event: HttpEvent = event.read_data().map_err(HandlerError::Decode)?;
    let response = FunctionResponse::ok(http_event.body).with_header(COMPUTE_TYPE_HEADER, "function");

    Ok(EventResponse::Compact(response))
}
