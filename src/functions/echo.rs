use cloudevent::http::{FunctionResponse, HttpEvent};
use cloudevent::{Event, Reader};

use crate::{EventResponse, HandlerError};

/// Replies with the body of the HTTP event as an indented response document.
pub fn echo(event: Event) -> Result<EventResponse, HandlerError> {
    tracing::info!(event_id = %event.event_id, "Handling HTTP event {} ...", event.event_id);

    let http_event: HttpEvent = event.read_data().map_err(HandlerError::Decode)?;

    Ok(EventResponse::Indented(FunctionResponse::ok(http_event.body)))
}
