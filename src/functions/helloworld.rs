use cloudevent::{Event, Reader};
use std::io::{self, Write};

use crate::{EventResponse, HandlerError};

const MESSAGE_KEY: &str = "message";

/// Prints the `message` entry of the event payload to stdout.
pub fn helloworld(event: Event) -> Result<EventResponse, HandlerError> {
    tracing::info!(
        event_id = %event.event_id,
        event_type = %event.event_type,
        event_time = ?event.time(),
        "Handling event {} ({}) ...",
        event.event_id,
        event.event_type
    );

    let message = read_message(&event)?;
    if let Err(err) = print_message(&mut io::stdout().lock(), &message) {
        tracing::warn!(error = %err, "cannot print message");
    }

    Ok(EventResponse::Empty)
}

fn read_message(event: &Event) -> Result<String, HandlerError> {
    let mut data = event.read_string_map().map_err(HandlerError::Decode)?;
    Ok(data.remove(MESSAGE_KEY).unwrap_or_default())
}

fn print_message<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudevent::EventBuilder;
    use serde_json::json;

    #[test]
    fn test_read_message() {
        let event = EventBuilder::default()
            .event_id("1")
            .data(json!({ "message": "hi", "other": "ignored" }))
            .build()
            .unwrap();

        assert_eq!(read_message(&event).unwrap(), "hi");
    }

    #[test]
    fn test_read_missing_message() {
        let event = EventBuilder::default().data(json!({})).build().unwrap();

        assert_eq!(read_message(&event).unwrap(), "");
    }

    #[test]
    fn test_read_message_next_to_null_values() {
        let event = EventBuilder::default()
            .data(json!({ "message": "hi", "to": null }))
            .build()
            .unwrap();

        assert_eq!(read_message(&event).unwrap(), "hi");
    }

    #[test]
    fn test_print_message_writes_a_line() {
        let event = EventBuilder::default()
            .event_id("1")
            .data(json!({ "message": "hi" }))
            .build()
            .unwrap();
        let mut out = Vec::new();

        print_message(&mut out, &read_message(&event).unwrap()).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "hi\n");
    }

    #[test]
    fn test_print_empty_message() {
        let mut out = Vec::new();

        print_message(&mut out, "").unwrap();

        assert_eq!(out, b"\n");
    }

    #[test]
    fn test_helloworld_has_no_body() {
        let event = EventBuilder::default()
            .data(json!({ "message": "hi" }))
            .build()
            .unwrap();

        assert_eq!(helloworld(event).unwrap(), EventResponse::Empty);
    }

    #[test]
    fn test_helloworld_rejects_string_data() {
        let event = EventBuilder::default().data(json!("hi")).build().unwrap();

        assert!(matches!(helloworld(event), Err(HandlerError::Decode(_))));
    }
}
