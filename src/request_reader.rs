use actix_web::error::PayloadError;
use actix_web::web::{Bytes, BytesMut};
use cloudevent::Event;
use futures::{Stream, TryStreamExt};

use crate::error::HandlerError;

pub async fn read_body<S>(payload: S) -> Result<BytesMut, HandlerError>
where
    S: Stream<Item = Result<Bytes, PayloadError>>,
{
    payload
        .map_err(HandlerError::from)
        .try_fold(BytesMut::new(), |mut body, chunk| async move {
            body.extend_from_slice(&chunk);
            Ok::<_, HandlerError>(body)
        })
        .await
}

pub fn read_cloud_event(body: &[u8]) -> Result<Event, HandlerError> {
    serde_json::from_slice::<Event>(body).map_err(HandlerError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[actix_web::test]
    async fn test_read_body_joins_chunks() {
        let chunks = stream::iter(vec![
            Ok(Bytes::from_static(b"{\"eventID\"")),
            Ok(Bytes::from_static(b":\"1\"}")),
        ]);

        let body = read_body(chunks).await.unwrap();

        assert_eq!(&body[..], b"{\"eventID\":\"1\"}");
    }

    #[actix_web::test]
    async fn test_read_body_fails_on_broken_stream() {
        let chunks = stream::iter(vec![
            Ok(Bytes::from_static(b"{")),
            Err(PayloadError::Incomplete(None)),
        ]);

        let err = read_body(chunks).await.unwrap_err();

        assert!(matches!(err, HandlerError::Io(_)));
    }

    #[test]
    fn test_read_cloud_event() {
        let event = read_cloud_event(br#"{"eventID":"1","data":{"body":"hi"}}"#).unwrap();

        assert_eq!(event.event_id, "1");
        assert_eq!(event.data["body"], "hi");
    }

    #[test]
    fn test_read_null_cloud_event() {
        let event = read_cloud_event(b"null").unwrap();

        assert_eq!(event, Event::default());
    }

    #[test]
    fn test_read_cloud_event_rejects_empty_body() {
        let err = read_cloud_event(b"").unwrap_err();

        assert!(matches!(err, HandlerError::Decode(_)));
    }
}
