pub mod http;

use chrono::{DateTime, FixedOffset};
use derive_builder::Builder;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Legacy (0.1) CloudEvent envelope as delivered by the HTTP event source.
///
/// Every metadata attribute is optional on the wire and defaults to the
/// empty string. `data` is kept as an untyped JSON value until a function
/// asks for a concrete shape through [`Reader::read_data`].
#[derive(Serialize, PartialEq, Debug, Clone, Default, Builder)]
#[builder(setter(into), default)]
pub struct Event {
    #[serde(rename = "eventType")]
    pub event_type: String,

    #[serde(rename = "eventID")]
    pub event_id: String,

    #[serde(rename = "cloudEventsVersion")]
    pub cloud_events_version: String,

    #[serde(rename = "contentType")]
    pub content_type: String,

    pub source: String,

    #[serde(rename = "eventTime")]
    pub event_time: String,

    pub data: Value,
}

// Keys match their field regardless of ASCII case and the last one in the
// document wins, so `cloudEventsVersion` and `cloudEventsversion` may both
// appear. A `null` document is an empty envelope.
impl<'de> Deserialize<'de> for Event {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut event = Event::default();

        for (key, value) in read_object(deserializer)? {
            let field = match key.to_ascii_lowercase().as_str() {
                "eventtype" => &mut event.event_type,
                "eventid" => &mut event.event_id,
                "cloudeventsversion" => &mut event.cloud_events_version,
                "contenttype" => &mut event.content_type,
                "source" => &mut event.source,
                "eventtime" => &mut event.event_time,
                "data" => {
                    event.data = value;
                    continue;
                }
                _ => continue,
            };
            *field = string_field(value).map_err(de::Error::custom)?;
        }

        Ok(event)
    }
}

impl Event {
    /// `eventTime` as an RFC 3339 timestamp, if it is one.
    pub fn time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.event_time).ok()
    }
}

pub trait Reader {
    /// Re-types the opaque payload into `T`.
    ///
    /// The payload is serialized back to JSON and decoded again, so fields
    /// `T` does not know are dropped and fields the payload lacks take their
    /// default. A missing or `null` payload decodes as an empty object.
    fn read_data<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error>;

    /// Re-types the payload into a flat string map; `null` values become `""`.
    fn read_string_map(&self) -> Result<HashMap<String, String>, serde_json::Error> {
        let map: HashMap<String, Option<String>> = self.read_data()?;
        Ok(flatten_nulls(map))
    }
}

impl Reader for Event {
    fn read_data<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let raw = match &self.data {
            Value::Null => b"{}".to_vec(),
            data => serde_json::to_vec(data)?,
        };
        serde_json::from_slice(&raw)
    }
}

/// A JSON object in document order, or an empty one for `null`.
pub(crate) fn read_object<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Map<String, Value>, D::Error> {
    Option::<Map<String, Value>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub(crate) fn string_field(value: Value) -> Result<String, serde_json::Error> {
    Option::<String>::deserialize(value).map(Option::unwrap_or_default)
}

pub(crate) fn string_map_field(value: Value) -> Result<HashMap<String, String>, serde_json::Error> {
    Option::<HashMap<String, Option<String>>>::deserialize(value)
        .map(|map| flatten_nulls(map.unwrap_or_default()))
}

fn flatten_nulls(map: HashMap<String, Option<String>>) -> HashMap<String, String> {
    map.into_iter()
        .map(|(k, v)| (k, v.unwrap_or_default()))
        .collect()
}
