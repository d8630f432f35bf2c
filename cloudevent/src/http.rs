use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{read_object, string_field, string_map_field};

/// An HTTP request carried as the payload of an event.
#[derive(Serialize, PartialEq, Debug, Clone, Default)]
pub struct HttpEvent {
    pub path: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub host: String,
    pub query: HashMap<String, String>,
    pub params: HashMap<String, String>,
    pub body: String,
}

// Same key matching as the envelope: any ASCII case, last key wins, `null`
// means empty. Map values that are `null` become `""`.
impl<'de> Deserialize<'de> for HttpEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut e = HttpEvent::default();

        for (key, value) in read_object(deserializer)? {
            let result = match key.to_ascii_lowercase().as_str() {
                "path" => string_field(value).map(|v| e.path = v),
                "method" => string_field(value).map(|v| e.method = v),
                "headers" => string_map_field(value).map(|v| e.headers = v),
                "host" => string_field(value).map(|v| e.host = v),
                "query" => string_map_field(value).map(|v| e.query = v),
                "params" => string_map_field(value).map(|v| e.params = v),
                "body" => string_field(value).map(|v| e.body = v),
                _ => Ok(()),
            };
            result.map_err(de::Error::custom)?;
        }

        Ok(e)
    }
}

/// Response document a function hands back to the event source.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct FunctionResponse {
    pub body: String,

    #[serde(rename = "statusCode")]
    pub status_code: u16,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

impl FunctionResponse {
    pub fn ok(body: impl Into<String>) -> FunctionResponse {
        FunctionResponse {
            body: body.into(),
            status_code: 200,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
