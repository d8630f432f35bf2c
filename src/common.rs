use cloudevent::http::FunctionResponse;

/// What a function wants written back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum EventResponse {
    /// 200 with no body.
    Empty,
    /// JSON indented by a single space per level.
    Indented(FunctionResponse),
    Compact(FunctionResponse),
}
