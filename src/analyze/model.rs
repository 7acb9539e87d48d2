use poem_openapi::Object;
use serde_json::Value;

#[derive(Debug, Object, Clone, PartialEq)]
pub struct AnalyzeRequest {
    /// Records to summarise, passed to the model as-is
    /// (e.g. `{"country": "越南", "tags": ["味道超道地"]}`)
    #[oai(default)]
    pub records: Vec<Value>,
}

#[derive(Debug, Object, Clone, Eq, PartialEq)]
pub struct Analysis {
    /// Free-text summary written by the model
    pub analysis: String,
}
