use super::gemini::GeminiClient;
use super::model::{AnalyzeRequest, Analysis};
use crate::utils::{ApiTags, JsonError};
use poem_openapi::{payload::Json, OpenApi};
use serde_json::Value;
use tracing::error;

pub struct Analyze {
    client: Option<GeminiClient>,
}

pub fn build_prompt(records: &[Value]) -> anyhow::Result<String> {
    let records = serde_json::to_string(records)?;
    Ok(format!(
        "分析國際週美食紀錄：{}。請用繁體中文回報受歡迎國家、學生看重因素及明年建議。",
        records
    ))
}

#[OpenApi(tag = "ApiTags::Analysis")]
impl Analyze {
    pub fn new(client: Option<GeminiClient>) -> Self {
        Self { client }
    }

    // ask the model for a summary of the given check-ins
    #[oai(path = "/analyze", method = "post", operation_id = "analyze::summarise")]
    async fn summarise(&self, payload: Json<AnalyzeRequest>) -> Result<Json<Analysis>, JsonError> {
        let client = match &self.client {
            Some(client) => client,
            None => return Err(JsonError::internal_server_error("API_KEY not set")),
        };

        let prompt = build_prompt(&payload.records)?;
        let analysis = match client.generate(&prompt).await {
            Ok(analysis) => analysis,
            Err(e) => {
                error!(records = payload.records.len(), error = %e, "Analysis failed");
                return Err(JsonError::internal_server_error(e));
            }
        };

        Ok(Json(Analysis { analysis }))
    }
}
