use crate::config::Config;
use gemini::GeminiClient;
use tracing::warn;

mod gemini;
mod handler;
mod model;

pub fn analyze_api(config: &Config) -> handler::Analyze {
    let client = match &config.api_key {
        Some(api_key) => Some(GeminiClient::new(
            api_key.clone(),
            config.gemini_model.clone(),
        )),
        None => {
            warn!("API_KEY not set, analysis requests will fail");
            None
        }
    };
    handler::Analyze::new(client)
}
