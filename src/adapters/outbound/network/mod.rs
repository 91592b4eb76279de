/// Network adapters for the Code Insight REST API
mod code_insight_client;
mod wire;

pub use code_insight_client::{
    CodeInsightClient, CodeInsightSettings, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECONDS,
};
