//! Wire types for the tool-call protocol.

use serde::{Deserialize, Serialize};

/// Outer envelope of a `process_message` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessMessageRequest {
    #[serde(default)]
    pub selected_servers: Vec<String>,
    #[serde(default)]
    pub client_details: Option<ClientDetails>,
}

/// Client payload carrying the JSON-encoded tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDetails {
    #[serde(default)]
    pub input: String,
}

/// A parsed tool invocation: a tool name plus tool-specific arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<serde_json::Value>,
}

/// Content block in a successful tool response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Successful tool response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl CallToolResult {
    /// Wrap a serializable result as a single text content block.
    pub fn text(value: &impl Serialize) -> Result<Self, serde_json::Error> {
        Ok(Self {
            content: vec![ToolContent::text(serde_json::to_string(value)?)],
            is_error: false,
        })
    }
}

/// Failure envelope carried alongside a 4xx/5xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            is_error: true,
        }
    }
}
