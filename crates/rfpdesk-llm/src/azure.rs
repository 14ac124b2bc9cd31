//! Azure OpenAI Provider Implementation
//!
//! Talks to the chat completions endpoint of an Azure OpenAI deployment.
//!
//! # Features
//!
//! - Structured output: a `ResponseConstraint::Schema` becomes a strict
//!   `json_schema` response format
//! - Tool calling: a `ResponseConstraint::Tools` becomes the `tools` array
//!   with `tool_choice: "auto"`
//! - Blocking HTTP with a transport-level timeout
//! - Optional retry with exponential backoff for transient failures
//!   (off by default: one attempt per call)
//!
//! # Examples
//!
//! ```no_run
//! use rfpdesk_llm::{AzureOpenAiConfig, AzureOpenAiProvider};
//!
//! let config = AzureOpenAiConfig::new(
//!     "https://my-resource.openai.azure.com",
//!     "gpt-4",
//!     std::env::var("AZURE_OPENAI_API_KEY").unwrap_or_default(),
//! );
//! let provider = AzureOpenAiProvider::new(config).unwrap();
//! ```

use crate::LlmError;
use rfpdesk_domain::traits::LlmProvider as LlmProviderTrait;
use rfpdesk_domain::{ChatRequest, ModelReply, ResponseConstraint, ToolInvocation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Default API version sent with every request
pub const DEFAULT_API_VERSION: &str = "2024-02-15-preview";

/// Default timeout for LLM requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of attempts per request (no retry)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1;

/// Connection settings for one Azure OpenAI deployment
#[derive(Debug, Clone)]
pub struct AzureOpenAiConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,

    /// Deployment name (selects the model)
    pub deployment: String,

    /// API key sent in the `api-key` header
    pub api_key: String,

    /// API version query parameter
    pub api_version: String,

    /// Transport timeout in seconds
    pub timeout_secs: u64,

    /// Attempts per request; values above 1 retry transient failures
    pub max_attempts: u32,
}

impl AzureOpenAiConfig {
    /// Settings with default API version, timeout and attempts
    pub fn new(
        endpoint: impl Into<String>,
        deployment: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            deployment: deployment.into(),
            api_key: api_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the API version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Override the transport timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the maximum number of attempts per request
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }
}

/// Azure OpenAI chat completions provider
pub struct AzureOpenAiProvider {
    config: AzureOpenAiConfig,
    client: reqwest::blocking::Client,
}

/// Request body for the chat completions API
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat {
    name: String,
    schema: Value,
    strict: bool,
}

#[derive(Debug, Serialize)]
struct WireTool {
    #[serde(rename = "type")]
    kind: &'static str,
    function: WireFunction,
}

#[derive(Debug, Serialize)]
struct WireFunction {
    name: String,
    description: String,
    parameters: Value,
}

/// Response from the chat completions API
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<WireToolCall>>,
}

#[derive(Debug, Deserialize)]
struct WireToolCall {
    #[serde(default)]
    id: Option<String>,
    function: WireFunctionCall,
}

#[derive(Debug, Deserialize)]
struct WireFunctionCall {
    name: String,
    #[serde(default)]
    arguments: String,
}

impl AzureOpenAiProvider {
    /// Create a provider for the given deployment
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Auth` when no API key is configured and
    /// `LlmError::Other` if the HTTP client cannot be built.
    pub fn new(config: AzureOpenAiConfig) -> Result<Self, LlmError> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::Auth("no API key configured".to_string()));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Name of the deployment requests are sent to
    pub fn deployment(&self) -> &str {
        &self.config.deployment
    }

    fn url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            self.config.api_version
        )
    }

    /// Send one chat completion request
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the request schema or tool parameters are not valid JSON
    /// - the key is rejected (401/403) or the deployment is unknown (404)
    /// - the service is rate limiting (429) or unreachable
    /// - the response body does not have the expected shape
    pub fn send(&self, request: &ChatRequest) -> Result<ModelReply, LlmError> {
        let url = self.url();
        let body = build_request(request)?;

        debug!(
            "Sending {} messages to deployment '{}' (tools: {})",
            body.messages.len(),
            self.config.deployment,
            body.tools.len()
        );

        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.send_once(&url, &body) {
                Ok(reply) => return Ok(reply),
                Err(e) if e.is_transient() && attempts < self.config.max_attempts => {
                    let delay = retry_delay(attempts);
                    warn!("Model call failed ({}), retrying in {:?}", e, delay);
                    std::thread::sleep(delay);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn send_once(&self, url: &str, body: &CompletionRequest<'_>) -> Result<ModelReply, LlmError> {
        let response = self
            .client
            .post(url)
            .header("api-key", &self.config.api_key)
            .json(body)
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(status, error_text, &self.config.deployment));
        }

        let text = response
            .text()
            .map_err(|e| LlmError::Communication(format!("Failed to read response: {}", e)))?;
        parse_response(&text)
    }
}

impl LlmProviderTrait for AzureOpenAiProvider {
    type Error = LlmError;

    fn complete(&self, request: &ChatRequest) -> Result<ModelReply, Self::Error> {
        self.send(request)
    }
}

fn build_request(request: &ChatRequest) -> Result<CompletionRequest<'_>, LlmError> {
    let messages = request
        .messages
        .iter()
        .map(|m| WireMessage {
            role: m.role.as_str(),
            content: &m.content,
        })
        .collect();

    let mut body = CompletionRequest {
        messages,
        response_format: None,
        tools: Vec::new(),
        tool_choice: None,
    };

    match &request.constraint {
        None => {}
        Some(ResponseConstraint::Schema(spec)) => {
            let schema = parse_json(&spec.schema, &spec.name)?;
            body.response_format = Some(ResponseFormat {
                kind: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: spec.name.clone(),
                    schema,
                    strict: true,
                },
            });
        }
        Some(ResponseConstraint::Tools(tools)) => {
            for tool in tools {
                body.tools.push(WireTool {
                    kind: "function",
                    function: WireFunction {
                        name: tool.name.clone(),
                        description: tool.description.clone(),
                        parameters: parse_json(&tool.parameters, &tool.name)?,
                    },
                });
            }
            if !body.tools.is_empty() {
                body.tool_choice = Some("auto");
            }
        }
    }

    Ok(body)
}

fn status_error(status: reqwest::StatusCode, body: String, deployment: &str) -> LlmError {
    use reqwest::StatusCode;

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        LlmError::Auth(format!("HTTP {}: {}", status, body))
    } else if status == StatusCode::NOT_FOUND {
        LlmError::ModelNotAvailable(deployment.to_string())
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        LlmError::RateLimitExceeded
    } else {
        LlmError::Communication(format!("HTTP {}: {}", status, body))
    }
}

fn parse_json(text: &str, owner: &str) -> Result<Value, LlmError> {
    serde_json::from_str(text)
        .map_err(|e| LlmError::InvalidRequest(format!("Schema for '{}' is not JSON: {}", owner, e)))
}

fn parse_response(text: &str) -> Result<ModelReply, LlmError> {
    let response: CompletionResponse = serde_json::from_str(text)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("Response has no choices".to_string()))?;

    let tool_calls = choice.message.tool_calls.unwrap_or_default();
    if !tool_calls.is_empty() {
        let invocations = tool_calls
            .into_iter()
            .map(|call| ToolInvocation {
                call_id: call.id,
                name: call.function.name,
                arguments: call.function.arguments,
            })
            .collect();
        return Ok(ModelReply::ToolCalls(invocations));
    }

    Ok(ModelReply::from_content(choice.message.content))
}

/// Longest wait between two attempts
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Exponential backoff after the `attempt`-th failure: 1s, 2s, 4s, ... capped
/// at [`MAX_RETRY_DELAY`]
fn retry_delay(attempt: u32) -> Duration {
    let secs = 2u64.saturating_pow(attempt.saturating_sub(1));
    Duration::from_secs(secs).min(MAX_RETRY_DELAY)
}
