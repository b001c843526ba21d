use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;

use trialwise_config::GeneratorProviderConfig;

/// Produces the answer text for an assembled context. Two wire conventions
/// hide behind this one call, selected by `cfg.kind`: a chat-completions
/// endpoint and an inputs/parameters summarization endpoint. Callers never
/// see which one ran. Failures are request-fatal; there is no retry here.
pub async fn generate(cfg: &GeneratorProviderConfig, input: &str) -> Result<String> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = match cfg.kind.as_str() {
		"chat" => serde_json::json!({
			"model": cfg.model,
			"temperature": cfg.temperature,
			"max_tokens": cfg.max_output_tokens,
			"messages": [{ "role": "user", "content": input }],
		}),
		_ => serde_json::json!({
			"inputs": input,
			"parameters": {
				"max_length": cfg.max_output_tokens,
				"min_length": cfg.min_output_tokens,
				"do_sample": cfg.do_sample,
			},
		}),
	};
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	match cfg.kind.as_str() {
		"chat" => parse_chat_response(json),
		_ => parse_summarization_response(json),
	}
}

fn parse_chat_response(json: Value) -> Result<String> {
	let content = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
		.ok_or_else(|| eyre::eyre!("Chat response is missing message content."))?;
	let text = content.trim();

	if text.is_empty() {
		return Err(eyre::eyre!("Chat response content is empty."));
	}

	Ok(text.to_string())
}

fn parse_summarization_response(json: Value) -> Result<String> {
	// Summarization endpoints answer either as a one-element array of
	// summaries or as a bare object; text sits under summary_text or
	// generated_text depending on the task the model was served with.
	let item = json.get(0).unwrap_or(&json);
	let text = item
		.get("summary_text")
		.or_else(|| item.get("generated_text"))
		.and_then(|v| v.as_str())
		.ok_or_else(|| eyre::eyre!("Summarization response is missing summary text."))?;
	let text = text.trim();

	if text.is_empty() {
		return Err(eyre::eyre!("Summarization response text is empty."));
	}

	Ok(text.to_string())
}
