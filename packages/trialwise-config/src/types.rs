use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub data: Data,
	pub index: Index,
	pub retrieval: Retrieval,
	pub resolver: Resolver,
	pub assembler: Assembler,
	pub storage: Storage,
	pub providers: Providers,
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Data {
	pub records_csv: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Index {
	/// Per-field character cap applied when the indexed document text is built.
	/// Must stay at or above `resolver.needle_chars`; see `validate`.
	pub truncate_chars: usize,
	pub batch_size: u32,
}

#[derive(Debug, Deserialize)]
pub struct Retrieval {
	pub top_k: u32,
}

#[derive(Debug, Deserialize)]
pub struct Resolver {
	/// Characters of retrieved document text used as the match needle.
	pub needle_chars: usize,
	/// Characters of each record's candidate text searched for the needle.
	pub haystack_chars: usize,
}

#[derive(Debug, Deserialize)]
pub struct Assembler {
	/// One of "direct" or "instruction".
	pub mode: String,
	/// Instruction mode only: prepend the user question to the prompt.
	pub include_query: bool,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub qdrant: Qdrant,
}

#[derive(Debug, Deserialize)]
pub struct Qdrant {
	pub url: String,
	pub collection: String,
	pub vector_dim: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
	pub generator: GeneratorProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratorProviderConfig {
	pub provider_id: String,
	/// Wire convention: "chat" (chat completions) or "summarization"
	/// (inputs/parameters summarization endpoint).
	pub kind: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	pub max_output_tokens: u32,
	pub min_output_tokens: u32,
	pub do_sample: bool,
	pub timeout_ms: u64,
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
}
