mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Assembler, Config, Data, EmbeddingProviderConfig, GeneratorProviderConfig, Index, Providers,
	Qdrant, Resolver, Retrieval, Security, Service, Storage,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.data.records_csv.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "data.records_csv must be non-empty.".to_string(),
		});
	}
	if cfg.index.batch_size == 0 {
		return Err(Error::Validation {
			message: "index.batch_size must be greater than zero.".to_string(),
		});
	}
	if cfg.retrieval.top_k == 0 {
		return Err(Error::Validation {
			message: "retrieval.top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.resolver.needle_chars == 0 {
		return Err(Error::Validation {
			message: "resolver.needle_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.resolver.haystack_chars < cfg.resolver.needle_chars {
		return Err(Error::Validation {
			message: "resolver.haystack_chars must be at least resolver.needle_chars.".to_string(),
		});
	}
	// A per-field truncation shorter than the needle changes the first
	// needle_chars characters of the indexed text, so retrieved documents
	// would stop resolving against the untruncated record store.
	if cfg.index.truncate_chars < cfg.resolver.needle_chars {
		return Err(Error::Validation {
			message: "index.truncate_chars must be at least resolver.needle_chars.".to_string(),
		});
	}
	if !matches!(cfg.assembler.mode.as_str(), "direct" | "instruction") {
		return Err(Error::Validation {
			message: "assembler.mode must be one of direct or instruction.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions != cfg.storage.qdrant.vector_dim {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must match storage.qdrant.vector_dim."
				.to_string(),
		});
	}
	if !matches!(cfg.providers.generator.kind.as_str(), "chat" | "summarization") {
		return Err(Error::Validation {
			message: "providers.generator.kind must be one of chat or summarization.".to_string(),
		});
	}
	if cfg.providers.generator.max_output_tokens == 0 {
		return Err(Error::Validation {
			message: "providers.generator.max_output_tokens must be greater than zero.".to_string(),
		});
	}
	if cfg.providers.generator.min_output_tokens > cfg.providers.generator.max_output_tokens {
		return Err(Error::Validation {
			message: "providers.generator.min_output_tokens must not exceed max_output_tokens."
				.to_string(),
		});
	}
	if !cfg.providers.generator.temperature.is_finite()
		|| cfg.providers.generator.temperature < 0.0
	{
		return Err(Error::Validation {
			message: "providers.generator.temperature must be a finite number of zero or greater."
				.to_string(),
		});
	}

	for (label, key) in [
		("embedding", &cfg.providers.embedding.api_key),
		("generator", &cfg.providers.generator.api_key),
	] {
		if key.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Provider {label} api_key must be non-empty."),
			});
		}
	}

	Ok(())
}
