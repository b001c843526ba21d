use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use trialwise_config::Config;

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml_with<F>(edit: F) -> String
where
	F: FnOnce(&mut toml::Table),
{
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let root = value.as_table_mut().expect("Template config must be a table.");

	edit(root);

	toml::to_string(&value).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("trialwise_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_edited<F>(edit: F) -> trialwise_config::Result<Config>
where
	F: FnOnce(&mut toml::Table),
{
	let path = write_temp_config(sample_toml_with(edit));
	let result = trialwise_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

fn section_mut<'a>(root: &'a mut toml::Table, name: &str) -> &'a mut toml::Table {
	root.get_mut(name)
		.and_then(Value::as_table_mut)
		.unwrap_or_else(|| panic!("Template config must include [{name}]."))
}

#[test]
fn template_config_is_valid() {
	let cfg = load_edited(|_| {}).expect("Template config must validate.");

	assert_eq!(cfg.retrieval.top_k, 4);
	assert_eq!(cfg.resolver.needle_chars, 100);
	assert_eq!(cfg.resolver.haystack_chars, 200);
	assert_eq!(cfg.index.truncate_chars, 300);
}

#[test]
fn top_k_must_be_positive() {
	let err = load_edited(|root| {
		section_mut(root, "retrieval").insert("top_k".to_string(), Value::Integer(0));
	})
	.expect_err("Expected top_k validation error.");

	assert!(
		err.to_string().contains("retrieval.top_k must be greater than zero."),
		"Unexpected error: {err}"
	);
}

#[test]
fn haystack_must_cover_needle() {
	let err = load_edited(|root| {
		let resolver = section_mut(root, "resolver");

		resolver.insert("needle_chars".to_string(), Value::Integer(100));
		resolver.insert("haystack_chars".to_string(), Value::Integer(50));
	})
	.expect_err("Expected resolver window validation error.");

	assert!(
		err.to_string().contains("resolver.haystack_chars must be at least resolver.needle_chars."),
		"Unexpected error: {err}"
	);
}

#[test]
fn index_truncation_must_cover_needle() {
	let err = load_edited(|root| {
		section_mut(root, "index").insert("truncate_chars".to_string(), Value::Integer(50));
	})
	.expect_err("Expected truncation consistency error.");

	assert!(
		err.to_string().contains("index.truncate_chars must be at least resolver.needle_chars."),
		"Unexpected error: {err}"
	);
}

#[test]
fn embedding_dimensions_must_match_vector_dim() {
	let err = load_edited(|root| {
		let providers = section_mut(root, "providers");
		let embedding = providers
			.get_mut("embedding")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [providers.embedding].");

		embedding.insert("dimensions".to_string(), Value::Integer(768));
	})
	.expect_err("Expected dimension mismatch error.");

	assert!(
		err.to_string()
			.contains("providers.embedding.dimensions must match storage.qdrant.vector_dim."),
		"Unexpected error: {err}"
	);
}

#[test]
fn assembler_mode_must_be_known() {
	let err = load_edited(|root| {
		section_mut(root, "assembler")
			.insert("mode".to_string(), Value::String("verbose".to_string()));
	})
	.expect_err("Expected assembler mode error.");

	assert!(
		err.to_string().contains("assembler.mode must be one of direct or instruction."),
		"Unexpected error: {err}"
	);
}

#[test]
fn generator_kind_must_be_known() {
	let err = load_edited(|root| {
		let providers = section_mut(root, "providers");
		let generator = providers
			.get_mut("generator")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [providers.generator].");

		generator.insert("kind".to_string(), Value::String("local".to_string()));
	})
	.expect_err("Expected generator kind error.");

	assert!(
		err.to_string().contains("providers.generator.kind must be one of chat or summarization."),
		"Unexpected error: {err}"
	);
}

#[test]
fn generator_length_bounds_are_ordered() {
	let err = load_edited(|root| {
		let providers = section_mut(root, "providers");
		let generator = providers
			.get_mut("generator")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [providers.generator].");

		generator.insert("max_output_tokens".to_string(), Value::Integer(10));
		generator.insert("min_output_tokens".to_string(), Value::Integer(20));
	})
	.expect_err("Expected output length validation error.");

	assert!(
		err.to_string()
			.contains("providers.generator.min_output_tokens must not exceed max_output_tokens."),
		"Unexpected error: {err}"
	);
}

#[test]
fn provider_api_keys_must_be_non_empty() {
	let err = load_edited(|root| {
		let providers = section_mut(root, "providers");
		let embedding = providers
			.get_mut("embedding")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [providers.embedding].");

		embedding.insert("api_key".to_string(), Value::String("  ".to_string()));
	})
	.expect_err("Expected api_key validation error.");

	assert!(
		err.to_string().contains("Provider embedding api_key must be non-empty."),
		"Unexpected error: {err}"
	);
}
