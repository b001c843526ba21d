//! Shared fixtures for crate tests. Provider endpoints in `test_config`
//! point at an unroutable local port, so any test that accidentally reaches
//! a real provider fails fast instead of leaving the process.

use serde_json::Map;

use trialwise_config::{
	Assembler, Config, Data, EmbeddingProviderConfig, GeneratorProviderConfig, Index, Providers,
	Qdrant, Resolver, Retrieval, Security, Service, Storage,
};
use trialwise_domain::TrialRecord;

pub const TEST_VECTOR_DIM: u32 = 8;

pub fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		data: Data { records_csv: "data/clinical_trials.csv".into() },
		index: Index { truncate_chars: 300, batch_size: 16 },
		retrieval: Retrieval { top_k: 4 },
		resolver: Resolver { needle_chars: 100, haystack_chars: 200 },
		assembler: Assembler { mode: "direct".to_string(), include_query: false },
		storage: Storage {
			qdrant: Qdrant {
				url: "http://127.0.0.1:6334".to_string(),
				collection: "clinical_trials_test".to_string(),
				vector_dim: TEST_VECTOR_DIM,
			},
		},
		providers: Providers {
			embedding: test_embedding_provider(),
			generator: test_generator_provider(),
		},
		security: Security { bind_localhost_only: true },
	}
}

pub fn test_embedding_provider() -> EmbeddingProviderConfig {
	EmbeddingProviderConfig {
		provider_id: "test".to_string(),
		api_base: "http://127.0.0.1:1".to_string(),
		api_key: "test-key".to_string(),
		path: "/".to_string(),
		model: "test".to_string(),
		dimensions: TEST_VECTOR_DIM,
		timeout_ms: 1_000,
		default_headers: Map::new(),
	}
}

pub fn test_generator_provider() -> GeneratorProviderConfig {
	GeneratorProviderConfig {
		provider_id: "test".to_string(),
		kind: "chat".to_string(),
		api_base: "http://127.0.0.1:1".to_string(),
		api_key: "test-key".to_string(),
		path: "/".to_string(),
		model: "test".to_string(),
		temperature: 0.2,
		max_output_tokens: 180,
		min_output_tokens: 20,
		do_sample: false,
		timeout_ms: 1_000,
		default_headers: Map::new(),
	}
}

pub fn diabetes_record() -> TrialRecord {
	TrialRecord {
		study_title: "Diabetes Prevention Study".to_string(),
		nct_number: "NCT00000001".to_string(),
		conditions: "Type 2 Diabetes".to_string(),
		interventions: "Behavioral: Diet and exercise".to_string(),
		brief_summary: "A study of diet and exercise.".to_string(),
		study_design: "Randomized, parallel assignment".to_string(),
	}
}

pub fn sample_records() -> Vec<TrialRecord> {
	vec![
		TrialRecord {
			study_title: "Hypertension Medication Comparison".to_string(),
			nct_number: "NCT00000002".to_string(),
			conditions: "Hypertension".to_string(),
			interventions: "Drug: Lisinopril; Drug: Amlodipine".to_string(),
			brief_summary: "Comparing two common blood pressure medications.".to_string(),
			study_design: "Randomized, crossover assignment".to_string(),
		},
		diabetes_record(),
		TrialRecord {
			study_title: "Asthma Inhaler Technique Education".to_string(),
			nct_number: String::new(),
			conditions: "Asthma".to_string(),
			interventions: "Other: Education program".to_string(),
			brief_summary: "Whether coaching improves inhaler use.".to_string(),
			study_design: "Single group assignment".to_string(),
		},
	]
}
