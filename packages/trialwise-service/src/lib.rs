pub mod ask;
pub mod retrieve;

mod error;

pub use ask::{AskRequest, AskResponse};
pub use error::{Error, Result};
pub use retrieve::{QdrantIndex, RetrievedDocument};

use std::{future::Future, pin::Pin, sync::Arc};

use trialwise_config::{Config, EmbeddingProviderConfig, GeneratorProviderConfig};
use trialwise_providers::{embedding, generator};
use trialwise_storage::{qdrant::QdrantStore, records::RecordStore};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, color_eyre::Result<Vec<Vec<f32>>>>;
}

pub trait GeneratorProvider
where
	Self: Send + Sync,
{
	fn generate<'a>(
		&'a self,
		cfg: &'a GeneratorProviderConfig,
		input: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<String>>;
}

/// The retrieval side of the vector index. Lives behind a trait so the
/// orchestrator can be exercised against a canned index in tests; the
/// default implementation is the qdrant query in `retrieve`.
pub trait VectorIndex
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		vector: &'a [f32],
		limit: u32,
	) -> BoxFuture<'a, color_eyre::Result<Vec<RetrievedDocument>>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
	pub generator: Arc<dyn GeneratorProvider>,
	pub index: Arc<dyn VectorIndex>,
}

pub struct AskService {
	pub cfg: Config,
	pub records: RecordStore,
	pub providers: Providers,
}

struct DefaultProviders;

impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, color_eyre::Result<Vec<Vec<f32>>>> {
		Box::pin(embedding::embed(cfg, texts))
	}
}

impl GeneratorProvider for DefaultProviders {
	fn generate<'a>(
		&'a self,
		cfg: &'a GeneratorProviderConfig,
		input: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<String>> {
		Box::pin(generator::generate(cfg, input))
	}
}

impl Providers {
	pub fn new(
		embedding: Arc<dyn EmbeddingProvider>,
		generator: Arc<dyn GeneratorProvider>,
		index: Arc<dyn VectorIndex>,
	) -> Self {
		Self { embedding, generator, index }
	}

	pub fn with_qdrant(qdrant: QdrantStore) -> Self {
		let provider = Arc::new(DefaultProviders);

		Self {
			embedding: provider.clone(),
			generator: provider,
			index: Arc::new(QdrantIndex::new(qdrant)),
		}
	}
}

impl AskService {
	pub fn new(cfg: Config, records: RecordStore, qdrant: QdrantStore) -> Self {
		let providers = Providers::with_qdrant(qdrant);

		Self { cfg, records, providers }
	}

	pub fn with_providers(cfg: Config, records: RecordStore, providers: Providers) -> Self {
		Self { cfg, records, providers }
	}
}
