use std::sync::Arc;

use trialwise_service::AskService;
use trialwise_storage::{qdrant::QdrantStore, records::RecordStore};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<AskService>,
}
impl AppState {
	pub fn new(config: trialwise_config::Config) -> color_eyre::Result<Self> {
		let records = RecordStore::load(&config.data)?;

		tracing::info!(record_count = records.len(), "Record store loaded.");

		let qdrant = QdrantStore::new(&config.storage.qdrant)?;
		let service = AskService::new(config, records, qdrant);

		Ok(Self { service: Arc::new(service) })
	}
}
