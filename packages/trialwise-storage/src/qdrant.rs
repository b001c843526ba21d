pub const TEXT_PAYLOAD_KEY: &str = "text";
pub const RECORD_ID_PAYLOAD_KEY: &str = "record_id";
pub const NCT_NUMBER_PAYLOAD_KEY: &str = "nct_number";

use crate::Result;

pub struct QdrantStore {
	pub client: qdrant_client::Qdrant,
	pub collection: String,
	pub vector_dim: u32,
}
impl QdrantStore {
	pub fn new(cfg: &trialwise_config::Qdrant) -> Result<Self> {
		let client = qdrant_client::Qdrant::from_url(&cfg.url).build()?;

		Ok(Self { client, collection: cfg.collection.clone(), vector_dim: cfg.vector_dim })
	}
}
