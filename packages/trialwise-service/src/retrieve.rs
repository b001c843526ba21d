use qdrant_client::qdrant::{Query, QueryPointsBuilder, ScoredPoint, value::Kind};

use trialwise_storage::qdrant::{
	NCT_NUMBER_PAYLOAD_KEY, QdrantStore, RECORD_ID_PAYLOAD_KEY, TEXT_PAYLOAD_KEY,
};

use crate::{AskService, BoxFuture, Error, Result, VectorIndex};

/// One retrieval candidate: the indexed document text plus whatever side
/// metadata survived the round trip through the index. `record_id` and
/// `nct_number` are absent on points written before those payload keys
/// existed.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RetrievedDocument {
	pub text: String,
	pub record_id: Option<u64>,
	pub nct_number: Option<String>,
	pub score: f32,
}

impl AskService {
	/// Embeds the query and returns the `retrieval.top_k` closest documents,
	/// best first. An empty result is a normal outcome, distinct from the
	/// provider and index errors, which are fatal for the request.
	pub(crate) async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedDocument>> {
		let vector = self.embed_query(query).await?;

		self.providers
			.index
			.search(&vector, self.cfg.retrieval.top_k)
			.await
			.map_err(|err| Error::Index { message: err.to_string() })
	}

	async fn embed_query(&self, query: &str) -> Result<Vec<f32>> {
		let embeddings = self
			.providers
			.embedding
			.embed(&self.cfg.providers.embedding, std::slice::from_ref(&query.to_string()))
			.await?;
		let vector = embeddings.into_iter().next().ok_or_else(|| Error::Provider {
			message: "Embedding provider returned no vectors.".to_string(),
		})?;
		if vector.len() != self.cfg.storage.qdrant.vector_dim as usize {
			return Err(Error::Provider {
				message: "Embedding vector dimension mismatch.".to_string(),
			});
		}
		Ok(vector)
	}
}

pub struct QdrantIndex {
	store: QdrantStore,
}
impl QdrantIndex {
	pub fn new(store: QdrantStore) -> Self {
		Self { store }
	}
}
impl VectorIndex for QdrantIndex {
	fn search<'a>(
		&'a self,
		vector: &'a [f32],
		limit: u32,
	) -> BoxFuture<'a, color_eyre::Result<Vec<RetrievedDocument>>> {
		Box::pin(async move {
			let request = QueryPointsBuilder::new(self.store.collection.clone())
				.query(Query::new_nearest(vector.to_vec()))
				.with_payload(true)
				.limit(limit as u64);
			let response = self.store.client.query(request).await?;

			Ok(response.result.into_iter().map(document_from_point).collect())
		})
	}
}

fn document_from_point(point: ScoredPoint) -> RetrievedDocument {
	let text = payload_str(&point, TEXT_PAYLOAD_KEY).unwrap_or_default();
	let record_id = payload_u64(&point, RECORD_ID_PAYLOAD_KEY);
	let nct_number = payload_str(&point, NCT_NUMBER_PAYLOAD_KEY);

	RetrievedDocument { text, record_id, nct_number, score: point.score }
}

fn payload_str(point: &ScoredPoint, key: &str) -> Option<String> {
	match point.payload.get(key).and_then(|value| value.kind.as_ref()) {
		Some(Kind::StringValue(value)) => Some(value.clone()),
		_ => None,
	}
}

fn payload_u64(point: &ScoredPoint, key: &str) -> Option<u64> {
	match point.payload.get(key).and_then(|value| value.kind.as_ref()) {
		Some(Kind::IntegerValue(value)) if *value >= 0 => Some(*value as u64),
		_ => None,
	}
}
