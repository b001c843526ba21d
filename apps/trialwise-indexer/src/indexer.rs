use std::collections::HashMap;

use color_eyre::Result;
use qdrant_client::{
	client::Payload,
	qdrant::{
		CreateCollectionBuilder, Distance, PointStruct, UpsertPointsBuilder, Value,
		VectorParamsBuilder,
	},
};

use trialwise_domain::TrialRecord;
use trialwise_providers::embedding;
use trialwise_storage::{
	qdrant::{NCT_NUMBER_PAYLOAD_KEY, QdrantStore, RECORD_ID_PAYLOAD_KEY, TEXT_PAYLOAD_KEY},
	records::RecordStore,
};

pub struct IndexerState {
	pub records: RecordStore,
	pub qdrant: QdrantStore,
	pub embedding: trialwise_config::EmbeddingProviderConfig,
	pub truncate_chars: usize,
	pub batch_size: usize,
}

/// One point-to-be: the embeddable text blob plus the payload that lets
/// query time resolve the point back to its record without guessing.
#[derive(Debug)]
struct IndexDocument {
	record_id: u64,
	text: String,
	nct_number: String,
}

pub async fn run_indexer(state: IndexerState) -> Result<()> {
	ensure_collection(&state.qdrant).await?;

	let documents = build_documents(state.records.records(), state.truncate_chars);

	tracing::info!(
		record_count = state.records.len(),
		document_count = documents.len(),
		"Prepared documents for indexing."
	);

	let mut indexed = 0usize;

	for (batch_index, batch) in documents.chunks(state.batch_size).enumerate() {
		let texts: Vec<String> = batch.iter().map(|document| document.text.clone()).collect();
		let vectors = embedding::embed(&state.embedding, &texts).await?;

		if vectors.len() != batch.len() {
			return Err(color_eyre::eyre::eyre!(
				"Embedding provider returned {} vectors for {} documents.",
				vectors.len(),
				batch.len()
			));
		}

		upsert_batch(&state.qdrant, batch, &vectors).await?;

		indexed += batch.len();

		tracing::info!(batch = batch_index, indexed, "Indexed batch.");
	}

	tracing::info!(indexed, collection = %state.qdrant.collection, "Index build complete.");

	Ok(())
}

async fn ensure_collection(qdrant: &QdrantStore) -> Result<()> {
	if qdrant.client.collection_exists(&qdrant.collection).await? {
		return Ok(());
	}

	tracing::info!(collection = %qdrant.collection, "Creating collection.");

	let create = CreateCollectionBuilder::new(qdrant.collection.clone())
		.vectors_config(VectorParamsBuilder::new(qdrant.vector_dim as u64, Distance::Cosine));

	qdrant.client.create_collection(create).await?;

	Ok(())
}

fn build_documents(records: &[TrialRecord], truncate_chars: usize) -> Vec<IndexDocument> {
	let mut documents = Vec::with_capacity(records.len());
	let mut skipped = 0usize;

	for (record_id, record) in records.iter().enumerate() {
		let text = record.retrieval_text(truncate_chars);

		if text.is_empty() {
			skipped += 1;

			continue;
		}

		documents.push(IndexDocument {
			record_id: record_id as u64,
			text,
			nct_number: record.nct_number.clone(),
		});
	}

	if skipped > 0 {
		tracing::warn!(skipped, "Skipped records with no retrievable text.");
	}

	documents
}

async fn upsert_batch(
	qdrant: &QdrantStore,
	batch: &[IndexDocument],
	vectors: &[Vec<f32>],
) -> Result<()> {
	let mut points = Vec::with_capacity(batch.len());

	for (document, vector) in batch.iter().zip(vectors.iter()) {
		let mut payload_map = HashMap::new();

		payload_map.insert(TEXT_PAYLOAD_KEY.to_string(), Value::from(document.text.clone()));
		payload_map
			.insert(RECORD_ID_PAYLOAD_KEY.to_string(), Value::from(document.record_id as i64));
		payload_map
			.insert(NCT_NUMBER_PAYLOAD_KEY.to_string(), Value::from(document.nct_number.clone()));

		let payload = Payload::from(payload_map);
		let point = PointStruct::new(document.record_id, vector.to_vec(), payload);

		points.push(point);
	}

	let upsert = UpsertPointsBuilder::new(qdrant.collection.clone(), points).wait(true);

	qdrant.client.upsert_points(upsert).await?;

	Ok(())
}
