use uuid::Uuid;

use trialwise_domain::{
	AssembleMode, ResolveWindows, ResolvedTrial, TrialRecord, assemble_context, resolve_by_text,
};

use crate::{AskService, Error, Result, retrieve::RetrievedDocument};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AskRequest {
	pub query: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AskResponse {
	pub trial_title: String,
	pub nct_number: String,
	pub summary: String,
}

impl AskService {
	/// The request pipeline: validate, retrieve, resolve the top-ranked
	/// document, assemble the context, generate. Every stage either advances
	/// or terminates the request; there are no partial responses.
	pub async fn ask(&self, req: AskRequest) -> Result<AskResponse> {
		let query = req.query.trim();
		if query.is_empty() {
			return Err(Error::InvalidRequest { message: "query must be non-empty.".to_string() });
		}

		let trace_id = Uuid::new_v4();
		let documents = self.retrieve(query).await?;
		// Only the top-ranked document is ever resolved and summarized, even
		// when more candidates came back: one best answer per question.
		let Some(best) = documents.first() else {
			tracing::info!(%trace_id, "No documents retrieved for query.");

			return Err(Error::NoMatch);
		};
		let Some(record) = self.resolve_record(best, trace_id) else {
			tracing::warn!(%trace_id, "Top-ranked document did not resolve to a record.");

			return Err(Error::ResolutionFailed);
		};
		let trial = ResolvedTrial::from_record(record);
		let context = assemble_context(
			self.assemble_mode(),
			&trial,
			self.cfg.assembler.include_query.then_some(query),
		);
		let summary = self
			.providers
			.generator
			.generate(&self.cfg.providers.generator, &context)
			.await
			.map_err(|err| Error::Provider { message: err.to_string() })?;

		tracing::info!(%trace_id, nct_number = %trial.nct_number, "Answered trial query.");

		Ok(AskResponse {
			trial_title: trial.study_title,
			nct_number: trial.nct_number,
			summary,
		})
	}

	/// Record lookup for a retrieved document: the `record_id` payload is the
	/// primary join key; the prefix-substring heuristic only covers points
	/// from indexes built before that key existed.
	fn resolve_record(&self, document: &RetrievedDocument, trace_id: Uuid) -> Option<&TrialRecord> {
		if let Some(record_id) = document.record_id {
			if let Some(record) = self.records.get(record_id as usize) {
				return Some(record);
			}

			tracing::warn!(
				%trace_id,
				record_id,
				"Payload record_id is not in the record store; falling back to text matching."
			);
		}

		let windows = ResolveWindows {
			needle_chars: self.cfg.resolver.needle_chars,
			haystack_chars: self.cfg.resolver.haystack_chars,
		};

		resolve_by_text(self.records.records(), &document.text, &windows)
	}

	fn assemble_mode(&self) -> AssembleMode {
		match self.cfg.assembler.mode.as_str() {
			"instruction" => AssembleMode::Instruction,
			_ => AssembleMode::Direct,
		}
	}
}
