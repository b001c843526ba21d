use crate::prefix_chars;

/// One row of the trial registry export. Every field defaults to the empty
/// string so downstream string handling stays total; a record is never
/// mutated after load.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct TrialRecord {
	#[serde(rename = "Study Title", default)]
	pub study_title: String,
	#[serde(rename = "NCT Number", default)]
	pub nct_number: String,
	#[serde(rename = "Conditions", default)]
	pub conditions: String,
	#[serde(rename = "Interventions", default)]
	pub interventions: String,
	#[serde(rename = "Brief Summary", default)]
	pub brief_summary: String,
	#[serde(rename = "Study Design", default)]
	pub study_design: String,
}

impl TrialRecord {
	/// The text fields that participate in retrieval, in their fixed order.
	fn retrieval_fields(&self) -> [&str; 4] {
		[
			self.study_title.as_str(),
			self.conditions.as_str(),
			self.interventions.as_str(),
			self.brief_summary.as_str(),
		]
	}

	/// Resolve-side candidate text: the untruncated retrieval fields joined
	/// with single spaces, trimmed. The resolver searches a prefix window of
	/// this string for the retrieved document's needle.
	pub fn candidate_text(&self) -> String {
		self.retrieval_fields().join(" ").trim().to_string()
	}

	/// Index-side document text: the same fields and order as
	/// `candidate_text`, but with each field capped at `max_field_chars`
	/// characters before joining. This is the blob that gets embedded and
	/// stored as point payload.
	pub fn retrieval_text(&self, max_field_chars: usize) -> String {
		self.retrieval_fields()
			.map(|field| prefix_chars(field, max_field_chars))
			.join(" ")
			.trim()
			.to_string()
	}
}
