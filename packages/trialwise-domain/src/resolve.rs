use crate::{prefix_chars, record::TrialRecord};

/// Window sizes for the prefix-substring fallback. The defaults (100/200)
/// are load-bearing: they must match the windows the index was built
/// against, and changing them changes which documents resolve.
#[derive(Clone, Copy, Debug)]
pub struct ResolveWindows {
	pub needle_chars: usize,
	pub haystack_chars: usize,
}

/// The response-relevant fields of a resolved record. Distinct from the
/// no-match sentinel (`None` from the resolver): a resolved trial may carry
/// empty fields, but it always corresponds to exactly one record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedTrial {
	pub study_title: String,
	pub nct_number: String,
	pub study_design: String,
	pub interventions: String,
	pub brief_summary: String,
}

impl ResolvedTrial {
	pub fn from_record(record: &TrialRecord) -> Self {
		Self {
			study_title: record.study_title.clone(),
			nct_number: record.nct_number.clone(),
			study_design: record.study_design.clone(),
			interventions: record.interventions.clone(),
			brief_summary: record.brief_summary.clone(),
		}
	}
}

/// Fallback linkage for indexes that predate the `record_id` payload: match
/// the first `needle_chars` characters of the trimmed document text against
/// the first `haystack_chars` characters of each record's candidate text,
/// in store order, first hit wins.
///
/// This is a heuristic, not a key lookup: it is O(store size), order
/// dependent when prefixes collide, and sensitive to any divergence between
/// index-time and resolve-time text assembly. An all-whitespace document
/// text returns `None` — an empty needle identifies nothing.
pub fn resolve_by_text<'a>(
	records: &'a [TrialRecord],
	document_text: &str,
	windows: &ResolveWindows,
) -> Option<&'a TrialRecord> {
	let needle = prefix_chars(document_text.trim(), windows.needle_chars);

	if needle.is_empty() {
		return None;
	}

	records.iter().find(|record| {
		let candidate = record.candidate_text();

		prefix_chars(&candidate, windows.haystack_chars).contains(needle)
	})
}
