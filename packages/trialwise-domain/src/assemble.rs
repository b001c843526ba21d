use std::fmt::Write;

use crate::resolve::ResolvedTrial;

/// Placeholder rendered for empty fields so the prompt shape stays stable.
pub const NOT_AVAILABLE: &str = "Not Available";

/// How the generation context is shaped. A deployment picks one mode in
/// config; it is never decided per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssembleMode {
	/// Labeled field lines only, for summarization-style generators.
	Direct,
	/// The same fields wrapped in a lay-explanation instruction, optionally
	/// with the user question, for instruction-following generators.
	Instruction,
}

/// Builds the single context block handed to the answer generator. Only the
/// three clinical fields participate; title and registry number are reserved
/// for the response envelope and never repeated into the prompt.
pub fn assemble_context(mode: AssembleMode, trial: &ResolvedTrial, query: Option<&str>) -> String {
	match mode {
		AssembleMode::Direct => field_lines(trial),
		AssembleMode::Instruction => {
			let mut prompt = String::from(
				"Explain this clinical trial in plain language for a general audience. \
				 Cover what the study is trying to find out, who it is for, which \
				 treatments are being tested, what happens during the study, and what \
				 outcomes are expected.\n\n",
			);

			if let Some(query) = query.map(str::trim).filter(|query| !query.is_empty()) {
				let _ = write!(prompt, "User Question:\n{query}\n\n");
			}

			let _ = write!(prompt, "Clinical Trial Information:\n{}", field_lines(trial));

			prompt
		},
	}
}

fn field_lines(trial: &ResolvedTrial) -> String {
	format!(
		"Study Design: {}\nInterventions: {}\nBrief Summary: {}",
		field_or_placeholder(&trial.study_design),
		field_or_placeholder(&trial.interventions),
		field_or_placeholder(&trial.brief_summary),
	)
}

fn field_or_placeholder(value: &str) -> &str {
	if value.trim().is_empty() { NOT_AVAILABLE } else { value }
}

#[cfg(test)]
mod tests {
	use super::{AssembleMode, NOT_AVAILABLE, assemble_context};
	use crate::resolve::ResolvedTrial;

	fn trial() -> ResolvedTrial {
		ResolvedTrial {
			study_title: "Aspirin for Migraine".to_string(),
			nct_number: "NCT01234567".to_string(),
			study_design: "Randomized, double-blind".to_string(),
			interventions: "Drug: Aspirin".to_string(),
			brief_summary: "Low-dose aspirin against placebo.".to_string(),
		}
	}

	#[test]
	fn direct_mode_emits_three_labeled_lines() {
		let context = assemble_context(AssembleMode::Direct, &trial(), None);

		assert_eq!(
			context,
			"Study Design: Randomized, double-blind\nInterventions: Drug: Aspirin\nBrief Summary: Low-dose aspirin against placebo."
		);
	}

	#[test]
	fn title_and_nct_never_reach_the_context() {
		for mode in [AssembleMode::Direct, AssembleMode::Instruction] {
			let context = assemble_context(mode, &trial(), Some("aspirin trial"));

			assert!(!context.contains("Aspirin for Migraine"));
			assert!(!context.contains("NCT01234567"));
		}
	}

	#[test]
	fn empty_fields_render_as_placeholder() {
		let mut trial = trial();

		trial.study_design = String::new();
		trial.interventions = "   ".to_string();

		let context = assemble_context(AssembleMode::Direct, &trial, None);

		assert!(context.contains(&format!("Study Design: {NOT_AVAILABLE}")));
		assert!(context.contains(&format!("Interventions: {NOT_AVAILABLE}")));
		assert!(context.contains("Brief Summary: Low-dose aspirin against placebo."));
	}

	#[test]
	fn instruction_mode_includes_query_when_present() {
		let context = assemble_context(AssembleMode::Instruction, &trial(), Some("what is tested?"));

		assert!(context.contains("User Question:\nwhat is tested?"));
		assert!(context.contains("Clinical Trial Information:"));
		assert!(context.contains("Study Design: Randomized, double-blind"));
	}

	#[test]
	fn instruction_mode_omits_empty_query() {
		let context = assemble_context(AssembleMode::Instruction, &trial(), Some("   "));

		assert!(!context.contains("User Question:"));
	}
}
