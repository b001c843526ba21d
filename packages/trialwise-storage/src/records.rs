use trialwise_domain::TrialRecord;

use crate::Result;

/// The authoritative, ordered collection of trial records. Loaded once at
/// process start and read-only afterwards; record ids are ordinals into the
/// load order, which makes them stable for the process lifetime and for any
/// index built from the same file.
pub struct RecordStore {
	records: Vec<TrialRecord>,
}
impl RecordStore {
	pub fn load(cfg: &trialwise_config::Data) -> Result<Self> {
		let mut reader = csv::Reader::from_path(&cfg.records_csv)?;
		let mut records = Vec::new();

		for row in reader.deserialize() {
			let record: TrialRecord = row?;

			records.push(record);
		}

		Ok(Self { records })
	}

	pub fn from_records(records: Vec<TrialRecord>) -> Self {
		Self { records }
	}

	pub fn get(&self, record_id: usize) -> Option<&TrialRecord> {
		self.records.get(record_id)
	}

	pub fn records(&self) -> &[TrialRecord] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}
