// src/profile/mod.rs
pub mod experience;
pub mod parser;

pub use parser::{parse_profile, ProfileRecord, NOT_PROVIDED};

/// Ordered collection of ProfileRecords, one per successfully processed
/// document. Append-only during a batch run; also rebuildable from a
/// snapshot without re-running extraction.
#[derive(Debug, Clone, Default)]
pub struct CandidateTable {
    records: Vec<ProfileRecord>,
}

impl CandidateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ProfileRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: ProfileRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Explicit minimum-experience pre-filter. The ranking engine itself
    /// never applies the threshold; callers that want it opt in by
    /// filtering the table first, keeping relative order intact.
    pub fn with_min_experience(&self, min_years: u32) -> CandidateTable {
        CandidateTable {
            records: self
                .records
                .iter()
                .filter(|r| r.years_of_experience >= min_years)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, years: u32) -> ProfileRecord {
        ProfileRecord {
            name: name.to_string(),
            email: NOT_PROVIDED.to_string(),
            phone: NOT_PROVIDED.to_string(),
            education: String::new(),
            skills: String::new(),
            experience: String::new(),
            years_of_experience: years,
            source_file: format!("{name}.txt"),
        }
    }

    #[test]
    fn min_experience_filter_keeps_order() {
        let table = CandidateTable::from_records(vec![
            record("a", 5),
            record("b", 1),
            record("c", 3),
        ]);

        let filtered = table.with_min_experience(3);
        let names: Vec<_> = filtered.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
