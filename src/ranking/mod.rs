// src/ranking/mod.rs

use crate::profile::{CandidateTable, ProfileRecord};
use crate::utils::error::RankError;
use std::collections::HashSet;

/// Caller-supplied scoring parameters, immutable per ranking invocation.
///
/// `min_experience` is carried for the caller's benefit but never applied
/// here; see `CandidateTable::with_min_experience` for the explicit
/// pre-filter.
#[derive(Debug, Clone)]
pub struct RankingCriteria {
    pub required_skills: Vec<String>,
    pub min_experience: u32,
    pub weight_skills: f64,
    pub weight_experience: f64,
    pub limit: usize,
}

impl RankingCriteria {
    /// Builds criteria from the raw comma-separated skill list the caller
    /// collects (e.g. "SQL, Python"). Entries are trimmed; empties dropped.
    pub fn new(
        raw_skills: &str,
        min_experience: u32,
        weight_skills: f64,
        weight_experience: f64,
        limit: usize,
    ) -> Self {
        let required_skills = raw_skills
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            required_skills,
            min_experience,
            weight_skills,
            weight_experience,
            limit,
        }
    }
}

/// One table row annotated with its composite score.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub record: ProfileRecord,
    pub score: f64,
}

/// Scores every record and returns the top `criteria.limit`, descending by
/// score. The sort is stable, so ties keep the table's original order.
///
/// score = years_of_experience * weight_experience
///       + |skills ∩ required_skills| * weight_skills
pub fn rank(
    table: &CandidateTable,
    criteria: &RankingCriteria,
) -> Result<Vec<RankedCandidate>, RankError> {
    if table.is_empty() {
        return Err(RankError::EmptyTable);
    }

    let required: HashSet<&str> = criteria.required_skills.iter().map(String::as_str).collect();

    let mut ranked: Vec<RankedCandidate> = table
        .records()
        .iter()
        .map(|record| {
            let overlap = record
                .skill_set()
                .intersection(&required)
                .count();
            let score = f64::from(record.years_of_experience) * criteria.weight_experience
                + overlap as f64 * criteria.weight_skills;
            RankedCandidate {
                record: record.clone(),
                score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(criteria.limit);

    tracing::debug!(
        "Ranked {} candidates against {} required skills, returning top {}",
        table.len(),
        required.len(),
        ranked.len()
    );

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::NOT_PROVIDED;

    fn record(name: &str, years: u32, skills: &str) -> ProfileRecord {
        ProfileRecord {
            name: name.to_string(),
            email: NOT_PROVIDED.to_string(),
            phone: NOT_PROVIDED.to_string(),
            education: String::new(),
            skills: skills.to_string(),
            experience: String::new(),
            years_of_experience: years,
            source_file: format!("{name}.pdf"),
        }
    }

    fn criteria(raw_skills: &str, limit: usize) -> RankingCriteria {
        RankingCriteria::new(raw_skills, 0, 0.7, 0.3, limit)
    }

    #[test]
    fn weighted_scores_order_candidates() {
        let table = CandidateTable::from_records(vec![
            record("r2", 2, "SQL"),
            record("r1", 5, "SQL; Python"),
        ]);

        let ranked = rank(&table, &criteria("SQL, Python", 10)).unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].record.name, "r1");
        assert!((ranked[0].score - 2.9).abs() < 1e-9); // 5*0.3 + 2*0.7
        assert_eq!(ranked[1].record.name, "r2");
        assert!((ranked[1].score - 1.3).abs() < 1e-9); // 2*0.3 + 1*0.7
    }

    #[test]
    fn empty_table_is_an_error_not_an_empty_list() {
        let table = CandidateTable::new();
        assert!(matches!(
            rank(&table, &criteria("SQL", 3)),
            Err(RankError::EmptyTable)
        ));
    }

    #[test]
    fn result_count_truncates_to_top_scorers() {
        let table = CandidateTable::from_records(vec![
            record("a", 1, ""),
            record("b", 9, ""),
            record("c", 3, ""),
            record("d", 7, ""),
            record("e", 5, ""),
        ]);

        let ranked = rank(&table, &criteria("", 1)).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].record.name, "b");
    }

    #[test]
    fn ties_preserve_table_order() {
        let table = CandidateTable::from_records(vec![
            record("first", 4, "SQL"),
            record("second", 4, "SQL"),
        ]);

        let ranked = rank(&table, &criteria("SQL", 5)).unwrap();
        assert_eq!(ranked[0].record.name, "first");
        assert_eq!(ranked[1].record.name, "second");
    }

    #[test]
    fn required_skills_are_trimmed_on_input() {
        let c = RankingCriteria::new(" SQL ,  Python ,", 0, 0.5, 0.5, 3);
        assert_eq!(c.required_skills, vec!["SQL", "Python"]);
    }

    #[test]
    fn min_experience_is_not_enforced_by_the_engine() {
        let table = CandidateTable::from_records(vec![record("junior", 0, "SQL")]);
        let mut c = criteria("SQL", 3);
        c.min_experience = 10;

        let ranked = rank(&table, &c).unwrap();
        assert_eq!(ranked.len(), 1);
    }
}
