use rust_decimal::Decimal;

use crate::dto::ballot::{BallotCriterion, BallotRow};
use crate::models::{Candidate, Category, ScoreRecord};

/// Left-join scores onto candidates by candidate id, then left-join the
/// category's criteria onto each score record by exact criterion name.
/// Missing records and missing entries score zero. Candidate input order
/// is preserved (callers fetch ordered by candidate number then role).
pub fn assemble_ballot(
    category: &Category,
    candidates: Vec<Candidate>,
    scores: &[ScoreRecord],
) -> Vec<BallotRow> {
    candidates
        .into_iter()
        .map(|candidate| {
            let record = scores.iter().find(|s| s.candidate_id == candidate.id);

            let criteria = category
                .criteria
                .iter()
                .map(|criterion| {
                    let score = record
                        .and_then(|r| {
                            r.criteria
                                .iter()
                                .find(|entry| entry.criteria_name == criterion.criteria_name)
                        })
                        .map(|entry| entry.score)
                        .unwrap_or(Decimal::ZERO);

                    BallotCriterion {
                        criteria_name: criterion.criteria_name.clone(),
                        percentage: criterion.percentage,
                        score,
                    }
                })
                .collect();

            BallotRow {
                year: candidate.year,
                candidate_id: candidate.id,
                image_url: candidate.image_url,
                candidate_name: candidate.candidate_name,
                candidate_no: candidate.candidate_no,
                role: candidate.role,
                name: category.name.clone(),
                percentage: category.percentage,
                criteria,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Criterion, CriterionScore};
    use sqlx::types::Json;
    use uuid::Uuid;

    fn category(criteria: Vec<(&str, i32)>) -> Category {
        Category {
            id: 2,
            year: "2025".to_string(),
            name: "Talent".to_string(),
            percentage: 50,
            criteria: Json(
                criteria
                    .into_iter()
                    .map(|(name, percentage)| Criterion {
                        criteria_name: name.to_string(),
                        percentage,
                    })
                    .collect(),
            ),
        }
    }

    fn candidate(id: i32, no: i32, role: &str, name: &str) -> Candidate {
        Candidate {
            id,
            year: "2025".to_string(),
            role: role.to_string(),
            candidate_no: no,
            candidate_name: name.to_string(),
            image_url: format!("https://storage.example/candidates/c{id}.png"),
        }
    }

    fn record(candidate_id: i32, entries: Vec<(&str, i64)>) -> ScoreRecord {
        ScoreRecord {
            id: candidate_id,
            judge_id: Uuid::new_v4(),
            candidate_id,
            category_id: 2,
            year: "2025".to_string(),
            criteria: Json(
                entries
                    .into_iter()
                    .map(|(name, score)| CriterionScore {
                        criteria_name: name.to_string(),
                        score: Decimal::from(score),
                    })
                    .collect(),
            ),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn merges_submitted_scores_and_defaults_the_rest_to_zero() {
        let category = category(vec![("Stage Presence", 60), ("Skill", 40)]);
        let candidates = vec![candidate(1, 1, "Ms", "Alex"), candidate(2, 2, "Mr", "Sam")];
        let scores = vec![record(1, vec![("Stage Presence", 55), ("Skill", 35)])];

        let rows = assemble_ballot(&category, candidates, &scores);

        assert_eq!(rows.len(), 2);

        let scored = &rows[0];
        assert_eq!(scored.candidate_id, 1);
        assert_eq!(scored.criteria[0].score, Decimal::from(55));
        assert_eq!(scored.criteria[1].score, Decimal::from(35));

        let unscored = &rows[1];
        assert_eq!(unscored.candidate_id, 2);
        assert!(unscored.criteria.iter().all(|c| c.score == Decimal::ZERO));
    }

    #[test]
    fn carries_candidate_and_category_display_fields() {
        let category = category(vec![("Skill", 100)]);
        let rows = assemble_ballot(&category, vec![candidate(7, 3, "Mr", "Sam")], &[]);

        let row = &rows[0];
        assert_eq!(row.year, "2025");
        assert_eq!(row.candidate_no, 3);
        assert_eq!(row.role, "Mr");
        assert_eq!(row.candidate_name, "Sam");
        assert_eq!(row.name, "Talent");
        assert_eq!(row.percentage, 50);
        assert_eq!(row.criteria[0].percentage, 100);
    }

    #[test]
    fn criterion_name_matching_is_exact() {
        let category = category(vec![("Stage Presence", 60), ("Skill", 40)]);
        // Wrong case and stray whitespace must not match.
        let scores = vec![record(1, vec![("stage presence", 55), ("Skill ", 35)])];

        let rows = assemble_ballot(&category, vec![candidate(1, 1, "Ms", "Alex")], &scores);

        assert!(rows[0].criteria.iter().all(|c| c.score == Decimal::ZERO));
    }

    #[test]
    fn stale_entries_not_in_the_category_are_dropped() {
        // The category definition drives the criteria list; entries left
        // over from an older definition do not appear.
        let category = category(vec![("Skill", 100)]);
        let scores = vec![record(1, vec![("Skill", 40), ("Poise", 30)])];

        let rows = assemble_ballot(&category, vec![candidate(1, 1, "Ms", "Alex")], &scores);

        assert_eq!(rows[0].criteria.len(), 1);
        assert_eq!(rows[0].criteria[0].criteria_name, "Skill");
        assert_eq!(rows[0].criteria[0].score, Decimal::from(40));
    }

    #[test]
    fn assembly_is_idempotent() {
        let category = category(vec![("Stage Presence", 60), ("Skill", 40)]);
        let candidates = vec![candidate(1, 1, "Ms", "Alex"), candidate(2, 2, "Mr", "Sam")];
        let scores = vec![record(2, vec![("Skill", 12)])];

        let first = assemble_ballot(&category, candidates.clone(), &scores);
        let second = assemble_ballot(&category, candidates, &scores);

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn submitted_values_round_trip_into_the_ballot() {
        // A judge submits 55/35 under a 60/40 category; rebuilding the
        // ballot returns exactly those values for that candidate and
        // zeroes for everyone else.
        let category = category(vec![("Stage Presence", 60), ("Skill", 40)]);
        let candidates = vec![candidate(1, 1, "Ms", "Alex"), candidate(2, 2, "Mr", "Sam")];

        let submitted = record(1, vec![("Stage Presence", 55), ("Skill", 35)]);
        let rows = assemble_ballot(&category, candidates, std::slice::from_ref(&submitted));

        let expected: Vec<Decimal> = submitted.criteria.iter().map(|c| c.score).collect();
        let returned: Vec<Decimal> = rows[0].criteria.iter().map(|c| c.score).collect();
        assert_eq!(returned, expected);
        assert!(rows[1].criteria.iter().all(|c| c.score == Decimal::ZERO));
    }

    #[test]
    fn preserves_candidate_input_order() {
        let category = category(vec![("Skill", 100)]);
        let candidates = vec![
            candidate(5, 1, "Mr", "A"),
            candidate(3, 1, "Ms", "B"),
            candidate(9, 2, "Mr", "C"),
        ];

        let rows = assemble_ballot(&category, candidates, &[]);

        let ids: Vec<i32> = rows.iter().map(|r| r.candidate_id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }
}
