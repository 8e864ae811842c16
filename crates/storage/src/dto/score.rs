use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{CriterionScore, ScoreRecord};

/// Score submission as received from the judge's client. Fields are
/// optional so absence maps to the required-fields error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitScoresRequest {
    #[serde(default)]
    pub candidate_id: Option<i32>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub criteria: Option<Vec<CriterionScore>>,
}

/// A submission with every required field present.
#[derive(Debug, Clone)]
pub struct ScoreSubmission {
    pub judge_id: Uuid,
    pub candidate_id: i32,
    pub category_id: i32,
    pub year: String,
    pub criteria: Vec<CriterionScore>,
}

impl SubmitScoresRequest {
    pub fn into_submission(self, judge_id: Uuid) -> Result<ScoreSubmission, String> {
        match (self.candidate_id, self.category_id, self.year, self.criteria) {
            (Some(candidate_id), Some(category_id), Some(year), Some(criteria)) => {
                Ok(ScoreSubmission {
                    judge_id,
                    candidate_id,
                    category_id,
                    year,
                    criteria,
                })
            }
            _ => Err("candidate_id, category_id, year, and criteria are required".to_string()),
        }
    }
}

/// Acknowledgement returned after a score upsert.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitScoresResponse {
    pub message: String,
    #[serde(rename = "updatedScore")]
    pub updated_score: ScoreRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn complete_request_converts() {
        let req = SubmitScoresRequest {
            candidate_id: Some(7),
            category_id: Some(2),
            year: Some("2025".to_string()),
            criteria: Some(vec![CriterionScore {
                criteria_name: "Skill".to_string(),
                score: Decimal::from(35),
            }]),
        };

        let submission = req.into_submission(Uuid::new_v4()).unwrap();
        assert_eq!(submission.candidate_id, 7);
        assert_eq!(submission.criteria.len(), 1);
    }

    #[test]
    fn missing_field_is_rejected() {
        let req = SubmitScoresRequest {
            candidate_id: Some(7),
            category_id: None,
            year: Some("2025".to_string()),
            criteria: Some(vec![]),
        };

        let err = req.into_submission(Uuid::new_v4()).unwrap_err();
        assert_eq!(err, "candidate_id, category_id, year, and criteria are required");
    }
}
