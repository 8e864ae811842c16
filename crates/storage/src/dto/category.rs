use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Criterion;

/// Request payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub year: Option<String>,

    #[serde(default)]
    pub category_name: Option<String>,

    #[validate(range(min = 0, max = 100, message = "Overall percentage must be between 0 and 100"))]
    #[serde(default)]
    pub percentage: Option<i32>,

    #[serde(default)]
    pub criteria: Vec<CriterionInput>,
}

/// Request payload for updating a category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    pub id: i32,

    #[serde(default)]
    pub category_name: Option<String>,

    #[validate(range(min = 0, max = 100, message = "Overall percentage must be between 0 and 100"))]
    #[serde(default)]
    pub percentage: Option<i32>,

    #[serde(default)]
    pub criteria: Vec<CriterionInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteCategoryRequest {
    pub id: i32,
}

/// A criterion as submitted by the client; fields may be incomplete and are
/// checked by [`validate_criteria`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CriterionInput {
    #[serde(default)]
    pub criteria_name: Option<String>,
    #[serde(default)]
    pub percentage: Option<i32>,
}

impl CreateCategoryRequest {
    /// Applies the submission rules in order, first failing rule wins:
    /// year/name/weight presence, per-criterion completeness, sum to 100.
    /// Returns the completed criteria list on success.
    pub fn validate_rules(&self) -> Result<(String, String, i32, Vec<Criterion>), String> {
        let year = match self.year.as_deref().map(str::trim) {
            Some(y) if !y.is_empty() => y.to_string(),
            _ => return Err("Please select a year.".to_string()),
        };

        let (name, percentage) = validate_header(&self.category_name, self.percentage)?;
        let criteria = validate_criteria(&self.criteria)?;

        Ok((year, name, percentage, criteria))
    }
}

impl UpdateCategoryRequest {
    pub fn validate_rules(&self) -> Result<(String, i32, Vec<Criterion>), String> {
        let (name, percentage) = validate_header(&self.category_name, self.percentage)?;
        let criteria = validate_criteria(&self.criteria)?;

        Ok((name, percentage, criteria))
    }
}

fn validate_header(
    name: &Option<String>,
    percentage: Option<i32>,
) -> Result<(String, i32), String> {
    let name = match name.as_deref().map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => return Err("Please fill in all required fields.".to_string()),
    };
    let percentage = percentage.ok_or_else(|| "Please fill in all required fields.".to_string())?;

    Ok((name, percentage))
}

/// Checks that at least one criterion exists, every criterion is complete,
/// and the percentages sum to exactly 100.
pub fn validate_criteria(criteria: &[CriterionInput]) -> Result<Vec<Criterion>, String> {
    if criteria.is_empty() {
        return Err("Please fill in all criteria fields.".to_string());
    }

    let mut complete = Vec::with_capacity(criteria.len());
    for input in criteria {
        let name = match input.criteria_name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => return Err("Please fill in all criteria fields.".to_string()),
        };
        let percentage = match input.percentage {
            Some(p) => p,
            None => return Err("Please fill in all criteria fields.".to_string()),
        };
        if !(0..=100).contains(&percentage) {
            return Err("Criteria percentage must be between 0 and 100.".to_string());
        }
        complete.push(Criterion {
            criteria_name: name,
            percentage,
        });
    }

    let total: i32 = complete.iter().map(|c| c.percentage).sum();
    if total != 100 {
        return Err("Total criteria percentage must equal 100%.".to_string());
    }

    Ok(complete)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, percentage: Option<i32>) -> CriterionInput {
        CriterionInput {
            criteria_name: if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            },
            percentage,
        }
    }

    #[test]
    fn accepts_criteria_summing_to_100() {
        let criteria = vec![
            input("Stage Presence", Some(60)),
            input("Skill", Some(40)),
        ];

        let complete = validate_criteria(&criteria).unwrap();
        assert_eq!(complete.len(), 2);
        assert_eq!(complete[0].criteria_name, "Stage Presence");
        assert_eq!(complete[0].percentage, 60);
        assert_eq!(complete[1].percentage, 40);
    }

    #[test]
    fn rejects_sum_below_100() {
        let criteria = vec![input("Poise", Some(50)), input("Skill", Some(40))];

        let err = validate_criteria(&criteria).unwrap_err();
        assert_eq!(err, "Total criteria percentage must equal 100%.");
    }

    #[test]
    fn rejects_sum_of_99_and_101() {
        for split in [(60, 39), (60, 41)] {
            let criteria = vec![input("A", Some(split.0)), input("B", Some(split.1))];
            assert_eq!(
                validate_criteria(&criteria).unwrap_err(),
                "Total criteria percentage must equal 100%."
            );
        }
    }

    #[test]
    fn rejects_out_of_bounds_weights_even_when_the_sum_is_100() {
        let criteria = vec![input("A", Some(150)), input("B", Some(-50))];

        let err = validate_criteria(&criteria).unwrap_err();
        assert_eq!(err, "Criteria percentage must be between 0 and 100.");
    }

    #[test]
    fn rejects_empty_criteria_list() {
        let err = validate_criteria(&[]).unwrap_err();
        assert_eq!(err, "Please fill in all criteria fields.");
    }

    #[test]
    fn incomplete_criterion_wins_over_bad_sum() {
        // First failing rule wins: the missing weight is reported even
        // though the sum is also wrong.
        let criteria = vec![input("Poise", None), input("Skill", Some(40))];

        let err = validate_criteria(&criteria).unwrap_err();
        assert_eq!(err, "Please fill in all criteria fields.");
    }

    #[test]
    fn create_requires_year_before_other_rules() {
        let req = CreateCategoryRequest {
            year: None,
            category_name: None,
            percentage: None,
            criteria: vec![],
        };

        assert_eq!(req.validate_rules().unwrap_err(), "Please select a year.");
    }

    #[test]
    fn create_requires_name_and_weight() {
        let req = CreateCategoryRequest {
            year: Some("2025".to_string()),
            category_name: Some("  ".to_string()),
            percentage: Some(50),
            criteria: vec![input("Skill", Some(100))],
        };

        assert_eq!(
            req.validate_rules().unwrap_err(),
            "Please fill in all required fields."
        );
    }

    #[test]
    fn create_accepts_complete_submission() {
        let req = CreateCategoryRequest {
            year: Some("2025".to_string()),
            category_name: Some("Talent".to_string()),
            percentage: Some(50),
            criteria: vec![
                input("Stage Presence", Some(60)),
                input("Skill", Some(40)),
            ],
        };

        let (year, name, percentage, criteria) = req.validate_rules().unwrap();
        assert_eq!(year, "2025");
        assert_eq!(name, "Talent");
        assert_eq!(percentage, 50);
        assert_eq!(criteria.len(), 2);
    }
}
