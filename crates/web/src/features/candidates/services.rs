use sqlx::PgPool;
use storage::dto::candidate::{CreateCandidate, UpdateCandidate};
use storage::error::StorageError;
use storage::models::Candidate;
use storage::repository::candidate::CandidateRepository;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::handlers::CandidateForm;

const DUPLICATE_MESSAGE: &str =
    "Candidate with the same number in a role already exists for the selected year.";

pub async fn list_candidates(pool: &PgPool, year: &str) -> Result<Vec<Candidate>, WebError> {
    let repo = CandidateRepository::new(pool);
    Ok(repo.list_by_year(year).await?)
}

/// Create a candidate: store the image first, then insert the row. The
/// (year, role, candidate_no) constraint rejects duplicates; on that path
/// the freshly uploaded object is removed again.
pub async fn create_candidate(state: &AppState, form: CandidateForm) -> Result<Candidate, WebError> {
    let (Some(year), Some(role), Some(candidate_no), Some(candidate_name)) = (
        form.year,
        form.role,
        form.candidate_no,
        form.candidate_name,
    ) else {
        return Err(WebError::MissingField("Missing required fields.".to_string()));
    };

    let image = form
        .image
        .filter(|image| !image.bytes.is_empty())
        .ok_or_else(|| WebError::MissingField("Missing required fields.".to_string()))?;

    let mut req = CreateCandidate {
        year,
        role,
        candidate_no,
        candidate_name,
        image_url: String::new(),
    };
    req.validate()?;

    let object_name = image_object_name(&req.year, req.candidate_no, &image.file_name);
    req.image_url = state
        .images
        .upload(&object_name, image.bytes, &image.content_type)
        .await?;

    let repo = CandidateRepository::new(state.db.pool());
    match repo.create(&req).await {
        Ok(candidate) => Ok(candidate),
        Err(e) if e.is_unique_violation() => {
            if let Err(remove_err) = state.images.remove(&object_name).await {
                tracing::warn!("Failed to remove orphaned image {object_name}: {remove_err}");
            }
            Err(WebError::Duplicate(DUPLICATE_MESSAGE.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Update a candidate; a supplied non-empty image replaces the stored
/// object and the previous one is removed.
pub async fn update_candidate(state: &AppState, form: CandidateForm) -> Result<Candidate, WebError> {
    let id = form
        .id
        .ok_or_else(|| WebError::MissingField("Missing required fields.".to_string()))?;

    let (Some(role), Some(candidate_no), Some(candidate_name)) =
        (form.role, form.candidate_no, form.candidate_name)
    else {
        return Err(WebError::MissingField("Missing required fields.".to_string()));
    };

    let repo = CandidateRepository::new(state.db.pool());
    let existing = repo.find_by_id(id).await.map_err(not_found)?;

    let mut req = UpdateCandidate {
        role,
        candidate_no,
        candidate_name,
        image_url: existing.image_url.clone(),
    };
    req.validate()?;

    if let Some(image) = form.image.filter(|image| !image.bytes.is_empty()) {
        let object_name = image_object_name(&existing.year, req.candidate_no, &image.file_name);
        req.image_url = state
            .images
            .upload(&object_name, image.bytes, &image.content_type)
            .await?;

        if let Some(old_object) = state.images.object_name_from_url(&existing.image_url) {
            state.images.remove(&old_object).await?;
        }
    }

    match repo.update(id, &req).await {
        Ok(candidate) => Ok(candidate),
        Err(e) if e.is_unique_violation() => Err(WebError::Duplicate(DUPLICATE_MESSAGE.to_string())),
        Err(e) => Err(e.into()),
    }
}

/// Delete a candidate row, then the stored image object so no dangling
/// reference remains.
pub async fn delete_candidate(state: &AppState, id: i32) -> Result<(), WebError> {
    let repo = CandidateRepository::new(state.db.pool());
    let deleted = repo.delete_returning(id).await.map_err(not_found)?;

    if let Some(object_name) = state.images.object_name_from_url(&deleted.image_url) {
        state.images.remove(&object_name).await?;
    }

    Ok(())
}

fn not_found(e: StorageError) -> WebError {
    match e {
        StorageError::NotFound => WebError::NotFound("Cannot find candidate.".to_string()),
        other => other.into(),
    }
}

/// Object name for a candidate image: keyed by year and number, suffixed
/// with a fresh uuid so replacements never collide, keeping the original
/// file extension.
fn image_object_name(year: &str, candidate_no: i32, file_name: &str) -> String {
    let ext = file_name
        .rsplit('.')
        .next()
        .filter(|ext| !ext.is_empty() && *ext != file_name)
        .unwrap_or("bin");

    format!("candidate_{}_{}_{}.{}", year, candidate_no, Uuid::new_v4(), ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_object_name_keeps_the_extension() {
        let name = image_object_name("2025", 3, "portrait.png");

        assert!(name.starts_with("candidate_2025_3_"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn image_object_name_defaults_extension_when_absent() {
        let name = image_object_name("2025", 3, "portrait");

        assert!(name.ends_with(".bin"));
    }

    #[test]
    fn image_object_names_never_collide() {
        let a = image_object_name("2025", 3, "portrait.png");
        let b = image_object_name("2025", 3, "portrait.png");

        assert_ne!(a, b);
    }
}
