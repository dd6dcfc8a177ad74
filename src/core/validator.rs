// src/core/validator.rs

use crate::core::error::ValidationError;
use crate::core::models::AnalysisRequest;

/// Trims the raw review text and rejects it when nothing is left.
pub fn validate_review(raw: &str) -> Result<AnalysisRequest, ValidationError> {
    let review = raw.trim();
    if review.is_empty() {
        return Err(ValidationError::EmptyReview);
    }
    Ok(AnalysisRequest::new(review.to_string()))
}
