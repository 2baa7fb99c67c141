use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Personal score on the half-point scale: 0-10 stored, 0.0-5.0 displayed.
    pub fn validate_user_score(score: i32) -> Result<(), AppError> {
        if !(0..=10).contains(&score) {
            return Err(AppError::ValidationError(
                "Score must be between 0 and 10".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_search_query(query: &str) -> Result<(), AppError> {
        if query.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
