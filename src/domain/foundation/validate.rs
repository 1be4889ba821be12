//! Field validators shared by the use-case input checks.

use super::ValidationError;

/// Maximum length of free-text notes.
pub const NOTES_MAX_CHARS: usize = 2000;

/// Maximum length of an exercise name.
pub const EXERCISE_NAME_MAX_CHARS: usize = 255;

/// Largest value and scale a `NUMERIC(precision, scale)` column can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecimalColumn {
    pub max: f64,
    pub scale: u32,
}

/// `training_sessions.body_weight NUMERIC(4, 1)`.
pub const BODY_WEIGHT_COLUMN: DecimalColumn = DecimalColumn { max: 999.9, scale: 1 };

/// `exercises.weight NUMERIC(5, 2)`.
pub const EXERCISE_WEIGHT_COLUMN: DecimalColumn = DecimalColumn { max: 999.99, scale: 2 };

/// Upper bound on page size for list queries.
pub const MAX_PAGE_LIMIT: i32 = 100;

pub fn require_positive_int(field: &str, value: i32) -> Result<i32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::not_positive(field));
    }
    Ok(value)
}

/// Accepts finite, strictly positive decimals.
pub fn require_positive_decimal(field: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::not_positive(field));
    }
    Ok(value)
}

/// Accepts positive decimals the column stores without rounding.
pub fn require_storable_decimal(
    field: &str,
    value: f64,
    column: DecimalColumn,
) -> Result<f64, ValidationError> {
    require_positive_decimal(field, value)?;
    let scaled = value * 10f64.powi(column.scale as i32);
    let off_grid = (scaled - scaled.round()).abs() > 1e-9 * scaled.abs().max(1.0);
    if value > column.max || off_grid {
        return Err(ValidationError::decimal_out_of_bounds(field, column.max, column.scale));
    }
    Ok(value)
}

pub fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

/// Length is counted in characters, not bytes.
pub fn require_max_chars(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::too_long(field, max, actual));
    }
    Ok(())
}

/// Validates list paging: `limit` in 1..=100, `offset` >= 0.
pub fn require_page(limit: i32, offset: i32) -> Result<(u32, u32), ValidationError> {
    if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(ValidationError::out_of_range(
            "limit",
            1,
            MAX_PAGE_LIMIT as i64,
            limit as i64,
        ));
    }
    if offset < 0 {
        return Err(ValidationError::out_of_range("offset", 0, i32::MAX as i64, offset as i64));
    }
    Ok((limit as u32, offset as u32))
}
