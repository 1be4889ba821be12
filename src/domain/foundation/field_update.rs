//! Partial-update field wrapper.

use super::ValidationError;

/// A change requested for one nullable column in a partial update.
///
/// `Unchanged` keeps the stored value, `Clear` writes NULL and `Set` writes
/// the new value. This keeps "field omitted" distinct from "field set to null".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    Clear,
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// True when the caller supplied the field at all (null or value).
    pub fn is_supplied(&self) -> bool {
        !matches!(self, FieldUpdate::Unchanged)
    }

    /// The new value, if one is being set.
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            _ => None,
        }
    }

    /// Resolves the column's value after applying this change to `current`.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            FieldUpdate::Unchanged => current,
            FieldUpdate::Clear => None,
            FieldUpdate::Set(value) => Some(value),
        }
    }

    /// Builds an update from an explicitly supplied nullable value.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldUpdate<U> {
        match self {
            FieldUpdate::Unchanged => FieldUpdate::Unchanged,
            FieldUpdate::Clear => FieldUpdate::Clear,
            FieldUpdate::Set(value) => FieldUpdate::Set(f(value)),
        }
    }
}

impl<T> FieldUpdate<T> {
    /// For non-nullable columns: an explicit null is rejected against `field`.
    pub fn required(self, field: &str) -> Result<Option<T>, ValidationError> {
        match self {
            FieldUpdate::Unchanged => Ok(None),
            FieldUpdate::Clear => Err(ValidationError::null_not_allowed(field)),
            FieldUpdate::Set(value) => Ok(Some(value)),
        }
    }
}

impl<T: Clone> FieldUpdate<T> {
    /// Value to bind for a nullable column: `None` both for `Clear` and `Unchanged`.
    pub fn cloned_value(&self) -> Option<T> {
        self.value().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_keeps_current_value() {
        assert_eq!(FieldUpdate::<i32>::Unchanged.apply(Some(3)), Some(3));
        assert_eq!(FieldUpdate::<i32>::Unchanged.apply(None), None);
    }

    #[test]
    fn clear_nulls_the_value() {
        assert_eq!(FieldUpdate::<i32>::Clear.apply(Some(3)), None);
    }

    #[test]
    fn set_replaces_the_value() {
        assert_eq!(FieldUpdate::Set(5).apply(Some(3)), Some(5));
        assert_eq!(FieldUpdate::Set(5).apply(None), Some(5));
    }

    #[test]
    fn supplied_distinguishes_absent_from_null() {
        assert!(!FieldUpdate::<i32>::Unchanged.is_supplied());
        assert!(FieldUpdate::<i32>::Clear.is_supplied());
        assert!(FieldUpdate::Set(1).is_supplied());
    }

    #[test]
    fn from_nullable_maps_none_to_clear() {
        assert_eq!(FieldUpdate::<i32>::from_nullable(None), FieldUpdate::Clear);
        assert_eq!(FieldUpdate::from_nullable(Some(2)), FieldUpdate::Set(2));
    }

    #[test]
    fn required_rejects_null() {
        assert_eq!(FieldUpdate::<i32>::Unchanged.required("sets"), Ok(None));
        assert_eq!(FieldUpdate::Set(4).required("sets"), Ok(Some(4)));
        let err = FieldUpdate::<i32>::Clear.required("sets").unwrap_err();
        assert_eq!(err.field(), "sets");
        assert_eq!(err.to_string(), "Field 'sets' cannot be null");
    }

    #[test]
    fn default_is_unchanged() {
        assert_eq!(FieldUpdate::<String>::default(), FieldUpdate::Unchanged);
    }
}
