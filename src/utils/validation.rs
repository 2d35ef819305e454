use validator::Validate;

/// Validates every item, stopping at the first failure.
pub fn validate_all<T: Validate>(items: &[T]) -> Result<(), validator::ValidationErrors> {
    items.iter().try_for_each(|item| item.validate())
}
