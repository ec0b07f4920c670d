//! Validation error messages and the active error set

/// Shown when the email does not have an `a@b.c` shape
pub const INVALID_EMAIL_ERROR: &str = "Invalid email address";
/// Shown when the phone contains anything besides digits, spaces, hyphens, parens
pub const INVALID_PHONE_ERROR: &str = "Invalid phone number";
/// Shown when the graduation year input does not parse to a number
pub const INVALID_YEAR_ERROR: &str = "Graduation year must be a number";
/// Shown when the graduation year is below the minimum
pub const YEAR_TOO_LOW_ERROR: &str = "Graduation year must be 1976 or later";
/// Shown when the graduation year is above the maximum
pub const YEAR_TOO_HIGH_ERROR: &str = "Graduation year must be 2040 or earlier";

/// Set of currently active validation messages.
///
/// Insertion-ordered and duplicate-free so the rendered list stays stable
/// while the user types. Validators never throw; they flip membership here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    messages: Vec<&'static str>,
}

impl ErrorSet {
    /// Uniform add/remove rule shared by every validator: if `valid` holds the
    /// message is removed (no-op when absent), otherwise it is inserted once.
    pub fn set(&mut self, message: &'static str, valid: bool) {
        if valid {
            self.messages.retain(|m| *m != message);
        } else if !self.messages.contains(&message) {
            self.messages.push(message);
        }
    }

    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| *m == message)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Messages in insertion order, for display
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.messages.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_is_idempotent() {
        let mut errors = ErrorSet::default();
        errors.set(INVALID_EMAIL_ERROR, false);
        errors.set(INVALID_EMAIL_ERROR, false);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(INVALID_EMAIL_ERROR));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut errors = ErrorSet::default();
        errors.set(INVALID_PHONE_ERROR, true);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut errors = ErrorSet::default();
        errors.set(INVALID_EMAIL_ERROR, false);
        errors.set(INVALID_PHONE_ERROR, false);
        errors.set(INVALID_YEAR_ERROR, false);
        // Re-flagging an already-present message must not reorder it
        errors.set(INVALID_EMAIL_ERROR, false);
        let listed: Vec<_> = errors.iter().collect();
        assert_eq!(
            listed,
            vec![INVALID_EMAIL_ERROR, INVALID_PHONE_ERROR, INVALID_YEAR_ERROR]
        );
    }

    #[test]
    fn test_set_resolves_message() {
        let mut errors = ErrorSet::default();
        errors.set(YEAR_TOO_LOW_ERROR, false);
        assert!(errors.contains(YEAR_TOO_LOW_ERROR));
        errors.set(YEAR_TOO_LOW_ERROR, true);
        assert!(!errors.contains(YEAR_TOO_LOW_ERROR));
    }
}
