//! Field container that tracks initialization state.

/// A record field: either never assigned, or holding a value
///
/// Nullability is expressed by the inner type: a `Slot<Option<String>>` that
/// was explicitly set to null is `Set(None)`, which is distinct from `Unset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot<T> {
    /// No value has ever been assigned
    #[default]
    Unset,
    /// The field holds a value
    Set(T),
}

impl<T> Slot<T> {
    /// Whether a value has been assigned
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Borrow the value, if assigned
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }

    /// Assign a value
    pub fn set(&mut self, value: T) {
        *self = Self::Set(value);
    }

    /// Take the value out, leaving the slot unset
    pub fn take(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }

    /// Convert into an `Option`
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unset => None,
        }
    }
}

impl<T: Clone + Default> Slot<T> {
    /// The assigned value, or the type default when unset
    #[must_use]
    pub fn value_or_default(&self) -> T {
        self.get().cloned().unwrap_or_default()
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_and_null_are_distinct() {
        let unset: Slot<Option<String>> = Slot::Unset;
        let null: Slot<Option<String>> = Slot::Set(None);
        assert!(!unset.is_set());
        assert!(null.is_set());
        assert_ne!(unset, null);
    }

    #[test]
    fn test_take_resets() {
        let mut slot = Slot::from(3_i64);
        assert_eq!(slot.take(), Some(3));
        assert!(!slot.is_set());
        assert_eq!(slot.value_or_default(), 0);
    }
}
