use core::any::type_name;

use thiserror::Error;

/// Errors reported by the sort entry points.
///
/// On any error the input slices still hold a permutation of their original
/// contents: the engine only ever exchanges elements, it never drops or
/// duplicates them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A paired call received a keys slice and a values slice of different
    /// lengths. Nothing was mutated.
    #[error("keys and values must have equal lengths, got {keys} keys and {values} values")]
    LengthMismatch { keys: usize, values: usize },

    /// The supplied comparison does not implement a total order.
    ///
    /// Raised when a partition scan runs into its range boundary while
    /// still being told to continue, or when a small input fails the
    /// post-sort order walk. Either way the supplied ordering contradicted
    /// itself on the keys it was given.
    #[error("comparison does not correctly implement a total order for `{key_type}`")]
    BadComparer { key_type: &'static str },

    /// A `sort_partial*` call hit a pair of keys with no defined ordering,
    /// for example a float `NaN`.
    #[error("`{key_type}` keys contain values that do not compare")]
    Uncomparable { key_type: &'static str },
}

impl SortError {
    pub(crate) fn bad_comparer<K>() -> Self {
        SortError::BadComparer {
            key_type: type_name::<K>(),
        }
    }

    pub(crate) fn uncomparable<K>() -> Self {
        SortError::Uncomparable {
            key_type: type_name::<K>(),
        }
    }
}
