// ============================================================================
// Datum
// Tri-state field: a known value, an unknown value, or no value at all
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A field that may be known, unknown, or not applicable.
///
/// `Unknown` and `NotApplicable` are deliberately distinct: an unknown minor
/// unit makes rounding a no-op because the unit cannot be trusted, while a
/// not-applicable one describes a continuous currency that has no minimal
/// unit at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Datum<T> {
    Known(T),
    Unknown,
    NotApplicable,
}

impl<T> Datum<T> {
    #[inline]
    pub fn known(&self) -> Option<&T> {
        match self {
            Datum::Known(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn into_known(self) -> Option<T> {
        match self {
            Datum::Known(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, Datum::Known(_))
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Datum::Unknown)
    }

    #[inline]
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Datum::NotApplicable)
    }

    pub fn as_ref(&self) -> Datum<&T> {
        match self {
            Datum::Known(value) => Datum::Known(value),
            Datum::Unknown => Datum::Unknown,
            Datum::NotApplicable => Datum::NotApplicable,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Datum<U> {
        match self {
            Datum::Known(value) => Datum::Known(f(value)),
            Datum::Unknown => Datum::Unknown,
            Datum::NotApplicable => Datum::NotApplicable,
        }
    }
}

impl<T> From<T> for Datum<T> {
    fn from(value: T) -> Self {
        Datum::Known(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_accessors() {
        let d = Datum::Known(100u32);
        assert_eq!(d.known(), Some(&100));
        assert!(d.is_known());
        assert_eq!(d.map(|v| v * 2).into_known(), Some(200));
    }

    #[test]
    fn test_unknown_and_not_applicable_differ() {
        let unknown: Datum<u32> = Datum::Unknown;
        let absent: Datum<u32> = Datum::NotApplicable;
        assert_ne!(unknown, absent);
        assert!(unknown.is_unknown() && !unknown.is_not_applicable());
        assert!(absent.is_not_applicable() && absent.known().is_none());
    }
}
