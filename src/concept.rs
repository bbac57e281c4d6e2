//! Object/attribute pairs: raw candidate tuples and closed formal concepts.

use std::fmt;

use crate::types::{AttributeSet, ObjectSet};

/// A candidate `(objects, attributes)` pair, as supplied by callers.
///
/// A tuple states that every object in `objects` has every attribute in
/// `attributes`. Unlike a [`Concept`], a tuple need not be closed.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Tuple {
    pub objects: ObjectSet,
    pub attributes: AttributeSet,
}

impl Tuple {
    pub fn new(objects: ObjectSet, attributes: AttributeSet) -> Self {
        Self { objects, attributes }
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.objects, self.attributes)
    }
}

/// A formal concept: a Galois-closed `(extent, intent)` pair.
///
/// Concepts are only built through [`Polar`][crate::polar::Polar], which
/// guarantees `object_polar(extent) == intent` and
/// `attribute_polar(intent) == extent`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Concept {
    extent: ObjectSet,
    intent: AttributeSet,
}

impl Concept {
    /// Caller must ensure the pair is closed.
    pub(crate) fn from_closed(extent: ObjectSet, intent: AttributeSet) -> Self {
        Self { extent, intent }
    }

    /// The object subset.
    pub fn extent(&self) -> &ObjectSet {
        &self.extent
    }

    /// The attribute subset.
    pub fn intent(&self) -> &AttributeSet {
        &self.intent
    }

    /// Returns true if `self ⊑ other`, i.e. the extent of `self` is contained in
    /// the extent of `other`.
    pub fn is_subconcept_of(&self, other: &Concept) -> bool {
        self.extent.is_subset(&other.extent)
    }

    pub fn into_parts(self) -> (ObjectSet, AttributeSet) {
        (self.extent, self.intent)
    }
}

impl From<Concept> for Tuple {
    fn from(concept: Concept) -> Self {
        let (objects, attributes) = concept.into_parts();
        Tuple { objects, attributes }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.extent, self.intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{attributes, objects};

    #[test]
    fn test_display() {
        let c = Concept::from_closed(objects([2, 1]), attributes([3]));
        assert_eq!(c.to_string(), "({g1, g2}, {m3})");

        let t = Tuple::new(objects([]), attributes([1, 2]));
        assert_eq!(t.to_string(), "({}, {m1, m2})");
    }

    #[test]
    fn test_subconcept() {
        let small = Concept::from_closed(objects([1]), attributes([1, 2]));
        let large = Concept::from_closed(objects([1, 2]), attributes([1]));
        assert!(small.is_subconcept_of(&large));
        assert!(!large.is_subconcept_of(&small));
        assert!(small.is_subconcept_of(&small));
    }
}
