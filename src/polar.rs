//! The polar operator (Galois connection) of a formal context.
//!
//! For a context `(G, M, I)` the two polar maps are
//!
//! ```text
//! object_polar(A)    = { m ∈ M | ∀ g ∈ A: (g, m) ∈ I }
//! attribute_polar(B) = { g ∈ G | ∀ m ∈ B: (g, m) ∈ I }
//! ```
//!
//! Both are antitone, and their composition is a closure operator: applying
//! `object_polar ∘ attribute_polar ∘ object_polar` equals `object_polar`. A pair
//! `(A, B)` with `object_polar(A) = B` and `attribute_polar(B) = A` is a
//! [`Concept`].
//!
//! # Example
//!
//! ```
//! use fca_rs::context::Context;
//! use fca_rs::polar::Polar;
//! use fca_rs::types::{attributes, objects};
//!
//! let ctx = Context::from_table(&[
//!     [true, true, false],
//!     [true, false, true],
//! ]).unwrap();
//!
//! assert_eq!(ctx.object_polar(&objects([1, 2])), attributes([1]));
//! assert_eq!(ctx.attribute_polar(&attributes([1])), objects([1, 2]));
//! assert!(ctx.is_closed(&objects([1, 2])));
//! // No object has every attribute, so the empty set is an extent too
//! assert!(ctx.is_closed(&objects([])));
//! ```

use crate::concept::Concept;
use crate::types::{AttributeSet, ObjectSet};

/// A Galois connection between object subsets and attribute subsets.
///
/// Identifiers outside the universes have no incidences: an object set holding
/// an unknown object polarizes to the empty attribute set, and vice versa.
pub trait Polar {
    /// The object universe `G`.
    fn objects(&self) -> &ObjectSet;

    /// The attribute universe `M`.
    fn attributes(&self) -> &AttributeSet;

    /// Attributes shared by every object in `objects`.
    ///
    /// The empty object set polarizes to the full attribute universe.
    fn object_polar(&self, objects: &ObjectSet) -> AttributeSet;

    /// Objects having every attribute in `attributes`.
    ///
    /// The empty attribute set polarizes to the full object universe.
    fn attribute_polar(&self, attributes: &AttributeSet) -> ObjectSet;

    /// The closure `attribute_polar(object_polar(objects))`.
    fn object_closure(&self, objects: &ObjectSet) -> ObjectSet {
        self.attribute_polar(&self.object_polar(objects))
    }

    /// The closure `object_polar(attribute_polar(attributes))`.
    fn attribute_closure(&self, attributes: &AttributeSet) -> AttributeSet {
        self.object_polar(&self.attribute_polar(attributes))
    }

    /// Returns true if `objects` is the extent of some concept.
    fn is_closed(&self, objects: &ObjectSet) -> bool {
        self.object_closure(objects) == *objects
    }

    /// The smallest concept whose extent contains `objects`.
    fn concept_of_objects(&self, objects: &ObjectSet) -> Concept {
        let intent = self.object_polar(objects);
        let extent = self.attribute_polar(&intent);
        Concept::from_closed(extent, intent)
    }

    /// The largest concept whose intent contains `attributes`.
    fn concept_of_attributes(&self, attributes: &AttributeSet) -> Concept {
        let extent = self.attribute_polar(attributes);
        let intent = self.object_polar(&extent);
        Concept::from_closed(extent, intent)
    }

    /// The greatest concept: `(G, object_polar(G))`.
    fn top(&self) -> Concept {
        self.concept_of_objects(self.objects())
    }

    /// The least concept: `(attribute_polar(M), M)`.
    fn bottom(&self) -> Concept {
        self.concept_of_attributes(self.attributes())
    }
}

/// Appends the top and bottom concepts unless concepts with the same extents
/// are already present.
pub(crate) fn ensure_extremes(concepts: &mut Vec<Concept>, polar: &impl Polar) {
    for extreme in [polar.top(), polar.bottom()] {
        if !concepts.iter().any(|c| c.extent() == extreme.extent()) {
            log::debug!("synthesizing extreme concept {}", extreme);
            concepts.push(extreme);
        }
    }
}
