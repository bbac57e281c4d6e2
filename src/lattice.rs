//! The concept lattice: a deduplicated, ordered arena of concepts.
//!
//! Concepts are identified by their extent. [`ConceptLattice::new`] drops
//! repeated extents (the first occurrence wins), makes sure the top and bottom
//! concepts are present, and sorts the arena by descending extent cardinality.
//! Concepts of equal cardinality keep their insertion order, so the sort key
//! never decides identity.
//!
//! The partial order is extent inclusion: `a ⊑ b ⟺ extent(a) ⊆ extent(b)`.
//!
//! # Example
//!
//! ```
//! use fca_rs::context::Context;
//! use fca_rs::enumerate::Strategy;
//! use fca_rs::lattice::ConceptLattice;
//!
//! let ctx = Context::from_table(&[[true, true], [true, false]]).unwrap();
//! let lattice = ConceptLattice::compute(&ctx, Strategy::Auto).unwrap();
//!
//! assert_eq!(lattice.len(), 2);
//! assert_eq!(lattice.top().extent().len(), 2);
//! assert!(lattice.leq(lattice.bottom_id(), lattice.top_id()));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use log::debug;

use crate::concept::Concept;
use crate::polar::{ensure_extremes, Polar};
use crate::types::ObjectSet;

/// Index of a concept in its [`ConceptLattice`].
///
/// Ids follow the lattice order: id 0 is the top concept and larger ids never
/// have larger extents.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ConceptId(usize);

impl ConceptId {
    pub const fn new(index: usize) -> Self {
        ConceptId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// A deduplicated collection of concepts ordered by descending extent size.
#[derive(Debug, Clone)]
pub struct ConceptLattice {
    concepts: Vec<Concept>,
    /// Extent → position in `concepts`.
    index: HashMap<ObjectSet, usize>,
}

impl ConceptLattice {
    /// Builds the lattice from enumerated concepts.
    ///
    /// Duplicated extents are dropped, and the top and bottom concepts of
    /// `polar` are added if missing.
    pub fn new(concepts: impl IntoIterator<Item = Concept>, polar: &impl Polar) -> Self {
        let mut unique: Vec<Concept> = Vec::new();
        let mut seen: HashSet<ObjectSet> = HashSet::new();
        let mut duplicates = 0usize;

        for concept in concepts {
            if seen.insert(concept.extent().clone()) {
                unique.push(concept);
            } else {
                duplicates += 1;
            }
        }
        ensure_extremes(&mut unique, polar);

        // Stable: equal cardinalities keep insertion order.
        unique.sort_by_key(|c| std::cmp::Reverse(c.extent().len()));

        let index = unique
            .iter()
            .enumerate()
            .map(|(i, c)| (c.extent().clone(), i))
            .collect();

        debug!("lattice: {} concepts ({} duplicates dropped)", unique.len(), duplicates);

        Self {
            concepts: unique,
            index,
        }
    }

    /// Number of concepts. Always at least one.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Always false: a lattice holds at least its top concept.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// The concepts in lattice order.
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (ConceptId, &Concept)> + '_ {
        self.concepts.iter().enumerate().map(|(i, c)| (ConceptId(i), c))
    }

    /// All concept ids, in lattice order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = ConceptId> {
        (0..self.concepts.len()).map(ConceptId)
    }

    /// # Panics
    ///
    /// Panics if the id does not belong to this lattice.
    pub fn get(&self, id: ConceptId) -> &Concept {
        &self.concepts[id.0]
    }

    /// The concept with the given extent, if any.
    pub fn find(&self, extent: &ObjectSet) -> Option<ConceptId> {
        self.index.get(extent).copied().map(ConceptId)
    }

    pub fn contains(&self, concept: &Concept) -> bool {
        self.find(concept.extent())
            .is_some_and(|id| self.get(id).intent() == concept.intent())
    }

    /// The greatest concept (largest extent).
    pub fn top_id(&self) -> ConceptId {
        ConceptId(0)
    }

    /// The least concept (smallest extent).
    pub fn bottom_id(&self) -> ConceptId {
        ConceptId(self.concepts.len() - 1)
    }

    pub fn top(&self) -> &Concept {
        self.get(self.top_id())
    }

    pub fn bottom(&self) -> &Concept {
        self.get(self.bottom_id())
    }

    /// Returns true if `a ⊑ b` in the lattice order.
    pub fn leq(&self, a: ConceptId, b: ConceptId) -> bool {
        self.get(a).is_subconcept_of(self.get(b))
    }

    /// Returns true if both lattices hold exactly the same concepts, regardless
    /// of order.
    pub fn same_concepts(&self, other: &ConceptLattice) -> bool {
        self.len() == other.len() && self.concepts.iter().all(|c| other.contains(c))
    }
}

impl<'a> IntoIterator for &'a ConceptLattice {
    type Item = &'a Concept;
    type IntoIter = std::slice::Iter<'a, Concept>;

    fn into_iter(self) -> Self::IntoIter {
        self.concepts.iter()
    }
}

/// One line per concept: `{attributes}  :  {objects}`, `Empty` for empty sides.
impl fmt::Display for ConceptLattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn side<T: Ord + Copy + fmt::Display>(set: &crate::types::IdSet<T>) -> String {
            if set.is_empty() {
                "Empty".to_string()
            } else {
                set.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",")
            }
        }

        writeln!(f, "{{attributes}}  :  {{objects}}")?;
        for concept in &self.concepts {
            writeln!(f, "{{{}}}  :  {{{}}}", side(concept.intent()), side(concept.extent()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::context::Context;
    use crate::types::{attributes, objects};

    const T: bool = true;
    const F: bool = false;

    fn chain() -> Context {
        // Staircase: object i has attributes 1..=i
        Context::from_table(&[[T, F, F], [T, T, F], [T, T, T]]).unwrap()
    }

    #[test]
    fn test_dedup_and_order() {
        let ctx = chain();
        let a = ctx.concept_of_objects(&objects([3]));
        let b = ctx.concept_of_objects(&objects([2, 3]));
        let lattice = ConceptLattice::new([a.clone(), b.clone(), a.clone(), b.clone()], &ctx);

        // a, b, plus synthesized top ({1,2,3}, {1}); bottom has extent {3} = a
        assert_eq!(lattice.len(), 3);
        let sizes: Vec<_> = lattice.concepts().iter().map(|c| c.extent().len()).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
        assert_eq!(lattice.top().intent(), &attributes([1]));
        assert_eq!(lattice.bottom(), &a);
    }

    #[test]
    fn test_equal_cardinality_kept() {
        let ctx = Context::from_table(&[[T, F, F], [F, T, F], [F, F, T]]).unwrap();
        let singletons: Vec<_> = (1..=3).map(|g| ctx.concept_of_objects(&objects([g]))).collect();
        let lattice = ConceptLattice::new(singletons.clone(), &ctx);

        assert_eq!(lattice.len(), 5);
        // Same cardinality, insertion order preserved
        assert_eq!(&lattice.concepts()[1..4], &singletons[..]);
    }

    #[test]
    fn test_find_and_contains() {
        let ctx = chain();
        let lattice = ConceptLattice::new(Vec::new(), &ctx);
        let id = lattice.find(&objects([1, 2, 3])).unwrap();
        assert_eq!(id, lattice.top_id());
        assert!(lattice.contains(&ctx.top()));
        assert!(lattice.contains(&ctx.bottom()));
        assert_eq!(lattice.find(&objects([1])), None);
    }

    #[test]
    fn test_leq() {
        let ctx = chain();
        let all: Vec<_> = [vec![3], vec![2, 3], vec![1, 2, 3]]
            .into_iter()
            .map(|ids| ctx.concept_of_objects(&objects(ids)))
            .collect();
        let lattice = ConceptLattice::new(all, &ctx);
        for a in lattice.ids() {
            for b in lattice.ids() {
                assert_eq!(lattice.leq(a, b), a >= b, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_display() {
        let ctx = Context::from_table(&[[T, F], [T, T]]).unwrap();
        let concepts = vec![ctx.concept_of_objects(&objects([2]))];
        let lattice = ConceptLattice::new(concepts, &ctx);
        let text = lattice.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "{attributes}  :  {objects}");
        assert_eq!(lines[1], "{m1}  :  {g1,g2}");
        assert_eq!(lines[2], "{m1,m2}  :  {g2}");
    }

    #[test]
    fn test_empty_context() {
        let table: [[bool; 0]; 0] = [];
        let ctx = Context::from_table(&table).unwrap();
        let lattice = ConceptLattice::new(Vec::new(), &ctx);
        assert_eq!(lattice.len(), 1);
        assert_eq!(lattice.top_id(), lattice.bottom_id());
        assert_eq!(lattice.to_string().lines().nth(1), Some("{Empty}  :  {Empty}"));
    }
}
