//! Formal contexts of arbitrary size.
//!
//! A [`Context`] is the incidence relation `I ⊆ G × M` between a set of objects
//! `G` and a set of attributes `M`. It is built once, validated eagerly, and
//! never mutated afterwards.
//!
//! The relation is stored twice, as rows (object → attributes) and as columns
//! (attribute → objects), so both polar maps are plain intersections over the
//! relevant rows or columns. There is no size ceiling; for small universes see
//! the word-packed [`DenseContext`][crate::dense::DenseContext].
//!
//! # Examples
//!
//! From a boolean table, with 1-based identifiers:
//!
//! ```
//! use fca_rs::context::Context;
//! use fca_rs::types::{AttributeId, ObjectId};
//!
//! let ctx = Context::from_table(&[
//!     vec![false, true, true],
//!     vec![true, false, true],
//! ]).unwrap();
//!
//! assert_eq!(ctx.num_objects(), 2);
//! assert_eq!(ctx.num_attributes(), 3);
//! assert!(ctx.has(ObjectId::new(1), AttributeId::new(2)));
//! assert!(!ctx.has(ObjectId::new(1), AttributeId::new(1)));
//! ```
//!
//! From tuples over explicit universes:
//!
//! ```
//! use fca_rs::concept::Tuple;
//! use fca_rs::context::Context;
//! use fca_rs::types::{attributes, objects, AttributeId, ObjectId};
//!
//! let ctx = Context::from_tuples(
//!     [
//!         Tuple::new(objects([10, 20]), attributes([1])),
//!         Tuple::new(objects([20]), attributes([2])),
//!     ],
//!     objects([10, 20, 30]),
//!     attributes([1, 2, 3]),
//! ).unwrap();
//!
//! assert_eq!(ctx.row(ObjectId::new(20)), attributes([1, 2]));
//! assert_eq!(ctx.column(AttributeId::new(3)), objects([]));
//! ```

use std::collections::BTreeMap;

use crate::concept::Tuple;
use crate::dense::DenseContext;
use crate::error::{FcaError, Result};
use crate::polar::Polar;
use crate::types::{AttributeId, AttributeSet, ObjectId, ObjectSet};

/// A formal context `(G, M, I)` with arbitrary identifiers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Context {
    objects: ObjectSet,
    attributes: AttributeSet,
    /// Object → its attributes. Objects without attributes have no entry.
    rows: BTreeMap<ObjectId, AttributeSet>,
    /// Attribute → its objects. Attributes without objects have no entry.
    columns: BTreeMap<AttributeId, ObjectSet>,
}

impl Context {
    /// Builds a context from a rectangular boolean table.
    ///
    /// Object `i` has attribute `j` iff `table[i-1][j-1]` is true. The number of
    /// attributes is the length of the first row; an empty table yields empty
    /// universes.
    ///
    /// # Errors
    ///
    /// [`FcaError::RaggedTable`] if rows differ in length.
    pub fn from_table<R: AsRef<[bool]>>(table: &[R]) -> Result<Self> {
        let num_attributes = check_rectangular(table)?;

        let objects = (1..=table.len() as u32).map(ObjectId::new).collect();
        let attributes = (1..=num_attributes as u32).map(AttributeId::new).collect();
        let incidence = table.iter().enumerate().flat_map(|(i, row)| {
            row.as_ref()
                .iter()
                .enumerate()
                .filter_map(move |(j, &has)| has.then(|| (ObjectId::new(i as u32 + 1), AttributeId::new(j as u32 + 1))))
        });

        Self::from_incidence(objects, attributes, incidence)
    }

    /// Builds a context whose incidence is the union of the rectangles
    /// `tuple.objects × tuple.attributes`.
    ///
    /// # Errors
    ///
    /// [`FcaError::UnknownObject`] or [`FcaError::UnknownAttribute`] if a tuple
    /// mentions an identifier outside the given universes.
    pub fn from_tuples(
        tuples: impl IntoIterator<Item = Tuple>,
        objects: ObjectSet,
        attributes: AttributeSet,
    ) -> Result<Self> {
        let mut incidence = Vec::new();
        for tuple in tuples {
            for g in tuple.objects.iter() {
                for m in tuple.attributes.iter() {
                    incidence.push((g, m));
                }
            }
        }
        Self::from_incidence(objects, attributes, incidence)
    }

    /// Builds a context from explicit `(object, attribute)` incidence pairs.
    ///
    /// # Errors
    ///
    /// [`FcaError::UnknownObject`] or [`FcaError::UnknownAttribute`] if a pair
    /// mentions an identifier outside the given universes.
    pub fn from_incidence(
        objects: ObjectSet,
        attributes: AttributeSet,
        incidence: impl IntoIterator<Item = (ObjectId, AttributeId)>,
    ) -> Result<Self> {
        let mut rows = BTreeMap::<ObjectId, AttributeSet>::new();
        let mut columns = BTreeMap::<AttributeId, ObjectSet>::new();

        for (g, m) in incidence {
            if !objects.contains(&g) {
                return Err(FcaError::UnknownObject(g));
            }
            if !attributes.contains(&m) {
                return Err(FcaError::UnknownAttribute(m));
            }
            rows.entry(g).or_default().insert(m);
            columns.entry(m).or_default().insert(g);
        }

        log::debug!(
            "context: {} objects, {} attributes, {} incidences",
            objects.len(),
            attributes.len(),
            rows.values().map(|r| r.len()).sum::<usize>()
        );

        Ok(Self {
            objects,
            attributes,
            rows,
            columns,
        })
    }

    pub fn num_objects(&self) -> usize {
        self.objects.len()
    }

    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if object `g` has attribute `m`.
    pub fn has(&self, g: ObjectId, m: AttributeId) -> bool {
        self.rows.get(&g).is_some_and(|row| row.contains(&m))
    }

    /// Attributes of a single object.
    pub fn row(&self, g: ObjectId) -> AttributeSet {
        self.rows.get(&g).cloned().unwrap_or_default()
    }

    /// Objects having a single attribute.
    pub fn column(&self, m: AttributeId) -> ObjectSet {
        self.columns.get(&m).cloned().unwrap_or_default()
    }

    /// The canonical candidate list: one tuple `(column(m), {m})` per attribute,
    /// in attribute order.
    ///
    /// Every concept extent is an intersection of attribute columns, so this
    /// list is complete for the [sparse enumerator][crate::enumerate::sparse].
    pub fn attribute_extents(&self) -> Vec<Tuple> {
        self.attributes
            .iter()
            .map(|m| Tuple::new(self.column(m), AttributeSet::from([m])))
            .collect()
    }

    /// Converts into the word-packed representation.
    ///
    /// Objects and attributes are mapped to bits in ascending identifier order.
    ///
    /// # Errors
    ///
    /// [`FcaError::CapacityExceeded`] if either universe is larger than
    /// [`BitMask::CAPACITY`][crate::bitmask::BitMask::CAPACITY].
    pub fn to_dense(&self) -> Result<DenseContext> {
        DenseContext::from_context(self)
    }
}

impl Polar for Context {
    fn objects(&self) -> &ObjectSet {
        &self.objects
    }

    fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    fn object_polar(&self, objects: &ObjectSet) -> AttributeSet {
        let mut iter = objects.iter();
        let Some(first) = iter.next() else {
            return self.attributes.clone();
        };
        let mut polar = self.row(first);
        for g in iter {
            if polar.is_empty() {
                break;
            }
            polar = match self.rows.get(&g) {
                Some(row) => polar.intersection(row),
                None => AttributeSet::new(),
            };
        }
        polar
    }

    fn attribute_polar(&self, attributes: &AttributeSet) -> ObjectSet {
        let mut iter = attributes.iter();
        let Some(first) = iter.next() else {
            return self.objects.clone();
        };
        let mut polar = self.column(first);
        for m in iter {
            if polar.is_empty() {
                break;
            }
            polar = match self.columns.get(&m) {
                Some(column) => polar.intersection(column),
                None => ObjectSet::new(),
            };
        }
        polar
    }
}

/// Returns the common row length, or an error naming the first ragged row.
pub(crate) fn check_rectangular<R: AsRef<[bool]>>(table: &[R]) -> Result<usize> {
    let expected = table.first().map_or(0, |row| row.as_ref().len());
    for (row, r) in table.iter().enumerate() {
        let found = r.as_ref().len();
        if found != expected {
            return Err(FcaError::RaggedTable { row, expected, found });
        }
    }
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::types::{attributes, objects};

    const T: bool = true;
    const F: bool = false;

    fn sample() -> Context {
        Context::from_table(&[
            [F, T, T, T], //
            [T, F, T, T],
            [T, F, T, F],
            [T, F, T, F],
            [T, F, F, F],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_table() {
        let ctx = sample();
        assert_eq!(ctx.objects(), &objects(1..=5));
        assert_eq!(ctx.attributes(), &attributes(1..=4));
        assert_eq!(ctx.row(ObjectId::new(1)), attributes([2, 3, 4]));
        assert_eq!(ctx.column(AttributeId::new(1)), objects([2, 3, 4, 5]));
        assert!(ctx.has(ObjectId::new(5), AttributeId::new(1)));
        assert!(!ctx.has(ObjectId::new(5), AttributeId::new(3)));
    }

    #[test]
    fn test_ragged_table() {
        let res = Context::from_table(&[vec![T, F], vec![T], vec![F, F]]);
        assert_eq!(
            res,
            Err(FcaError::RaggedTable {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_empty_table() {
        let table: [[bool; 0]; 0] = [];
        let ctx = Context::from_table(&table).unwrap();
        assert_eq!(ctx.num_objects(), 0);
        assert_eq!(ctx.num_attributes(), 0);
    }

    #[test]
    fn test_from_tuples_unknown_ids() {
        let res = Context::from_tuples(
            [Tuple::new(objects([1, 7]), attributes([1]))],
            objects([1, 2]),
            attributes([1]),
        );
        assert_eq!(res, Err(FcaError::UnknownObject(ObjectId::new(7))));

        let res = Context::from_tuples(
            [Tuple::new(objects([1]), attributes([4]))],
            objects([1, 2]),
            attributes([1]),
        );
        assert_eq!(res, Err(FcaError::UnknownAttribute(AttributeId::new(4))));
    }

    #[test]
    fn test_from_tuples_matches_table() {
        let ctx = sample();
        let rebuilt = Context::from_tuples(
            ctx.attribute_extents(),
            ctx.objects().clone(),
            ctx.attributes().clone(),
        )
        .unwrap();
        assert_eq!(rebuilt, ctx);
    }

    #[test]
    fn test_polar_empty_sets() {
        let ctx = sample();
        assert_eq!(ctx.object_polar(&ObjectSet::new()), attributes(1..=4));
        assert_eq!(ctx.attribute_polar(&AttributeSet::new()), objects(1..=5));
    }

    #[test]
    fn test_polar() {
        let ctx = sample();
        assert_eq!(ctx.object_polar(&objects([2, 3, 4])), attributes([1, 3]));
        assert_eq!(ctx.attribute_polar(&attributes([1, 3])), objects([2, 3, 4]));
        assert_eq!(ctx.object_polar(&objects(1..=5)), attributes([]));
        assert_eq!(ctx.attribute_polar(&attributes(1..=4)), objects([]));
    }

    #[test]
    fn test_polar_unknown_ids() {
        let ctx = sample();
        assert_eq!(ctx.object_polar(&objects([1, 99])), attributes([]));
        assert_eq!(ctx.attribute_polar(&attributes([99])), objects([]));
    }

    #[test]
    fn test_closure() {
        let ctx = sample();
        // Objects 3 and 4 have identical rows, so neither is closed alone.
        assert!(!ctx.is_closed(&objects([3])));
        assert_eq!(ctx.object_closure(&objects([3])), objects([2, 3, 4]));
        assert!(ctx.is_closed(&objects([2, 3, 4])));
        assert_eq!(ctx.attribute_closure(&attributes([2])), attributes([2, 3, 4]));
    }

    #[test]
    fn test_attribute_extents() {
        let ctx = sample();
        let extents = ctx.attribute_extents();
        assert_eq!(extents.len(), 4);
        assert_eq!(extents[0], Tuple::new(objects([2, 3, 4, 5]), attributes([1])));
        assert_eq!(extents[1], Tuple::new(objects([1]), attributes([2])));
    }
}
