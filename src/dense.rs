//! Word-packed formal contexts for brute-force enumeration.
//!
//! A [`DenseContext`] maps its objects and attributes onto bit positions so that
//! every subset of either universe fits in one [`BitMask`]. Polar sets are
//! computed by a bit-scan over the set bits, intersecting the rows (or columns)
//! they select.
//!
//! Both universes are limited to [`BitMask::CAPACITY`] elements. Larger
//! contexts are rejected with [`FcaError::CapacityExceeded`] instead of
//! silently wrapping; use [`Context`] for those.
//!
//! # Example
//!
//! ```
//! use fca_rs::bitmask::BitMask;
//! use fca_rs::dense::DenseContext;
//!
//! let ctx = DenseContext::from_table(&[
//!     [true, true],
//!     [true, false],
//! ]).unwrap();
//!
//! // Both objects share only the first attribute.
//! let both = BitMask::from_bits(0b11);
//! assert_eq!(ctx.object_polar_mask(both), BitMask::from_bits(0b01));
//! ```

use crate::bitmask::BitMask;
use crate::context::{check_rectangular, Context};
use crate::error::{FcaError, Result, Universe};
use crate::polar::Polar;
use crate::types::{AttributeId, AttributeSet, ObjectId, ObjectSet};

/// A formal context whose universes fit in a machine word.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DenseContext {
    /// Bit index → object identifier, ascending.
    object_ids: Vec<ObjectId>,
    /// Bit index → attribute identifier, ascending.
    attribute_ids: Vec<AttributeId>,
    /// Per object: the mask of its attributes.
    rows: Vec<BitMask>,
    /// Per attribute: the mask of its objects.
    columns: Vec<BitMask>,
    objects: ObjectSet,
    attributes: AttributeSet,
}

impl DenseContext {
    /// Builds a dense context from a rectangular boolean table.
    ///
    /// Identifiers are 1-based, as in [`Context::from_table`]: object `i` is
    /// bit `i - 1`.
    ///
    /// # Errors
    ///
    /// - [`FcaError::RaggedTable`] if rows differ in length.
    /// - [`FcaError::CapacityExceeded`] if either dimension exceeds [`BitMask::CAPACITY`].
    pub fn from_table<R: AsRef<[bool]>>(table: &[R]) -> Result<Self> {
        let num_attributes = check_rectangular(table)?;
        check_capacity(Universe::Objects, table.len())?;
        check_capacity(Universe::Attributes, num_attributes)?;

        let rows = table
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .enumerate()
                    .filter_map(|(j, &has)| has.then_some(j))
                    .collect()
            })
            .collect();

        Ok(Self::from_rows(
            (1..=table.len() as u32).map(ObjectId::new).collect(),
            (1..=num_attributes as u32).map(AttributeId::new).collect(),
            rows,
        ))
    }

    /// Packs a sparse context, assigning bits in ascending identifier order.
    pub(crate) fn from_context(context: &Context) -> Result<Self> {
        check_capacity(Universe::Objects, context.num_objects())?;
        check_capacity(Universe::Attributes, context.num_attributes())?;

        let object_ids: Vec<ObjectId> = context.objects().iter().collect();
        let attribute_ids: Vec<AttributeId> = context.attributes().iter().collect();
        let rows = object_ids
            .iter()
            .map(|&g| {
                context
                    .row(g)
                    .iter()
                    .filter_map(|m| attribute_ids.binary_search(&m).ok())
                    .collect()
            })
            .collect();

        Ok(Self::from_rows(object_ids, attribute_ids, rows))
    }

    fn from_rows(object_ids: Vec<ObjectId>, attribute_ids: Vec<AttributeId>, rows: Vec<BitMask>) -> Self {
        let mut columns = vec![BitMask::empty(); attribute_ids.len()];
        for (i, row) in rows.iter().enumerate() {
            for j in row.iter() {
                columns[j].insert(i);
            }
        }

        Self {
            objects: object_ids.iter().copied().collect(),
            attributes: attribute_ids.iter().copied().collect(),
            object_ids,
            attribute_ids,
            rows,
            columns,
        }
    }

    pub fn num_objects(&self) -> usize {
        self.object_ids.len()
    }

    pub fn num_attributes(&self) -> usize {
        self.attribute_ids.len()
    }

    /// The mask of all objects.
    pub fn all_objects_mask(&self) -> BitMask {
        BitMask::full(self.num_objects())
    }

    /// The mask of all attributes.
    pub fn all_attributes_mask(&self) -> BitMask {
        BitMask::full(self.num_attributes())
    }

    /// Attributes shared by every object in `objects`.
    #[inline]
    pub fn object_polar_mask(&self, objects: BitMask) -> BitMask {
        let mut polar = self.all_attributes_mask();
        for i in objects.iter() {
            polar = polar.intersection(self.rows[i]);
            if polar.is_empty() {
                break;
            }
        }
        polar
    }

    /// Objects having every attribute in `attributes`.
    #[inline]
    pub fn attribute_polar_mask(&self, attributes: BitMask) -> BitMask {
        let mut polar = self.all_objects_mask();
        for j in attributes.iter() {
            polar = polar.intersection(self.columns[j]);
            if polar.is_empty() {
                break;
            }
        }
        polar
    }

    /// Returns true if `objects` is the extent of some concept.
    #[inline]
    pub fn is_closed_mask(&self, objects: BitMask) -> bool {
        self.attribute_polar_mask(self.object_polar_mask(objects)) == objects
    }

    /// Largest object universe for which [`DenseContext::polar_table`] is built.
    pub const POLAR_TABLE_LIMIT: usize = 20;

    /// The attribute polar of every object subset, indexed by the subset's bits.
    ///
    /// # Panics
    ///
    /// Panics if the context has more than [`Self::POLAR_TABLE_LIMIT`] objects,
    /// since the table has `2^n` entries.
    pub fn polar_table(&self) -> Vec<BitMask> {
        assert!(
            self.num_objects() <= Self::POLAR_TABLE_LIMIT,
            "Polar table needs at most {} objects, got {}",
            Self::POLAR_TABLE_LIMIT,
            self.num_objects()
        );
        let subsets = 1u64 << self.num_objects();
        (0..subsets)
            .map(|bits| self.object_polar_mask(BitMask::from_bits(bits)))
            .collect()
    }

    /// Object identifiers selected by a mask.
    pub fn objects_of(&self, mask: BitMask) -> ObjectSet {
        mask.iter().map(|i| self.object_ids[i]).collect()
    }

    /// Attribute identifiers selected by a mask.
    pub fn attributes_of(&self, mask: BitMask) -> AttributeSet {
        mask.iter().map(|j| self.attribute_ids[j]).collect()
    }

    /// The mask of an object set, or `None` if it holds an unknown object.
    pub fn object_mask(&self, objects: &ObjectSet) -> Option<BitMask> {
        objects
            .iter()
            .map(|g| self.object_ids.binary_search(&g).ok())
            .collect()
    }

    /// The mask of an attribute set, or `None` if it holds an unknown attribute.
    pub fn attribute_mask(&self, attributes: &AttributeSet) -> Option<BitMask> {
        attributes
            .iter()
            .map(|m| self.attribute_ids.binary_search(&m).ok())
            .collect()
    }
}

impl Polar for DenseContext {
    fn objects(&self) -> &ObjectSet {
        &self.objects
    }

    fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    fn object_polar(&self, objects: &ObjectSet) -> AttributeSet {
        match self.object_mask(objects) {
            Some(mask) => self.attributes_of(self.object_polar_mask(mask)),
            None => AttributeSet::new(),
        }
    }

    fn attribute_polar(&self, attributes: &AttributeSet) -> ObjectSet {
        match self.attribute_mask(attributes) {
            Some(mask) => self.objects_of(self.attribute_polar_mask(mask)),
            None => ObjectSet::new(),
        }
    }
}

fn check_capacity(universe: Universe, size: usize) -> Result<()> {
    if size > BitMask::CAPACITY {
        return Err(FcaError::CapacityExceeded {
            universe,
            size,
            limit: BitMask::CAPACITY,
        });
    }
    Ok(())
}
