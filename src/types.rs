//! Type-safe wrappers for objects, attributes and sets of them.
//!
//! Objects and attributes are plain integer identifiers. The newtypes keep the
//! two universes apart at compile time, so an attribute set can never be passed
//! where an object set is expected.
use std::collections::BTreeSet;
use std::fmt;

/// An object identifier.
///
/// Objects are the rows of a formal context. Following the usual FCA notation
/// (G for *Gegenstände*), objects are displayed as `g<id>`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Creates a new object identifier.
    pub const fn new(id: u32) -> Self {
        ObjectId(id)
    }

    /// Returns the raw identifier.
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

impl From<u32> for ObjectId {
    fn from(id: u32) -> Self {
        ObjectId(id)
    }
}

impl From<ObjectId> for u32 {
    fn from(object: ObjectId) -> Self {
        object.0
    }
}

/// An attribute identifier.
///
/// Attributes are the columns of a formal context, displayed as `m<id>`
/// (M for *Merkmale*).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AttributeId(u32);

impl AttributeId {
    /// Creates a new attribute identifier.
    pub const fn new(id: u32) -> Self {
        AttributeId(id)
    }

    /// Returns the raw identifier.
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

impl From<u32> for AttributeId {
    fn from(id: u32) -> Self {
        AttributeId(id)
    }
}

impl From<AttributeId> for u32 {
    fn from(attribute: AttributeId) -> Self {
        attribute.0
    }
}

/// An immutable-by-convention ordered set of identifiers.
///
/// Set operations return fresh sets and never touch their operands, so a
/// [`Concept`][crate::concept::Concept] exclusively owns its extent and intent
/// once constructed.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IdSet<T: Ord>(BTreeSet<T>);

/// A subset of the object universe.
pub type ObjectSet = IdSet<ObjectId>;

/// A subset of the attribute universe.
pub type AttributeSet = IdSet<AttributeId>;

impl<T: Ord> Default for IdSet<T> {
    fn default() -> Self {
        IdSet(BTreeSet::new())
    }
}

impl<T: Ord + Copy> IdSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element. Returns true if it was not present yet.
    pub fn insert(&mut self, id: T) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: &T) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the elements in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    pub fn intersection(&self, other: &Self) -> Self {
        IdSet(self.0.intersection(&other.0).copied().collect())
    }

    pub fn union(&self, other: &Self) -> Self {
        IdSet(self.0.union(&other.0).copied().collect())
    }

    pub fn difference(&self, other: &Self) -> Self {
        IdSet(self.0.difference(&other.0).copied().collect())
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Returns true if `self ⊂ other` and `self ≠ other`.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }
}

impl<T: Ord> FromIterator<T> for IdSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        IdSet(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for IdSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for IdSet<T> {
    fn from(ids: [T; N]) -> Self {
        IdSet(BTreeSet::from(ids))
    }
}

impl<T: Ord> IntoIterator for IdSet<T> {
    type Item = T;
    type IntoIter = std::collections::btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for IdSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "}}")
    }
}

/// Builds an [`ObjectSet`] from raw identifiers.
pub fn objects(ids: impl IntoIterator<Item = u32>) -> ObjectSet {
    ids.into_iter().map(ObjectId::new).collect()
}

/// Builds an [`AttributeSet`] from raw identifiers.
pub fn attributes(ids: impl IntoIterator<Item = u32>) -> AttributeSet {
    ids.into_iter().map(AttributeId::new).collect()
}
