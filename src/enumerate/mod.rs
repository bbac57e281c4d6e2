//! Concept enumeration strategies.
//!
//! Two interchangeable algorithms compute the set of all formal concepts of a
//! context:
//!
//! | Strategy | Input | Cost | Limit |
//! |----------|-------|------|-------|
//! | [`DenseEnumerator`] | [`DenseContext`] | `O(2^n · n)` word ops | `n, m ≤ 63` |
//! | [`SparseEnumerator`] | [`Context`] + candidate tuples | quadratic in the number of concepts | none |
//!
//! Both produce the same concept set whenever both apply. Use
//! [`ConceptLattice::compute`] to pick one via a [`Strategy`].
//!
//! # Example
//!
//! ```
//! use fca_rs::context::Context;
//! use fca_rs::enumerate::{Enumerator, SparseEnumerator};
//!
//! let ctx = Context::from_table(&[[true, false], [false, true]]).unwrap();
//! let lattice = SparseEnumerator::new(&ctx).lattice();
//!
//! // ({g1, g2}, {}), ({g1}, {m1}), ({g2}, {m2}), ({}, {m1, m2})
//! assert_eq!(lattice.len(), 4);
//! ```

pub mod dense;
pub mod sparse;

pub use self::dense::DenseEnumerator;
pub use self::sparse::SparseEnumerator;

use crate::bitmask::BitMask;
use crate::concept::Concept;
use crate::context::Context;
use crate::error::Result;
use crate::lattice::ConceptLattice;
use crate::polar::Polar;

#[cfg(doc)]
use crate::dense::DenseContext;

/// A concept enumeration algorithm over a fixed context.
pub trait Enumerator {
    type Context: Polar;

    /// The context being analysed.
    fn context(&self) -> &Self::Context;

    /// All concepts found, in discovery order. May contain duplicates.
    fn enumerate(&self) -> Vec<Concept>;

    /// Enumerates and collects into a deduplicated, ordered lattice.
    fn lattice(&self) -> ConceptLattice {
        ConceptLattice::new(self.enumerate(), self.context())
    }
}

/// Choice of enumeration algorithm.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Strategy {
    /// Brute force over all object subsets. Fails on universes above
    /// [`BitMask::CAPACITY`].
    Dense,
    /// Incremental pairwise-intersection closure over the attribute extents.
    Sparse,
    /// Dense for small object universes, sparse otherwise.
    #[default]
    Auto,
}

impl Strategy {
    /// Largest object universe for which [`Strategy::Auto`] picks brute force.
    pub const AUTO_DENSE_LIMIT: usize = 16;

    /// Resolves [`Strategy::Auto`] for the given context.
    pub fn resolve(self, context: &Context) -> Strategy {
        match self {
            Strategy::Auto => {
                if context.num_objects() <= Self::AUTO_DENSE_LIMIT && context.num_attributes() <= BitMask::CAPACITY {
                    Strategy::Dense
                } else {
                    Strategy::Sparse
                }
            }
            other => other,
        }
    }
}

impl ConceptLattice {
    /// Computes the concept lattice of `context` with the given strategy.
    ///
    /// # Errors
    ///
    /// [`FcaError::CapacityExceeded`][crate::error::FcaError::CapacityExceeded]
    /// if [`Strategy::Dense`] is requested for a context that does not fit a word.
    pub fn compute(context: &Context, strategy: Strategy) -> Result<ConceptLattice> {
        let strategy = strategy.resolve(context);
        log::debug!(
            "computing lattice of {}x{} context with {:?} strategy",
            context.num_objects(),
            context.num_attributes(),
            strategy
        );
        match strategy {
            Strategy::Dense => {
                let dense = context.to_dense()?;
                Ok(DenseEnumerator::new(&dense).lattice())
            }
            _ => Ok(SparseEnumerator::new(context).lattice()),
        }
    }
}
