//! Brute-force enumeration over all object subsets.
//!
//! Every one of the `2^n` object masks is tested for closure: a mask `S` is an
//! extent iff `attribute_polar(object_polar(S)) == S`. With the `parallel`
//! feature the closure tests are spread over the rayon thread pool; results are
//! collected in mask order either way, so the output is deterministic.

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bitmask::BitMask;
use crate::concept::Concept;
use crate::dense::DenseContext;
use crate::enumerate::Enumerator;

/// Exhaustive enumerator for word-sized contexts.
#[derive(Debug, Clone, Copy)]
pub struct DenseEnumerator<'a> {
    context: &'a DenseContext,
}

impl<'a> DenseEnumerator<'a> {
    pub fn new(context: &'a DenseContext) -> Self {
        Self { context }
    }

    /// All closed `(extent, intent)` mask pairs, in ascending extent-mask order.
    pub fn closed_masks(&self) -> Vec<(BitMask, BitMask)> {
        let ctx = self.context;
        let subsets = 1u64 << ctx.num_objects();
        debug!("dense: testing {} object subsets", subsets);

        let closure_test = |bits: u64| {
            let extent = BitMask::from_bits(bits);
            let intent = ctx.object_polar_mask(extent);
            (ctx.attribute_polar_mask(intent) == extent).then_some((extent, intent))
        };

        #[cfg(feature = "parallel")]
        let closed: Vec<_> = (0..subsets).into_par_iter().filter_map(closure_test).collect();
        #[cfg(not(feature = "parallel"))]
        let closed: Vec<_> = (0..subsets).filter_map(closure_test).collect();

        debug!("dense: {} closed subsets", closed.len());
        closed
    }
}

impl Enumerator for DenseEnumerator<'_> {
    type Context = DenseContext;

    fn context(&self) -> &DenseContext {
        self.context
    }

    fn enumerate(&self) -> Vec<Concept> {
        self.closed_masks()
            .into_iter()
            .map(|(extent, intent)| {
                Concept::from_closed(self.context.objects_of(extent), self.context.attributes_of(intent))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::polar::Polar;
    use crate::types::{attributes, objects};

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_sample_concepts() {
        let ctx = DenseContext::from_table(&[
            [F, T, T, T], //
            [T, F, T, T],
            [T, F, T, F],
            [T, F, T, F],
            [T, F, F, F],
        ])
        .unwrap();
        let concepts = DenseEnumerator::new(&ctx).enumerate();
        assert_eq!(concepts.len(), 8);

        // Mask order: the empty extent comes first, the full one last
        assert_eq!(concepts[0].extent(), &objects([]));
        assert_eq!(concepts[0].intent(), &attributes(1..=4));
        assert_eq!(concepts[7].extent(), &objects(1..=5));
        assert_eq!(concepts[7].intent(), &attributes([]));

        for c in &concepts {
            assert_eq!(&ctx.object_polar(c.extent()), c.intent());
            assert_eq!(&ctx.attribute_polar(c.intent()), c.extent());
        }
    }

    #[test]
    fn test_closed_masks_are_fixed_points() {
        let ctx = DenseContext::from_table(&[[T, T, F], [F, T, T], [T, F, T], [F, F, F]]).unwrap();
        for (extent, intent) in DenseEnumerator::new(&ctx).closed_masks() {
            assert!(ctx.is_closed_mask(extent));
            assert_eq!(ctx.object_polar_mask(extent), intent);
        }
    }

    #[test]
    fn test_empty_context() {
        let table: [[bool; 0]; 0] = [];
        let ctx = DenseContext::from_table(&table).unwrap();
        let concepts = DenseEnumerator::new(&ctx).enumerate();
        assert_eq!(concepts.len(), 1);
        assert!(concepts[0].extent().is_empty());
        assert!(concepts[0].intent().is_empty());
    }
}
