//! Incremental pairwise-intersection enumeration.
//!
//! Every concept extent is an intersection of attribute extents, and the meet
//! of two extents is again an extent. Starting from a list of candidate tuples,
//! the enumerator keeps a growing result set and, for each candidate in turn:
//!
//! 1. emits the candidate itself if its object subset is closed;
//! 2. intersects the candidate's object subset with every extent found so far
//!    and emits the concept generated by each non-empty meet.
//!
//! Candidates sharing an object subset are merged up front. After the pass, the
//! top and bottom concepts are synthesized if the candidates did not reach them.
//!
//! With one candidate per attribute ([`Context::attribute_extents`]) the result
//! is complete. A caller-supplied list that misses attributes may leave out
//! inner concepts; this is accepted and reported with a warning.

use std::collections::{HashMap, HashSet};

use log::{debug, trace, warn};

use crate::concept::{Concept, Tuple};
use crate::context::Context;
use crate::enumerate::Enumerator;
use crate::error::{FcaError, Result};
use crate::polar::{ensure_extremes, Polar};
use crate::types::{AttributeSet, ObjectSet};

/// Enumerator for contexts of arbitrary size.
#[derive(Debug, Clone)]
pub struct SparseEnumerator<'a> {
    context: &'a Context,
    candidates: Vec<Tuple>,
}

impl<'a> SparseEnumerator<'a> {
    /// Uses one candidate tuple per attribute.
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            candidates: merge_candidates(context.attribute_extents()),
        }
    }

    /// Uses a caller-supplied candidate list.
    ///
    /// Tuples with identical object subsets are merged, keeping the position of
    /// the first one and the union of all their attribute subsets.
    ///
    /// # Errors
    ///
    /// [`FcaError::UnknownObject`] or [`FcaError::UnknownAttribute`] if a tuple
    /// mentions an identifier outside the universes of `context`.
    pub fn with_candidates(context: &'a Context, candidates: impl IntoIterator<Item = Tuple>) -> Result<Self> {
        let candidates = merge_candidates(candidates);

        for tuple in &candidates {
            if let Some(g) = tuple.objects.iter().find(|g| !context.objects().contains(g)) {
                return Err(FcaError::UnknownObject(g));
            }
            if let Some(m) = tuple.attributes.iter().find(|m| !context.attributes().contains(m)) {
                return Err(FcaError::UnknownAttribute(m));
            }
        }

        let covered: AttributeSet = candidates.iter().flat_map(|t| t.attributes.iter()).collect();
        let uncovered: AttributeSet = context
            .attributes()
            .iter()
            .filter(|m| !covered.contains(m) && !context.column(*m).is_empty())
            .collect();
        if !uncovered.is_empty() {
            warn!(
                "sparse: candidates do not cover attributes {}, inner concepts may be missing",
                uncovered
            );
        }

        Ok(Self { context, candidates })
    }

    /// The merged candidate list, in processing order.
    pub fn candidates(&self) -> &[Tuple] {
        &self.candidates
    }
}

impl Enumerator for SparseEnumerator<'_> {
    type Context = Context;

    fn context(&self) -> &Context {
        self.context
    }

    fn enumerate(&self) -> Vec<Concept> {
        let ctx = self.context;
        let mut concepts: Vec<Concept> = Vec::new();
        let mut seen: HashSet<ObjectSet> = HashSet::new();

        for (step, candidate) in self.candidates.iter().enumerate() {
            let mut fresh = Vec::new();

            if ctx.is_closed(&candidate.objects) {
                fresh.push(ctx.concept_of_objects(&candidate.objects));
            }

            for past in &concepts {
                let meet = past.extent().intersection(&candidate.objects);
                if !meet.is_empty() && !seen.contains(&meet) {
                    fresh.push(ctx.concept_of_objects(&meet));
                }
            }

            let before = concepts.len();
            for concept in fresh {
                if seen.insert(concept.extent().clone()) {
                    concepts.push(concept);
                }
            }
            trace!(
                "sparse: candidate #{} {} added {} concepts",
                step,
                candidate,
                concepts.len() - before
            );
        }

        ensure_extremes(&mut concepts, ctx);
        debug!(
            "sparse: {} concepts from {} candidates",
            concepts.len(),
            self.candidates.len()
        );
        concepts
    }
}

/// Merges tuples with identical object subsets, keeping first-seen order.
fn merge_candidates(tuples: impl IntoIterator<Item = Tuple>) -> Vec<Tuple> {
    let mut merged: Vec<Tuple> = Vec::new();
    let mut index: HashMap<ObjectSet, usize> = HashMap::new();

    for tuple in tuples {
        match index.get(&tuple.objects) {
            Some(&i) => {
                let attributes = merged[i].attributes.union(&tuple.attributes);
                merged[i].attributes = attributes;
            }
            None => {
                index.insert(tuple.objects.clone(), merged.len());
                merged.push(tuple);
            }
        }
    }

    merged
}
