//! Hasse diagram (covering relation) of a concept lattice.
//!
//! The builder visits concepts in lattice order, largest extent first. For each
//! concept `P` it scans the strictly larger concepts nearest-first (ascending
//! extent cardinality). A superset `C` of `P` that is not yet a known ancestor
//! of `P` is a cover: the edge `P → C` is recorded and `C` together with all of
//! `C`'s ancestors is added to `P`'s ancestor set. Any later candidate already
//! in that set would only produce a transitive edge and is skipped.
//!
//! Since every strictly larger concept is processed before `P`, its ancestor
//! set is complete when `P` consults it, and the pass yields the transitive
//! reduction directly.
//!
//! # Example
//!
//! ```
//! use fca_rs::context::Context;
//! use fca_rs::enumerate::Strategy;
//! use fca_rs::lattice::ConceptLattice;
//!
//! let ctx = Context::from_table(&[[true, false], [false, true]]).unwrap();
//! let diagram = ConceptLattice::compute(&ctx, Strategy::Sparse).unwrap().hasse();
//!
//! // A diamond: bottom → {g1}, bottom → {g2}, {g1} → top, {g2} → top
//! assert_eq!(diagram.nodes().len(), 4);
//! assert_eq!(diagram.edges().len(), 4);
//! assert_eq!(diagram.layers().len(), 3);
//! ```

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::concept::Concept;
use crate::lattice::{ConceptId, ConceptLattice};

/// A covering pair: `parent` is an immediate upper neighbour of `child`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct HasseEdge {
    pub child: ConceptId,
    pub parent: ConceptId,
}

/// Build-time state for one concept.
#[derive(Debug)]
struct HasseNode {
    id: ConceptId,
    cardinality: usize,
    /// Every ancestor discovered so far (transitively closed once processed).
    known_supersets: BTreeSet<ConceptId>,
}

/// Computes the covering relation of a [`ConceptLattice`].
pub struct HasseBuilder<'a> {
    lattice: &'a ConceptLattice,
    nodes: Vec<HasseNode>,
}

impl<'a> HasseBuilder<'a> {
    pub fn new(lattice: &'a ConceptLattice) -> Self {
        let nodes = lattice
            .iter()
            .map(|(id, concept)| HasseNode {
                id,
                cardinality: concept.extent().len(),
                known_supersets: BTreeSet::new(),
            })
            .collect();
        Self { lattice, nodes }
    }

    /// Returns the covering edges, in discovery order.
    pub fn edges(mut self) -> Vec<HasseEdge> {
        let mut edges = Vec::new();

        for p in 0..self.nodes.len() {
            // Lattice order is descending cardinality, so the strict supersets
            // by size form a prefix.
            let cardinality = self.nodes[p].cardinality;
            let bound = self.nodes[..p].partition_point(|n| n.cardinality > cardinality);

            let (above, rest) = self.nodes.split_at_mut(p);
            let pov = &mut rest[0];
            let extent = self.lattice.get(pov.id).extent();

            for candidate in above[..bound].iter().rev() {
                if pov.known_supersets.contains(&candidate.id) {
                    continue;
                }
                if !self.lattice.get(candidate.id).extent().is_superset(extent) {
                    continue;
                }
                trace!("hasse: {} -> {}", pov.id, candidate.id);
                edges.push(HasseEdge {
                    child: pov.id,
                    parent: candidate.id,
                });
                pov.known_supersets.insert(candidate.id);
                pov.known_supersets.extend(candidate.known_supersets.iter().copied());
            }
        }

        debug!("hasse: {} nodes, {} covering edges", self.nodes.len(), edges.len());
        edges
    }

    /// Builds the diagram, keeping a copy of the lattice as the node set.
    pub fn build(self) -> HasseDiagram {
        let lattice = self.lattice.clone();
        HasseDiagram::from_edges(lattice, self.edges())
    }
}

/// A concept lattice together with its covering relation.
///
/// This is the hand-off structure for renderers: a node set, a directed edge
/// set from child to parent, and the cardinality bands used for layout.
#[derive(Debug, Clone)]
pub struct HasseDiagram {
    lattice: ConceptLattice,
    edges: Vec<HasseEdge>,
    parents: Vec<Vec<ConceptId>>,
    children: Vec<Vec<ConceptId>>,
}

/// A horizontal band of concepts sharing the same extent cardinality.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Layer {
    pub cardinality: usize,
    pub concepts: Vec<ConceptId>,
}

impl HasseDiagram {
    fn from_edges(lattice: ConceptLattice, edges: Vec<HasseEdge>) -> Self {
        let mut parents = vec![Vec::new(); lattice.len()];
        let mut children = vec![Vec::new(); lattice.len()];
        for edge in &edges {
            parents[edge.child.index()].push(edge.parent);
            children[edge.parent.index()].push(edge.child);
        }
        Self {
            lattice,
            edges,
            parents,
            children,
        }
    }

    pub fn lattice(&self) -> &ConceptLattice {
        &self.lattice
    }

    pub fn into_lattice(self) -> ConceptLattice {
        self.lattice
    }

    /// The node set: all concepts, in lattice order.
    pub fn nodes(&self) -> &[Concept] {
        self.lattice.concepts()
    }

    /// The edge set: covering pairs directed from child to parent.
    pub fn edges(&self) -> &[HasseEdge] {
        &self.edges
    }

    /// Immediate upper neighbours of a concept.
    pub fn parents(&self, id: ConceptId) -> &[ConceptId] {
        &self.parents[id.index()]
    }

    /// Immediate lower neighbours of a concept.
    pub fn children(&self, id: ConceptId) -> &[ConceptId] {
        &self.children[id.index()]
    }

    /// Returns true if `parent` covers `child`.
    pub fn is_cover(&self, child: ConceptId, parent: ConceptId) -> bool {
        self.parents(child).contains(&parent)
    }

    /// Groups the nodes into bands of equal extent cardinality, largest first.
    pub fn layers(&self) -> Vec<Layer> {
        let mut layers: Vec<Layer> = Vec::new();
        for (id, concept) in self.lattice.iter() {
            let cardinality = concept.extent().len();
            match layers.last_mut() {
                Some(layer) if layer.cardinality == cardinality => layer.concepts.push(id),
                _ => layers.push(Layer {
                    cardinality,
                    concepts: vec![id],
                }),
            }
        }
        layers
    }
}

impl ConceptLattice {
    /// Computes the Hasse diagram of this lattice.
    pub fn hasse(&self) -> HasseDiagram {
        HasseBuilder::new(self).build()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::context::Context;
    use crate::enumerate::{Enumerator, SparseEnumerator};
    use crate::types::objects;

    const T: bool = true;
    const F: bool = false;

    fn diagram(table: &[[bool; 3]]) -> HasseDiagram {
        let ctx = Context::from_table(table).unwrap();
        SparseEnumerator::new(&ctx).lattice().hasse()
    }

    fn edge(d: &HasseDiagram, child: &[u32], parent: &[u32]) -> HasseEdge {
        let lattice = d.lattice();
        HasseEdge {
            child: lattice.find(&objects(child.iter().copied())).unwrap(),
            parent: lattice.find(&objects(parent.iter().copied())).unwrap(),
        }
    }

    #[test]
    fn test_chain() {
        // Staircase context: the lattice is a chain of 3 concepts
        let d = diagram(&[[T, F, F], [T, T, F], [T, T, T]]);
        assert_eq!(d.nodes().len(), 3);
        assert_eq!(d.edges().len(), 2);
        assert!(d.edges().contains(&edge(&d, &[3], &[2, 3])));
        assert!(d.edges().contains(&edge(&d, &[2, 3], &[1, 2, 3])));
        // No transitive shortcut
        assert!(!d.edges().contains(&edge(&d, &[3], &[1, 2, 3])));
    }

    #[test]
    fn test_boolean_lattice() {
        // Contranominal scale: the lattice is the cube 2^3
        let d = diagram(&[[F, T, T], [T, F, T], [T, T, F]]);
        assert_eq!(d.nodes().len(), 8);
        assert_eq!(d.edges().len(), 12);
        for (id, concept) in d.lattice().iter() {
            // Each element of the cube has one parent per missing object
            assert_eq!(d.parents(id).len(), 3 - concept.extent().len());
            assert_eq!(d.children(id).len(), concept.extent().len());
        }
    }

    #[test]
    fn test_layers() {
        let d = diagram(&[[F, T, T], [T, F, T], [T, T, F]]);
        let layers = d.layers();
        let shape: Vec<_> = layers.iter().map(|l| (l.cardinality, l.concepts.len())).collect();
        assert_eq!(shape, vec![(3, 1), (2, 3), (1, 3), (0, 1)]);
    }

    #[test]
    fn test_is_cover() {
        let d = diagram(&[[T, F, F], [T, T, F], [T, T, T]]);
        let lattice = d.lattice();
        assert!(d.is_cover(lattice.bottom_id(), ConceptId::new(1)));
        assert!(!d.is_cover(lattice.bottom_id(), lattice.top_id()));
        assert!(d.children(lattice.bottom_id()).is_empty());
        assert!(d.parents(lattice.top_id()).is_empty());
    }

    #[test]
    fn test_single_node() {
        let ctx = Context::from_table(&[[T, T]]).unwrap();
        let d = SparseEnumerator::new(&ctx).lattice().hasse();
        assert_eq!(d.nodes().len(), 1);
        assert!(d.edges().is_empty());
        assert_eq!(d.layers().len(), 1);
    }
}
