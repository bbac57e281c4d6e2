//! # fca-rs: Formal Concept Analysis in Rust
//!
//! **`fca-rs`** computes the **concept lattice** of a formal context and its **Hasse diagram**.
//!
//! ## What is a formal concept?
//!
//! A formal context is a binary relation between a set of *objects* `G` and a set of *attributes* `M`.
//! The two polar maps form a Galois connection:
//!
//! - `object_polar(A)`: the attributes shared by every object in `A`
//! - `attribute_polar(B)`: the objects having every attribute in `B`
//!
//! A **concept** is a pair `(extent, intent)` with `object_polar(extent) = intent` and
//! `attribute_polar(intent) = extent`. Ordered by extent inclusion, the concepts form a complete lattice.
//!
//! ## Key Features
//!
//! - **Two Enumerators**: brute force over all object subsets on word-sized bit masks ([`enumerate::DenseEnumerator`]),
//!   and incremental pairwise intersection for contexts of any size ([`enumerate::SparseEnumerator`]).
//! - **Ordered Lattice**: [`ConceptLattice`][crate::lattice::ConceptLattice] deduplicates concepts by extent,
//!   always holds the top and bottom concepts, and is sorted by descending extent size.
//! - **Hasse Diagram**: the covering relation is built directly, without computing the full order first.
//! - **Graphviz Export**: banded DOT output ready for `dot -Tsvg`.
//! - **1-Based Identifiers**: objects `g1, g2, ...` and attributes `m1, m2, ...` follow the row and column numbers of the table.
//!
//! ## Basic Usage
//!
//! ```rust
//! use fca_rs::context::Context;
//! use fca_rs::enumerate::Strategy;
//! use fca_rs::lattice::ConceptLattice;
//! use fca_rs::polar::Polar;
//! use fca_rs::types::{attributes, objects};
//!
//! // 1. Build a context from a boolean table (rows are objects)
//! let ctx = Context::from_table(&[
//!     [false, true, true, true],
//!     [true, false, true, true],
//!     [true, false, true, false],
//!     [true, false, true, false],
//!     [true, false, false, false],
//! ])
//! .unwrap();
//!
//! // 2. Apply the polar maps
//! assert_eq!(ctx.object_polar(&objects([1, 2])), attributes([3, 4]));
//! assert_eq!(ctx.attribute_polar(&attributes([3, 4])), objects([1, 2]));
//!
//! // 3. Enumerate all concepts
//! let lattice = ConceptLattice::compute(&ctx, Strategy::Auto).unwrap();
//! assert_eq!(lattice.len(), 8);
//!
//! // 4. Build the Hasse diagram
//! let diagram = lattice.hasse();
//! assert_eq!(diagram.edges().len(), 10);
//! ```
//!
//! ## Core Components
//!
//! - **[`context`]**: The formal context and its [`Polar`][crate::polar::Polar] implementation.
//! - **[`enumerate`]**: Concept enumeration strategies.
//! - **[`lattice`]** and **[`hasse`]**: The ordered concept set and its covering relation.
//! - **[`dot`]**: Utilities for visualizing Hasse diagrams using Graphviz.

pub mod bitmask;
pub mod concept;
pub mod context;
pub mod dense;
pub mod dot;
pub mod enumerate;
pub mod error;
pub mod hasse;
pub mod lattice;
pub mod polar;
pub mod types;
