//! Hasse diagram to DOT (Graphviz) conversion.
//!
//! The generated graph follows these conventions:
//! - One node per concept, named by its [`ConceptId`][crate::lattice::ConceptId] (`c0` is the top concept)
//! - Concepts of equal extent cardinality share a rank, so the drawing is banded
//! - Edges run from child to parent with an arrowhead at the parent, and the
//!   graph is laid out bottom-to-top, so the top concept is drawn at the top
//!
//! # Examples
//!
//! ```
//! use fca_rs::context::Context;
//! use fca_rs::enumerate::{Enumerator, SparseEnumerator};
//!
//! let ctx = Context::from_table(&[[true, false], [false, true]]).unwrap();
//! let diagram = SparseEnumerator::new(&ctx).lattice().hasse();
//!
//! let dot = diagram.to_dot().unwrap();
//! assert!(dot.starts_with("digraph {"));
//! // Write to file and render with: dot -Tpng lattice.dot -o lattice.png
//! ```

use std::fmt::Write as _;

use crate::concept::Concept;
use crate::hasse::HasseDiagram;

/// What each node label shows.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LabelStyle {
    /// Both sides: `{m1, m3}` above `{g1, g2}`.
    #[default]
    Full,
    /// Only the objects of the extent.
    Extent,
    /// Only the attributes of the intent.
    Intent,
}

/// Configuration options for DOT output generation.
///
/// ```
/// use fca_rs::dot::{DotConfig, LabelStyle};
///
/// let config = DotConfig {
///     labels: LabelStyle::Intent,
///     ..DotConfig::default()
/// };
/// assert_eq!(config.rank_dir, "BT");
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for concept nodes (default: "box")
    pub node_shape: &'static str,
    /// Style for covering edges (default: "solid")
    pub edge_style: &'static str,
    /// Arrowhead at the parent end of each edge (default: "normal")
    pub arrow_head: &'static str,
    /// Graph layout direction (default: "BT", bottom to top)
    pub rank_dir: &'static str,
    /// Node label contents (default: [`LabelStyle::Full`])
    pub labels: LabelStyle,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "box",
            edge_style: "solid",
            arrow_head: "normal",
            rank_dir: "BT",
            labels: LabelStyle::Full,
        }
    }
}

impl DotConfig {
    fn label(&self, concept: &Concept) -> String {
        match self.labels {
            LabelStyle::Full => format!("{}\\n{}", concept.intent(), concept.extent()),
            LabelStyle::Extent => concept.extent().to_string(),
            LabelStyle::Intent => concept.intent().to_string(),
        }
    }
}

impl HasseDiagram {
    /// Converts the diagram to DOT format with the default configuration.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the diagram to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "rankdir={};", config.rank_dir)?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;
        writeln!(dot, "edge [style={}, arrowhead={}];", config.edge_style, config.arrow_head)?;

        // Nodes, one band per extent cardinality
        for layer in self.layers() {
            writeln!(dot, "{{ rank=same")?;
            for &id in &layer.concepts {
                let concept = self.lattice().get(id);
                writeln!(dot, "{} [label=\"{}\"];", id, config.label(concept))?;
            }
            writeln!(dot, "}}")?;
        }

        for edge in self.edges() {
            writeln!(dot, "{} -> {};", edge.child, edge.parent)?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::context::Context;
    use crate::enumerate::{Enumerator, SparseEnumerator};

    fn diamond() -> HasseDiagram {
        let ctx = Context::from_table(&[[true, false], [false, true]]).unwrap();
        SparseEnumerator::new(&ctx).lattice().hasse()
    }

    #[test]
    fn test_to_dot_basic() {
        let dot = diamond().to_dot().unwrap();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("rankdir=BT;"));
        assert!(dot.contains("edge [style=solid, arrowhead=normal];"));
        assert_eq!(dot.matches("rank=same").count(), 3);
        assert_eq!(dot.matches(" -> ").count(), 4);
    }

    #[test]
    fn test_edges_point_up() {
        let d = diamond();
        let dot = d.to_dot().unwrap();
        let bottom = d.lattice().bottom_id();
        for &parent in d.parents(bottom) {
            assert!(dot.contains(&format!("{} -> {};", bottom, parent)));
        }
        assert!(!dot.contains(&format!("{} -> ", d.lattice().top_id())));
    }

    #[test]
    fn test_labels() {
        let d = diamond();

        let full = d.to_dot().unwrap();
        assert!(full.contains("c0 [label=\"{}\\n{g1, g2}\"];"));

        let config = DotConfig {
            labels: LabelStyle::Intent,
            ..DotConfig::default()
        };
        let intent = d.to_dot_with_config(&config).unwrap();
        assert!(intent.contains("[label=\"{m1, m2}\"];"));
        assert!(!intent.contains("g1"));
    }

    #[test]
    fn test_to_dot_with_config() {
        let config = DotConfig {
            node_shape: "ellipse",
            arrow_head: "none",
            rank_dir: "TB",
            labels: LabelStyle::Extent,
            ..DotConfig::default()
        };
        let dot = diamond().to_dot_with_config(&config).unwrap();
        assert!(dot.contains("node [shape=ellipse];"));
        assert!(dot.contains("arrowhead=none"));
        assert!(dot.contains("rankdir=TB;"));
        assert!(!dot.contains("m1"));
    }

    #[test]
    #[ignore]
    fn test_write_dot_file() {
        let dot = diamond().to_dot().unwrap();
        std::fs::write("test_output.dot", &dot).unwrap();
        println!("DOT output:\n{}", dot);
    }
}
