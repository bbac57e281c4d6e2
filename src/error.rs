//! Error types for context construction.
//!
//! Malformed input is rejected eagerly when a context is built. Enumeration and
//! Hasse diagram construction never fail on a well-formed context.

use std::fmt;

use thiserror::Error;

use crate::types::{AttributeId, ObjectId};

/// Which of the two universes of a context an error refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Universe {
    Objects,
    Attributes,
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Universe::Objects => write!(f, "object"),
            Universe::Attributes => write!(f, "attribute"),
        }
    }
}

/// Errors raised while building a formal context.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FcaError {
    /// A context table row has a different length than the first row.
    #[error("context table row {row} has {found} columns, expected {expected}")]
    RaggedTable {
        /// Zero-based index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// A universe is too large for the single-word dense representation.
    #[error("{universe} universe has {size} elements, the dense representation holds at most {limit}")]
    CapacityExceeded {
        universe: Universe,
        size: usize,
        limit: usize,
    },

    /// A tuple mentions an object outside the object universe.
    #[error("object {0} is not in the object universe")]
    UnknownObject(ObjectId),

    /// A tuple mentions an attribute outside the attribute universe.
    #[error("attribute {0} is not in the attribute universe")]
    UnknownAttribute(AttributeId),
}

pub type Result<T> = std::result::Result<T, FcaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = FcaError::RaggedTable {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "context table row 2 has 3 columns, expected 4");

        let err = FcaError::CapacityExceeded {
            universe: Universe::Objects,
            size: 70,
            limit: 63,
        };
        assert_eq!(
            err.to_string(),
            "object universe has 70 elements, the dense representation holds at most 63"
        );

        let err = FcaError::UnknownAttribute(AttributeId::new(9));
        assert_eq!(err.to_string(), "attribute m9 is not in the attribute universe");
    }
}
