//! Typed identifiers for generated nodes and edges.
//!
//! Both identifiers serialise as strings: a node as its decimal index and an
//! edge as `e<source>to<target>`.

use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{EdgeIdError, NodeIdError};

/// Identifier of a generated node, rendered as its decimal index.
///
/// # Examples
/// ```
/// use graphgen_core::NodeId;
///
/// let id: NodeId = "12".parse().expect("decimal ids parse");
/// assert_eq!(id.index(), 12);
/// assert_eq!(id.to_string(), "12");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a node index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the wrapped index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = NodeIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_index(raw).map(Self).map_err(|err| match err {
            IndexError::NonCanonical => NodeIdError::NonCanonicalIndex {
                raw: raw.to_owned(),
            },
            IndexError::Invalid(source) => NodeIdError::InvalidIndex {
                raw: raw.to_owned(),
                source,
            },
        })
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for NodeId {
    type Error = NodeIdError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

enum IndexError {
    NonCanonical,
    Invalid(ParseIntError),
}

/// Parses an index written exactly as `Display` writes it: no sign and no
/// leading zeros.
fn parse_index(part: &str) -> Result<usize, IndexError> {
    let padded = part.len() > 1 && part.starts_with('0');
    if padded || part.starts_with('+') {
        return Err(IndexError::NonCanonical);
    }
    part.parse().map_err(IndexError::Invalid)
}

/// Identifier of a generated edge, recording the direction first seen.
///
/// # Examples
/// ```
/// use graphgen_core::EdgeId;
///
/// let id = EdgeId::new(3, 10);
/// assert_eq!(id.to_string(), "e3to10");
/// assert_eq!("e3to10".parse::<EdgeId>(), Ok(id));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EdgeId {
    source: usize,
    target: usize,
}

impl EdgeId {
    const PREFIX: char = 'e';
    const SEPARATOR: &'static str = "to";

    /// Creates an identifier for the directed pair `source -> target`.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Node index the edge was first seen leaving.
    #[must_use]
    pub const fn source(self) -> usize {
        self.source
    }

    /// Node index the edge was first seen entering.
    #[must_use]
    pub const fn target(self) -> usize {
        self.target
    }

    /// Returns the identifier for the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.target, self.source)
    }

    /// Unordered key shared by both directions of the pair.
    #[must_use]
    pub fn canonical(self) -> (usize, usize) {
        (self.source.min(self.target), self.source.max(self.target))
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            Self::PREFIX,
            self.source,
            Self::SEPARATOR,
            self.target
        )
    }
}

impl FromStr for EdgeId {
    type Err = EdgeIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let body = raw
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| EdgeIdError::MissingPrefix {
                raw: raw.to_owned(),
            })?;
        let (source, target) =
            body.split_once(Self::SEPARATOR)
                .ok_or_else(|| EdgeIdError::MissingSeparator {
                    raw: raw.to_owned(),
                })?;
        let parse = |part: &str| {
            parse_index(part).map_err(|err| match err {
                IndexError::NonCanonical => EdgeIdError::NonCanonicalIndex {
                    raw: raw.to_owned(),
                },
                IndexError::Invalid(source) => EdgeIdError::InvalidIndex {
                    raw: raw.to_owned(),
                    source,
                },
            })
        };
        Ok(Self::new(parse(source)?, parse(target)?))
    }
}

impl From<EdgeId> for String {
    fn from(id: EdgeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for EdgeId {
    type Error = EdgeIdError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}
