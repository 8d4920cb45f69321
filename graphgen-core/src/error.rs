//! Error types for the graphgen core library.
//!
//! Defines error enums exposed by the public API, their stable codes, and a
//! convenient result alias.

use std::{fmt, num::ParseIntError};

use thiserror::Error;

use crate::ids::EdgeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running a [`crate::GraphGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphGenError {
    /// The per-complexity sample multiplier must be greater than zero.
    #[error("samples_per_complexity must be at least 1 (got {got})")]
    InvalidSamplesPerComplexity {
        /// The invalid multiplier supplied by the caller.
        got: usize,
    },
    /// `complexity * samples_per_complexity` does not fit in `usize`.
    #[error(
        "complexity {complexity} with {samples_per_complexity} samples per unit overflows the per-node sample count"
    )]
    SampleCountOverflow {
        /// Complexity factor requested by the caller.
        complexity: usize,
        /// Configured sample multiplier.
        samples_per_complexity: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphGenError`] variants.
    enum GraphGenErrorCode for GraphGenError {
        /// The per-complexity sample multiplier must be greater than zero.
        InvalidSamplesPerComplexity => InvalidSamplesPerComplexity { .. } => "GRAPHGEN_INVALID_SAMPLES_PER_COMPLEXITY",
        /// The per-node sample count overflowed.
        SampleCountOverflow => SampleCountOverflow { .. } => "GRAPHGEN_SAMPLE_COUNT_OVERFLOW",
    }
}

/// An error produced while parsing an `e<source>to<target>` edge identifier.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EdgeIdError {
    /// Identifier did not start with `e`.
    #[error("edge id `{raw}` must start with `e`")]
    MissingPrefix {
        /// Text that failed to parse.
        raw: String,
    },
    /// Identifier did not contain the `to` separator.
    #[error("edge id `{raw}` is missing the `to` separator")]
    MissingSeparator {
        /// Text that failed to parse.
        raw: String,
    },
    /// One of the endpoints was not a decimal node index.
    #[error("edge id `{raw}` has an invalid endpoint: {source}")]
    InvalidIndex {
        /// Text that failed to parse.
        raw: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// An endpoint carried a sign or leading zeros.
    #[error("edge id `{raw}` has a non-canonical endpoint")]
    NonCanonicalIndex {
        /// Text that failed to parse.
        raw: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`EdgeIdError`] variants.
    enum EdgeIdErrorCode for EdgeIdError {
        /// Identifier did not start with `e`.
        MissingPrefix => MissingPrefix { .. } => "EDGE_ID_MISSING_PREFIX",
        /// Identifier did not contain the `to` separator.
        MissingSeparator => MissingSeparator { .. } => "EDGE_ID_MISSING_SEPARATOR",
        /// One of the endpoints was not a decimal node index.
        InvalidIndex => InvalidIndex { .. } => "EDGE_ID_INVALID_INDEX",
        /// An endpoint carried a sign or leading zeros.
        NonCanonicalIndex => NonCanonicalIndex { .. } => "EDGE_ID_NON_CANONICAL_INDEX",
    }
}

/// An error produced while parsing a decimal node identifier.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum NodeIdError {
    /// Text was not a decimal index.
    #[error("node id `{raw}` is not a decimal index: {source}")]
    InvalidIndex {
        /// Text that failed to parse.
        raw: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// Text carried a sign or leading zeros.
    #[error("node id `{raw}` is not in canonical decimal form")]
    NonCanonicalIndex {
        /// Text that failed to parse.
        raw: String,
    },
}

impl NodeIdError {
    /// Text that failed to parse.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::InvalidIndex { raw, .. } | Self::NonCanonicalIndex { raw } => raw,
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`NodeIdError`] variants.
    enum NodeIdErrorCode for NodeIdError {
        /// Text was not a decimal index.
        InvalidIndex => InvalidIndex { .. } => "NODE_ID_INVALID_INDEX",
        /// Text carried a sign or leading zeros.
        NonCanonicalIndex => NonCanonicalIndex { .. } => "NODE_ID_NON_CANONICAL_INDEX",
    }
}

/// An edge payload whose `source`/`target` disagree with its identifier.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("edge `{id}` does not connect {source_index} to {target_index}")]
pub struct EdgeDescriptorError {
    /// Identifier carried by the payload.
    pub id: EdgeId,
    /// `source` field carried by the payload.
    pub source_index: usize,
    /// `target` field carried by the payload.
    pub target_index: usize,
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphGenError>;
