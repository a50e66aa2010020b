// Copyright (c) 2025 knix
// All rights reserved.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    IndexOutOfRange { op: &'static str, index: usize, len: usize },
    EmptyReplacement,
    SliceOutOfRange { start: usize, end: usize, len: usize },
}

impl Display for VectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorError::IndexOutOfRange { op, index, len } => {
                write!(f, "{op}: index {index} out of range for vector of length {len}")
            }
            VectorError::EmptyReplacement => f.write_str("set: replacement values are empty"),
            VectorError::SliceOutOfRange { start, end, len } => {
                write!(f, "slice: bounds {start}..{end} invalid for vector of length {len}")
            }
        }
    }
}

impl Error for VectorError {}

pub type VectorResult<A> = Result<A, VectorError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVectorError {
    pub element: String,
}

impl Display for ParseVectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid vector element '{}'", self.element)
    }
}

impl Error for ParseVectorError {}

/// What to do when a gather, scatter or slice breaks its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ViolationPolicy {
    /// Treat the violation as a failed assertion and panic
    #[default]
    Abort,
    /// Hand the violation back to the caller as an error
    Report,
}

impl ViolationPolicy {
    pub fn to_str(&self) -> &'static str {
        match self {
            ViolationPolicy::Abort => "abort",
            ViolationPolicy::Report => "report",
        }
    }

    pub fn from_name(name: &str) -> Option<ViolationPolicy> {
        match name.trim().to_ascii_lowercase().as_str() {
            "abort" => Some(ViolationPolicy::Abort),
            "report" => Some(ViolationPolicy::Report),
            _ => None,
        }
    }

    /// Under `Abort` this never returns an `Err`.
    pub fn enforce<A>(self, result: VectorResult<A>) -> VectorResult<A> {
        match self {
            ViolationPolicy::Abort => Ok(assert_ok(result)),
            ViolationPolicy::Report => result,
        }
    }
}

/// The fatal-assertion form of a checked vector operation
pub(crate) fn assert_ok<A>(result: VectorResult<A>) -> A {
    match result {
        Ok(a) => a,
        Err(e) => panic!("assertion failed: {e}"),
    }
}

impl Display for ViolationPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}
