// Copyright (c) 2025 knix
// All rights reserved.

use smallvec::SmallVec;

pub mod builtins;
pub mod error;
pub mod eval;
pub mod runtime;
pub mod vector;

pub use eval::{EvalError, EvalResult, Session};
pub use error::{VectorError, VectorResult, ViolationPolicy};
pub use runtime::{Builtin, Runtime, RuntimeConfig, RuntimeError, RuntimeResult};
pub use vector::{Int, Vector};

pub type SV8<T> = SmallVec<[T; 8]>;

/// Name of the environment variable consulted by [`RuntimeConfig::from_env`]
pub const ON_VIOLATION_ENV_VAR: &str = "HERANG_ON_VIOLATION";
