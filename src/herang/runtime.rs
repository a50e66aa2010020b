// Copyright (c) 2025 knix
// All rights reserved.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::ON_VIOLATION_ENV_VAR;
use crate::builtins;
use crate::error::{VectorError, ViolationPolicy};
use crate::vector::Vector;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == *n,
            Arity::AtLeast(n) => count >= *n,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    ReadLine,
    Print,
    SPrint,
    Cyber,
    Trim,
    Len,
    Slice,
    Time,
}

impl Builtin {
    pub const ALL: [Builtin; 8] = [
        Builtin::ReadLine,
        Builtin::Print,
        Builtin::SPrint,
        Builtin::Cyber,
        Builtin::Trim,
        Builtin::Len,
        Builtin::Slice,
        Builtin::Time,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::ReadLine => "readline",
            Builtin::Print => "print",
            Builtin::SPrint => "sprint",
            Builtin::Cyber => "cyber",
            Builtin::Trim => "trim",
            Builtin::Len => "len",
            Builtin::Slice => "slice",
            Builtin::Time => "time",
        }
    }

    pub fn from_name(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn arity(&self) -> Arity {
        match self {
            Builtin::ReadLine | Builtin::Time => Arity::Exact(0),
            Builtin::Print | Builtin::SPrint => Arity::AtLeast(1),
            Builtin::Cyber | Builtin::Trim | Builtin::Len => Arity::Exact(1),
            Builtin::Slice => Arity::Exact(3),
        }
    }
}

impl Display for Builtin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub on_violation: ViolationPolicy,
}

impl RuntimeConfig {
    /// Reads the violation policy from `HERANG_ON_VIOLATION`, falling back to the default
    pub fn from_env() -> RuntimeConfig {
        RuntimeConfig::from_env_value(std::env::var(ON_VIOLATION_ENV_VAR).ok().as_deref())
    }

    pub fn from_env_value(value: Option<&str>) -> RuntimeConfig {
        let on_violation = match value {
            Some(value) => ViolationPolicy::from_name(value).unwrap_or_else(|| {
                warn!("Ignoring unknown {ON_VIOLATION_ENV_VAR} value '{value}'");
                ViolationPolicy::default()
            }),
            None => ViolationPolicy::default(),
        };
        RuntimeConfig { on_violation }
    }

    /// An explicitly requested policy wins over whatever the config holds
    pub fn with_override(self, on_violation: Option<ViolationPolicy>) -> RuntimeConfig {
        RuntimeConfig { on_violation: on_violation.unwrap_or(self.on_violation) }
    }
}

#[derive(Debug)]
pub enum RuntimeError {
    UnknownBuiltin(String),
    WrongArity { builtin: Builtin, expected: Arity, got: usize },
    Violation(VectorError),
    Io(io::Error),
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::UnknownBuiltin(name) => write!(f, "Function {name} not found"),
            RuntimeError::WrongArity { builtin, expected, got } => {
                write!(f, "Wrong number of arguments to {builtin}: expected {expected}, got {got}")
            }
            RuntimeError::Violation(e) => write!(f, "{e}"),
            RuntimeError::Io(e) => write!(f, "i/o error: {e}"),
        }
    }
}

impl Error for RuntimeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RuntimeError::Violation(e) => Some(e),
            RuntimeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<VectorError> for RuntimeError {
    fn from(value: VectorError) -> Self {
        RuntimeError::Violation(value)
    }
}

impl From<io::Error> for RuntimeError {
    fn from(value: io::Error) -> Self {
        RuntimeError::Io(value)
    }
}

pub type RuntimeResult<A> = Result<A, RuntimeError>;

/// Dispatches builtins by name against a pair of streams, applying the configured
/// [`ViolationPolicy`] to every checked vector operation.
pub struct Runtime<R, W> {
    config: RuntimeConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Runtime<R, W> {
    pub fn make(config: RuntimeConfig, input: R, output: W) -> Self {
        Runtime { config, input, output }
    }

    pub fn input_mut(&mut self) -> &mut R {
        &mut self.input
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn call(&mut self, name: &str, args: &[Vector]) -> RuntimeResult<Vector> {
        let Some(builtin) = Builtin::from_name(name) else {
            return Err(RuntimeError::UnknownBuiltin(name.to_string()));
        };
        self.call_builtin(builtin, args)
    }

    pub fn call_builtin(&mut self, builtin: Builtin, args: &[Vector]) -> RuntimeResult<Vector> {
        let expected = builtin.arity();
        if !expected.accepts(args.len()) {
            return Err(RuntimeError::WrongArity { builtin, expected, got: args.len() });
        }
        debug!("call {builtin} with {} args", args.len());
        let result = match builtin {
            Builtin::ReadLine => builtins::readline_from(&mut self.input)?,
            Builtin::Print => builtins::print_to(&mut self.output, args)?,
            Builtin::SPrint => builtins::sprint_to(&mut self.output, args)?,
            Builtin::Cyber => builtins::cyber(&args[0]),
            Builtin::Trim => builtins::trim(&args[0]),
            Builtin::Len => builtins::len(&args[0]),
            Builtin::Slice => self.slice(&args[0], &args[1], &args[2])?,
            Builtin::Time => builtins::time(),
        };
        Ok(result)
    }

    pub fn gather(&self, a: &Vector, indices: &Vector) -> RuntimeResult<Vector> {
        Ok(self.config.on_violation.enforce(a.try_gather(indices))?)
    }

    pub fn scatter<'v>(
        &self,
        a: &'v mut Vector,
        indices: &Vector,
        values: &Vector,
    ) -> RuntimeResult<&'v mut Vector> {
        Ok(self.config.on_violation.enforce(a.try_set(indices, values))?)
    }

    pub fn slice(&self, a: &Vector, l: &Vector, r: &Vector) -> RuntimeResult<Vector> {
        Ok(self.config.on_violation.enforce(builtins::try_slice(a, l, r))?)
    }
}
