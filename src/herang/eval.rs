// Copyright (c) 2025 knix
// All rights reserved.

//! A line evaluator over the prelude: literals, named variables, the vector
//! operators, builtin calls, assignment and scatter-assignment.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::debug;

use crate::runtime::{Runtime, RuntimeConfig, RuntimeError};
use crate::vector::{Vector, execute_arith_op, execute_cmp_op};

pub mod lex;
pub mod parse;

use lex::LexError;
use parse::{Expr, ParseError, Parser, Stmt};


#[derive(Debug)]
pub enum EvalError {
    Lex(LexError),
    Parse(ParseError),
    UnknownVariable(String),
    Runtime(RuntimeError),
}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::Lex(e) => write!(f, "{e}"),
            EvalError::Parse(e) => write!(f, "{e}"),
            EvalError::UnknownVariable(name) => write!(f, "Variable {name} not found"),
            EvalError::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl Error for EvalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EvalError::Lex(e) => Some(e),
            EvalError::Parse(e) => Some(e),
            EvalError::UnknownVariable(_) => None,
            EvalError::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for EvalError {
    fn from(value: LexError) -> Self {
        EvalError::Lex(value)
    }
}

impl From<ParseError> for EvalError {
    fn from(value: ParseError) -> Self {
        EvalError::Parse(value)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(value: RuntimeError) -> Self {
        EvalError::Runtime(value)
    }
}

pub type EvalResult<A> = Result<A, EvalError>;

pub fn parse_program(src: &str) -> EvalResult<Vec<Stmt>> {
    let tokens = lex::lex(src)?;
    Ok(Parser::make(&tokens).parse_program()?)
}

/// A runtime plus the variables assigned so far
pub struct Session<R, W> {
    runtime: Runtime<R, W>,
    vars: HashMap<String, Vector>,
}

impl Session<StdinLock<'static>, Stdout> {
    pub fn stdio(config: RuntimeConfig) -> Self {
        Session::make(config, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn make(config: RuntimeConfig, input: R, output: W) -> Self {
        Session { runtime: Runtime::make(config, input, output), vars: HashMap::new() }
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime<R, W> {
        &mut self.runtime
    }

    pub fn into_runtime(self) -> Runtime<R, W> {
        self.runtime
    }

    pub fn var(&self, name: &str) -> Option<&Vector> {
        self.vars.get(name)
    }

    /// The next line of the session's input, decoded lossily. `None` at EOF.
    pub fn read_source_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::with_capacity(256);
        if self.runtime.input_mut().read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Runs every statement on the line; the value is the last statement's, or
    /// the empty vector for a blank line.
    pub fn eval_line(&mut self, src: &str) -> EvalResult<Vector> {
        let stmts = parse_program(src)?;
        let mut last = Vector::new();
        for stmt in &stmts {
            debug!("eval {stmt:?}");
            last = self.eval_stmt(stmt)?;
        }
        Ok(last)
    }

    pub fn eval_stmt(&mut self, stmt: &Stmt) -> EvalResult<Vector> {
        match stmt {
            Stmt::Expr(expr) => self.eval_expr(expr),
            Stmt::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                self.vars.insert(name.clone(), value.clone());
                Ok(value)
            }
            Stmt::Scatter { name, indices, values } => {
                let indices = self.eval_expr(indices)?;
                let values = self.eval_expr(values)?;
                let Some(target) = self.vars.get_mut(name) else {
                    return Err(EvalError::UnknownVariable(name.clone()));
                };
                let updated = self.runtime.scatter(target, &indices, &values)?;
                Ok(updated.clone())
            }
        }
    }

    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Vector> {
        match expr {
            Expr::Literal(v) => Ok(v.clone()),
            Expr::Var(name) => {
                self.vars.get(name).cloned().ok_or_else(|| EvalError::UnknownVariable(name.clone()))
            }
            Expr::Call { name, args } => {
                let args = args.iter().map(|a| self.eval_expr(a)).collect::<EvalResult<Vec<_>>>()?;
                Ok(self.runtime.call(name, &args)?)
            }
            Expr::Concat(lhs, rhs) => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                Ok(lhs | rhs)
            }
            Expr::Arith { op, lhs, rhs } => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                Ok(execute_arith_op(&lhs, &rhs, *op))
            }
            Expr::Cmp { op, lhs, rhs } => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                Ok(execute_cmp_op(&lhs, &rhs, *op))
            }
            Expr::Gather { base, indices } => {
                let base = self.eval_expr(base)?;
                let indices = self.eval_expr(indices)?;
                Ok(self.runtime.gather(&base, &indices)?)
            }
        }
    }
}
