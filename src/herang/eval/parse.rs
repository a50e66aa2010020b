use std::fmt::{Display, Formatter};

use crate::eval::lex::TokenKind;
use crate::vector::{ArithOpKind, CmpOpKind, Vector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(Vector),
    Var(String),
    Call { name: String, args: Vec<Expr> },
    Concat(Box<Expr>, Box<Expr>),
    Arith { op: ArithOpKind, lhs: Box<Expr>, rhs: Box<Expr> },
    Cmp { op: CmpOpKind, lhs: Box<Expr>, rhs: Box<Expr> },
    Gather { base: Box<Expr>, indices: Box<Expr> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Expr(Expr),
    Assign { name: String, value: Expr },
    /// `name[indices] = values`
    Scatter { name: String, indices: Expr, values: Expr },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub msg: String,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParseError: {}", self.msg)
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<A> = Result<A, ParseError>;

fn fail<A>(msg: impl Into<String>) -> ParseResult<A> {
    Err(ParseError { msg: msg.into() })
}

/// Precedence from loosest to tightest: comparison, `|`, `+ -`, `*`, indexing.
/// A comparison does not chain.
pub struct Parser<'toks> {
    tokens: &'toks [TokenKind],
    cursor: usize,
}

impl<'toks> Parser<'toks> {
    pub fn make(tokens: &'toks [TokenKind]) -> Parser<'toks> {
        Parser { tokens, cursor: 0 }
    }

    fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.cursor)
    }

    fn peek_at(&self, ahead: usize) -> Option<&TokenKind> {
        self.tokens.get(self.cursor + ahead)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek() == Some(kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.eat(&kind) {
            return Ok(());
        }
        match self.peek() {
            Some(found) => fail(format!("expected '{kind}', found '{found}'")),
            None => fail(format!("expected '{kind}', found end of input")),
        }
    }

    /// Statements separated (and optionally terminated) by `;`
    pub fn parse_program(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut stmts = Vec::new();
        while self.peek().is_some() {
            if self.eat(&TokenKind::Semicolon) {
                continue;
            }
            stmts.push(self.parse_statement()?);
            if self.peek().is_some() {
                self.expect(TokenKind::Semicolon)?;
            }
        }
        Ok(stmts)
    }

    pub fn parse_statement(&mut self) -> ParseResult<Stmt> {
        if let Some(TokenKind::Ident(name)) = self.peek().cloned() {
            match self.peek_at(1).cloned() {
                Some(TokenKind::Assign) => {
                    self.cursor += 2;
                    let value = self.parse_expr()?;
                    return Ok(Stmt::Assign { name, value });
                }
                Some(TokenKind::OpenBracket) => {
                    let checkpoint = self.cursor;
                    self.cursor += 2;
                    let indices = self.parse_expr()?;
                    self.expect(TokenKind::CloseBracket)?;
                    if self.eat(&TokenKind::Assign) {
                        let values = self.parse_expr()?;
                        return Ok(Stmt::Scatter { name, indices, values });
                    }
                    // Just a gather; reparse it as an expression
                    self.cursor = checkpoint;
                }
                _ => {}
            }
        }
        Ok(Stmt::Expr(self.parse_expr()?))
    }

    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        use TokenKind as K;
        let lhs = self.parse_concat()?;
        let op = match self.peek() {
            Some(K::EqualEqual) => CmpOpKind::Equals,
            Some(K::BangEqual) => CmpOpKind::NotEquals,
            Some(K::Less) => CmpOpKind::Less,
            Some(K::LessEqual) => CmpOpKind::LessEqual,
            Some(K::Greater) => CmpOpKind::Greater,
            Some(K::GreaterEqual) => CmpOpKind::GreaterEqual,
            _ => return Ok(lhs),
        };
        self.cursor += 1;
        let rhs = self.parse_concat()?;
        Ok(Expr::Cmp { op, lhs: Box::new(lhs), rhs: Box::new(rhs) })
    }

    fn parse_concat(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_additive()?;
        while self.eat(&TokenKind::Pipe) {
            let rhs = self.parse_additive()?;
            expr = Expr::Concat(Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_term()?;
        loop {
            let op = match self.peek() {
                Some(TokenKind::Plus) => ArithOpKind::Add,
                Some(TokenKind::Minus) => ArithOpKind::Subtract,
                _ => return Ok(expr),
            };
            self.cursor += 1;
            let rhs = self.parse_term()?;
            expr = Expr::Arith { op, lhs: Box::new(expr), rhs: Box::new(rhs) };
        }
    }

    fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_postfix()?;
        while self.eat(&TokenKind::Star) {
            let rhs = self.parse_postfix()?;
            expr = Expr::Arith { op: ArithOpKind::Multiply, lhs: Box::new(expr), rhs: Box::new(rhs) };
        }
        Ok(expr)
    }

    fn parse_postfix(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;
        while self.eat(&TokenKind::OpenBracket) {
            let indices = self.parse_expr()?;
            self.expect(TokenKind::CloseBracket)?;
            expr = Expr::Gather { base: Box::new(expr), indices: Box::new(indices) };
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        use TokenKind as K;
        let Some(tok) = self.peek().cloned() else {
            return fail("expected an expression, found end of input");
        };
        self.cursor += 1;
        match tok {
            K::Number(n) => Ok(Expr::Literal(Vector::scalar(n))),
            K::Ident(name) => {
                if !self.eat(&K::OpenParen) {
                    return Ok(Expr::Var(name));
                }
                let mut args = Vec::new();
                if !self.eat(&K::CloseParen) {
                    loop {
                        args.push(self.parse_expr()?);
                        if self.eat(&K::CloseParen) {
                            break;
                        }
                        self.expect(K::Comma)?;
                    }
                }
                Ok(Expr::Call { name, args })
            }
            K::OpenParen => {
                // `()` is the empty vector
                if self.eat(&K::CloseParen) {
                    return Ok(Expr::Literal(Vector::new()));
                }
                let inner = self.parse_expr()?;
                self.expect(K::CloseParen)?;
                Ok(inner)
            }
            other => fail(format!("expected an expression, found '{other}'")),
        }
    }
}
