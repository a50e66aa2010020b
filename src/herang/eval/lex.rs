use std::fmt::{Display, Formatter};
use std::iter::Peekable;
use std::str::CharIndices;

use crate::vector::Int;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Number(Int),
    Ident(String),
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Comma,
    Semicolon,
    Pipe,
    Plus,
    Minus,
    Star,
    Assign,
    EqualEqual,
    BangEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use TokenKind as K;
        let s = match self {
            K::Number(n) => return write!(f, "{n}"),
            K::Ident(name) => return f.write_str(name),
            K::OpenParen => "(",
            K::CloseParen => ")",
            K::OpenBracket => "[",
            K::CloseBracket => "]",
            K::Comma => ",",
            K::Semicolon => ";",
            K::Pipe => "|",
            K::Plus => "+",
            K::Minus => "-",
            K::Star => "*",
            K::Assign => "=",
            K::EqualEqual => "==",
            K::BangEqual => "!=",
            K::Less => "<",
            K::LessEqual => "<=",
            K::Greater => ">",
            K::GreaterEqual => ">=",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub msg: String,
    pub offset: usize,
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LexError at offset {}: {}", self.offset, self.msg)
    }
}

impl std::error::Error for LexError {}

pub type LexResult<A> = Result<A, LexError>;

/// Matches `second` if it is next, yielding `double`; otherwise `single`
fn one_or_two(
    chars: &mut Peekable<CharIndices<'_>>,
    second: char,
    single: TokenKind,
    double: TokenKind,
) -> TokenKind {
    if chars.next_if(|&(_, c)| c == second).is_some() { double } else { single }
}

pub fn lex(src: &str) -> LexResult<Vec<TokenKind>> {
    use TokenKind as K;
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        let kind = match c {
            c if c.is_whitespace() => continue,
            '(' => K::OpenParen,
            ')' => K::CloseParen,
            '[' => K::OpenBracket,
            ']' => K::CloseBracket,
            ',' => K::Comma,
            ';' => K::Semicolon,
            '|' => K::Pipe,
            '+' => K::Plus,
            '-' => K::Minus,
            '*' => K::Star,
            '=' => one_or_two(&mut chars, '=', K::Assign, K::EqualEqual),
            '<' => one_or_two(&mut chars, '=', K::Less, K::LessEqual),
            '>' => one_or_two(&mut chars, '=', K::Greater, K::GreaterEqual),
            '!' => {
                if chars.next_if(|&(_, c)| c == '=').is_none() {
                    return Err(LexError { msg: "expected '=' after '!'".to_string(), offset });
                }
                K::BangEqual
            }
            c if c.is_ascii_digit() => {
                let mut digits = String::from(c);
                while let Some((_, d)) = chars.next_if(|(_, d)| d.is_ascii_digit()) {
                    digits.push(d);
                }
                let n = digits.parse::<Int>().map_err(|_| LexError {
                    msg: format!("integer literal {digits} does not fit in a word"),
                    offset,
                })?;
                K::Number(n)
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = String::from(c);
                while let Some((_, d)) =
                    chars.next_if(|(_, d)| d.is_ascii_alphanumeric() || *d == '_')
                {
                    name.push(d);
                }
                K::Ident(name)
            }
            c => return Err(LexError { msg: format!("unexpected character '{c}'"), offset }),
        };
        tokens.push(kind);
    }
    Ok(tokens)
}
