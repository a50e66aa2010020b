// Copyright (c) 2025 knix
// All rights reserved.

//! The free functions every herang program can call. Each one is a thin
//! transformation over [`Vector`]; the ones that touch standard streams also
//! come in a stream-generic `_from`/`_to` form.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use itertools::Itertools;

use crate::error::{VectorResult, assert_ok};
use crate::vector::{Int, Vector};


/// One element per byte of the next line, without its `\n`. EOF gives an empty vector.
pub fn readline_from<R: BufRead>(input: &mut R) -> io::Result<Vector> {
    let mut line = Vec::with_capacity(128);
    input.read_until(b'\n', &mut line)?;
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    Ok(line.into_iter().map(Int::from).collect())
}

pub fn readline() -> io::Result<Vector> {
    readline_from(&mut io::stdin().lock())
}

/// Writes `(1 | 2) (3)` style output, one line per call
pub fn print_to<W: Write>(out: &mut W, args: &[Vector]) -> io::Result<Vector> {
    writeln!(out, "{}", args.iter().join(" "))?;
    Ok(Vector::new())
}

pub fn print(args: &[Vector]) -> io::Result<Vector> {
    print_to(&mut io::stdout().lock(), args)
}

/// Like [`print_to`], but every element is written as the byte it encodes
pub fn sprint_to<W: Write>(out: &mut W, args: &[Vector]) -> io::Result<Vector> {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        let bytes: Vec<u8> = arg.iter().map(|&w| w as u8).collect();
        out.write_all(&bytes)?;
    }
    out.write_all(b"\n")?;
    Ok(Vector::new())
}

pub fn sprint(args: &[Vector]) -> io::Result<Vector> {
    sprint_to(&mut io::stdout().lock(), args)
}

/// C locale `isspace`: tab, newline, vertical tab, form feed, carriage return, space
pub fn is_space(w: Int) -> bool {
    matches!(w, 9..=13 | 32)
}

pub fn trim(a: &Vector) -> Vector {
    let words = a.as_slice();
    let Some(start) = words.iter().position(|&w| !is_space(w)) else {
        return Vector::new();
    };
    let end = words.iter().rposition(|&w| !is_space(w)).map_or(start, |i| i + 1);
    Vector::from(&words[start..end])
}

pub fn len(a: &Vector) -> Vector {
    Vector::scalar(a.len() as Int)
}

/// `a[sum(l) .. sum(r)]`
pub fn try_slice(a: &Vector, l: &Vector, r: &Vector) -> VectorResult<Vector> {
    a.try_range(l.sum() as usize, r.sum() as usize)
}

pub fn slice(a: &Vector, l: &Vector, r: &Vector) -> Vector {
    assert_ok(try_slice(a, l, r))
}

pub fn cyber(a: &Vector) -> Vector {
    Vector::zeroed(a.sum() as usize)
}

/// Seconds since the Unix epoch, truncated to a single word
pub fn time() -> Vector {
    let secs = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    Vector::scalar(secs as Int)
}
