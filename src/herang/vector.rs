// Copyright (c) 2025 knix
// All rights reserved.

use std::fmt::{Display, Formatter};
use std::ops::{Add, BitOr, Mul, Sub};
use std::str::FromStr;

use itertools::Itertools;

use crate::SV8;
use crate::error::{ParseVectorError, VectorError, VectorResult, assert_ok};

mod binop;
pub use binop::{ArithOpKind, CmpOpKind, execute_arith_op, execute_cmp_op};

#[cfg(test)]
mod vector_test;

pub type Int = u32;

/// The one value type of the language: an ordered run of unsigned words that is
/// read as a number, a boolean or a string depending on who is asking.
///
/// Every operator produces a fresh `Vector`; [`Vector::set`] is the only
/// in-place mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector {
    words: SV8<Int>,
}

impl Vector {
    pub fn new() -> Vector {
        Vector { words: SV8::new() }
    }

    pub fn scalar(value: Int) -> Vector {
        Vector { words: smallvec::smallvec![value] }
    }

    pub fn zeroed(len: usize) -> Vector {
        Vector { words: smallvec::smallvec![0; len] }
    }

    /// `[1]` for true, `[0]` for false
    pub fn from_bool(b: bool) -> Vector {
        Vector::scalar(b as Int)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[Int] {
        &self.words
    }

    pub fn to_vec(&self) -> Vec<Int> {
        self.words.to_vec()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Int> {
        self.words.iter()
    }

    pub fn get(&self, index: usize) -> Option<Int> {
        self.words.get(index).copied()
    }

    /// Non-empty and no zero element. The empty vector is false.
    pub fn truthy(&self) -> bool {
        !self.words.is_empty() && self.words.iter().all(|&w| w != 0)
    }

    pub fn as_bool(&self) -> bool {
        self.truthy()
    }

    /// Wrapping sum of all elements; this is how a vector is read as a count.
    pub fn sum(&self) -> Int {
        self.words.iter().fold(0, |acc: Int, &w| acc.wrapping_add(w))
    }

    pub fn compare(&self, other: &Vector, op: CmpOpKind) -> Vector {
        execute_cmp_op(self, other, op)
    }

    pub fn less(&self, other: &Vector) -> Vector {
        self.compare(other, CmpOpKind::Less)
    }

    pub fn greater(&self, other: &Vector) -> Vector {
        self.compare(other, CmpOpKind::Greater)
    }

    pub fn less_equal(&self, other: &Vector) -> Vector {
        self.compare(other, CmpOpKind::LessEqual)
    }

    pub fn greater_equal(&self, other: &Vector) -> Vector {
        self.compare(other, CmpOpKind::GreaterEqual)
    }

    pub fn equals(&self, other: &Vector) -> Vector {
        self.compare(other, CmpOpKind::Equals)
    }

    pub fn not_equals(&self, other: &Vector) -> Vector {
        self.compare(other, CmpOpKind::NotEquals)
    }

    /// `result[i] = self[indices[i]]`
    pub fn try_gather(&self, indices: &Vector) -> VectorResult<Vector> {
        let len = self.len();
        indices
            .iter()
            .map(|&i| {
                let index = i as usize;
                self.get(index).ok_or(VectorError::IndexOutOfRange { op: "gather", index, len })
            })
            .collect()
    }

    /// Panics if any index is out of range
    pub fn gather(&self, indices: &Vector) -> Vector {
        assert_ok(self.try_gather(indices))
    }

    /// Writes `values[i % values.len()]` to `self[indices[i]]` for every `i`, so a
    /// short `values` is cycled. Later writes to the same index win.
    ///
    /// Both preconditions are checked up front, so on `Err` nothing has been written.
    pub fn try_set(&mut self, indices: &Vector, values: &Vector) -> VectorResult<&mut Vector> {
        if values.is_empty() {
            return Err(VectorError::EmptyReplacement);
        }
        let len = self.len();
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= len) {
            return Err(VectorError::IndexOutOfRange { op: "set", index: bad as usize, len });
        }
        for (i, &index) in indices.iter().enumerate() {
            self.words[index as usize] = values.words[i % values.len()];
        }
        Ok(self)
    }

    /// Panics if `values` is empty or any index is out of range
    pub fn set(&mut self, indices: &Vector, values: &Vector) -> &mut Vector {
        assert_ok(self.try_set(indices, values))
    }

    pub fn try_range(&self, start: usize, end: usize) -> VectorResult<Vector> {
        if start > end || end > self.len() {
            return Err(VectorError::SliceOutOfRange { start, end, len: self.len() });
        }
        Ok(Vector::from(&self.words[start..end]))
    }
}

impl From<Vec<Int>> for Vector {
    fn from(value: Vec<Int>) -> Self {
        Vector { words: SV8::from_vec(value) }
    }
}

impl From<&[Int]> for Vector {
    fn from(value: &[Int]) -> Self {
        Vector { words: SV8::from_slice(value) }
    }
}

impl<const N: usize> From<[Int; N]> for Vector {
    fn from(value: [Int; N]) -> Self {
        value.into_iter().collect()
    }
}

impl FromIterator<Int> for Vector {
    fn from_iter<T: IntoIterator<Item = Int>>(iter: T) -> Self {
        Vector { words: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Int;
    type IntoIter = std::slice::Iter<'a, Int>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl BitOr for &Vector {
    type Output = Vector;

    fn bitor(self, rhs: &Vector) -> Vector {
        let mut words = self.words.clone();
        words.extend_from_slice(&rhs.words);
        Vector { words }
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        execute_arith_op(self, rhs, ArithOpKind::Add)
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        execute_arith_op(self, rhs, ArithOpKind::Subtract)
    }
}

impl Mul for &Vector {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        execute_arith_op(self, rhs, ArithOpKind::Multiply)
    }
}

macro_rules! forward_owned_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Vector {
            type Output = Vector;

            fn $method(self, rhs: Vector) -> Vector {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Vector> for Vector {
            type Output = Vector;

            fn $method(self, rhs: &Vector) -> Vector {
                (&self).$method(rhs)
            }
        }

        impl $trait<Vector> for &Vector {
            type Output = Vector;

            fn $method(self, rhs: Vector) -> Vector {
                self.$method(&rhs)
            }
        }
    };
}

forward_owned_binop!(BitOr, bitor);
forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.words.iter().join(" | "))
    }
}

impl FromStr for Vector {
    type Err = ParseVectorError;

    /// Accepts what `Display` writes, with or without the parentheses
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = match s.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
            Some(inner) => inner.trim(),
            None => s,
        };
        if inner.is_empty() {
            return Ok(Vector::new());
        }
        inner
            .split('|')
            .map(|element| {
                let element = element.trim();
                element
                    .parse::<Int>()
                    .map_err(|_| ParseVectorError { element: element.to_string() })
            })
            .collect()
    }
}
