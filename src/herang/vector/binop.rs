use crate::vector::{Int, Vector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOpKind {
    Add,
    Subtract,
    Multiply,
}

impl ArithOpKind {
    fn apply(self, v1: Int, v2: Int) -> Int {
        match self {
            ArithOpKind::Add => v1.wrapping_add(v2),
            ArithOpKind::Subtract => v1.wrapping_sub(v2),
            ArithOpKind::Multiply => v1.wrapping_mul(v2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOpKind {
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equals,
    NotEquals,
}

/// The shorter operand is always the positional base; when `lhs` is longer the
/// operands trade places, but the op itself is not mirrored. For `Subtract` this
/// means `lhs - rhs` with a longer `lhs` yields `rhs[i] - lhs[i]`.
pub fn execute_arith_op(lhs: &Vector, rhs: &Vector, op: ArithOpKind) -> Vector {
    if lhs.len() > rhs.len() {
        return execute_arith_op(rhs, lhs, op);
    }
    lhs.iter().zip(rhs.iter()).map(|(&v1, &v2)| op.apply(v1, v2)).collect()
}

pub fn execute_cmp_op(lhs: &Vector, rhs: &Vector, op: CmpOpKind) -> Vector {
    use CmpOpKind as K;
    let result = match op {
        K::Less => lhs < rhs,
        K::LessEqual => lhs <= rhs,
        K::Greater => lhs > rhs,
        K::GreaterEqual => lhs >= rhs,
        K::Equals => lhs == rhs,
        K::NotEquals => lhs != rhs,
    };
    Vector::from_bool(result)
}
