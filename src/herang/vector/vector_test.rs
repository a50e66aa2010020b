use crate::error::VectorError;
use crate::vector::*;

fn v<const N: usize>(words: [Int; N]) -> Vector {
    Vector::from(words)
}

fn samples() -> Vec<Vector> {
    vec![v([]), v([0]), v([7]), v([1, 2]), v([3, 0, 9]), v([5, 5, 5, 5]), v([Int::MAX, 1])]
}

#[test]
fn test_construction() {
    assert!(Vector::new().is_empty());
    assert_eq!(Vector::default(), Vector::new());
    assert_eq!(Vector::scalar(42).to_vec(), vec![42]);
    assert_eq!(Vector::zeroed(3).to_vec(), vec![0, 0, 0]);
    assert_eq!(Vector::from(vec![1, 2, 3]), v([1, 2, 3]));
    assert_eq!(Vector::from(&[4, 5][..]), v([4, 5]));
    assert_eq!((1..=3).collect::<Vector>(), v([1, 2, 3]));
}

#[test]
fn test_clone_is_independent() {
    let mut a = v([1, 2, 3]);
    let b = a.clone();
    a.set(&v([0]), &v([9]));
    assert_eq!(a, v([9, 2, 3]));
    assert_eq!(b, v([1, 2, 3]));
}

mod concat_tests {
    use super::*;

    #[test]
    fn test_concat() {
        assert_eq!(v([1, 2]) | v([3]), v([1, 2, 3]));
        assert_eq!(&v([3]) | &v([1, 2]), v([3, 1, 2]));
    }

    #[test]
    fn test_concat_associative() {
        for a in samples() {
            for b in samples() {
                for c in samples() {
                    assert_eq!((&a | &b) | &c, &a | (&b | &c));
                }
            }
        }
    }

    #[test]
    fn test_concat_identity() {
        for a in samples() {
            assert_eq!(&a | &Vector::new(), a);
            assert_eq!(&Vector::new() | &a, a);
        }
    }
}

mod arith_tests {
    use super::*;

    #[test]
    fn test_equal_length() {
        assert_eq!(v([1, 2, 3]) + v([10, 20, 30]), v([11, 22, 33]));
        assert_eq!(v([10, 20, 30]) - v([1, 2, 3]), v([9, 18, 27]));
        assert_eq!(v([2, 3, 4]) * v([5, 6, 7]), v([10, 18, 28]));
    }

    #[test]
    fn test_commutative_on_equal_length() {
        let a = v([1, 5, 9, 13]);
        let b = v([2, 0, 7, 100]);
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn test_truncates_to_shorter() {
        for a in samples() {
            for b in samples() {
                let expected = a.len().min(b.len());
                assert_eq!((&a + &b).len(), expected);
                assert_eq!((&a - &b).len(), expected);
                assert_eq!((&a * &b).len(), expected);
            }
        }
        assert_eq!(v([1, 2, 3]) + v([10]), v([11]));
        assert_eq!(v([10]) * v([2, 3, 4]), v([20]));
    }

    #[test]
    fn test_empty_operand() {
        assert_eq!(v([1, 2]) + v([]), v([]));
        assert_eq!(v([]) - v([1, 2]), v([]));
    }

    #[test]
    fn test_longer_lhs_subtraction_is_not_mirrored() {
        // Operands swap so the shorter one leads; the subtraction keeps its
        // direction, so this is rhs - lhs pointwise.
        let a = v([10, 20, 30]);
        let b = v([1, 2]);
        assert_eq!(&a - &b, v([1u32.wrapping_sub(10), 2u32.wrapping_sub(20)]));
        assert_eq!(&a - &b, &b - &v([10, 20]));
    }

    #[test]
    fn test_shorter_lhs_subtraction() {
        assert_eq!(v([10, 20]) - v([1, 2, 3]), v([9, 18]));
    }

    #[test]
    fn test_wraps() {
        assert_eq!(v([0]) - v([1]), v([Int::MAX]));
        assert_eq!(v([Int::MAX]) + v([2]), v([1]));
        assert_eq!(v([1 << 31]) * v([2]), v([0]));
    }

    #[test]
    fn test_execute_arith_op_direct() {
        assert_eq!(execute_arith_op(&v([4]), &v([1, 1]), ArithOpKind::Subtract), v([3]));
        assert_eq!(execute_arith_op(&v([1, 1]), &v([4]), ArithOpKind::Subtract), v([3]));
    }
}

mod cmp_tests {
    use super::*;

    #[test]
    fn test_lexicographic_less() {
        assert_eq!(v([1, 2]).less(&v([1, 3])), v([1]));
        assert_eq!(v([1]).less(&v([1, 2])), v([1]));
        assert_eq!(v([1, 2]).less(&v([1, 2])), v([0]));
        assert_eq!(v([2]).less(&v([1, 9, 9])), v([0]));
        assert_eq!(v([]).less(&v([0])), v([1]));
    }

    #[test]
    fn test_other_orderings() {
        let a = v([1, 2]);
        let b = v([1, 3]);
        assert_eq!(a.greater(&b), v([0]));
        assert_eq!(b.greater(&a), v([1]));
        assert_eq!(a.less_equal(&a), v([1]));
        assert_eq!(b.less_equal(&a), v([0]));
        assert_eq!(a.greater_equal(&a), v([1]));
        assert_eq!(a.greater_equal(&b), v([0]));
    }

    #[test]
    fn test_equality() {
        assert_eq!(v([1, 2]).equals(&v([1, 2])), v([1]));
        assert_eq!(v([1, 2]).not_equals(&v([1, 2])), v([0]));
        assert_eq!(v([]).equals(&v([])), v([1]));
    }

    #[test]
    fn test_different_lengths_never_equal() {
        for a in samples() {
            for b in samples() {
                if a.len() != b.len() {
                    assert_eq!(a.equals(&b), v([0]));
                    assert_eq!(a.not_equals(&b), v([1]));
                }
            }
        }
        assert_eq!(v([1]).equals(&v([1, 0])), v([0]));
    }

    #[test]
    fn test_results_are_single_booleans() {
        for a in samples() {
            for b in samples() {
                for op in [
                    CmpOpKind::Less,
                    CmpOpKind::LessEqual,
                    CmpOpKind::Greater,
                    CmpOpKind::GreaterEqual,
                    CmpOpKind::Equals,
                    CmpOpKind::NotEquals,
                ] {
                    let r = a.compare(&b, op);
                    assert_eq!(r.len(), 1);
                    assert!(r.as_slice()[0] <= 1);
                }
            }
        }
    }
}

#[test]
fn test_truthiness() {
    assert!(!v([]).truthy());
    assert!(v([1]).truthy());
    assert!(v([3, 4, 5]).truthy());
    assert!(!v([3, 0, 5]).truthy());
    assert!(!v([0]).as_bool());
    assert!(Vector::from_bool(true).as_bool());
    assert!(!Vector::from_bool(false).as_bool());
}

#[test]
fn test_sum() {
    assert_eq!(v([]).sum(), 0);
    assert_eq!(v([1, 2, 3]).sum(), 6);
    assert_eq!(v([Int::MAX, 2]).sum(), 1);
}

mod gather_tests {
    use super::*;

    #[test]
    fn test_gather() {
        let a = v([10, 20, 30]);
        assert_eq!(a.gather(&v([2, 0, 0])), v([30, 10, 10]));
        assert_eq!(a.gather(&v([])), v([]));
    }

    #[test]
    fn test_gather_identity() {
        for a in samples().into_iter().filter(|a| !a.is_empty()) {
            let all: Vector = (0..a.len() as Int).collect();
            assert_eq!(a.gather(&all), a);
        }
    }

    #[test]
    fn test_try_gather_out_of_range() {
        let a = v([1, 2, 3]);
        assert_eq!(
            a.try_gather(&v([0, 3])),
            Err(VectorError::IndexOutOfRange { op: "gather", index: 3, len: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_gather_at_len_panics() {
        let a = v([1, 2, 3]);
        let _ = a.gather(&Vector::scalar(a.len() as Int));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_gather_from_empty_panics() {
        let _ = v([]).gather(&v([0]));
    }
}

mod scatter_tests {
    use super::*;

    #[test]
    fn test_set() {
        let mut a = v([0, 0, 0, 0]);
        a.set(&v([1, 3]), &v([7, 8]));
        assert_eq!(a, v([0, 7, 0, 8]));
    }

    #[test]
    fn test_set_cycles_values() {
        let mut a = Vector::zeroed(5);
        a.set(&v([0, 1, 2, 3, 4]), &v([1, 2]));
        assert_eq!(a, v([1, 2, 1, 2, 1]));
    }

    #[test]
    fn test_set_returns_receiver() {
        let mut a = v([1, 2, 3]);
        let len = a.set(&v([0]), &v([5])).len();
        assert_eq!(len, 3);
        assert_eq!(a.set(&v([1]), &v([6])).clone(), v([5, 6, 3]));
    }

    #[test]
    fn test_set_then_gather() {
        let y = v([4, 1, 0]);
        let z = v([9, 8]);
        let mut a = Vector::zeroed(6);
        a.set(&y, &z);
        for (i, &index) in y.iter().enumerate() {
            assert_eq!(a.gather(&Vector::scalar(index)), Vector::scalar(z.as_slice()[i % z.len()]));
        }
    }

    #[test]
    fn test_set_last_write_wins() {
        let mut a = v([0, 0]);
        a.set(&v([1, 1]), &v([3, 4]));
        assert_eq!(a, v([0, 4]));
    }

    #[test]
    fn test_set_with_empty_indices_is_noop() {
        let mut a = v([1, 2]);
        a.set(&v([]), &v([9]));
        assert_eq!(a, v([1, 2]));
    }

    #[test]
    fn test_try_set_errors_leave_receiver_untouched() {
        let mut a = v([1, 2, 3]);
        assert_eq!(a.try_set(&v([0]), &v([])).err(), Some(VectorError::EmptyReplacement));
        assert_eq!(
            a.try_set(&v([0, 5]), &v([9])).err(),
            Some(VectorError::IndexOutOfRange { op: "set", index: 5, len: 3 })
        );
        assert_eq!(a, v([1, 2, 3]));
    }

    #[test]
    #[should_panic(expected = "replacement values are empty")]
    fn test_set_empty_values_panics() {
        let mut a = v([1]);
        a.set(&v([0]), &v([]));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_out_of_range_panics() {
        let mut a = v([1]);
        a.set(&v([1]), &v([2]));
    }
}

#[test]
fn test_try_range() {
    let a = v([1, 2, 3, 4]);
    assert_eq!(a.try_range(1, 3), Ok(v([2, 3])));
    assert_eq!(a.try_range(4, 4), Ok(v([])));
    assert_eq!(a.try_range(0, 5), Err(VectorError::SliceOutOfRange { start: 0, end: 5, len: 4 }));
    assert_eq!(a.try_range(3, 2), Err(VectorError::SliceOutOfRange { start: 3, end: 2, len: 4 }));
}

mod literal_tests {
    use super::*;
    use crate::error::ParseVectorError;

    #[test]
    fn test_display() {
        assert_eq!(v([1, 2, 3]).to_string(), "(1 | 2 | 3)");
        assert_eq!(v([7]).to_string(), "(7)");
        assert_eq!(v([]).to_string(), "()");
    }

    #[test]
    fn test_parse() {
        assert_eq!("1 | 2 | 3".parse::<Vector>(), Ok(v([1, 2, 3])));
        assert_eq!("(4|5)".parse::<Vector>(), Ok(v([4, 5])));
        assert_eq!("  ( 6 )  ".parse::<Vector>(), Ok(v([6])));
        assert_eq!("()".parse::<Vector>(), Ok(v([])));
        assert_eq!("".parse::<Vector>(), Ok(v([])));
    }

    #[test]
    fn test_parse_display_agree() {
        for a in samples() {
            assert_eq!(a.to_string().parse::<Vector>(), Ok(a));
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1 | x".parse::<Vector>(),
            Err(ParseVectorError { element: "x".to_string() })
        );
        assert_eq!("1 || 2".parse::<Vector>(), Err(ParseVectorError { element: "".to_string() }));
        assert!("-1".parse::<Vector>().is_err());
    }
}
