//! Structural ordering over exercise values.
//!
//! Answers one question: is argument tuple `x` a strictly smaller
//! recursion measure than tuple `y`? The runner uses this to prove that
//! every call a solution makes to its solver shrinks the problem.
//!
//! Rules, in precedence order:
//!
//! 1. Two scalars of the same primitive kind compare natively
//!    (numerically for Int/Float/Bool, lexicographically for Text).
//! 2. Two sequences: length dominates. The shorter sequence is strictly
//!    less regardless of element values. Equal lengths compare pairwise:
//!    strictly less iff at least one paired element is strictly less and
//!    no paired element is strictly greater.
//!
//! Anything else (a scalar against a list) is not comparable and reports
//! "not less", so arity abuse surfaces as a shrinking violation rather
//! than a silent pass. Equal tuples are likewise "not less".

use crate::value::Value;

/// Strict structural "less than" over two values.
pub fn value_lt(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Int(a), Value::Int(b)) => a < b,
        (Value::Text(a), Value::Text(b)) => a < b,
        (Value::List(a), Value::List(b)) => seq_lt(a, b),
        _ => match (numeric(x), numeric(y)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        },
    }
}

/// Strict structural "less than" over two argument tuples.
///
/// The tuples are compared positionally as whole sequences, so
/// "first argument grows, second shrinks more" is rejected: no element
/// may exceed its counterpart and at least one must strictly decrease.
/// Tuples of differing arity never arise from a well-formed exercise;
/// if they do, length dominance still gives a deterministic answer.
pub fn args_lt(x: &[Value], y: &[Value]) -> bool {
    seq_lt(x, y)
}

fn seq_lt(x: &[Value], y: &[Value]) -> bool {
    if x.len() != y.len() {
        return x.len() < y.len();
    }

    let pairs = || x.iter().zip(y.iter());
    let has_less = pairs().any(|(a, b)| value_lt(a, b));
    let has_more = pairs().any(|(a, b)| value_lt(b, a));

    has_less && !has_more
}

/// Numeric reading of a scalar, if it has one. Booleans count as 0/1,
/// matching integer comparison against them.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(x) => Some(*x),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        Value::Text(_) | Value::List(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use proptest::prelude::*;

    #[test]
    fn integers_compare_natively() {
        assert!(value_lt(&Value::Int(2), &Value::Int(3)));
        assert!(!value_lt(&Value::Int(3), &Value::Int(2)));
        assert!(!value_lt(&Value::Int(3), &Value::Int(3)));
    }

    #[test]
    fn text_compares_lexicographically() {
        assert!(value_lt(&Value::from("abc"), &Value::from("abd")));
        assert!(!value_lt(&Value::from("b"), &Value::from("aaaa")));
    }

    #[test]
    fn mixed_numeric_kinds_compare_numerically() {
        assert!(value_lt(&Value::Int(1), &Value::Float(1.5)));
        assert!(value_lt(&Value::Bool(false), &Value::Int(1)));
        assert!(!value_lt(&Value::Float(2.5), &Value::Int(2)));
    }

    #[test]
    fn shorter_list_is_less_even_with_larger_elements() {
        let shorter = Value::from(vec![999]);
        let longer = Value::from(vec![1, 2]);
        assert!(value_lt(&shorter, &longer));
        assert!(!value_lt(&longer, &shorter));
    }

    #[test]
    fn equal_length_needs_one_less_and_none_greater() {
        // second element smaller, first unchanged
        assert!(args_lt(&args![2, 5], &args![2, 6]));
        // first grows even though second shrinks more
        assert!(!args_lt(&args![3, 1], &args![2, 6]));
        // elementwise identical
        assert!(!args_lt(&args![2, 6], &args![2, 6]));
    }

    #[test]
    fn nested_lists_compare_recursively() {
        let smaller = args![vec![vec![1], vec![2, 3]]];
        let bigger = args![vec![vec![1, 9], vec![2, 3]]];
        assert!(args_lt(&smaller, &bigger));
        assert!(!args_lt(&bigger, &smaller));
    }

    #[test]
    fn dropping_a_list_element_registers_as_a_decrease() {
        // tail of [9, 10]; the remaining element is larger than the head
        assert!(args_lt(&args![vec![10]], &args![vec![9, 10]]));
    }

    #[test]
    fn scalar_against_list_is_never_less() {
        assert!(!value_lt(&Value::Int(0), &Value::from(vec![1, 2])));
        assert!(!value_lt(&Value::from(vec![1, 2]), &Value::Int(99)));
        assert!(!value_lt(&Value::from("ab"), &Value::Int(3)));
    }

    proptest! {
        #[test]
        fn scalar_order_matches_native_order(a: i64, b: i64) {
            prop_assert_eq!(value_lt(&Value::Int(a), &Value::Int(b)), a < b);
        }

        #[test]
        fn length_dominance(xs in prop::collection::vec(any::<i64>(), 0..8),
                            ys in prop::collection::vec(any::<i64>(), 0..8)) {
            let x: Vec<Value> = xs.iter().map(|n| Value::Int(*n)).collect();
            let y: Vec<Value> = ys.iter().map(|n| Value::Int(*n)).collect();
            if x.len() < y.len() {
                prop_assert!(args_lt(&x, &y));
            }
        }

        #[test]
        fn irreflexive(xs in prop::collection::vec(any::<i64>(), 0..8)) {
            let x: Vec<Value> = xs.iter().map(|n| Value::Int(*n)).collect();
            prop_assert!(!args_lt(&x, &x));
        }
    }
}
