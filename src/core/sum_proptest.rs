//! Property-based tests for summation
//!
//! Results are checked against native `u128` addition where the operands fit,
//! and against algebraic laws where they do not.

#[cfg(test)]
mod tests {
    use crate::core::digits::canonicalize;
    use crate::core::{sum, NumericString};
    use proptest::prelude::*;

    // Strategy for digit strings that may carry leading zeros
    prop_compose! {
        fn padded_u64()(
            value in any::<u64>(),
            zeros in 0usize..5,
        ) -> (u64, String) {
            (value, format!("{}{value}", "0".repeat(zeros)))
        }
    }

    fn long_digits() -> impl Strategy<Value = String> {
        prop::string::string_regex("[0-9]{1,80}").unwrap()
    }

    proptest! {
        #[test]
        fn test_sum_matches_native_addition(x in any::<u64>(), y in any::<u64>()) {
            let expected = (x as u128 + y as u128).to_string();
            prop_assert_eq!(sum(&x.to_string(), &y.to_string()).unwrap(), expected);
        }

        #[test]
        fn test_leading_zeros_do_not_change_result(
            (x, padded_x) in padded_u64(),
            (y, padded_y) in padded_u64(),
        ) {
            let expected = (x as u128 + y as u128).to_string();
            prop_assert_eq!(sum(&padded_x, &padded_y).unwrap(), expected);
        }

        #[test]
        fn test_sum_is_commutative(a in long_digits(), b in long_digits()) {
            prop_assert_eq!(sum(&a, &b).unwrap(), sum(&b, &a).unwrap());
        }

        #[test]
        fn test_sum_is_associative(
            a in long_digits(),
            b in long_digits(),
            c in long_digits(),
        ) {
            let ab_c = sum(&sum(&a, &b).unwrap(), &c).unwrap();
            let a_bc = sum(&a, &sum(&b, &c).unwrap()).unwrap();
            prop_assert_eq!(ab_c, a_bc);
        }

        #[test]
        fn test_zero_is_identity(a in long_digits()) {
            prop_assert_eq!(sum(&a, "0").unwrap(), canonicalize(&a));
        }

        #[test]
        fn test_result_is_canonical(a in long_digits(), b in long_digits()) {
            let result = sum(&a, &b).unwrap();
            prop_assert!(!result.is_empty());
            prop_assert!(result.bytes().all(|c| c.is_ascii_digit()));
            prop_assert!(result == "0" || !result.starts_with('0'));
        }

        #[test]
        fn test_sum_never_shrinks(a in long_digits(), b in long_digits()) {
            let total: NumericString = sum(&a, &b).unwrap().parse().unwrap();
            let left: NumericString = a.parse().unwrap();
            let right: NumericString = b.parse().unwrap();
            prop_assert!(total >= left);
            prop_assert!(total >= right);
        }
    }
}
