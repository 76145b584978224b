use crate::domain::model::{FactorialValue, OverflowPolicy};
use crate::utils::error::{KataError, Result};
use num_bigint::BigUint;

/// Largest `n` whose factorial fits in a `u64` (20! = 2432902008176640000).
pub const MAX_CHECKED_ARGUMENT: i32 = 20;

/// Computes `n!` with the accumulator chosen by `policy`.
///
/// Negative `n` never reaches the multiplication and yields
/// [`KataError::NegativeFactorial`].
pub fn factorial(n: i32, policy: OverflowPolicy) -> Result<FactorialValue> {
    if n < 0 {
        return Err(KataError::NegativeFactorial { value: n });
    }

    let value = match policy {
        OverflowPolicy::Wrapping => FactorialValue::Wrapped(wrapping_factorial(n)),
        OverflowPolicy::Checked => FactorialValue::Checked(checked_factorial(n)?),
        OverflowPolicy::Big => FactorialValue::Big(big_factorial(n as u32)),
    };

    tracing::debug!(n, ?policy, "computed factorial");
    Ok(value)
}

/// Textbook recursion: `0! = 1`, `n! = n * (n - 1)!`.
///
/// Recursion depth equals `n`; arguments whose result cannot fit in a `u64`
/// are rejected before recursing.
pub fn factorial_recursive(n: i32) -> Result<u64> {
    if n < 0 {
        return Err(KataError::NegativeFactorial { value: n });
    }
    if n > MAX_CHECKED_ARGUMENT {
        return Err(KataError::Overflow { value: n, bits: 64 });
    }

    if n == 0 {
        Ok(1)
    } else {
        let rest = factorial_recursive(n - 1)?;
        (n as u64)
            .checked_mul(rest)
            .ok_or(KataError::Overflow { value: n, bits: 64 })
    }
}

fn wrapping_factorial(n: i32) -> i32 {
    let mut acc: i32 = 1;
    for k in 1..=n {
        acc = acc.wrapping_mul(k);
        // Once every bit has been shifted out the product stays zero.
        if acc == 0 {
            break;
        }
    }
    acc
}

fn checked_factorial(n: i32) -> Result<u64> {
    let overflow = || KataError::Overflow { value: n, bits: 64 };
    if n > MAX_CHECKED_ARGUMENT {
        return Err(overflow());
    }
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k).ok_or_else(overflow))
}

fn big_factorial(n: u32) -> BigUint {
    (1..=n).fold(BigUint::from(1u32), |acc, k| acc * k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_base_case() {
        assert_eq!(factorial_recursive(0).unwrap(), 1);
        for policy in [OverflowPolicy::Big, OverflowPolicy::Checked, OverflowPolicy::Wrapping] {
            assert_eq!(factorial(0, policy).unwrap().to_string(), "1");
        }
    }

    #[test]
    fn test_factorial_of_five() {
        assert_eq!(factorial_recursive(5).unwrap(), 120);
        assert_eq!(
            factorial(5, OverflowPolicy::Checked).unwrap(),
            FactorialValue::Checked(120)
        );
        assert_eq!(
            factorial(5, OverflowPolicy::Wrapping).unwrap(),
            FactorialValue::Wrapped(120)
        );
        assert_eq!(
            factorial(5, OverflowPolicy::Big).unwrap(),
            FactorialValue::Big(BigUint::from(120u32))
        );
    }

    #[test]
    fn test_negative_argument_is_a_domain_error() {
        assert!(matches!(
            factorial_recursive(-3),
            Err(KataError::NegativeFactorial { value: -3 })
        ));
        for policy in [OverflowPolicy::Big, OverflowPolicy::Checked, OverflowPolicy::Wrapping] {
            assert!(matches!(
                factorial(-1, policy),
                Err(KataError::NegativeFactorial { value: -1 })
            ));
        }
        assert!(matches!(
            factorial(i32::MIN, OverflowPolicy::Big),
            Err(KataError::NegativeFactorial { .. })
        ));
    }

    #[test]
    fn test_recursive_law_in_safe_range() {
        for n in 1..=12 {
            let whole = factorial_recursive(n).unwrap();
            let rest = factorial_recursive(n - 1).unwrap();
            assert_eq!(whole, n as u64 * rest);
            assert_eq!(
                factorial(n, OverflowPolicy::Wrapping).unwrap(),
                FactorialValue::Wrapped(whole as i32)
            );
        }
    }

    #[test]
    fn test_loop_and_recursion_agree() {
        for n in 0..=MAX_CHECKED_ARGUMENT {
            assert_eq!(
                factorial(n, OverflowPolicy::Checked).unwrap(),
                FactorialValue::Checked(factorial_recursive(n).unwrap())
            );
        }
    }

    #[test]
    fn test_checked_overflow_is_reported() {
        assert_eq!(
            factorial(20, OverflowPolicy::Checked).unwrap().to_string(),
            "2432902008176640000"
        );
        assert!(matches!(
            factorial(21, OverflowPolicy::Checked),
            Err(KataError::Overflow { value: 21, bits: 64 })
        ));
        assert!(matches!(
            factorial_recursive(21),
            Err(KataError::Overflow { value: 21, bits: 64 })
        ));
    }

    #[test]
    fn test_wrapping_matches_fixed_width_int() {
        // 13! = 6227020800, which wraps to 6227020800 - 2^32 in 32 bits.
        assert_eq!(
            factorial(13, OverflowPolicy::Wrapping).unwrap(),
            FactorialValue::Wrapped(1932053504)
        );
        // 34! carries at least 32 factors of two.
        assert_eq!(
            factorial(34, OverflowPolicy::Wrapping).unwrap(),
            FactorialValue::Wrapped(0)
        );
        assert_eq!(
            factorial(i32::MAX, OverflowPolicy::Wrapping).unwrap(),
            FactorialValue::Wrapped(0)
        );
    }

    #[test]
    fn test_big_factorial_is_exact() {
        assert_eq!(
            factorial(25, OverflowPolicy::Big).unwrap().to_string(),
            "15511210043330985984000000"
        );
    }
}
