use crate::error::{ExplorerError, Result};

/// Largest n whose factorial fits a `u128`.
pub const MAX_FACTORIAL: i64 = 34;

/// n! by linear recursion. Past 34! the value no longer fits a `u128`.
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(ExplorerError::invalid("n", format!("factorial of negative number {}", n)));
    }
    // recursion never goes deeper than MAX_FACTORIAL frames
    if n > MAX_FACTORIAL {
        return Err(ExplorerError::Overflow { operation: "factorial" });
    }
    if n == 0 || n == 1 {
        return Ok(1);
    }
    let rest = factorial(n - 1)?;
    rest.checked_mul(n as u128)
        .ok_or(ExplorerError::Overflow { operation: "factorial" })
}

/// base^exp as base * base^(exp-1).
pub fn power(base: i64, exp: i64) -> Result<i128> {
    if exp < 0 {
        return Err(ExplorerError::invalid("exp", format!("negative exponent {}", exp)));
    }
    if exp == 0 {
        return Ok(1);
    }
    match base {
        0 | 1 => return Ok(base as i128),
        -1 => return Ok(if exp % 2 == 0 { 1 } else { -1 }),
        // |base| >= 2 overflows an i128 past 2^127
        _ if exp >= i128::BITS as i64 => {
            return Err(ExplorerError::Overflow { operation: "power" });
        }
        _ => {}
    }
    let rest = power(base, exp - 1)?;
    rest.checked_mul(base as i128)
        .ok_or(ExplorerError::Overflow { operation: "power" })
}

/// Trial division from n-1 down to 1, one divisor per call.
///
/// Deliberately O(n) in both time and stack depth.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    is_prime_from(n, n - 1)
}

/// Continues the primality walk at `divisor`. `is_prime` starts it at n-1;
/// divisors of n or above are brought down to n-1.
pub fn is_prime_from(n: i64, divisor: i64) -> bool {
    if n < 2 {
        return false;
    }
    let divisor = divisor.min(n - 1);
    if divisor <= 1 {
        return true;
    }
    if n % divisor == 0 {
        return false;
    }
    is_prime_from(n, divisor - 1)
}

/// F(n), 1-indexed, accumulated from (1, 1): F(1) = F(2) = 1.
///
/// F(93) is the last term that fits a `u64`.
pub fn fibonacci(n: u32) -> Result<u64> {
    if n == 0 {
        return Err(ExplorerError::invalid("n", "fibonacci terms start at 1"));
    }
    // (F(k-1), F(k)) starting at k = 1, so only F(n) itself can overflow
    let (mut prev, mut current) = (0u64, 1u64);
    for _ in 1..n {
        let next = prev.checked_add(current)
            .ok_or(ExplorerError::Overflow { operation: "fibonacci" })?;
        prev = current;
        current = next;
    }
    Ok(current)
}

/// Textbook tree recursion with fib(0) = 0, fib(1) = 1. Exponential; keep n small.
pub fn fibonacci_tree(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci_tree(n - 1) + fibonacci_tree(n - 2),
    }
}

/// F(1) ..= F(n).
pub fn fibonacci_sequence(n: u32) -> Result<Vec<u64>> {
    (1..=n).map(fibonacci).collect()
}

/// 1!, 2!, ..., n! for the growth chart. Empty for n = 0.
pub fn factorial_growth(n: i64) -> Result<Vec<u128>> {
    if n < 0 {
        return Err(ExplorerError::invalid("n", format!("factorial of negative number {}", n)));
    }
    if n > MAX_FACTORIAL {
        return Err(ExplorerError::Overflow { operation: "factorial" });
    }
    (1..=n).map(factorial).collect()
}
