//! Greatest common divisor.

/// Euclid's algorithm. `gcd(a, 0) == a`, so `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
