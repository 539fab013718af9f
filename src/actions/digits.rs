//! Decimal digit manipulation.
//!
//! Digits are always those of `|value|`; the sign is carried separately and
//! re-applied after re-parsing. Re-parsing drops leading zeros, so a
//! permutation that moves a zero to the front shortens the number.

use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Enough for `|i64::MIN|` (19 digits) with room to spare.
pub type Digits = SmallVec<[u8; 20]>;

/// Decimal digits of `|value|`, most significant first. Zero is `[0]`.
#[must_use]
pub fn digits_of(value: i64) -> Digits {
    let mut magnitude = value.unsigned_abs();
    let mut digits = Digits::new();
    loop {
        digits.push((magnitude % 10) as u8);
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Re-parse a digit sequence, wrapping into i64.
///
/// At most 19 digits ever reach this, which always fit in a u64.
#[must_use]
pub fn from_digits(digits: &[u8], negative: bool) -> i64 {
    let magnitude = digits
        .iter()
        .fold(0u64, |acc, &d| acc.wrapping_mul(10).wrapping_add(u64::from(d)));
    let value = magnitude as i64;
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Reverse the decimal digits.
#[must_use]
pub fn reverse(value: i64) -> i64 {
    let mut digits = digits_of(value);
    digits.reverse();
    from_digits(&digits, value < 0)
}

/// Randomly permute the decimal digits.
pub fn shuffle<R: Rng + ?Sized>(value: i64, rng: &mut R) -> i64 {
    let mut digits = digits_of(value);
    digits.as_mut_slice().shuffle(rng);
    from_digits(&digits, value < 0)
}
