//! Constants shared by the limb representation.

/// Radix of one limb. A limb is one base-10^9 "digit" of the magnitude.
pub const DECIMAL_BASE: i64 = 1_000_000_000;

/// Decimal digits carried by one fully-populated limb, `log10(DECIMAL_BASE)`.
pub const DIGITS_PER_LIMB: usize = 9;

/// Default limb count for values built from machine integers; three limbs
/// hold 27 decimal digits, enough for any `u64`.
pub const DECIMAL_LENGTH: usize = 3;

/// Largest value kept in the small-constant caches.
pub const MAX_CONSTANT: usize = 16;
