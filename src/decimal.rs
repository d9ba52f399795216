//! # Decimal
//! Fixed-capacity signed big integers stored as base-10^9 decimal limbs.
//! The limb count is fixed when a value is constructed; arithmetic never
//! grows it, so results wider than the operands lose their high digits.
//! # Example
//! ```
//! use long_decimal::Decimal;
//!
//! let a: Decimal = "10000000000".into();
//! let b: Decimal = "900000000".into();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::str::FromStr;

use crate::decimal_cache::*;
use crate::decimal_constants::*;
use crate::error::{ArithmeticError, ParseDecimalError};

/// Sign of a [`Decimal`]. Zero values always carry [`Sign::Positive`],
/// except for a literal `"-0"` kept verbatim by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
    /// Sign of a product of two values with these signs.
    fn combine(self, other: Sign) -> Sign {
        if self == other { Sign::Positive } else { Sign::Negative }
    }
}

#[derive(Debug, Clone)]
pub struct Decimal {
    /// Most-significant limb first. Normalized limbs lie in
    /// `[0, DECIMAL_BASE)`; limb 0 additionally absorbs any carry past the
    /// fixed width and may exceed the base after an overflowing addition or
    /// subtraction. Multiplication truncates instead of absorbing.
    limbs: Vec<i64>,
    sign: Sign,
}

// 杂项辅助函数
impl Decimal {
    /// Limb count fixed at construction time.
    pub fn width(&self) -> usize {
        self.limbs.len()
    }
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }
    pub fn sign(&self) -> Sign {
        self.sign
    }
    /// Limb at position `k` counted from the least-significant end;
    /// positions past the width read as zero.
    fn limb_from_ls(&self, k: usize) -> i64 {
        let len = self.limbs.len();
        if k < len { self.limbs[len - 1 - k] } else { 0 }
    }
    /// Grow to `width` limbs by prepending zeros. Never shrinks.
    fn widen(&mut self, width: usize) {
        if self.limbs.len() < width {
            let mut limbs = vec![0; width - self.limbs.len()];
            limbs.extend_from_slice(&self.limbs);
            self.limbs = limbs;
        }
    }
}

// 实现构造
impl Decimal {
    pub(crate) fn from_limbs(limbs: Vec<i64>, sign: Sign) -> Decimal {
        Decimal { limbs, sign }
    }
    /// Zero with a capacity of `width` limbs (`width * 9` decimal digits).
    pub fn with_width(width: usize) -> Decimal {
        Decimal { limbs: vec![0; width], sign: Sign::Positive }
    }
    fn value_of(val: u64, sign: Sign) -> Decimal {
        if val <= MAX_CONSTANT as u64 {
            return match sign {
                Sign::Positive => POS_CACHE[val as usize].clone(),
                Sign::Negative => NEG_CACHE[val as usize].clone(),
            };
        }
        let mut res = Decimal::with_width(DECIMAL_LENGTH);
        let len = res.limbs.len();
        let mut val = val;
        let mut k = 0;
        while val > 0 && k < len {
            res.limbs[len - 1 - k] = (val % DECIMAL_BASE as u64) as i64;
            val /= DECIMAL_BASE as u64;
            k += 1;
        }
        res.normalize();
        res.sign = sign;
        res
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Decimal::with_width(DECIMAL_LENGTH)
    }
}

macro_rules! impl_unsigned_to_decimal {
    ($($u: ty),*) => {
    $(
    impl From<$u> for Decimal {
        fn from(val: $u) -> Self {
            Decimal::value_of(val as u64, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_decimal {
    ($($i: ty),*) => {
    $(
    impl From<$i> for Decimal {
        fn from(val: $i) -> Self {
            if val < 0 {
                Decimal::value_of(val.unsigned_abs() as u64, Sign::Negative)
            } else {
                Decimal::value_of(val as u64, Sign::Positive)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_decimal!(u8, u16, u32, usize, u64);
impl_signed_to_decimal!(i8, i16, i32, isize, i64);

// 实现打印
impl Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let first = match self.limbs.iter().position(|&limb| limb != 0) {
            Some(i) => i,
            None => return f.write_str("0"),
        };
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.limbs[first])?;
        for &limb in &self.limbs[first + 1..] {
            write!(f, "{:0width$}", limb, width = DIGITS_PER_LIMB)?;
        }
        Ok(())
    }
}

// 实现解析
impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseDecimalError::Empty);
        }
        let (sign, digits) = match s.as_bytes()[0] {
            b'-' => (Sign::Negative, &s[1..]),
            b'+' => (Sign::Positive, &s[1..]),
            _ => (Sign::Positive, s),
        };
        if digits.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        // Capacity is fixed here, at construction: wide enough for the
        // literal, never below the default width.
        let width = DECIMAL_LENGTH.max((digits.len() + DIGITS_PER_LIMB - 1) / DIGITS_PER_LIMB);
        let mut limbs = vec![0_i64; width];

        let mut weight: i64 = 1;
        let mut ind = width - 1;
        for c in digits.chars().rev() {
            match c.to_digit(10) {
                Some(d) => limbs[ind] += d as i64 * weight,
                None if c == '-' || c == '+' => return Err(ParseDecimalError::EmbeddedSign),
                None => return Err(ParseDecimalError::InvalidDigit(c)),
            }
            weight *= 10;
            if weight == DECIMAL_BASE {
                weight = 1;
                if ind > 0 {
                    ind -= 1;
                }
            }
        }

        // Each limb got at most 9 digits, so no normalization pass is
        // needed. A literal "-0" keeps its sign; comparison and rendering
        // treat it as zero.
        Ok(Decimal { limbs, sign })
    }
}

impl From<&str> for Decimal {
    fn from(s: &str) -> Self {
        s.parse().expect("invalid decimal literal")
    }
}

// 实现大小比较
impl Decimal {
    /// Compares magnitudes only, most-significant limb first. The shorter
    /// operand is read as if padded with high zero limbs.
    fn cmp_mag(&self, other: &Decimal) -> Ordering {
        let width = self.limbs.len().max(other.limbs.len());
        for k in (0..width).rev() {
            let a = self.limb_from_ls(k);
            let b = other.limb_from_ls(k);
            if a != b {
                return a.cmp(&b);
            }
        }
        Ordering::Equal
    }
    fn signed_cmp(&self, other: &Decimal) -> Ordering {
        if self.sign != other.sign {
            // +0 and -0 are the same value
            if self.is_zero() && other.is_zero() {
                return Ordering::Equal;
            }
            return if self.sign == Sign::Positive {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        let mag = self.cmp_mag(other);
        if self.sign == Sign::Negative { mag.reverse() } else { mag }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.signed_cmp(other).is_eq()
    }
}
impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.signed_cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.signed_cmp(other)
    }
}

// 实现归一化和模加减
impl Decimal {
    /// Restores every limb except limb 0 to `[0, DECIMAL_BASE)`, carrying
    /// the excess toward the most-significant end. Limb 0 absorbs the final
    /// carry and may be left over the base; that is the fixed-width
    /// overflow escape hatch. A borrow deeper than one base unit means a
    /// caller broke the `|self| >= |other|` contract of `decrease_mag`.
    fn normalize(&mut self) {
        for i in (1..self.limbs.len()).rev() {
            if self.limbs[i] >= 0 {
                self.limbs[i - 1] += self.limbs[i] / DECIMAL_BASE;
                self.limbs[i] %= DECIMAL_BASE;
            } else {
                self.limbs[i - 1] -= 1;
                self.limbs[i] += DECIMAL_BASE;
            }
            assert!(self.limbs[i] >= 0);
        }
    }
    /// Magnitude sum, sign ignored. `self` must be at least as wide as
    /// `other`.
    fn increase_mag(&mut self, other: &Decimal) {
        let len = self.limbs.len();
        for k in 0..other.limbs.len() {
            self.limbs[len - 1 - k] += other.limb_from_ls(k);
        }
        self.normalize();
    }
    /// Magnitude difference, sign ignored. `self` must be at least as wide
    /// as `other` and `|self| >= |other|`.
    fn decrease_mag(&mut self, other: &Decimal) {
        let len = self.limbs.len();
        for k in 0..other.limbs.len() {
            self.limbs[len - 1 - k] -= other.limb_from_ls(k);
        }
        self.normalize();
    }
}

// 实现加减法
impl Decimal {
    /// Signed addition; with `negate` the right operand's sign is flipped
    /// first, which makes this subtraction as well.
    fn signed_add(&self, other: &Decimal, negate: bool) -> Decimal {
        let rhs_sign = if negate { other.sign.flip() } else { other.sign };
        let width = self.limbs.len().max(other.limbs.len());
        let mut res;
        if self.sign == rhs_sign {
            res = self.clone();
            res.widen(width);
            res.increase_mag(other);
        } else if self.cmp_mag(other) != Ordering::Less {
            res = self.clone();
            res.widen(width);
            res.decrease_mag(other);
        } else {
            // The right operand dominates, so its effective sign wins.
            res = other.clone();
            res.sign = rhs_sign;
            res.widen(width);
            res.decrease_mag(self);
        }
        if res.is_zero() {
            res.sign = Sign::Positive;
        }
        res
    }
    pub fn abs(&self) -> Decimal {
        let mut res = self.clone();
        res.sign = Sign::Positive;
        res
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Self::Output {
        self.signed_add(&rhs, false)
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Self::Output {
        self.signed_add(rhs, false)
    }
}

impl AddAssign for Decimal {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.signed_add(&rhs, false);
    }
}

impl AddAssign<&Decimal> for Decimal {
    fn add_assign(&mut self, rhs: &Decimal) {
        *self = self.signed_add(rhs, false);
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self::Output {
        self.signed_add(&rhs, true)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Self::Output {
        self.signed_add(rhs, true)
    }
}

impl SubAssign for Decimal {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.signed_add(&rhs, true);
    }
}

impl SubAssign<&Decimal> for Decimal {
    fn sub_assign(&mut self, rhs: &Decimal) {
        *self = self.signed_add(rhs, true);
    }
}

// 实现乘法
impl Decimal {
    /// Schoolbook convolution over the limbs. Partial products whose limb
    /// position falls outside the result width are dropped, and the carry
    /// out of limb 0 is discarded with them, so the result is the true
    /// product reduced modulo `DECIMAL_BASE^width`.
    fn mul_impl(&self, other: &Decimal) -> Decimal {
        let width = self.limbs.len().max(other.limbs.len());
        let mut res = Decimal::with_width(width);
        for i in 0..self.limbs.len() {
            let mut touched = false;
            for j in 0..other.limbs.len() {
                if i + j >= width {
                    break;
                }
                res.limbs[width - 1 - i - j] += self.limb_from_ls(i) * other.limb_from_ls(j);
                touched = true;
            }
            // Reducing limb 0 every pass keeps every accumulator inside
            // i64 no matter how wide the operands are; without it limb 0
            // collects one ~10^18 partial product per pass.
            if touched {
                res.normalize();
                res.limbs[0] %= DECIMAL_BASE;
            }
        }
        res.sign = self.sign.combine(other.sign);
        if res.is_zero() {
            res.sign = Sign::Positive;
        }
        res
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_impl(&rhs)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_impl(rhs)
    }
}

impl MulAssign for Decimal {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.mul_impl(&rhs);
    }
}

impl MulAssign<&Decimal> for Decimal {
    fn mul_assign(&mut self, rhs: &Decimal) {
        *self = self.mul_impl(rhs);
    }
}

// 实现除法
impl Decimal {
    /// Truncating quotient and remainder by repeated subtraction of the
    /// divisor, O(|quotient|) steps. The remainder keeps the dividend's
    /// sign, so `q * b + r == a` holds.
    pub fn div_rem(&self, divisor: &Decimal) -> Result<(Decimal, Decimal), ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let mut rem = self.clone();
        let mut quot = Decimal::with_width(self.limbs.len().max(divisor.limbs.len()));
        let same_sign = self.sign == divisor.sign;
        while rem.cmp_mag(divisor) != Ordering::Less {
            rem = rem.signed_add(divisor, same_sign);
            quot = quot.signed_add(&POS_CACHE[1], false);
        }
        quot.sign = self.sign.combine(divisor.sign);
        if quot.is_zero() {
            quot.sign = Sign::Positive;
        }
        Ok((quot, rem))
    }
    pub fn checked_div(&self, divisor: &Decimal) -> Result<Decimal, ArithmeticError> {
        self.div_rem(divisor).map(|(quot, _)| quot)
    }
    pub fn checked_rem(&self, divisor: &Decimal) -> Result<Decimal, ArithmeticError> {
        self.div_rem(divisor).map(|(_, rem)| rem)
    }
}

impl Div for Decimal {
    type Output = Decimal;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(&rhs) {
            Ok(quot) => quot,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Div for &Decimal {
    type Output = Decimal;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quot) => quot,
            Err(e) => panic!("{}", e),
        }
    }
}

impl DivAssign for Decimal {
    fn div_assign(&mut self, rhs: Self) {
        *self = &*self / &rhs;
    }
}

impl DivAssign<&Decimal> for Decimal {
    fn div_assign(&mut self, rhs: &Decimal) {
        *self = &*self / rhs;
    }
}

impl Rem for Decimal {
    type Output = Decimal;

    fn rem(self, rhs: Self) -> Self::Output {
        match self.checked_rem(&rhs) {
            Ok(rem) => rem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Rem for &Decimal {
    type Output = Decimal;

    fn rem(self, rhs: Self) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(rem) => rem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl RemAssign for Decimal {
    fn rem_assign(&mut self, rhs: Self) {
        *self = &*self % &rhs;
    }
}

impl RemAssign<&Decimal> for Decimal {
    fn rem_assign(&mut self, rhs: &Decimal) {
        *self = &*self % rhs;
    }
}

#[test]
fn test_from_int() {
    let a = Decimal::from(123_i32);
    assert_eq!(a.to_string(), "123");

    let a = Decimal::from(-100_i16);
    assert_eq!(a.to_string(), "-100");

    let a = Decimal::from(0_u8);
    assert_eq!(a.to_string(), "0");
    assert_eq!(a.sign(), Sign::Positive);

    // magnitude split across all three limbs
    let a = Decimal::from(u64::MAX);
    assert_eq!(a.to_string(), "18446744073709551615");

    let a = Decimal::from(i64::MIN);
    assert_eq!(a.to_string(), "-9223372036854775808");
}

#[test]
fn test_parse() {
    let a: Decimal = "12345678909876543210".into();
    assert_eq!(a.to_string(), "12345678909876543210");

    let a: Decimal = "+42".into();
    assert_eq!(a, Decimal::from(42));

    let a: Decimal = "-000123".into();
    assert_eq!(a.to_string(), "-123");

    // literals wider than the default three limbs get a wider capacity
    let a: Decimal = "123456789012345678901234567890".into();
    assert_eq!(a.width(), 4);
    assert_eq!(a.to_string(), "123456789012345678901234567890");
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<Decimal>(), Err(ParseDecimalError::Empty));
    assert_eq!("-".parse::<Decimal>(), Err(ParseDecimalError::Empty));
    assert_eq!("12a3".parse::<Decimal>(), Err(ParseDecimalError::InvalidDigit('a')));
    assert_eq!("1-2".parse::<Decimal>(), Err(ParseDecimalError::EmbeddedSign));
    assert_eq!("+-5".parse::<Decimal>(), Err(ParseDecimalError::EmbeddedSign));
}

#[test]
fn test_add() {
    let a = Decimal::from(123);
    let b = Decimal::from(456);
    assert_eq!((a + b).to_string(), "579");

    // carry across the limb boundary
    let a = Decimal::from(1_000_000_000_i64);
    let b = Decimal::from(1);
    assert_eq!((a + b).to_string(), "1000000001");

    // mixed widths
    let a: Decimal = "123456789012345678901234567890".into();
    let b = Decimal::from(1);
    assert_eq!((a + b).to_string(), "123456789012345678901234567891");
}

#[test]
fn test_signed_add() {
    let a: Decimal = "-5".into();
    let b = Decimal::from(3);
    assert_eq!((&a + &b).to_string(), "-2");

    // larger magnitude on the right: the result takes its effective sign
    let a = Decimal::from(3);
    let b: Decimal = "-5".into();
    assert_eq!((&a + &b).to_string(), "-2");

    let a = Decimal::from(-5);
    let b = Decimal::from(-5);
    let sum = a - b;
    assert_eq!(sum.to_string(), "0");
    assert_eq!(sum.sign(), Sign::Positive);
}

#[test]
fn test_sub() {
    let a = Decimal::from(3);
    let b = Decimal::from(5);
    assert_eq!((&a - &b).to_string(), "-2");
    assert_eq!((&(&a + &b) - &b), a);

    let mut c = Decimal::from(1_000_000_000_i64);
    c -= Decimal::from(1);
    assert_eq!(c.to_string(), "999999999");
}

#[test]
fn test_mul() {
    let a = Decimal::from(6);
    let b = Decimal::from(7);
    assert_eq!((a * b).to_string(), "42");

    assert_eq!((Decimal::from(-6) * Decimal::from(7)).to_string(), "-42");
    assert_eq!((Decimal::from(-6) * Decimal::from(-7)).to_string(), "42");

    let zero = Decimal::from(-6) * Decimal::from(0);
    assert!(zero.is_zero());
    assert_eq!(zero.sign(), Sign::Positive);

    // carries across limbs
    let a = Decimal::from(123_456_789_i64);
    let b = Decimal::from(987_654_321_i64);
    assert_eq!((a * b).to_string(), "121932631112635269");

    // mixed widths: a four-limb literal times a default-width value
    let a: Decimal = "123456789012345678901234567890".into();
    let b = Decimal::from(2);
    let product = &a * &b;
    assert_eq!(product.width(), 4);
    assert_eq!(product.to_string(), "246913578024691357802469135780");
    assert_eq!((&b * &a).to_string(), "246913578024691357802469135780");
}

#[test]
fn test_mul_truncation() {
    // a product wider than the operands keeps only its low width * 9 digits
    let a: Decimal = "100000000000001".into();
    let product = &a * &a;
    assert_eq!(product.width(), 3);
    // (10^14 + 1)^2 = 10^28 + 2 * 10^14 + 1, reduced modulo 10^27
    assert_eq!(product.to_string(), "200000000000001");
}

#[test]
fn test_mul_wide_operands() {
    // every limb of a ten-limb operand carries a full 10^18-scale partial
    // product; limb 0 must be reduced between passes or the accumulator
    // leaves i64
    let nines: String = "9".repeat(90);
    let a: Decimal = nines.parse().unwrap();
    let square = &a * &a;
    assert_eq!(square.width(), 10);
    // (10^90 - 1)^2 = 1 (mod 10^90)
    assert_eq!(square.to_string(), "1");
}

#[test]
fn test_div_rem() {
    assert_eq!((Decimal::from(7) / Decimal::from(2)).to_string(), "3");
    assert_eq!((Decimal::from(7) % Decimal::from(2)).to_string(), "1");

    assert_eq!((Decimal::from(120) / Decimal::from(13)).to_string(), "9");
    assert_eq!((Decimal::from(120) % Decimal::from(13)).to_string(), "3");

    // truncating division: q * b + r == a for every sign combination
    for (a, b) in [(7, 2), (-7, 2), (7, -2), (-7, -2)] {
        let (q, r) = Decimal::from(a).div_rem(&Decimal::from(b)).unwrap();
        assert_eq!(q, Decimal::from(a / b), "{} / {}", a, b);
        assert_eq!(r, Decimal::from(a % b), "{} % {}", a, b);
    }
}

#[test]
fn test_div_mixed_width() {
    // four-limb dividend, three-limb divisor
    let a: Decimal = "1999999999999999999999999998".into();
    let b: Decimal = "999999999999999999999999999".into();
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "2");
    assert_eq!(r.to_string(), "0");

    // divisor wider than the dividend
    let a = Decimal::from(7);
    let b: Decimal = "123456789012345678901234567890".into();
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q.to_string(), "0");
    assert_eq!(q.sign(), Sign::Positive);
    assert_eq!(r, Decimal::from(7));
}

#[test]
fn test_div_small_dividend() {
    let (q, r) = Decimal::from(-3).div_rem(&Decimal::from(5)).unwrap();
    assert_eq!(q.to_string(), "0");
    assert_eq!(q.sign(), Sign::Positive);
    assert_eq!(r.to_string(), "-3");
}

#[test]
fn test_div_by_zero() {
    let a = Decimal::from(7);
    let zero = Decimal::default();
    assert_eq!(a.checked_div(&zero), Err(ArithmeticError::DivisionByZero));
    assert_eq!(a.checked_rem(&zero), Err(ArithmeticError::DivisionByZero));
    assert_eq!(zero.checked_div(&zero), Err(ArithmeticError::DivisionByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_by_zero_panics() {
    let _ = Decimal::from(1) / Decimal::from(0);
}

#[test]
fn test_ordering() {
    let a: Decimal = "-1000000002".into();
    let b = Decimal::from(3);
    assert!(a < b);
    assert!(b > a);

    // negative values order by value, not by magnitude
    assert!(Decimal::from(-5) < Decimal::from(-3));
    assert!(Decimal::from(-3) > Decimal::from(-5));
    assert!(Decimal::from(3) < Decimal::from(5));
    assert!(Decimal::from(5) <= Decimal::from(5));

    // widths do not matter, values do
    let wide: Decimal = "000000000000000000000000000007".into();
    assert_eq!(wide, Decimal::from(7));
}

#[test]
fn test_signed_zero() {
    let pos: Decimal = "0".into();
    let neg: Decimal = "-0".into();
    assert_eq!(pos, neg);
    assert_eq!(neg, Decimal::from(0));
    assert_eq!(neg.to_string(), "0");
    assert!(!(neg < pos) && !(neg > pos));
}

#[test]
fn test_neg_abs() {
    let a = Decimal::from(5);
    assert_eq!((-&a).to_string(), "-5");
    assert_eq!((-(-&a)), a);
    assert_eq!(Decimal::from(-5).abs(), a);

    let zero = -Decimal::from(0);
    assert_eq!(zero.sign(), Sign::Positive);
}

#[test]
fn test_render_roundtrip() {
    for s in ["0", "7", "-7", "999999999", "1000000000", "-123456789012345678901234567"] {
        let d: Decimal = s.parse().unwrap();
        let rendered = d.to_string();
        assert_eq!(rendered.parse::<Decimal>().unwrap().to_string(), rendered);
        assert_eq!(rendered, s);
    }
}

#[cfg(test)]
mod props {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    quickcheck! {
        fn prop_render_roundtrip(a: i64) -> bool {
            let s = dec(a).to_string();
            s == a.to_string() && s.parse::<Decimal>().unwrap().to_string() == s
        }

        fn prop_add_sub_cancels(a: i32, b: i32) -> bool {
            (dec(a as i64) + dec(b as i64)) - dec(b as i64) == dec(a as i64)
        }

        fn prop_mul_matches_native(a: i32, b: i32) -> bool {
            (dec(a as i64) * dec(b as i64)).to_string() == (a as i64 * b as i64).to_string()
        }

        fn prop_mul_sign(a: i32, b: i32) -> bool {
            let p = dec(a as i64) * dec(b as i64);
            if a == 0 || b == 0 {
                p.is_zero() && p.sign() == Sign::Positive
            } else {
                (p.sign() == Sign::Positive) == ((a < 0) == (b < 0))
            }
        }

        fn prop_division_identity(numer: i16, denom: i16, scale: i8) -> TestResult {
            if denom == 0 {
                return TestResult::discard();
            }
            // division steps scale with the quotient, so keep it small
            let a = dec(denom as i64 * scale as i64 + numer as i64 % denom as i64);
            let b = dec(denom as i64);
            let (q, r) = a.div_rem(&b).unwrap();
            TestResult::from_bool(q * b + r == a)
        }

        fn prop_total_order(a: i64, b: i64) -> bool {
            let (x, y) = (dec(a), dec(b));
            (x < y) == (a < b) && (x == y) == (a == b) && (x > y) == (a > b)
        }
    }
}
