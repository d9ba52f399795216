//! Long Decimal \
//! This crate provides:
//! - [`Decimal`]: fixed-capacity signed big integers stored as base-10^9
//!   decimal limbs, with the usual arithmetic and ordering operators. The
//!   limb count is fixed when a value is constructed; arithmetic never grows
//!   it.
//! - Checked division entry points ([`Decimal::div_rem`],
//!   [`Decimal::checked_div`], [`Decimal::checked_rem`]) that report a zero
//!   divisor as [`ArithmeticError::DivisionByZero`] instead of panicking.

mod decimal;
mod decimal_cache;
mod decimal_constants;
mod error;

pub use decimal::{Decimal, Sign};
pub use error::{ArithmeticError, ParseDecimalError};

#[cfg(test)]
mod tests {
    use crate::Decimal;

    #[test]
    fn it_works() {
        let a: Decimal = "10000000000".into();
        let b: Decimal = "900000000".into();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        assert_eq!((&a + &b).to_string(), "10900000000");
        assert_eq!((&a - &b).to_string(), "9100000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000");
    }

    /// The walk the original file driver printed: one line per operator.
    #[test]
    fn operator_report() {
        let a: Decimal = "-1000000002".into();
        let b: Decimal = "1000000000".into();
        let lines = [
            format!("{} + {} = {}", a, b, &a + &b),
            format!("{} - {} = {}", a, b, &a - &b),
            format!("{} * {} = {}", a, b, &a * &b),
            format!("{} / {} = {}", a, b, &a / &b),
            format!("{} % {} = {}", a, b, &a % &b),
            format!("{} < {} = {}", a, b, a < b),
            format!("{} <= {} = {}", a, b, a <= b),
            format!("{} > {} = {}", a, b, a > b),
            format!("{} >= {} = {}", a, b, a >= b),
        ];
        assert_eq!(lines[0], "-1000000002 + 1000000000 = -2");
        assert_eq!(lines[1], "-1000000002 - 1000000000 = -2000000002");
        assert_eq!(lines[2], "-1000000002 * 1000000000 = -1000000002000000000");
        assert_eq!(lines[3], "-1000000002 / 1000000000 = -1");
        assert_eq!(lines[4], "-1000000002 % 1000000000 = -2");
        assert_eq!(lines[5], "-1000000002 < 1000000000 = true");
        assert_eq!(lines[6], "-1000000002 <= 1000000000 = true");
        assert_eq!(lines[7], "-1000000002 > 1000000000 = false");
        assert_eq!(lines[8], "-1000000002 >= 1000000000 = false");
    }
}
