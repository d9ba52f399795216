use lazy_static::*;

use crate::decimal::{Decimal, Sign};
use crate::decimal_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [Decimal; MAX_CONSTANT + 1] = [
        Decimal::from_limbs(vec![0, 0, 0] , Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 1] , Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 2] , Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 3] , Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 4] , Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 5] , Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 6] , Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 7] , Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 8] , Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 9] , Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 10], Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 11], Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 12], Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 13], Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 14], Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 15], Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 16], Sign::Positive),
    ];
    pub static ref NEG_CACHE: [Decimal; MAX_CONSTANT + 1] = [
        // zero is always positive
        Decimal::from_limbs(vec![0, 0, 0] , Sign::Positive),
        Decimal::from_limbs(vec![0, 0, 1] , Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 2] , Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 3] , Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 4] , Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 5] , Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 6] , Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 7] , Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 8] , Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 9] , Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 10], Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 11], Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 12], Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 13], Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 14], Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 15], Sign::Negative),
        Decimal::from_limbs(vec![0, 0, 16], Sign::Negative),
    ];
}
