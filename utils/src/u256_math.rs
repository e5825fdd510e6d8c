use crate::math_errors::MathError;
use soroban_sdk::{panic_with_error, U256};

pub trait ExtraMath {
    fn sqrt(&self) -> Self;

    // addition modulo 2^256
    fn wrapping_add(&self, other: &Self) -> Self;

    fn to_u128_checked(&self) -> u128;
}

impl ExtraMath for U256 {
    fn sqrt(&self) -> U256 {
        // https://github.com/paritytech/parity-common/issues/252
        let e = self.env();
        let two = U256::from_u32(e, 2);

        let mut z = (self.add(&U256::from_u32(e, 1))).div(&two);

        let mut y = self.clone();

        while z < y {
            y = z.clone();
            z = (self.div(&z).add(&z)).div(&two);
        }

        y
    }

    fn wrapping_add(&self, other: &U256) -> U256 {
        let e = self.env();
        let max = U256::from_parts(e, u64::MAX, u64::MAX, u64::MAX, u64::MAX);
        let headroom = max.sub(self);
        if *other <= headroom {
            self.add(other)
        } else {
            other.sub(&headroom).sub(&U256::from_u32(e, 1))
        }
    }

    fn to_u128_checked(&self) -> u128 {
        match self.to_u128() {
            Some(v) => v,
            None => panic_with_error!(self.env(), MathError::NumberOverflow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExtraMath;
    use soroban_sdk::{Env, U256};

    #[test]
    fn test_sqrt_floor() {
        let e = Env::default();
        assert_eq!(U256::from_u32(&e, 0).sqrt(), U256::from_u32(&e, 0));
        assert_eq!(U256::from_u32(&e, 1).sqrt(), U256::from_u32(&e, 1));
        assert_eq!(U256::from_u32(&e, 15).sqrt(), U256::from_u32(&e, 3));
        assert_eq!(U256::from_u32(&e, 16).sqrt(), U256::from_u32(&e, 4));
        let product = U256::from_u128(&e, 1_000_000_000_000_000_000)
            .mul(&U256::from_u128(&e, 4_000_000_000_000_000_000));
        assert_eq!(
            product.sqrt(),
            U256::from_u128(&e, 2_000_000_000_000_000_000)
        );
    }

    #[test]
    fn test_wrapping_add() {
        let e = Env::default();
        let max = U256::from_parts(&e, u64::MAX, u64::MAX, u64::MAX, u64::MAX);
        assert_eq!(
            U256::from_u32(&e, 5).wrapping_add(&U256::from_u32(&e, 7)),
            U256::from_u32(&e, 12)
        );
        assert_eq!(
            max.wrapping_add(&U256::from_u32(&e, 1)),
            U256::from_u32(&e, 0)
        );
        assert_eq!(
            max.wrapping_add(&U256::from_u32(&e, 10)),
            U256::from_u32(&e, 9)
        );
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #510)")]
    fn test_to_u128_overflow() {
        let e = Env::default();
        U256::from_parts(&e, 0, 1, 0, 0).to_u128_checked();
    }
}
