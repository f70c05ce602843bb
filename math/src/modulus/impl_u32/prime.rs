use crate::error::ParamError;
use crate::modulus::barrett::BarrettPrecomp;
use crate::modulus::jacobi::jacobi;
use crate::modulus::montgomery::{Montgomery, MontgomeryPrecomp};
use crate::modulus::plain::PlainPrecomp;
use crate::modulus::prime::Prime;
use crate::modulus::shoup::ShoupPrecomp;
use crate::modulus::{MAX_MODULUS_BITS, ONCE, WordOps};
use primality_test::is_prime;
use prime_factorization::Factorization;

/// Number of candidates tried when searching a generator of Z_q^*.
pub const GENERATOR_SEARCH_BOUND: u32 = 1 << 16;

impl Prime<u32> {
    /// Returns a new instance of Prime<u32>.
    /// Fails if q is not an odd prime or has more than 30 bits.
    pub fn new(q: u32) -> Result<Self, ParamError> {
        if q < 3 || !is_prime(q as u64) {
            return Err(ParamError::NotAnOddPrime { q: q as u64 });
        }
        Self::new_unchecked(q)
    }

    /// Returns a new instance of Prime<u32>.
    /// Does not check that q is prime.
    pub fn new_unchecked(q: u32) -> Result<Self, ParamError> {
        if q < 3 || q & 1 == 0 {
            return Err(ParamError::NotAnOddPrime { q: q as u64 });
        }
        if q.bit_len() > MAX_MODULUS_BITS {
            return Err(ParamError::ModulusTooLarge {
                q: q as u64,
                max_bits: MAX_MODULUS_BITS,
            });
        }

        let factors: Vec<u32> = Factorization::run((q - 1) as u64)
            .prime_factor_repr()
            .iter()
            .map(|factor| factor.0 as u32)
            .collect();

        Ok(Self {
            q,
            two_q: q << 1,
            four_q: q << 2,
            factors,
            plain: PlainPrecomp::new(q),
            barrett: BarrettPrecomp::new(q),
            montgomery: MontgomeryPrecomp::new(q),
            shoup: ShoupPrecomp::new(q),
            phi: q - 1,
        })
    }

    pub fn q(&self) -> u32 {
        self.q
    }

    /// Returns x^exponent mod q.
    #[inline(always)]
    pub fn pow(&self, x: u32, exponent: u32) -> u32 {
        let x_mont: Montgomery<u32> = self.montgomery.prepare::<ONCE>(x);
        self.montgomery.unprepare(self.montgomery.pow(x_mont, exponent))
    }

    /// Returns x^-1 mod q.
    /// User must ensure that x is not divisible by q.
    #[inline(always)]
    pub fn inv(&self, x: u32) -> u32 {
        self.pow(x, self.phi - 1)
    }

    /// Returns the smallest generator of Z_q^*. Candidates that are
    /// quadratic residues are discarded with the Jacobi symbol before
    /// testing g^((q-1)/p) != 1 for every prime factor p of q-1.
    pub fn primitive_root(&self) -> Result<u32, ParamError> {
        let bound: u32 = GENERATOR_SEARCH_BOUND.min(self.q - 1);
        let mut non_residue_found: bool = false;

        for candidate in 2..=bound {
            if jacobi(candidate as u64, self.q as u64) != -1 {
                continue;
            }
            non_residue_found = true;
            if self
                .factors
                .iter()
                .all(|&factor| self.pow(candidate, self.phi / factor) != 1)
            {
                return Ok(candidate);
            }
        }

        if non_residue_found {
            Err(ParamError::NoGenerator {
                q: self.q as u64,
                bound: bound as u64,
            })
        } else {
            Err(ParamError::NoQuadraticNonResidue {
                q: self.q as u64,
                bound: bound as u64,
            })
        }
    }

    /// Returns the smallest primitive nth_root-th root of unity mod q.
    /// The smallest element of the set of primitive roots does not depend
    /// on the generator it is derived from.
    pub fn primitive_nth_root(&self, nth_root: u32) -> Result<u32, ParamError> {
        if !nth_root.is_power_of_two() {
            return Err(ParamError::NotPowerOfTwo {
                name: "nth_root",
                value: nth_root as u64,
            });
        }
        if nth_root < 2 {
            return Err(ParamError::InvalidRootOrder {
                nth_root: nth_root as u64,
                max: self.phi as u64,
            });
        }
        if self.phi % nth_root != 0 {
            return Err(ParamError::NoRootOfUnity {
                q: self.q as u64,
                nth_root: nth_root as u64,
                residue: (self.q % nth_root) as u64,
            });
        }

        let generator: u32 = self.primitive_root()?;
        let omega: u32 = self.pow(generator, self.phi / nth_root);
        self.check_primitive_nth_root(omega, nth_root)?;

        // Primitive roots are the odd powers of omega.
        let step: u32 = self.barrett.mul::<ONCE>(omega, omega);
        let mut power: u32 = omega;
        let mut smallest: u32 = omega;
        for _ in 1..nth_root >> 1 {
            power = self.barrett.mul::<ONCE>(power, step);
            smallest = smallest.min(power);
        }

        Ok(smallest)
    }

    /// Checks that root has multiplicative order exactly nth_root,
    /// a power of two: root^(nth_root/2) = -1 and root^nth_root = 1.
    pub fn check_primitive_nth_root(&self, root: u32, nth_root: u32) -> Result<(), ParamError> {
        let err: ParamError = ParamError::InvalidRoot {
            root: root as u64,
            nth_root: nth_root as u64,
            q: self.q as u64,
        };
        if root >= self.q || nth_root < 2 || !nth_root.is_power_of_two() {
            return Err(err);
        }
        if self.pow(root, nth_root >> 1) != self.q - 1 || self.pow(root, nth_root) != 1 {
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_moduli() {
        assert_eq!(Prime::<u32>::new(2), Err(ParamError::NotAnOddPrime { q: 2 }));
        assert_eq!(Prime::<u32>::new(3327), Err(ParamError::NotAnOddPrime { q: 3327 }));
        assert_eq!(
            Prime::<u32>::new(2147483647),
            Err(ParamError::ModulusTooLarge {
                q: 2147483647,
                max_bits: MAX_MODULUS_BITS
            })
        );
        assert!(Prime::<u32>::new_unchecked(3327).is_ok());
        assert_eq!(Prime::<u32>::new_unchecked(4096), Err(ParamError::NotAnOddPrime { q: 4096 }));
    }

    #[test]
    fn factors_of_q_minus_one() {
        let mut factors: Vec<u32> = Prime::<u32>::new(3329).unwrap().factors;
        factors.sort();
        assert_eq!(factors, vec![2, 13]);
        let mut factors: Vec<u32> = Prime::<u32>::new(8380417).unwrap().factors;
        factors.sort();
        assert_eq!(factors, vec![2, 3, 11, 31]);
    }

    #[test]
    fn pow_and_inv() {
        let prime: Prime<u32> = Prime::<u32>::new(3329).unwrap();
        assert_eq!(prime.pow(17, 128), 3328);
        assert_eq!(prime.inv(128), 3303);
        assert_eq!(prime.inv(2), 1665);
        (1..3329u32).step_by(97).for_each(|x| {
            assert_eq!(prime.barrett.mul::<ONCE>(x, prime.inv(x)), 1, "x={}", x)
        });
    }

    #[test]
    fn smallest_generators() {
        assert_eq!(Prime::<u32>::new(3329).unwrap().primitive_root(), Ok(3));
        assert_eq!(Prime::<u32>::new(7681).unwrap().primitive_root(), Ok(17));
        assert_eq!(Prime::<u32>::new(8380417).unwrap().primitive_root(), Ok(10));
        assert_eq!(Prime::<u32>::new(3).unwrap().primitive_root(), Ok(2));
    }

    #[test]
    fn root_of_unity_errors() {
        let prime: Prime<u32> = Prime::<u32>::new(3329).unwrap();
        assert_eq!(
            prime.primitive_nth_root(512),
            Err(ParamError::NoRootOfUnity {
                q: 3329,
                nth_root: 512,
                residue: 3329 % 512
            })
        );
        assert_eq!(
            prime.primitive_nth_root(48),
            Err(ParamError::NotPowerOfTwo {
                name: "nth_root",
                value: 48
            })
        );
        assert!(prime.check_primitive_nth_root(17, 256).is_ok());
        assert!(prime.check_primitive_nth_root(17 * 17 % 3329, 256).is_err());
        assert!(prime.check_primitive_nth_root(3330, 256).is_err());
    }

    #[test]
    fn order_two_root() {
        let prime: Prime<u32> = Prime::<u32>::new(3329).unwrap();
        assert_eq!(prime.primitive_nth_root(2), Ok(3328));
    }
}
