use crate::source::Source;
use rand_core::RngCore;

/// Centered binomial distribution B(2*eta, 1/2) - eta,
/// sampled as the difference of two sums of eta bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CenteredBinomial {
    eta: u32,
}

impl CenteredBinomial {
    /// Panics if eta is zero or larger than 16.
    pub fn new(eta: u32) -> Self {
        assert!(
            eta > 0 && eta <= 16,
            "invalid argument eta: eta = {} not in [1, 16]",
            eta
        );
        Self { eta }
    }

    pub fn eta(&self) -> u32 {
        self.eta
    }

    /// Returns a value in [-eta, eta].
    #[inline(always)]
    pub fn sample(&self, source: &mut Source) -> i32 {
        let mask: u32 = (1u32 << self.eta) - 1;
        let bits: u32 = source.next_u32();
        let a: u32 = (bits & mask).count_ones();
        let b: u32 = ((bits >> 16) & mask).count_ones();
        a as i32 - b as i32
    }
}
