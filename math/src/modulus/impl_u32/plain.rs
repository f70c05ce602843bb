use crate::lanes::Lanes;
use crate::modulus::MulMod;
use crate::modulus::plain::PlainPrecomp;

impl PlainPrecomp<u32> {
    pub fn new(q: u32) -> Self {
        Self { q }
    }

    #[inline(always)]
    pub fn reduce_wide_lanes<const W: usize>(&self, d: Lanes<u64, W>) -> Lanes<u32, W> {
        d.map(|d| (d % self.q as u64) as u32)
    }

    #[inline(always)]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        ((a as u64 + b as u64) % self.q as u64) as u32
    }

    #[inline(always)]
    pub fn sub(&self, a: u32, b: u32) -> u32 {
        ((a as u64 + self.q as u64 - (b % self.q) as u64) % self.q as u64) as u32
    }
}

impl MulMod<u32> for PlainPrecomp<u32> {
    #[inline(always)]
    fn mul_mod_lanes<const W: usize>(&self, a: Lanes<u32, W>, b: Lanes<u32, W>) -> Lanes<u32, W> {
        self.reduce_wide_lanes(a.widening_mul(b))
    }
}
