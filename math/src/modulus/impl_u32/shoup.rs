use crate::lanes::Lanes;
use crate::modulus::impl_u32::reduce_two_q_lanes;
use crate::modulus::shoup::{Shoup, ShoupPrecomp};
use crate::modulus::{MulMod, NONE, ONCE, REDUCEMOD};

impl ShoupPrecomp<u32> {
    pub fn new(q: u32) -> Self {
        let mut precomp: ShoupPrecomp<u32> = Self {
            q,
            one: Shoup(0, 0),
        };
        precomp.one = precomp.prepare(1);
        precomp
    }

    #[inline(always)]
    pub fn one(&self) -> Shoup<u32> {
        self.one
    }

    #[inline(always)]
    pub fn prepare(&self, v: u32) -> Shoup<u32> {
        debug_assert!(v < self.q, "invalid argument v: v = {} >= q = {}", v, self.q);
        let quotient: u32 = (((v as u64) << 32) / self.q as u64) as _;
        Shoup(v, quotient)
    }

    /// Returns lhs * rhs mod q for any rhs word: q_est = hi(rhs * w),
    /// r = rhs * b - q_est * q in [0, 2q), then REDUCE.
    #[inline(always)]
    pub fn mul_external_lanes<const W: usize, const REDUCE: REDUCEMOD>(
        &self,
        lhs: Lanes<Shoup<u32>, W>,
        rhs: Lanes<u32, W>,
    ) -> Lanes<u32, W> {
        let q_est: Lanes<u32, W> = lhs.map(|s| s.1).widening_mul(rhs).hi();
        let r: Lanes<u32, W> = lhs
            .map(|s| s.0)
            .wrapping_mul(rhs)
            .wrapping_sub(q_est.wrapping_mul(Lanes::splat(self.q)));
        reduce_two_q_lanes::<W, REDUCE>(r, self.q)
    }

    #[inline(always)]
    pub fn mul_external(&self, lhs: Shoup<u32>, rhs: u32) -> u32 {
        self.mul_external_lanes::<1, ONCE>(Lanes([lhs]), Lanes([rhs])).0[0]
    }

    #[inline(always)]
    pub fn mul_external_assign(&self, lhs: Shoup<u32>, rhs: &mut u32) {
        *rhs = self.mul_external(lhs, *rhs)
    }

    #[inline(always)]
    pub fn mul_external_lazy(&self, lhs: Shoup<u32>, rhs: u32) -> u32 {
        self.mul_external_lanes::<1, NONE>(Lanes([lhs]), Lanes([rhs])).0[0]
    }
}

impl MulMod<u32> for ShoupPrecomp<u32> {
    #[inline(always)]
    fn mul_mod_lanes<const W: usize>(&self, a: Lanes<u32, W>, b: Lanes<u32, W>) -> Lanes<u32, W> {
        self.mul_external_lanes::<W, ONCE>(b.map(|b| self.prepare(b)), a)
    }
}
