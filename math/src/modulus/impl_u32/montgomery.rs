use crate::lanes::Lanes;
use crate::modulus::impl_u32::reduce_two_q_lanes;
use crate::modulus::montgomery::{Montgomery, MontgomeryPrecomp};
use crate::modulus::{MulMod, ONCE, REDUCEMOD};

/// MontgomeryPrecomp is a set of methods implemented for MontgomeryPrecomp<u32>
/// enabling Montgomery arithmetic with radix R = 2^32 over u32 values.
impl MontgomeryPrecomp<u32> {
    /// Returns a new instance of MontgomeryPrecomp<u32>.
    /// Requires q odd and 4q < 2^32.
    pub fn new(q: u32) -> MontgomeryPrecomp<u32> {
        debug_assert!(q & 1 != 0, "invalid argument: gcd(q={}, radix=2^32) != 1", q);
        let mut q_inv: u32 = 1;
        let mut q_pow: u32 = q;
        for _i in 0..31 {
            q_inv = q_inv.wrapping_mul(q_pow);
            q_pow = q_pow.wrapping_mul(q_pow);
        }
        let r: u64 = (1u64 << 32) % q as u64;
        Self {
            q,
            two_q: q << 1,
            four_q: q << 2,
            q_neg_inv: q_inv.wrapping_neg(),
            r2: ((r * r) % q as u64) as u32,
            one: Montgomery(r as u32),
            minus_one: Montgomery(q - r as u32),
        }
    }

    /// Returns 2^32 mod q as a Montgomery<u32>.
    #[inline(always)]
    pub fn one(&self) -> Montgomery<u32> {
        self.one
    }

    /// Returns (q-1) * 2^32 mod q as a Montgomery<u32>.
    #[inline(always)]
    pub fn minus_one(&self) -> Montgomery<u32> {
        self.minus_one
    }

    /// Returns t * 2^-32 mod q in [0, 2q) for t < q * 2^32:
    /// (t + m*q) / 2^32 with m = (t mod 2^32) * q' mod 2^32.
    #[inline(always)]
    pub fn reduce_lanes<const W: usize>(&self, t: Lanes<u64, W>) -> Lanes<u32, W> {
        let m: Lanes<u32, W> = t.lo().wrapping_mul(Lanes::splat(self.q_neg_inv));
        t.wrapping_add(m.widening_mul(Lanes::splat(self.q))).hi()
    }

    /// Returns lhs * rhs * 2^-32 mod q, for rhs any word.
    #[inline(always)]
    pub fn mul_external_lanes<const W: usize, const REDUCE: REDUCEMOD>(
        &self,
        lhs: Lanes<Montgomery<u32>, W>,
        rhs: Lanes<u32, W>,
    ) -> Lanes<u32, W> {
        debug_assert!(
            lhs.0.iter().all(|x| x.0 < self.q),
            "invalid argument lhs: {:?} has a lane >= q={}",
            lhs,
            self.q
        );
        let t: Lanes<u64, W> = lhs.map(|x| x.0).widening_mul(rhs);
        reduce_two_q_lanes::<W, REDUCE>(self.reduce_lanes(t), self.q)
    }

    #[inline(always)]
    pub fn mul_internal_lanes<const W: usize, const REDUCE: REDUCEMOD>(
        &self,
        lhs: Lanes<Montgomery<u32>, W>,
        rhs: Lanes<Montgomery<u32>, W>,
    ) -> Lanes<Montgomery<u32>, W> {
        self.mul_external_lanes::<W, REDUCE>(lhs, rhs.map(|x| x.0)).map(Montgomery)
    }

    /// Returns x * 2^32 mod q.
    #[inline(always)]
    pub fn prepare_lanes<const W: usize, const REDUCE: REDUCEMOD>(&self, x: Lanes<u32, W>) -> Lanes<Montgomery<u32>, W> {
        self.mul_external_lanes::<W, REDUCE>(Lanes::splat(Montgomery(self.r2)), x)
            .map(Montgomery)
    }

    /// Returns x * 2^-32 mod q in [0, q).
    #[inline(always)]
    pub fn unprepare_lanes<const W: usize>(&self, x: Lanes<Montgomery<u32>, W>) -> Lanes<u32, W> {
        self.reduce_lanes(x.map(|x| x.0 as u64)).reduce_once(self.q)
    }

    #[inline(always)]
    pub fn prepare<const REDUCE: REDUCEMOD>(&self, x: u32) -> Montgomery<u32> {
        self.prepare_lanes::<1, REDUCE>(Lanes([x])).0[0]
    }

    #[inline(always)]
    pub fn unprepare(&self, x: Montgomery<u32>) -> u32 {
        self.unprepare_lanes::<1>(Lanes([x])).0[0]
    }

    #[inline(always)]
    pub fn mul_external<const REDUCE: REDUCEMOD>(&self, lhs: Montgomery<u32>, rhs: u32) -> u32 {
        self.mul_external_lanes::<1, REDUCE>(Lanes([lhs]), Lanes([rhs])).0[0]
    }

    #[inline(always)]
    pub fn mul_internal<const REDUCE: REDUCEMOD>(&self, lhs: Montgomery<u32>, rhs: Montgomery<u32>) -> Montgomery<u32> {
        Montgomery(self.mul_external::<REDUCE>(lhs, rhs.0))
    }

    /// Returns (x^exponent) * 2^32 mod q.
    #[inline(always)]
    pub fn pow(&self, x: Montgomery<u32>, exponent: u32) -> Montgomery<u32> {
        let mut y: Montgomery<u32> = self.one();
        let mut x_mut: Montgomery<u32> = x;
        let mut i: u32 = exponent;
        while i > 0 {
            if i & 1 == 1 {
                y = self.mul_internal::<ONCE>(x_mut, y);
            }
            x_mut = self.mul_internal::<ONCE>(x_mut, x_mut);
            i >>= 1;
        }
        y
    }
}

impl MulMod<u32> for MontgomeryPrecomp<u32> {
    #[inline(always)]
    fn mul_mod_lanes<const W: usize>(&self, a: Lanes<u32, W>, b: Lanes<u32, W>) -> Lanes<u32, W> {
        self.mul_external_lanes::<W, ONCE>(self.prepare_lanes::<W, ONCE>(a), b)
    }
}
