use crate::lanes::Lanes;
use crate::modulus::barrett::BarrettPrecomp;
use crate::modulus::{MulMod, WordOps};
use crate::modulus::{BARRETT, BARRETTLAZY, FOURTIMES, MAX_MODULUS_BITS, NONE, ONCE, REDUCEMOD, TWICE};

impl BarrettPrecomp<u32> {
    /// With beta = bit_len(q): u = floor(2^{2*beta+1} / q) and a pre-shift of
    /// beta-2 bound the quotient estimate of any d < 2^{2*beta} to
    /// [floor(d/q) - 1, floor(d/q)], and u (d >> shift) fits 64 bits.
    pub fn new(q: u32) -> BarrettPrecomp<u32> {
        let beta: u32 = q.bit_len();
        debug_assert!(
            (2..=MAX_MODULUS_BITS).contains(&beta),
            "invalid argument q: bit_len(q) = {} not in [2, {}]",
            beta,
            MAX_MODULUS_BITS
        );
        let l: u32 = 2 * beta + 1;
        let shift: u32 = beta - 2;
        Self {
            q,
            two_q: q << 1,
            four_q: q << 2,
            beta,
            shift,
            post_shift: l - shift,
            u: ((1u64 << l) / q as u64) as u32,
            word: ((1u64 << 32) / q as u64) as u32,
        }
    }

    /// Applies a modular reduction on x based on REDUCE:
    /// - NONE: no modular reduction.
    /// - ONCE: subtracts q if x >= q.
    /// - TWICE: subtracts 2q if x >= 2q.
    /// - FOURTIMES: subtracts 4q if x >= 4q.
    /// - BARRETT: maps x to x mod q using Barrett reduction.
    /// - BARRETTLAZY: maps x to x mod q using Barrett reduction with values in [0, 2q-1].
    #[inline(always)]
    pub fn reduce_lanes<const W: usize, const REDUCE: REDUCEMOD>(&self, x: Lanes<u32, W>) -> Lanes<u32, W> {
        match REDUCE {
            NONE => x,
            ONCE => x.reduce_once(self.q),
            TWICE => x.reduce_once(self.two_q),
            FOURTIMES => x.reduce_once(self.four_q),
            BARRETT => self.reduce_word_lanes(x).reduce_once(self.q),
            BARRETTLAZY => self.reduce_word_lanes(x),
            _ => unreachable!("invalid REDUCE argument"),
        }
    }

    // x - floor(x * word / 2^32) * q, in [0, 2q).
    #[inline(always)]
    fn reduce_word_lanes<const W: usize>(&self, x: Lanes<u32, W>) -> Lanes<u32, W> {
        let c: Lanes<u32, W> = x.widening_mul(Lanes::splat(self.word)).hi();
        x.wrapping_sub(c.wrapping_mul(Lanes::splat(self.q)))
    }

    /// Reduces double-word values d < 2^{2*beta} to [0, 2q), then applies REDUCE.
    #[inline(always)]
    pub fn reduce_wide_lanes<const W: usize, const REDUCE: REDUCEMOD>(&self, d: Lanes<u64, W>) -> Lanes<u32, W> {
        debug_assert!(
            d.0.iter().all(|&d| d >> (2 * self.beta) == 0),
            "invalid argument d: {:?} has a lane >= 2^{}",
            d,
            2 * self.beta
        );
        let c: Lanes<u64, W> = d
            .shr(self.shift)
            .wrapping_mul(Lanes::splat(self.u as u64))
            .shr(self.post_shift);
        let r: Lanes<u32, W> = d.wrapping_sub(c.wrapping_mul(Lanes::splat(self.q as u64))).lo();
        self.reduce_lanes::<W, REDUCE>(r)
    }

    /// Returns a * b, for a, b < 2^beta.
    #[inline(always)]
    pub fn mul_lanes<const W: usize, const REDUCE: REDUCEMOD>(&self, a: Lanes<u32, W>, b: Lanes<u32, W>) -> Lanes<u32, W> {
        self.reduce_wide_lanes::<W, REDUCE>(a.widening_mul(b))
    }

    #[inline(always)]
    pub fn reduce<const REDUCE: REDUCEMOD>(&self, x: u32) -> u32 {
        self.reduce_lanes::<1, REDUCE>(Lanes([x])).0[0]
    }

    #[inline(always)]
    pub fn reduce_assign<const REDUCE: REDUCEMOD>(&self, x: &mut u32) {
        *x = self.reduce::<REDUCE>(*x)
    }

    #[inline(always)]
    pub fn reduce_wide<const REDUCE: REDUCEMOD>(&self, d: u64) -> u32 {
        self.reduce_wide_lanes::<1, REDUCE>(Lanes([d])).0[0]
    }

    #[inline(always)]
    pub fn mul<const REDUCE: REDUCEMOD>(&self, a: u32, b: u32) -> u32 {
        self.mul_lanes::<1, REDUCE>(Lanes([a]), Lanes([b])).0[0]
    }
}

impl MulMod<u32> for BarrettPrecomp<u32> {
    #[inline(always)]
    fn mul_mod_lanes<const W: usize>(&self, a: Lanes<u32, W>, b: Lanes<u32, W>) -> Lanes<u32, W> {
        self.mul_lanes::<W, ONCE>(a, b)
    }
}
