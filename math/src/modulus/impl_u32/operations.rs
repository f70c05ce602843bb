use crate::lanes::Lanes;
use crate::modulus::montgomery::Montgomery;
use crate::modulus::prime::Prime;
use crate::modulus::shoup::Shoup;
use crate::modulus::{LaneOperations, ScalarOperations, VectorOperations};
use crate::modulus::{MulMod, ONCE, REDUCEMOD};
use crate::{apply_sv, apply_v, apply_vu, apply_vv, apply_vvv};

impl LaneOperations<u32> for Prime<u32> {
    #[inline(always)]
    fn la_reduce<const W: usize, const REDUCE: REDUCEMOD>(&self, a: Lanes<u32, W>) -> Lanes<u32, W> {
        self.barrett.reduce_lanes::<W, REDUCE>(a)
    }

    #[inline(always)]
    fn la_add_lb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: Lanes<u32, W>, b: Lanes<u32, W>) -> Lanes<u32, W> {
        self.la_reduce::<W, REDUCE>(a.wrapping_add(b))
    }

    /// d = a - b, then min(d, d + LBRANGE * q) selects the
    /// non-wrapped representative. Requires a + LBRANGE * q < 2^32.
    #[inline(always)]
    fn la_sub_lb<const W: usize, const LBRANGE: u8, const REDUCE: REDUCEMOD>(
        &self,
        a: Lanes<u32, W>,
        b: Lanes<u32, W>,
    ) -> Lanes<u32, W> {
        let d: Lanes<u32, W> = a.wrapping_sub(b);
        let r: Lanes<u32, W> = d.min(d.wrapping_add(Lanes::splat(LBRANGE as u32 * self.q)));
        self.la_reduce::<W, REDUCE>(r)
    }

    #[inline(always)]
    fn la_neg<const W: usize, const LARANGE: u8, const REDUCE: REDUCEMOD>(&self, a: Lanes<u32, W>) -> Lanes<u32, W> {
        self.la_reduce::<W, REDUCE>(Lanes::splat(LARANGE as u32 * self.q).wrapping_sub(a))
    }

    #[inline(always)]
    fn la_barrett_mul_lb<const W: usize, const REDUCE: REDUCEMOD>(
        &self,
        a: Lanes<u32, W>,
        b: Lanes<u32, W>,
    ) -> Lanes<u32, W> {
        self.barrett.mul_lanes::<W, REDUCE>(a, b)
    }

    #[inline(always)]
    fn la_mont_mul_lb<const W: usize, const REDUCE: REDUCEMOD>(
        &self,
        a: Lanes<Montgomery<u32>, W>,
        b: Lanes<u32, W>,
    ) -> Lanes<u32, W> {
        self.montgomery.mul_external_lanes::<W, REDUCE>(a, b)
    }

    #[inline(always)]
    fn la_shoup_mul_lb<const W: usize, const REDUCE: REDUCEMOD>(
        &self,
        a: Lanes<Shoup<u32>, W>,
        b: Lanes<u32, W>,
    ) -> Lanes<u32, W> {
        self.shoup.mul_external_lanes::<W, REDUCE>(a, b)
    }

    #[inline(always)]
    fn la_prep_mont<const W: usize, const REDUCE: REDUCEMOD>(&self, a: Lanes<u32, W>) -> Lanes<Montgomery<u32>, W> {
        self.montgomery.prepare_lanes::<W, REDUCE>(a)
    }

    #[inline(always)]
    fn la_unprep_mont<const W: usize>(&self, a: Lanes<Montgomery<u32>, W>) -> Lanes<u32, W> {
        self.montgomery.unprepare_lanes::<W>(a)
    }
}

impl ScalarOperations<u32> for Prime<u32> {
    #[inline(always)]
    fn sa_reduce_into_sa<const REDUCE: REDUCEMOD>(&self, a: &mut u32) {
        *a = self.la_reduce::<1, REDUCE>(Lanes([*a])).0[0]
    }

    #[inline(always)]
    fn sa_add_sb_into_sc<const REDUCE: REDUCEMOD>(&self, a: &u32, b: &u32, c: &mut u32) {
        *c = self.la_add_lb::<1, REDUCE>(Lanes([*a]), Lanes([*b])).0[0]
    }

    #[inline(always)]
    fn sa_sub_sb_into_sc<const SBRANGE: u8, const REDUCE: REDUCEMOD>(&self, a: &u32, b: &u32, c: &mut u32) {
        *c = self.la_sub_lb::<1, SBRANGE, REDUCE>(Lanes([*a]), Lanes([*b])).0[0]
    }

    #[inline(always)]
    fn sa_neg_into_sb<const SARANGE: u8, const REDUCE: REDUCEMOD>(&self, a: &u32, b: &mut u32) {
        *b = self.la_neg::<1, SARANGE, REDUCE>(Lanes([*a])).0[0]
    }

    #[inline(always)]
    fn sa_barrett_mul_sb_into_sc<const REDUCE: REDUCEMOD>(&self, a: &u32, b: &u32, c: &mut u32) {
        *c = self.la_barrett_mul_lb::<1, REDUCE>(Lanes([*a]), Lanes([*b])).0[0]
    }

    #[inline(always)]
    fn sa_prep_mont_into_sb<const REDUCE: REDUCEMOD>(&self, a: &u32, b: &mut Montgomery<u32>) {
        *b = self.la_prep_mont::<1, REDUCE>(Lanes([*a])).0[0]
    }

    #[inline(always)]
    fn sa_mont_mul_sb_into_sc<const REDUCE: REDUCEMOD>(&self, a: &Montgomery<u32>, b: &u32, c: &mut u32) {
        *c = self.la_mont_mul_lb::<1, REDUCE>(Lanes([*a]), Lanes([*b])).0[0]
    }

    #[inline(always)]
    fn sa_shoup_mul_sb_into_sc<const REDUCE: REDUCEMOD>(&self, a: &Shoup<u32>, b: &u32, c: &mut u32) {
        *c = self.la_shoup_mul_lb::<1, REDUCE>(Lanes([*a]), Lanes([*b])).0[0]
    }
}

impl VectorOperations<u32> for Prime<u32> {
    #[inline(always)]
    fn va_reduce_into_va<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &mut [u32]) {
        apply_v!(self, la_reduce::<W, REDUCE>, a);
    }

    #[inline(always)]
    fn va_add_vb_into_vc<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[u32], b: &[u32], c: &mut [u32]) {
        apply_vvv!(self, la_add_lb::<W, REDUCE>, a, b, c);
    }

    #[inline(always)]
    fn va_add_vb_into_vb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[u32], b: &mut [u32]) {
        apply_vv!(self, la_add_lb::<W, REDUCE>, a, b);
    }

    #[inline(always)]
    fn va_sub_vb_into_vc<const W: usize, const VBRANGE: u8, const REDUCE: REDUCEMOD>(
        &self,
        a: &[u32],
        b: &[u32],
        c: &mut [u32],
    ) {
        apply_vvv!(self, la_sub_lb::<W, VBRANGE, REDUCE>, a, b, c);
    }

    #[inline(always)]
    fn va_sub_vb_into_vb<const W: usize, const VBRANGE: u8, const REDUCE: REDUCEMOD>(&self, a: &[u32], b: &mut [u32]) {
        apply_vv!(self, la_sub_lb::<W, VBRANGE, REDUCE>, a, b);
    }

    #[inline(always)]
    fn va_neg_into_va<const W: usize, const VARANGE: u8, const REDUCE: REDUCEMOD>(&self, a: &mut [u32]) {
        apply_v!(self, la_neg::<W, VARANGE, REDUCE>, a);
    }

    #[inline(always)]
    fn va_neg_into_vb<const W: usize, const VARANGE: u8, const REDUCE: REDUCEMOD>(&self, a: &[u32], b: &mut [u32]) {
        apply_vu!(self, la_neg::<W, VARANGE, REDUCE>, a, b);
    }

    #[inline(always)]
    fn va_barrett_mul_vb_into_vc<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[u32], b: &[u32], c: &mut [u32]) {
        apply_vvv!(self, la_barrett_mul_lb::<W, REDUCE>, a, b, c);
    }

    #[inline(always)]
    fn va_barrett_mul_vb_into_vb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[u32], b: &mut [u32]) {
        apply_vv!(self, la_barrett_mul_lb::<W, REDUCE>, a, b);
    }

    #[inline(always)]
    fn sa_shoup_mul_vb_into_vb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &Shoup<u32>, b: &mut [u32]) {
        apply_sv!(self, la_shoup_mul_lb::<W, REDUCE>, a, b);
    }

    #[inline(always)]
    fn va_prep_mont_into_vb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[u32], b: &mut [Montgomery<u32>]) {
        apply_vu!(self, la_prep_mont::<W, REDUCE>, a, b);
    }

    #[inline(always)]
    fn va_unprep_mont_into_vb<const W: usize>(&self, a: &[Montgomery<u32>], b: &mut [u32]) {
        apply_vu!(self, la_unprep_mont::<W>, a, b);
    }

    #[inline(always)]
    fn va_mont_mul_vb_into_vc<const W: usize, const REDUCE: REDUCEMOD>(
        &self,
        a: &[Montgomery<u32>],
        b: &[u32],
        c: &mut [u32],
    ) {
        apply_vvv!(self, la_mont_mul_lb::<W, REDUCE>, a, b, c);
    }

    #[inline(always)]
    fn va_mont_mul_vb_into_vb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[Montgomery<u32>], b: &mut [u32]) {
        apply_vv!(self, la_mont_mul_lb::<W, REDUCE>, a, b);
    }
}

/// Canonical single-word arithmetic on residues in [0, q).
impl Prime<u32> {
    #[inline(always)]
    pub fn add_mod(&self, a: u32, b: u32) -> u32 {
        self.la_add_lb::<1, ONCE>(Lanes([a]), Lanes([b])).0[0]
    }

    #[inline(always)]
    pub fn sub_mod(&self, a: u32, b: u32) -> u32 {
        self.la_sub_lb::<1, 1, ONCE>(Lanes([a]), Lanes([b])).0[0]
    }

    #[inline(always)]
    pub fn mul_mod(&self, a: u32, b: u32) -> u32 {
        self.barrett.mul_mod(a, b)
    }

    #[inline(always)]
    pub fn sqr_mod(&self, a: u32) -> u32 {
        self.barrett.sqr_mod(a)
    }
}
