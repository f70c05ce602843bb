use crate::LANES;
use crate::dft::ntt::Table;
use crate::error::ParamError;
use crate::modulus::montgomery::Montgomery;
use crate::modulus::prime::Prime;
use crate::modulus::shoup::Shoup;
use crate::modulus::{MulMod, ONCE, VectorOperations};
use crate::params::ParameterSet;
use crate::poly::{Coefficient, Domain, Evaluation, Poly};
use crate::ring::Ring;
use itertools::izip;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

impl Ring<u32> {
    /// Ring with a complete negacyclic transform: requires q = 1 mod 2n.
    pub fn new(n: usize, q: u32) -> Result<Self, ParamError> {
        let nth_root: u64 = 2 * n as u64;
        if nth_root > u32::MAX as u64 {
            return Err(ParamError::InvalidRootOrder {
                nth_root,
                max: u32::MAX as u64,
            });
        }
        Self::with_nth_root(n, q, nth_root as u32)
    }

    /// Ring whose transform uses a primitive nth_root-th root of unity,
    /// 2 <= nth_root <= 2n.
    pub fn with_nth_root(n: usize, q: u32, nth_root: u32) -> Result<Self, ParamError> {
        let prime: Prime<u32> = Prime::<u32>::new(q)?;
        Ok(Self {
            n,
            modulus: prime.clone(),
            dft: Table::<u32>::new(prime, n, nth_root)?,
        })
    }

    /// Ring of a named parameter set, checking that the derived root and
    /// inverse scale match the expected ones.
    pub fn from_params(params: &ParameterSet) -> Result<Self, ParamError> {
        let ring: Ring<u32> = Self::with_nth_root(params.n, params.q, params.nth_root)?;
        let derived: [(&'static str, Option<u32>, u32); 2] = [
            ("psi", params.psi, ring.dft.psi()),
            ("n_inv", params.n_inv, ring.dft.n_inv()),
        ];
        for (field, expected, derived) in derived {
            if let Some(expected) = expected {
                if expected != derived {
                    return Err(ParamError::ParameterMismatch {
                        name: params.name,
                        field,
                        expected: expected as u64,
                        derived: derived as u64,
                    });
                }
            }
        }
        Ok(ring)
    }

    pub fn q(&self) -> u32 {
        self.modulus.q
    }

    /// Reduces arbitrary integers into [0, q) and writes them to every
    /// step-th coefficient of a.
    pub fn from_bigint(&self, coeffs: &[BigInt], step: usize, a: &mut Poly<u32>) {
        assert!(
            step > 0 && step <= a.n(),
            "invalid step: step={} not in [1, a.n()={}]",
            step,
            a.n()
        );
        assert!(
            coeffs.len() <= a.n() / step,
            "invalid coeffs: coeffs.len()={} > a.n()/step={}",
            coeffs.len(),
            a.n() / step
        );
        let q_big: BigInt = BigInt::from(self.modulus.q);
        izip!(a.0.iter_mut().step_by(step), coeffs).for_each(|(v, c)| {
            let r: BigInt = ((c % &q_big) + &q_big) % &q_big;
            *v = r.to_u32().unwrap_or_default();
        });
    }

    /// Lifts every coefficient of a to the centered range [-(q-1)/2, (q-1)/2].
    pub fn to_centered(&self, a: &Poly<u32>) -> Vec<i64> {
        let q: u32 = self.modulus.q;
        let half: u32 = q >> 1;
        a.0.iter()
            .map(|&x| if x > half { x as i64 - q as i64 } else { x as i64 })
            .collect()
    }
}

impl Ring<u32> {
    pub fn ntt(&self, a: Poly<u32, Coefficient>) -> Poly<u32, Evaluation> {
        self.ntt_lanes::<LANES>(a)
    }

    pub fn ntt_lanes<const W: usize>(&self, mut a: Poly<u32, Coefficient>) -> Poly<u32, Evaluation> {
        self.dft.forward_inplace_lanes::<W, false>(&mut a.0);
        a.retag()
    }

    pub fn ntt_into(&self, a: &Poly<u32, Coefficient>, b: &mut Poly<u32, Evaluation>) {
        b.0.copy_from_slice(&a.0);
        self.dft.forward_inplace::<false>(&mut b.0);
    }

    pub fn intt(&self, a: Poly<u32, Evaluation>) -> Poly<u32, Coefficient> {
        self.intt_lanes::<LANES>(a)
    }

    pub fn intt_lanes<const W: usize>(&self, mut a: Poly<u32, Evaluation>) -> Poly<u32, Coefficient> {
        self.dft.backward_inplace_lanes::<W, false>(&mut a.0);
        a.retag()
    }

    pub fn intt_into(&self, a: &Poly<u32, Evaluation>, b: &mut Poly<u32, Coefficient>) {
        b.0.copy_from_slice(&a.0);
        self.dft.backward_inplace::<false>(&mut b.0);
    }

    /// Evaluation vector in natural order, see [`Table::to_natural_order`].
    pub fn to_natural_order(&self, a: &Poly<u32, Evaluation>) -> Vec<u32> {
        let mut b: Vec<u32> = vec![0; self.n()];
        self.dft.to_natural_order(&a.0, &mut b);
        b
    }
}

impl Ring<u32> {
    #[inline(always)]
    pub fn a_add_b_into_c<D: Domain>(&self, a: &Poly<u32, D>, b: &Poly<u32, D>, c: &mut Poly<u32, D>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        debug_assert!(c.n() == self.n(), "c.n()={} != n={}", c.n(), self.n());
        self.modulus
            .va_add_vb_into_vc::<LANES, ONCE>(&a.0, &b.0, &mut c.0);
    }

    #[inline(always)]
    pub fn a_add_b_into_b<D: Domain>(&self, a: &Poly<u32, D>, b: &mut Poly<u32, D>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        self.modulus.va_add_vb_into_vb::<LANES, ONCE>(&a.0, &mut b.0);
    }

    #[inline(always)]
    pub fn a_sub_b_into_c<D: Domain>(&self, a: &Poly<u32, D>, b: &Poly<u32, D>, c: &mut Poly<u32, D>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        debug_assert!(c.n() == self.n(), "c.n()={} != n={}", c.n(), self.n());
        self.modulus
            .va_sub_vb_into_vc::<LANES, 1, ONCE>(&a.0, &b.0, &mut c.0);
    }

    #[inline(always)]
    pub fn a_sub_b_into_b<D: Domain>(&self, a: &Poly<u32, D>, b: &mut Poly<u32, D>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        self.modulus
            .va_sub_vb_into_vb::<LANES, 1, ONCE>(&a.0, &mut b.0);
    }

    #[inline(always)]
    pub fn a_neg_into_a<D: Domain>(&self, a: &mut Poly<u32, D>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        self.modulus.va_neg_into_va::<LANES, 1, ONCE>(&mut a.0);
    }

    #[inline(always)]
    pub fn a_neg_into_b<D: Domain>(&self, a: &Poly<u32, D>, b: &mut Poly<u32, D>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        self.modulus
            .va_neg_into_vb::<LANES, 1, ONCE>(&a.0, &mut b.0);
    }

    /// b <- scalar * a, for scalar in [0, q).
    #[inline(always)]
    pub fn a_mul_scalar_into_b<D: Domain>(&self, a: &Poly<u32, D>, scalar: u32, b: &mut Poly<u32, D>) {
        debug_assert!(a.n() == self.n(), "a.n()={} != n={}", a.n(), self.n());
        debug_assert!(b.n() == self.n(), "b.n()={} != n={}", b.n(), self.n());
        let s: Shoup<u32> = self.modulus.shoup.prepare(scalar);
        b.0.copy_from_slice(&a.0);
        self.modulus
            .sa_shoup_mul_vb_into_vb::<LANES, ONCE>(&s, &mut b.0);
    }

    /// c <- a * b on the transform residues.
    #[inline(always)]
    pub fn a_mul_b_into_c(
        &self,
        a: &Poly<u32, Evaluation>,
        b: &Poly<u32, Evaluation>,
        c: &mut Poly<u32, Evaluation>,
    ) {
        self.dft.mul_base(&a.0, &b.0, &mut c.0);
    }

    pub fn prepare_montgomery(&self, a: &Poly<u32, Evaluation>) -> Poly<Montgomery<u32>, Evaluation> {
        let mut b: Poly<Montgomery<u32>, Evaluation> = Poly::new(self.n());
        self.modulus
            .va_prep_mont_into_vb::<LANES, ONCE>(&a.0, &mut b.0);
        b
    }

    /// c <- a * b on the transform residues, with a prepared by
    /// [`Ring::prepare_montgomery`] once and reused across products.
    #[inline(always)]
    pub fn a_mul_b_montgomery_into_c(
        &self,
        a: &Poly<Montgomery<u32>, Evaluation>,
        b: &Poly<u32, Evaluation>,
        c: &mut Poly<u32, Evaluation>,
    ) {
        self.dft.mul_base(&a.0, &b.0, &mut c.0);
    }

    /// a * b in O(n log n): forward both, multiply residues, inverse.
    pub fn mul_ntt(&self, a: &Poly<u32>, b: &Poly<u32>) -> Poly<u32> {
        let a_ntt: Poly<u32, Evaluation> = self.ntt(a.clone());
        let b_ntt: Poly<u32, Evaluation> = self.ntt(b.clone());
        let mut c_ntt: Poly<u32, Evaluation> = self.new_poly();
        self.a_mul_b_into_c(&a_ntt, &b_ntt, &mut c_ntt);
        self.intt(c_ntt)
    }

    /// a * b in O(n^2) with plain reductions: for i from n-1 down to 0,
    /// r <- r * x + a * b[i], folding x^n = -1.
    pub fn mul_schoolbook(&self, a: &Poly<u32>, b: &Poly<u32>) -> Poly<u32> {
        let n: usize = self.n();
        assert!(a.n() == n, "invalid argument a: a.n()={} != n={}", a.n(), n);
        assert!(b.n() == n, "invalid argument b: b.n()={} != n={}", b.n(), n);
        let plain = &self.modulus.plain;
        let mut r: Vec<u32> = vec![0; n];
        for &bi in b.0.iter().rev() {
            let top: u32 = r[n - 1];
            r.copy_within(0..n - 1, 1);
            r[0] = plain.sub(0, top);
            izip!(r.iter_mut(), &a.0).for_each(|(r, &a)| *r = plain.add(*r, plain.mul_mod(a, bi)));
        }
        Poly::from_vec(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FALCON_512, ML_KEM};

    #[test]
    fn from_params_reproduces_mlkem() {
        let ring: Ring<u32> = Ring::from_params(&ML_KEM).unwrap();
        assert_eq!(ring.dft.psi(), 17);
        assert_eq!(ring.dft.n_inv(), 3303);
        assert_eq!(ring.log_n(), 8);
    }

    #[test]
    fn from_params_reports_mismatch() {
        let params: ParameterSet = ParameterSet {
            psi: Some(18),
            ..ML_KEM
        };
        assert_eq!(
            Ring::from_params(&params),
            Err(ParamError::ParameterMismatch {
                name: "ML-KEM",
                field: "psi",
                expected: 18,
                derived: 17
            })
        );
        let params: ParameterSet = ParameterSet {
            n_inv: Some(1),
            ..FALCON_512
        };
        assert!(matches!(
            Ring::from_params(&params),
            Err(ParamError::ParameterMismatch { field: "n_inv", .. })
        ));
    }

    #[test]
    fn complete_ring_needs_2n_th_root() {
        assert!(matches!(
            Ring::new(256, 3329),
            Err(ParamError::NoRootOfUnity { nth_root: 512, .. })
        ));
        assert!(Ring::new(128, 3329).is_ok());
    }

    #[test]
    fn from_bigint_and_centered() {
        let ring: Ring<u32> = Ring::new(8, 7681).unwrap();
        let coeffs: Vec<BigInt> = vec![
            BigInt::from(-1),
            BigInt::from(7681),
            BigInt::from(7682) * BigInt::from(1u64 << 40),
            BigInt::from(-7681 * 3 - 5),
        ];
        let mut a: Poly<u32> = ring.new_poly();
        ring.from_bigint(&coeffs, 2, &mut a);
        // 7682 * 2^40 = 2^40 = 4679 mod 7681
        assert_eq!(a.0, vec![7680, 0, 0, 0, 4679, 0, 7676, 0]);
        assert_eq!(ring.to_centered(&a), vec![-1, 0, 0, 0, -3002, 0, -5, 0]);
    }

    #[test]
    fn prepare_montgomery_keeps_residues() {
        let ring: Ring<u32> = Ring::new(16, 7681).unwrap();
        let a: Poly<u32, Evaluation> = ring.ntt(Poly::from_vec((0..16u32).map(|i| i * 479 + 3).collect()));
        let a_mont: Poly<Montgomery<u32>, Evaluation> = ring.prepare_montgomery(&a);
        assert_eq!(a_mont.n(), 16);
        izip!(a.as_slice(), a_mont.as_slice())
            .for_each(|(&x, &y)| assert_eq!(ring.modulus.montgomery.unprepare(y), x));
    }

    #[test]
    fn scalar_mul_and_neg() {
        let ring: Ring<u32> = Ring::new(16, 12289).unwrap();
        let a: Poly<u32> = Poly::from_vec((0..16u32).map(|i| i * 1000).collect());
        let mut b: Poly<u32> = ring.new_poly();
        ring.a_mul_scalar_into_b(&a, 12288, &mut b);
        let mut c: Poly<u32> = ring.new_poly();
        ring.a_neg_into_b(&a, &mut c);
        assert_eq!(b, c);
        ring.a_add_b_into_b(&a, &mut c);
        assert!(c.0.iter().all(|&x| x == 0));
    }
}
