use crate::LANES;
use crate::dft::BaseOperand;
use crate::dft::bit_reversal::BitReversal;
use crate::error::ParamError;
use crate::lanes::{LanePermutation, Lanes};
use crate::modulus::prime::Prime;
use crate::modulus::shoup::Shoup;
use crate::modulus::{LaneOperations, NONE, ONCE, WordOps};
use itertools::izip;

/// Precomputed twiddle factors of a negacyclic transform of length n
/// with a primitive nth_root-th root of unity psi, 2 <= nth_root <= 2n.
///
/// The transform runs log2(nth_root/2) layers and leaves nth_root/2
/// residues of degree base = 2n/nth_root, residue j being taken
/// modulo x^base - gamma[j]. With nth_root = 2n it is the complete
/// transform and base = 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<O> {
    prime: Prime<O>,
    n: usize,
    nth_root: O,
    psi: O,
    bit_rev: BitReversal,
    psi_forward_rev: Vec<Shoup<O>>,
    psi_backward_rev: Vec<Shoup<O>>,
    gamma: Vec<O>,
    n_inv: Shoup<O>,
    psi_n_inv: Shoup<O>,
    q: O,
    two_q: O,
    four_q: O,
}

impl Table<u32> {
    /// Builds the table around the smallest primitive nth_root-th root of q.
    pub fn new(prime: Prime<u32>, n: usize, nth_root: u32) -> Result<Table<u32>, ParamError> {
        Self::check_shape(n, nth_root)?;
        let psi: u32 = prime.primitive_nth_root(nth_root)?;
        Self::with_root(prime, n, nth_root, psi)
    }

    /// Builds the table around a caller-provided primitive root.
    pub fn with_root(prime: Prime<u32>, n: usize, nth_root: u32, psi: u32) -> Result<Table<u32>, ParamError> {
        Self::check_shape(n, nth_root)?;
        prime.check_primitive_nth_root(psi, nth_root)?;

        let half: usize = (nth_root >> 1) as usize;
        let log_half: u32 = half.log2() as _;

        let psi_inv: u32 = prime.inv(psi);

        let mut psi_forward_rev: Vec<Shoup<u32>> = vec![Shoup::default(); half];
        let mut psi_backward_rev: Vec<Shoup<u32>> = vec![Shoup::default(); half];

        let mut powers_forward: u32 = 1u32;
        let mut powers_backward: u32 = 1u32;

        for i in 0..half {
            let i_rev: usize = i.reverse_bits_msb(log_half);
            psi_forward_rev[i_rev] = prime.shoup.prepare(powers_forward);
            psi_backward_rev[i_rev] = prime.shoup.prepare(powers_backward);
            powers_forward = prime.barrett.mul::<ONCE>(powers_forward, psi);
            powers_backward = prime.barrett.mul::<ONCE>(powers_backward, psi_inv);
        }

        // gamma[j] = psi^(2 * bit_rev(j) + 1).
        let gamma: Vec<u32> = psi_forward_rev
            .iter()
            .map(|w| prime.mul_mod(prime.sqr_mod(w.0), psi))
            .collect();

        let n_inv: u32 = prime.inv(half as u32);
        let last: u32 = psi_backward_rev.get(1).map_or(1, |w| w.0);
        let psi_n_inv: u32 = prime.mul_mod(n_inv, last);

        let q: u32 = prime.q();

        Ok(Self {
            n_inv: prime.shoup.prepare(n_inv),
            psi_n_inv: prime.shoup.prepare(psi_n_inv),
            prime,
            n,
            nth_root,
            psi,
            bit_rev: BitReversal::new(half),
            psi_forward_rev,
            psi_backward_rev,
            gamma,
            q,
            two_q: q << 1,
            four_q: q << 2,
        })
    }

    fn check_shape(n: usize, nth_root: u32) -> Result<(), ParamError> {
        if !n.is_power_of_two() {
            return Err(ParamError::NotPowerOfTwo {
                name: "n",
                value: n as u64,
            });
        }
        if !nth_root.is_power_of_two() {
            return Err(ParamError::NotPowerOfTwo {
                name: "nth_root",
                value: nth_root as u64,
            });
        }
        if nth_root < 2 || nth_root as u64 > 2 * n as u64 {
            return Err(ParamError::InvalidRootOrder {
                nth_root: nth_root as u64,
                max: 2 * n as u64,
            });
        }
        Ok(())
    }

    pub fn prime(&self) -> &Prime<u32> {
        &self.prime
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn nth_root(&self) -> u32 {
        self.nth_root
    }

    pub fn psi(&self) -> u32 {
        self.psi
    }

    /// Returns (nth_root/2)^-1 mod q, the scale of the inverse transform.
    pub fn n_inv(&self) -> u32 {
        self.n_inv.0
    }

    pub fn bit_reversal(&self) -> &BitReversal {
        &self.bit_rev
    }

    pub fn gamma(&self) -> &[u32] {
        &self.gamma
    }

    pub fn psi_forward_rev(&self) -> &[Shoup<u32>] {
        &self.psi_forward_rev
    }

    pub fn psi_backward_rev(&self) -> &[Shoup<u32>] {
        &self.psi_backward_rev
    }

    /// Number of residues left by the transform.
    pub fn residues(&self) -> usize {
        self.psi_forward_rev.len()
    }

    /// Degree of each residue.
    pub fn base(&self) -> usize {
        self.n / self.residues()
    }

    pub fn layers(&self) -> u32 {
        self.residues().trailing_zeros()
    }
}

impl Table<u32> {
    /// Forward transform with the default lane width.
    /// Inputs in [0, 4q); outputs in [0, 2q) if LAZY else [0, q),
    /// in bit-reversed residue order.
    pub fn forward_inplace<const LAZY: bool>(&self, a: &mut [u32]) {
        self.forward_inplace_lanes::<LANES, LAZY>(a)
    }

    /// Backward transform with the default lane width, scaled by (nth_root/2)^-1.
    /// Inputs in [0, 2q); outputs in [0, 2q) if LAZY else [0, q).
    pub fn backward_inplace<const LAZY: bool>(&self, a: &mut [u32]) {
        self.backward_inplace_lanes::<LANES, LAZY>(a)
    }

    pub fn forward_inplace_lanes<const W: usize, const LAZY: bool>(&self, a: &mut [u32]) {
        let n: usize = a.len();
        assert!(
            n == self.n,
            "invalid argument a: a.len() = {} != n = {}",
            n,
            self.n
        );

        if W > 1 && n < 2 * W {
            return self.forward_inplace_lanes::<1, LAZY>(a);
        }

        let layers: u32 = self.layers();

        if layers == 0 {
            return self.normalize_inplace::<W, LAZY>(a);
        }

        for layer in 0..layers {
            let (m, size) = (1 << layer, n >> (layer + 1));
            let psi: &[Shoup<u32>] = &self.psi_forward_rev[m..m << 1];
            let last: bool = layer == layers - 1;

            if size >= W {
                izip!(a.chunks_exact_mut(size << 1), psi).for_each(|(a, psi)| {
                    let (a, b) = a.split_at_mut(size);
                    let psi: Lanes<Shoup<u32>, W> = Lanes::splat(*psi);
                    izip!(a.chunks_exact_mut(W), b.chunks_exact_mut(W)).for_each(|(a, b)| {
                        let (x, y) = self.dit_lanes(Lanes::load(a), Lanes::load(b), psi);
                        if last {
                            self.finish_forward::<W, LAZY>(x).store(a);
                            self.finish_forward::<W, LAZY>(y).store(b);
                        } else {
                            x.store(a);
                            y.store(b);
                        }
                    });
                });
            } else {
                let perm: LanePermutation<W> = LanePermutation::new(size);
                izip!(a.chunks_exact_mut(W << 1), psi.chunks_exact(W / size)).for_each(|(a, psi)| {
                    let (x, y) = self.dit_lanes(
                        Lanes::gather(a, &perm.top),
                        Lanes::gather(a, &perm.bottom),
                        Lanes::gather(psi, &perm.block),
                    );
                    if last {
                        self.finish_forward::<W, LAZY>(x).scatter(a, &perm.top);
                        self.finish_forward::<W, LAZY>(y).scatter(a, &perm.bottom);
                    } else {
                        x.scatter(a, &perm.top);
                        y.scatter(a, &perm.bottom);
                    }
                });
            }
        }
    }

    /// (a, b) -> (a + psi * b, a - psi * b) for a, b in [0, 4q); outputs in [0, 4q).
    #[inline(always)]
    fn dit_lanes<const W: usize>(
        &self,
        a: Lanes<u32, W>,
        b: Lanes<u32, W>,
        psi: Lanes<Shoup<u32>, W>,
    ) -> (Lanes<u32, W>, Lanes<u32, W>) {
        debug_assert!(
            a.0.iter().chain(b.0.iter()).all(|&x| x < self.four_q),
            "dit_lanes input a={:?} b={:?} >= 4q={}",
            a,
            b,
            self.four_q
        );
        let a: Lanes<u32, W> = a.reduce_once(self.two_q);
        let bt: Lanes<u32, W> = self.prime.shoup.mul_external_lanes::<W, NONE>(psi, b);
        (
            a.wrapping_add(bt),
            a.wrapping_add(Lanes::splat(self.two_q)).wrapping_sub(bt),
        )
    }

    #[inline(always)]
    fn finish_forward<const W: usize, const LAZY: bool>(&self, x: Lanes<u32, W>) -> Lanes<u32, W> {
        let x: Lanes<u32, W> = x.reduce_once(self.two_q);
        let x: Lanes<u32, W> = if LAZY { x } else { x.reduce_once(self.q) };
        debug_assert!(
            x.0.iter().all(|&x| x < if LAZY { self.two_q } else { self.q }),
            "forward_inplace::<LAZY={}> output {:?} out of range",
            LAZY,
            x
        );
        x
    }

    fn normalize_inplace<const W: usize, const LAZY: bool>(&self, a: &mut [u32]) {
        a.chunks_exact_mut(W)
            .for_each(|a| self.finish_forward::<W, LAZY>(Lanes::load(a)).store(a));
    }

    pub fn backward_inplace_lanes<const W: usize, const LAZY: bool>(&self, a: &mut [u32]) {
        let n: usize = a.len();
        assert!(
            n == self.n,
            "invalid argument a: a.len() = {} != n = {}",
            n,
            self.n
        );

        if W > 1 && n < 2 * W {
            return self.backward_inplace_lanes::<1, LAZY>(a);
        }

        let layers: u32 = self.layers();

        if layers == 0 {
            return self.normalize_inplace::<W, LAZY>(a);
        }

        for layer in (0..layers).rev() {
            let (m, size) = (1 << layer, n >> (layer + 1));
            let psi: &[Shoup<u32>] = &self.psi_backward_rev[m..m << 1];

            if layer == 0 {
                let (a, b) = a.split_at_mut(size);
                izip!(a.chunks_exact_mut(W), b.chunks_exact_mut(W)).for_each(|(a, b)| {
                    let (x, y) = self.dif_last_lanes::<W, LAZY>(Lanes::load(a), Lanes::load(b));
                    x.store(a);
                    y.store(b);
                });
            } else if size >= W {
                izip!(a.chunks_exact_mut(size << 1), psi).for_each(|(a, psi)| {
                    let (a, b) = a.split_at_mut(size);
                    let psi: Lanes<Shoup<u32>, W> = Lanes::splat(*psi);
                    izip!(a.chunks_exact_mut(W), b.chunks_exact_mut(W)).for_each(|(a, b)| {
                        let (x, y) = self.dif_lanes(Lanes::load(a), Lanes::load(b), psi);
                        x.store(a);
                        y.store(b);
                    });
                });
            } else {
                let perm: LanePermutation<W> = LanePermutation::new(size);
                izip!(a.chunks_exact_mut(W << 1), psi.chunks_exact(W / size)).for_each(|(a, psi)| {
                    let (x, y) = self.dif_lanes(
                        Lanes::gather(a, &perm.top),
                        Lanes::gather(a, &perm.bottom),
                        Lanes::gather(psi, &perm.block),
                    );
                    x.scatter(a, &perm.top);
                    y.scatter(a, &perm.bottom);
                });
            }
        }
    }

    /// (a, b) -> (a + b, psi * (a - b)) for a, b in [0, 2q); outputs in [0, 2q).
    #[inline(always)]
    fn dif_lanes<const W: usize>(
        &self,
        a: Lanes<u32, W>,
        b: Lanes<u32, W>,
        psi: Lanes<Shoup<u32>, W>,
    ) -> (Lanes<u32, W>, Lanes<u32, W>) {
        debug_assert!(
            a.0.iter().chain(b.0.iter()).all(|&x| x < self.two_q),
            "dif_lanes input a={:?} b={:?} >= 2q={}",
            a,
            b,
            self.two_q
        );
        let d: Lanes<u32, W> = self.prime.shoup.mul_external_lanes::<W, NONE>(
            psi,
            a.wrapping_add(Lanes::splat(self.two_q)).wrapping_sub(b),
        );
        (a.wrapping_add(b).reduce_once(self.two_q), d)
    }

    /// Last inverse layer with the (nth_root/2)^-1 scale folded into both outputs.
    #[inline(always)]
    fn dif_last_lanes<const W: usize, const LAZY: bool>(
        &self,
        a: Lanes<u32, W>,
        b: Lanes<u32, W>,
    ) -> (Lanes<u32, W>, Lanes<u32, W>) {
        debug_assert!(
            a.0.iter().chain(b.0.iter()).all(|&x| x < self.two_q),
            "dif_last_lanes input a={:?} b={:?} >= 2q={}",
            a,
            b,
            self.two_q
        );
        let shoup = &self.prime.shoup;
        let d: Lanes<u32, W> = shoup.mul_external_lanes::<W, NONE>(
            Lanes::splat(self.psi_n_inv),
            a.wrapping_add(Lanes::splat(self.two_q)).wrapping_sub(b),
        );
        let s: Lanes<u32, W> = shoup.mul_external_lanes::<W, NONE>(Lanes::splat(self.n_inv), a.wrapping_add(b));
        if LAZY {
            (s, d)
        } else {
            (s.reduce_once(self.q), d.reduce_once(self.q))
        }
    }
}

impl Table<u32> {
    /// c <- a * b mod (x^base - gamma[j]) on every residue j of the transform,
    /// with the default lane width.
    pub fn mul_base<T: BaseOperand>(&self, a: &[T], b: &[u32], c: &mut [u32]) {
        self.mul_base_lanes::<LANES, T>(a, b, c)
    }

    /// c <- a * b mod (x^base - gamma[j]) on every residue j of the transform.
    /// Inputs and outputs in [0, q). With base = 1 it is the pointwise product.
    pub fn mul_base_lanes<const W: usize, T: BaseOperand>(&self, a: &[T], b: &[u32], c: &mut [u32]) {
        assert!(a.len() == self.n, "invalid argument a: a.len() = {} != n = {}", a.len(), self.n);
        assert!(b.len() == self.n, "invalid argument b: b.len() = {} != n = {}", b.len(), self.n);
        assert!(c.len() == self.n, "invalid argument c: c.len() = {} != n = {}", c.len(), self.n);

        if W > 1 && self.residues() < W {
            return self.mul_base_lanes::<1, T>(a, b, c);
        }

        let base: usize = self.base();

        if base == 1 {
            izip!(a.chunks_exact(W), b.chunks_exact(W), c.chunks_exact_mut(W)).for_each(|(a, b, c)| {
                T::mul_lanes::<W>(&self.prime, Lanes::load(a), Lanes::load(b)).store(c)
            });
            return;
        }

        // Lane l handles residue l of a chunk of W residues.
        let stride: [usize; W] = std::array::from_fn(|l| l * base);
        let chunk: usize = W * base;

        izip!(
            a.chunks_exact(chunk),
            b.chunks_exact(chunk),
            c.chunks_exact_mut(chunk),
            self.gamma.chunks_exact(W)
        )
        .for_each(|(a, b, c, gamma)| {
            let gamma: Lanes<u32, W> = Lanes::load(gamma);
            (0..base).for_each(|k| {
                let mut lo: Lanes<u32, W> = Lanes::splat(0);
                let mut hi: Lanes<u32, W> = Lanes::splat(0);
                (0..base).for_each(|i| {
                    let ai: Lanes<T, W> = Lanes::gather(&a[i..], &stride);
                    if i <= k {
                        let bj: Lanes<u32, W> = Lanes::gather(&b[k - i..], &stride);
                        lo = self.prime.la_add_lb::<W, ONCE>(lo, T::mul_lanes::<W>(&self.prime, ai, bj));
                    } else {
                        let bj: Lanes<u32, W> = Lanes::gather(&b[k + base - i..], &stride);
                        hi = self.prime.la_add_lb::<W, ONCE>(hi, T::mul_lanes::<W>(&self.prime, ai, bj));
                    }
                });
                let r: Lanes<u32, W> = self
                    .prime
                    .la_add_lb::<W, ONCE>(lo, self.prime.barrett.mul_lanes::<W, ONCE>(hi, gamma));
                r.scatter(&mut c[k..], &stride);
            });
        });
    }

    /// Reorders the bit-reversed residues of a forward transform into natural
    /// order: block k of b is the residue modulo x^base - psi^(2k+1).
    pub fn to_natural_order(&self, a: &[u32], b: &mut [u32]) {
        assert!(a.len() == self.n, "invalid argument a: a.len() = {} != n = {}", a.len(), self.n);
        assert!(b.len() == self.n, "invalid argument b: b.len() = {} != n = {}", b.len(), self.n);
        self.bit_rev.apply(a, b, self.base());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(q: u32, n: usize, nth_root: u32) -> Table<u32> {
        Table::<u32>::new(Prime::<u32>::new(q).unwrap(), n, nth_root).unwrap()
    }

    #[test]
    fn mlkem_twiddles() {
        let t: Table<u32> = table(3329, 256, 256);
        assert_eq!(t.psi(), 17);
        assert_eq!(t.residues(), 128);
        assert_eq!(t.base(), 2);
        assert_eq!(t.layers(), 7);
        assert_eq!(t.n_inv(), 3303);
        let head: Vec<u32> = t.psi_forward_rev()[..8].iter().map(|w| w.0).collect();
        assert_eq!(head, vec![1, 1729, 2580, 3289, 2642, 630, 1897, 848]);
        assert_eq!(t.psi_forward_rev()[127].0, 2154);
        assert_eq!(&t.gamma()[..4], &[17, 3312, 2761, 568]);
        assert_eq!(t.psi_backward_rev()[1].0, 1600);
    }

    #[test]
    fn shoup_quotients_match_values() {
        let t: Table<u32> = table(12289, 512, 1024);
        t.psi_forward_rev()
            .iter()
            .chain(t.psi_backward_rev())
            .for_each(|w| assert_eq!(w.1 as u64, ((w.0 as u64) << 32) / 12289));
    }

    #[test]
    fn round_trip() {
        let t: Table<u32> = table(67239937, 32, 64);
        let mut a: Vec<u32> = (0..32).collect();
        let b: Vec<u32> = a.clone();
        t.forward_inplace::<false>(&mut a);
        assert_ne!(a, b);
        t.backward_inplace::<false>(&mut a);
        assert_eq!(a, b);
    }

    #[test]
    fn lazy_round_trip() {
        let t: Table<u32> = table(7681, 256, 512);
        let mut a: Vec<u32> = (0..256u32).map(|i| (i * 1201) % 7681).collect();
        let b: Vec<u32> = a.clone();
        t.forward_inplace::<true>(&mut a);
        assert!(a.iter().all(|&x| x < 2 * 7681));
        t.backward_inplace::<true>(&mut a);
        a.iter_mut().for_each(|x| *x %= 7681);
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_shapes_are_identity() {
        let t: Table<u32> = table(3329, 1, 2);
        assert_eq!(t.layers(), 0);
        let mut a: Vec<u32> = vec![1234];
        t.forward_inplace::<false>(&mut a);
        assert_eq!(a, vec![1234]);
        t.backward_inplace::<false>(&mut a);
        assert_eq!(a, vec![1234]);

        let t: Table<u32> = table(3329, 16, 2);
        let mut a: Vec<u32> = (0..16).collect();
        t.forward_inplace::<false>(&mut a);
        assert_eq!(a, (0..16).collect::<Vec<u32>>());
    }

    #[test]
    fn shape_errors() {
        let prime: Prime<u32> = Prime::<u32>::new(3329).unwrap();
        assert_eq!(
            Table::<u32>::new(prime.clone(), 96, 192),
            Err(ParamError::NotPowerOfTwo { name: "n", value: 96 })
        );
        assert_eq!(
            Table::<u32>::new(prime.clone(), 64, 256),
            Err(ParamError::InvalidRootOrder { nth_root: 256, max: 128 })
        );
        assert_eq!(
            Table::<u32>::new(prime.clone(), 256, 512),
            Err(ParamError::NoRootOfUnity {
                q: 3329,
                nth_root: 512,
                residue: 257
            })
        );
        assert_eq!(
            Table::<u32>::with_root(prime, 256, 256, 289),
            Err(ParamError::InvalidRoot {
                root: 289,
                nth_root: 256,
                q: 3329
            })
        );
    }
}
