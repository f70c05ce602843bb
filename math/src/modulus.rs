pub mod barrett;
pub mod impl_u32;
pub mod jacobi;
pub mod montgomery;
pub mod plain;
pub mod prime;
pub mod shoup;

use crate::lanes::Lanes;
use montgomery::Montgomery;
use shoup::Shoup;

pub type REDUCEMOD = u8;

pub const NONE: REDUCEMOD = 0;
pub const ONCE: REDUCEMOD = 1;
pub const TWICE: REDUCEMOD = 2;
pub const FOURTIMES: REDUCEMOD = 3;
pub const BARRETT: REDUCEMOD = 4;
pub const BARRETTLAZY: REDUCEMOD = 5;

/// Largest supported bit length of a modulus: keeps 4q below 2^32.
pub const MAX_MODULUS_BITS: u32 = 30;

pub trait WordOps<O> {
    /// Returns ceil(log2(self)).
    fn log2(self) -> O;
    /// Returns the number of significant bits of self.
    fn bit_len(self) -> O;
    /// Reverses the n least significant bits of self.
    fn reverse_bits_msb(self, n: u32) -> O;
    fn mask(self) -> O;
}

macro_rules! impl_word_ops {
    ($t:ty) => {
        impl WordOps<$t> for $t {
            #[inline(always)]
            fn log2(self) -> $t {
                (<$t>::BITS - (self - 1).leading_zeros()) as _
            }
            #[inline(always)]
            fn bit_len(self) -> $t {
                (<$t>::BITS - self.leading_zeros()) as _
            }
            #[inline(always)]
            fn reverse_bits_msb(self, n: u32) -> $t {
                self.reverse_bits().checked_shr(<$t>::BITS - n).unwrap_or(0)
            }
            #[inline(always)]
            fn mask(self) -> $t {
                (1 << self.log2()) - 1
            }
        }
    };
}

impl_word_ops!(u32);
impl_word_ops!(u64);
impl_word_ops!(usize);

pub trait ReduceOnce<O> {
    /// Assigns self-q to self if self >= q in constant time.
    /// User must ensure that 2q fits in O.
    fn reduce_once_constant_time_assign(&mut self, q: O);
    /// Returns self-q if self >= q else self in constant time.
    fn reduce_once_constant_time(&self, q: O) -> O;
    /// Assigns self-q to self if self >= q.
    fn reduce_once_assign(&mut self, q: O);
    /// Returns self-q if self >= q else self.
    fn reduce_once(&self, q: O) -> O;
}

/// Canonical modular multiplication shared by every reduction strategy.
pub trait MulMod<O: Copy> {
    /// Returns a * b mod q in [0, q) for every lane, with a, b in [0, q).
    fn mul_mod_lanes<const W: usize>(&self, a: Lanes<O, W>, b: Lanes<O, W>) -> Lanes<O, W>;

    #[inline(always)]
    fn mul_mod(&self, a: O, b: O) -> O {
        self.mul_mod_lanes::<1>(Lanes([a]), Lanes([b])).0[0]
    }

    #[inline(always)]
    fn sqr_mod(&self, a: O) -> O {
        self.mul_mod(a, a)
    }
}

/// Kernels over W lanes, the building block of the scalar and vector operations.
pub trait LaneOperations<O> {
    // Applies a parameterized modular reduction.
    fn la_reduce<const W: usize, const REDUCE: REDUCEMOD>(&self, a: Lanes<O, W>) -> Lanes<O, W>;

    // Returns a + b.
    fn la_add_lb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: Lanes<O, W>, b: Lanes<O, W>) -> Lanes<O, W>;

    // Returns a - b, with b in [0, LBRANGE * q].
    fn la_sub_lb<const W: usize, const LBRANGE: u8, const REDUCE: REDUCEMOD>(
        &self,
        a: Lanes<O, W>,
        b: Lanes<O, W>,
    ) -> Lanes<O, W>;

    // Returns -a, with a in [0, LARANGE * q].
    fn la_neg<const W: usize, const LARANGE: u8, const REDUCE: REDUCEMOD>(&self, a: Lanes<O, W>) -> Lanes<O, W>;

    // Returns a * b using Barrett reduction.
    fn la_barrett_mul_lb<const W: usize, const REDUCE: REDUCEMOD>(
        &self,
        a: Lanes<O, W>,
        b: Lanes<O, W>,
    ) -> Lanes<O, W>;

    // Returns a * b using Montgomery reduction.
    fn la_mont_mul_lb<const W: usize, const REDUCE: REDUCEMOD>(
        &self,
        a: Lanes<Montgomery<O>, W>,
        b: Lanes<O, W>,
    ) -> Lanes<O, W>;

    // Returns a * b using Shoup's precomputed quotient of a.
    fn la_shoup_mul_lb<const W: usize, const REDUCE: REDUCEMOD>(
        &self,
        a: Lanes<Shoup<O>, W>,
        b: Lanes<O, W>,
    ) -> Lanes<O, W>;

    // Returns a * 2^32 mod q.
    fn la_prep_mont<const W: usize, const REDUCE: REDUCEMOD>(&self, a: Lanes<O, W>) -> Lanes<Montgomery<O>, W>;

    // Returns a * 2^-32 mod q in [0, q).
    fn la_unprep_mont<const W: usize>(&self, a: Lanes<Montgomery<O>, W>) -> Lanes<O, W>;
}

pub trait ScalarOperations<O> {
    // Applies a parameterized modular reduction.
    fn sa_reduce_into_sa<const REDUCE: REDUCEMOD>(&self, a: &mut O);

    // Assigns a + b to c.
    fn sa_add_sb_into_sc<const REDUCE: REDUCEMOD>(&self, a: &O, b: &O, c: &mut O);

    // Assigns a - b to c.
    fn sa_sub_sb_into_sc<const SBRANGE: u8, const REDUCE: REDUCEMOD>(&self, a: &O, b: &O, c: &mut O);

    // Assigns -a to b.
    fn sa_neg_into_sb<const SARANGE: u8, const REDUCE: REDUCEMOD>(&self, a: &O, b: &mut O);

    // Assigns a * b to c.
    fn sa_barrett_mul_sb_into_sc<const REDUCE: REDUCEMOD>(&self, a: &O, b: &O, c: &mut O);

    // Assigns a * 2^32 to b.
    fn sa_prep_mont_into_sb<const REDUCE: REDUCEMOD>(&self, a: &O, b: &mut Montgomery<O>);

    // Assigns a * b to c.
    fn sa_mont_mul_sb_into_sc<const REDUCE: REDUCEMOD>(&self, a: &Montgomery<O>, b: &O, c: &mut O);

    // Assigns a * b to c.
    fn sa_shoup_mul_sb_into_sc<const REDUCE: REDUCEMOD>(&self, a: &Shoup<O>, b: &O, c: &mut O);
}

pub trait VectorOperations<O> {
    // vec(a) <- vec(a) mod q.
    fn va_reduce_into_va<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &mut [O]);

    // vec(c) <- vec(a) + vec(b).
    fn va_add_vb_into_vc<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[O], b: &[O], c: &mut [O]);

    // vec(b) <- vec(a) + vec(b).
    fn va_add_vb_into_vb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[O], b: &mut [O]);

    // vec(c) <- vec(a) - vec(b).
    fn va_sub_vb_into_vc<const W: usize, const VBRANGE: u8, const REDUCE: REDUCEMOD>(
        &self,
        a: &[O],
        b: &[O],
        c: &mut [O],
    );

    // vec(b) <- vec(a) - vec(b).
    fn va_sub_vb_into_vb<const W: usize, const VBRANGE: u8, const REDUCE: REDUCEMOD>(&self, a: &[O], b: &mut [O]);

    // vec(a) <- -vec(a).
    fn va_neg_into_va<const W: usize, const VARANGE: u8, const REDUCE: REDUCEMOD>(&self, a: &mut [O]);

    // vec(b) <- -vec(a).
    fn va_neg_into_vb<const W: usize, const VARANGE: u8, const REDUCE: REDUCEMOD>(&self, a: &[O], b: &mut [O]);

    // vec(c) <- vec(a) * vec(b).
    fn va_barrett_mul_vb_into_vc<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[O], b: &[O], c: &mut [O]);

    // vec(b) <- vec(a) * vec(b).
    fn va_barrett_mul_vb_into_vb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[O], b: &mut [O]);

    // vec(b) <- scalar(a) * vec(b).
    fn sa_shoup_mul_vb_into_vb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &Shoup<O>, b: &mut [O]);

    // vec(b) <- vec(a) * 2^32.
    fn va_prep_mont_into_vb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[O], b: &mut [Montgomery<O>]);

    // vec(b) <- vec(a) * 2^-32.
    fn va_unprep_mont_into_vb<const W: usize>(&self, a: &[Montgomery<O>], b: &mut [O]);

    // vec(c) <- vec(a) * vec(b).
    fn va_mont_mul_vb_into_vc<const W: usize, const REDUCE: REDUCEMOD>(
        &self,
        a: &[Montgomery<O>],
        b: &[O],
        c: &mut [O],
    );

    // vec(b) <- vec(a) * vec(b).
    fn va_mont_mul_vb_into_vb<const W: usize, const REDUCE: REDUCEMOD>(&self, a: &[Montgomery<O>], b: &mut [O]);
}
