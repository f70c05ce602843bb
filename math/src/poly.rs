use std::fmt::Debug;
use std::marker::PhantomData;

/// Representation a ring element lives in.
pub trait Domain: Clone + Copy + Debug + Default + PartialEq + Eq {}

/// Coefficients of a polynomial in Z_q[x]/(x^n+1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Coefficient;

/// Residues produced by the forward transform, in bit-reversed order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluation;

impl Domain for Coefficient {}
impl Domain for Evaluation {}

/// A ring element tagged with its domain. Only [`crate::ring::Ring`]
/// moves an element between domains or allocates evaluation buffers, and
/// only coefficient vectors can be written from outside the crate, so
/// products of evaluation vectors can only be taken on actual transforms.
///
/// ```compile_fail
/// use kem_math::poly::{Evaluation, Poly};
/// let mut a: Poly<u32, Evaluation> = Poly::new(256);
/// a.0[1] = 1;
/// ```
///
/// ```compile_fail
/// use kem_math::poly::{Evaluation, Poly};
/// use kem_math::ring::Ring;
/// let ring: Ring<u32> = Ring::new(128, 3329).unwrap();
/// let mut a: Poly<u32, Evaluation> = ring.new_poly();
/// a.set_all(&1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly<O, D: Domain = Coefficient>(pub(crate) Vec<O>, PhantomData<D>);

impl<O, D: Domain> Poly<O, D>
where
    O: Default + Clone + Copy,
{
    pub(crate) fn new(n: usize) -> Self {
        Self(vec![O::default(); n], PhantomData)
    }

    pub fn n(&self) -> usize {
        self.0.len()
    }

    pub fn log_n(&self) -> usize {
        (usize::BITS - (self.n() - 1).leading_zeros()) as _
    }

    pub fn at(&self, i: usize) -> &O {
        &self.0[i]
    }

    pub fn as_slice(&self) -> &[O] {
        &self.0
    }

    pub fn zero(&mut self) {
        self.0.fill(O::default())
    }

    pub fn copy_from(&mut self, other: &Poly<O, D>) {
        if std::ptr::eq(self, other) {
            return;
        }
        self.0.resize(other.n(), O::default());
        self.0.copy_from_slice(&other.0)
    }

    pub fn into_vec(self) -> Vec<O> {
        self.0
    }

    /// Reinterprets the buffer in another domain without touching it.
    pub(crate) fn retag<E: Domain>(self) -> Poly<O, E> {
        Poly(self.0, PhantomData)
    }
}

impl<O> Poly<O, Coefficient>
where
    O: Default + Clone + Copy,
{
    pub fn zeros(n: usize) -> Self {
        Self::new(n)
    }

    pub fn at_mut(&mut self, i: usize) -> &mut O {
        &mut self.0[i]
    }

    pub fn as_mut_slice(&mut self) -> &mut [O] {
        &mut self.0
    }

    pub fn set_all(&mut self, v: &O) {
        self.0.fill(*v)
    }
}

impl<O> Poly<O, Coefficient> {
    pub fn from_vec(coeffs: Vec<O>) -> Self {
        Self(coeffs, PhantomData)
    }
}

impl<O> From<Vec<O>> for Poly<O, Coefficient> {
    fn from(coeffs: Vec<O>) -> Self {
        Self::from_vec(coeffs)
    }
}
