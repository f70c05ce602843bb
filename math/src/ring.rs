pub mod impl_u32;

use crate::dft::ntt::Table;
use crate::modulus::prime::Prime;
use crate::poly::{Domain, Poly};

/// The ring Z_q[x]/(x^n+1) with its modulus and transform tables.
/// Immutable after construction and shareable across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ring<O> {
    pub n: usize,
    pub modulus: Prime<O>,
    pub dft: Table<O>,
}

impl<O> Ring<O> {
    pub fn log_n(&self) -> usize {
        self.n().trailing_zeros() as _
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn new_poly<D: Domain>(&self) -> Poly<O, D>
    where
        O: Default + Clone + Copy,
    {
        Poly::<O, D>::new(self.n())
    }
}
