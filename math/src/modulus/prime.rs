use crate::modulus::barrett::BarrettPrecomp;
use crate::modulus::montgomery::MontgomeryPrecomp;
use crate::modulus::plain::PlainPrecomp;
use crate::modulus::shoup::ShoupPrecomp;

/// An odd prime modulus with the precomputed constants of every
/// reduction strategy. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prime<O> {
    pub q: O,
    pub two_q: O,
    pub four_q: O,
    /// Distinct prime factors of q-1.
    pub factors: Vec<O>,
    pub plain: PlainPrecomp<O>,
    pub barrett: BarrettPrecomp<O>,
    pub montgomery: MontgomeryPrecomp<O>,
    pub shoup: ShoupPrecomp<O>,
    pub phi: O,
}
