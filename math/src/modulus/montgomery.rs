/// Montgomery wraps a residue x stored as x * 2^32 mod q.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Montgomery<O>(pub(crate) O);

impl<O: Copy> Montgomery<O> {
    /// Returns the raw stored word x * 2^32 mod q.
    #[inline(always)]
    pub fn value(&self) -> O {
        self.0
    }
}

/// MontgomeryPrecomp is a generic struct storing
/// precomputations for Montgomery arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MontgomeryPrecomp<O> {
    pub q: O,
    pub two_q: O,
    pub four_q: O,
    /// -q^{-1} mod 2^32.
    pub q_neg_inv: O,
    /// 2^64 mod q.
    pub r2: O,
    pub one: Montgomery<O>,
    pub minus_one: Montgomery<O>,
}
