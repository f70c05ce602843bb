/// BarrettPrecomp stores the constants of the two Barrett reductions
/// used by the engine:
/// - the wide reduction of a double-word product d < 2^{2*beta} with
///   c = ((d >> shift) * u) >> post_shift, u = floor(2^{2*beta+1} / q);
/// - the single-word reduction x - floor(x * word / 2^32) * q
///   with word = floor(2^32 / q).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarrettPrecomp<O> {
    pub q: O,
    pub two_q: O,
    pub four_q: O,
    pub beta: u32,
    pub shift: u32,
    pub post_shift: u32,
    pub u: O,
    pub word: O,
}

impl<O: Copy> BarrettPrecomp<O> {
    #[inline(always)]
    pub fn value_u(&self) -> O {
        self.u
    }

    #[inline(always)]
    pub fn value_word(&self) -> O {
        self.word
    }
}
